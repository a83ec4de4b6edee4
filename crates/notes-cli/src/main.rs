//! simple-notes CLI - Manage short text notes from the command line
//!
//! Quick capture from the terminal with minimal friction.

use std::env;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Utc;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::aot::Generator;
use clap_complete::{generate, shells};
use notes_core::export::{render_notes_export, ExportFormat as CoreExportFormat};
use notes_core::util::{format_relative_time, truncate_preview};
use notes_core::{FileStore, Note, NoteId, NotePatch, NotesController};
use serde::Serialize;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "notes")]
#[command(about = "Manage short text notes from the command line")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Optional path to the notes data directory
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Quick capture: notes "my note title"
    #[arg(trailing_var_arg = true)]
    note: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new note
    #[command(alias = "new")]
    Add {
        /// Note title
        title: Vec<String>,
    },
    /// List notes, most recently updated first
    List {
        /// Number of notes to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
        /// Filter notes by a free-text query
        #[arg(short, long)]
        query: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search notes by title or content
    Search {
        /// Search query
        query: String,
        /// Number of notes to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit a note's content in $EDITOR
    Edit {
        /// Note ID or unique ID prefix
        id: String,
    },
    /// Change a note's title
    Rename {
        /// Note ID or unique ID prefix
        id: String,
        /// New title
        title: Vec<String>,
    },
    /// Delete a note
    Delete {
        /// Note ID or unique ID prefix
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Copy a note to the clipboard as Markdown
    Copy {
        /// Note ID or unique ID prefix
        id: String,
    },
    /// Export notes
    Export {
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Core(#[from] notes_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No note title provided")]
    EmptyTitle,
    #[error("Note ID cannot be empty")]
    EmptyNoteId,
    #[error("Search query cannot be empty")]
    EmptySearchQuery,
    #[error("Note not found for id/prefix: {0}")]
    NoteNotFound(String),
    #[error("{0}")]
    AmbiguousNoteId(String),
    #[error("Editor command failed: {0}")]
    EditorFailed(String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum ExportFormat {
    Json,
    Markdown,
    Html,
}

impl From<ExportFormat> for CoreExportFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Json => Self::Json,
            ExportFormat::Markdown => Self::Markdown,
            ExportFormat::Html => Self::Html,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("notes=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir);

    match cli.command {
        Some(Commands::Add { title }) => run_add(&title, &data_dir)?,
        Some(Commands::List { limit, query, json }) => {
            run_list(limit, query.as_deref().unwrap_or(""), json, &data_dir)?;
        }
        Some(Commands::Search { query, limit, json }) => {
            run_search(&query, limit, json, &data_dir)?;
        }
        Some(Commands::Edit { id }) => run_edit(&id, &data_dir)?,
        Some(Commands::Rename { id, title }) => run_rename(&id, &title, &data_dir)?,
        Some(Commands::Delete { id, force }) => run_delete(&id, force, &data_dir)?,
        Some(Commands::Copy { id }) => run_copy(&id, &data_dir)?,
        Some(Commands::Export { format, output }) => {
            run_export(format, output.as_deref(), &data_dir)?;
        }
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        None => {
            // Quick capture mode: notes "my note title"
            if cli.note.is_empty() {
                Cli::command().print_help().map_err(CliError::Io)?;
                println!();
            } else {
                run_add(&cli.note, &data_dir)?;
            }
        }
    }

    Ok(())
}

fn open_controller(data_dir: &Path) -> Result<NotesController<FileStore>, CliError> {
    let store = FileStore::open(data_dir)?;
    Ok(NotesController::load(store))
}

fn run_add(title_parts: &[String], data_dir: &Path) -> Result<(), CliError> {
    let title = resolve_note_title(title_parts)?;

    let mut controller = open_controller(data_dir)?;
    let id = controller.add_titled(title)?;

    println!("{id}");
    Ok(())
}

#[derive(Debug, Serialize)]
struct NoteListItem {
    id: String,
    title: String,
    preview: String,
    content: String,
    created_at: i64,
    updated_at: i64,
    relative_time: String,
}

fn run_list(limit: usize, query: &str, as_json: bool, data_dir: &Path) -> Result<(), CliError> {
    let controller = open_controller(data_dir)?;
    let notes: Vec<Note> = notes_core::search::visible_notes(&controller.state().notes, query)
        .into_iter()
        .take(limit)
        .collect();

    print_notes(&notes, as_json)
}

fn run_search(query: &str, limit: usize, as_json: bool, data_dir: &Path) -> Result<(), CliError> {
    let normalized_query = normalize_search_query(query)?;
    run_list(limit, &normalized_query, as_json, data_dir)
}

fn print_notes(notes: &[Note], as_json: bool) -> Result<(), CliError> {
    if as_json {
        let json_items = notes
            .iter()
            .map(note_to_list_item)
            .collect::<Vec<NoteListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else {
        for line in format_note_lines(notes) {
            println!("{line}");
        }
    }
    Ok(())
}

fn run_edit(id: &str, data_dir: &Path) -> Result<(), CliError> {
    let normalized_id = normalize_note_identifier(id)?;
    let mut controller = open_controller(data_dir)?;
    let note = resolve_note(&normalized_id, &controller.state().notes)?;

    let edited_content =
        capture_editor_input_with_initial(&note.content)?.unwrap_or_default();

    let note_id = note.id;
    if edited_content == note.content {
        println!("{note_id}");
        return Ok(());
    }

    controller.select(note_id)?;
    controller.update(&NotePatch::content(edited_content))?;
    println!("{note_id}");
    Ok(())
}

fn run_rename(id: &str, title_parts: &[String], data_dir: &Path) -> Result<(), CliError> {
    let normalized_id = normalize_note_identifier(id)?;
    let title = resolve_note_title(title_parts)?;

    let mut controller = open_controller(data_dir)?;
    let note_id = resolve_note(&normalized_id, &controller.state().notes)?.id;

    controller.select(note_id)?;
    controller.update(&NotePatch::title(title))?;
    println!("{note_id}");
    Ok(())
}

fn run_delete(id: &str, force: bool, data_dir: &Path) -> Result<(), CliError> {
    let normalized_id = normalize_note_identifier(id)?;
    let mut controller = open_controller(data_dir)?;
    let note = resolve_note(&normalized_id, &controller.state().notes)?;
    let note_id = note.id;
    let title = note.display_title().to_string();

    if !force {
        print!("Delete note '{title}'? [y/N] ");
        io::stdout().flush()?;
        if !read_confirmation(&mut io::stdin().lock())? {
            println!("Aborted");
            return Ok(());
        }
    }

    controller.select(note_id)?;
    controller.delete()?;
    println!("{note_id}");
    Ok(())
}

fn run_copy(id: &str, data_dir: &Path) -> Result<(), CliError> {
    let normalized_id = normalize_note_identifier(id)?;
    let controller = open_controller(data_dir)?;
    let note = resolve_note(&normalized_id, &controller.state().notes)?;
    let payload = notes_core::export::copy_format(note);

    // Clipboard access may be denied or unavailable; report and move on.
    match write_clipboard(&payload) {
        Ok(()) => println!("Copied '{}' to clipboard", note.display_title()),
        Err(error) => {
            tracing::warn!("Clipboard write failed: {error}");
            eprintln!("Could not copy to clipboard: {error}");
        }
    }
    Ok(())
}

fn write_clipboard(payload: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(payload)
}

fn run_export(
    format: ExportFormat,
    output_path: Option<&Path>,
    data_dir: &Path,
) -> Result<(), CliError> {
    let controller = open_controller(data_dir)?;
    let notes = notes_core::search::visible_notes(&controller.state().notes, "");
    let rendered = render_notes_export(&notes, format.into())?;

    if let Some(path) = output_path {
        std::fs::write(path, rendered)?;
        println!("{}", path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}

fn run_completions(shell: CompletionShell, output_path: Option<&Path>) -> Result<(), CliError> {
    let mut command = Cli::command();
    let mut buffer = Vec::new();

    match shell {
        CompletionShell::Bash => generate_for_shell(shells::Bash, &mut command, &mut buffer),
        CompletionShell::Zsh => generate_for_shell(shells::Zsh, &mut command, &mut buffer),
        CompletionShell::Fish => generate_for_shell(shells::Fish, &mut command, &mut buffer),
    }

    if let Some(path) = output_path {
        std::fs::write(path, &buffer)?;
        println!("{}", path.display());
    } else {
        io::stdout().write_all(&buffer)?;
    }

    Ok(())
}

fn generate_for_shell<G: Generator>(
    generator: G,
    command: &mut clap::Command,
    buffer: &mut Vec<u8>,
) {
    generate(generator, command, "notes", buffer);
}

/// Resolve a note by exact id or unique id prefix.
fn resolve_note<'a>(note_query: &str, notes: &'a [Note]) -> Result<&'a Note, CliError> {
    if let Ok(note_id) = note_query.parse::<NoteId>() {
        if let Some(note) = notes.iter().find(|note| note.id == note_id) {
            return Ok(note);
        }
    }

    let matching: Vec<&Note> = notes
        .iter()
        .filter(|note| note.id.as_str().starts_with(note_query))
        .collect();

    match matching.len() {
        0 => Err(CliError::NoteNotFound(note_query.to_string())),
        1 => Ok(matching[0]),
        _ => {
            let options = matching
                .iter()
                .take(3)
                .map(|note| note.id.as_str().chars().take(13).collect::<String>())
                .collect::<Vec<_>>()
                .join(", ");
            Err(CliError::AmbiguousNoteId(format!(
                "ID prefix '{note_query}' is ambiguous; matches: {options}"
            )))
        }
    }
}

fn format_note_lines(notes: &[Note]) -> Vec<String> {
    let now_ms = Utc::now().timestamp_millis();
    notes
        .iter()
        .map(|note| {
            let id = note.id.to_string();
            let short_id = id.chars().take(13).collect::<String>();
            let title = truncate_preview(note.display_title(), 30);
            let preview = truncate_preview(&note.content, 40);
            let relative_time = format_relative_time(note.updated_at, now_ms);

            if preview.is_empty() {
                format!("{short_id:<13}  {title:<30}  {relative_time}")
            } else {
                format!("{short_id:<13}  {title:<30}  {preview:<40}  {relative_time}")
            }
        })
        .collect()
}

fn note_to_list_item(note: &Note) -> NoteListItem {
    let now_ms = Utc::now().timestamp_millis();

    NoteListItem {
        id: note.id.to_string(),
        title: note.display_title().to_string(),
        preview: truncate_preview(&note.content, 80),
        content: note.content.clone(),
        created_at: note.created_at,
        updated_at: note.updated_at,
        relative_time: format_relative_time(note.updated_at, now_ms),
    }
}

fn resolve_note_title(title_parts: &[String]) -> Result<String, CliError> {
    if let Some(title) = normalize_text(&title_parts.join(" ")) {
        return Ok(title);
    }

    if let Some(title) = read_piped_stdin()? {
        return Ok(title);
    }

    Err(CliError::EmptyTitle)
}

fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn normalize_search_query(query: &str) -> Result<String, CliError> {
    normalize_text(query).ok_or(CliError::EmptySearchQuery)
}

fn normalize_note_identifier(id: &str) -> Result<String, CliError> {
    normalize_text(id).ok_or(CliError::EmptyNoteId)
}

/// Read a yes/no answer; anything but an explicit yes declines.
fn read_confirmation(input: &mut impl BufRead) -> Result<bool, CliError> {
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(normalize_text(&buffer))
}

fn capture_editor_input_with_initial(initial_content: &str) -> Result<Option<String>, CliError> {
    let editor = preferred_editor();
    let temp_file = create_temp_note_file_path();
    std::fs::write(&temp_file, initial_content)?;

    let launch_result = launch_editor(&editor, &temp_file);
    let note_content = std::fs::read_to_string(&temp_file)?;
    let _ = std::fs::remove_file(&temp_file);

    launch_result?;
    Ok(normalize_text(&note_content))
}

fn launch_editor(editor: &str, file_path: &Path) -> Result<(), CliError> {
    match Command::new(editor).arg(file_path).status() {
        Ok(status) => {
            if status.success() {
                Ok(())
            } else {
                Err(CliError::EditorFailed(format!(
                    "`{editor}` exited with status {status}"
                )))
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            // Fallback for editor commands with args, e.g. "code --wait"
            let mut parts = editor.split_whitespace();
            let Some(program) = parts.next() else {
                return Err(CliError::EditorFailed("empty EDITOR command".into()));
            };

            let mut command = Command::new(program);
            command.args(parts).arg(file_path);

            let status = command.status()?;
            if status.success() {
                Ok(())
            } else {
                Err(CliError::EditorFailed(format!(
                    "`{editor}` exited with status {status}"
                )))
            }
        }
        Err(err) => Err(CliError::Io(err)),
    }
}

fn preferred_editor() -> String {
    env::var("VISUAL")
        .or_else(|_| env::var("EDITOR"))
        .unwrap_or_else(|_| default_editor().to_string())
}

const fn default_editor() -> &'static str {
    if cfg!(windows) {
        "notepad"
    } else {
        "vi"
    }
}

fn create_temp_note_file_path() -> PathBuf {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_nanos());
    env::temp_dir().join(format!("simple-note-{}-{now}.md", std::process::id()))
}

fn resolve_data_dir(cli_data_dir: Option<PathBuf>) -> PathBuf {
    cli_data_dir
        .or_else(|| env::var_os("NOTES_DATA_DIR").map(PathBuf::from))
        .unwrap_or_else(default_data_dir)
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("simple-notes")
}
