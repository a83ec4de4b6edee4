//! Shared note export helpers for CLI/Desktop parity.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::view::escape_html;
use crate::Note;

/// Export output format shared by all clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Json,
    Markdown,
    Html,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }
}

/// Clipboard/copy representation of a single note.
#[must_use]
pub fn copy_format(note: &Note) -> String {
    format!("# {}\n\n{}", note.display_title(), note.content)
}

/// Serializable note representation used in JSON exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportNote {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Convert a note into an export record.
#[must_use]
pub fn note_to_export_item(note: &Note) -> ExportNote {
    ExportNote {
        id: note.id.to_string(),
        title: note.title.clone(),
        content: note.content.clone(),
        created_at: note.created_at,
        updated_at: note.updated_at,
    }
}

/// Render notes as pretty-printed JSON.
pub fn render_json_export(notes: &[Note]) -> serde_json::Result<String> {
    let items = notes
        .iter()
        .map(note_to_export_item)
        .collect::<Vec<ExportNote>>();
    serde_json::to_string_pretty(&items)
}

/// Render notes in Markdown with frontmatter blocks.
#[must_use]
pub fn render_markdown_export(notes: &[Note]) -> String {
    let mut output = String::new();

    for (index, note) in notes.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }

        let _ = writeln!(output, "---");
        let _ = writeln!(output, "id: {}", note.id);
        let _ = writeln!(output, "created_at: {}", note.created_at);
        let _ = writeln!(output, "updated_at: {}", note.updated_at);
        let _ = writeln!(output, "---");
        let _ = writeln!(output);
        let _ = writeln!(output, "# {}", note.display_title());
        let _ = writeln!(output);
        output.push_str(&note.content);
        output.push('\n');
    }

    output
}

/// Render notes as a standalone HTML document.
///
/// All user-supplied text passes through `escape_html` before insertion.
#[must_use]
pub fn render_html_export(notes: &[Note]) -> String {
    let mut output = String::new();
    output.push_str("<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>Notes</title></head>\n<body>\n");

    for note in notes {
        let _ = writeln!(output, "<article data-id=\"{}\">", escape_html(&note.id.to_string()));
        let _ = writeln!(output, "<h1>{}</h1>", escape_html(note.display_title()));
        let _ = writeln!(output, "<pre>{}</pre>", escape_html(&note.content));
        let _ = writeln!(output, "</article>");
    }

    output.push_str("</body>\n</html>\n");
    output
}

/// Render notes based on selected export format.
pub fn render_notes_export(notes: &[Note], format: ExportFormat) -> serde_json::Result<String> {
    match format {
        ExportFormat::Json => render_json_export(notes),
        ExportFormat::Markdown => Ok(render_markdown_export(notes)),
        ExportFormat::Html => Ok(render_html_export(notes)),
    }
}

/// Build a deterministic default file name for export flows.
#[must_use]
pub fn suggested_export_file_name(format: ExportFormat, timestamp_ms: i64) -> String {
    format!("notes-export-{timestamp_ms}.{}", format.extension())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::NotePatch;

    fn note(title: &str, content: &str) -> Note {
        let mut note = Note::new(title);
        note.apply(&NotePatch::content(content));
        note
    }

    #[test]
    fn copy_format_is_heading_blank_line_content() {
        assert_eq!(copy_format(&note("Taxes", "file by april")), "# Taxes\n\nfile by april");
    }

    #[test]
    fn copy_format_uses_untitled_fallback() {
        assert_eq!(copy_format(&note("  ", "body")), "# Untitled\n\nbody");
    }

    #[test]
    fn render_markdown_export_includes_frontmatter_and_content() {
        let mut note = note("Export me", "Hello export");
        note.created_at = 123;
        note.updated_at = 456;

        let rendered = render_markdown_export(&[note]);
        assert!(rendered.contains("created_at: 123"));
        assert!(rendered.contains("updated_at: 456"));
        assert!(rendered.contains("# Export me"));
        assert!(rendered.contains("Hello export"));
    }

    #[test]
    fn render_json_export_uses_camel_case_keys() {
        let rendered = render_json_export(&[note("One", "body")]).unwrap();
        assert!(rendered.contains("\"createdAt\""));
        assert!(rendered.contains("\"title\": \"One\""));
    }

    #[test]
    fn render_html_export_escapes_user_text() {
        let rendered = render_html_export(&[note("<script>", "a & b \"c\"")]);
        assert!(rendered.contains("<h1>&lt;script&gt;</h1>"));
        assert!(rendered.contains("a &amp; b &quot;c&quot;"));
        assert!(!rendered.contains("<script>"));
    }

    #[test]
    fn suggested_export_file_name_uses_format_extension() {
        assert_eq!(
            suggested_export_file_name(ExportFormat::Json, 123),
            "notes-export-123.json"
        );
        assert_eq!(
            suggested_export_file_name(ExportFormat::Html, 456),
            "notes-export-456.html"
        );
    }
}
