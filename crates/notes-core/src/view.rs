//! View projection for simple-notes
//!
//! Projects the application state into a displayable structure: a sidebar
//! of note summaries and a main panel that is either a welcome placeholder
//! or an editor for the selected note. Pure, so front-ends can rebuild it
//! wholesale after every mutation and tests can assert on it directly.

use crate::models::NoteId;
use crate::state::AppState;
use crate::util::{format_relative_time, truncate_preview};

/// Character cap for sidebar content previews.
pub const PREVIEW_MAX_CHARS: usize = 60;

/// One sidebar row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSummary {
    pub id: NoteId,
    /// Display title ("Untitled" when blank)
    pub title: String,
    /// Relative last-updated display string
    pub updated_display: String,
    /// Truncated content preview
    pub preview: String,
    /// Whether this row is the current selection
    pub selected: bool,
}

/// Main panel contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainPanel {
    /// No note selected (or the selection is dangling)
    Welcome,
    /// Editable view of the selected note
    Editor {
        id: NoteId,
        title: String,
        content: String,
        created_display: String,
        updated_display: String,
    },
}

/// Full projection of the application state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub sidebar: Vec<NoteSummary>,
    pub main: MainPanel,
}

impl ViewModel {
    /// Build the view model for the current state
    #[must_use]
    pub fn project(state: &AppState) -> Self {
        let now_ms = chrono::Utc::now().timestamp_millis();
        Self::project_at(state, now_ms)
    }

    /// Projection with an explicit clock, for deterministic tests
    #[must_use]
    pub fn project_at(state: &AppState, now_ms: i64) -> Self {
        let sidebar = state
            .visible()
            .iter()
            .map(|note| NoteSummary {
                id: note.id,
                title: note.display_title().to_string(),
                updated_display: format_relative_time(note.updated_at, now_ms),
                preview: truncate_preview(&note.content, PREVIEW_MAX_CHARS),
                selected: state.selected_id == Some(note.id),
            })
            .collect();

        let main = state.selected_note().map_or(MainPanel::Welcome, |note| {
            MainPanel::Editor {
                id: note.id,
                title: note.title.clone(),
                content: note.content.clone(),
                created_display: format_relative_time(note.created_at, now_ms),
                updated_display: format_relative_time(note.updated_at, now_ms),
            }
        });

        Self { sidebar, main }
    }
}

/// Escape text for insertion into HTML markup.
///
/// Covers ampersand, angle brackets, and both quote characters. The desktop
/// UI escapes structurally through its component layer; this is for markup
/// built as strings, like the HTML export.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{Note, NoteId, NotePatch};

    fn state_with(notes: Vec<Note>, selected_id: Option<NoteId>) -> AppState {
        AppState {
            notes,
            selected_id,
            query: String::new(),
        }
    }

    #[test]
    fn empty_state_shows_welcome() {
        let view = ViewModel::project_at(&state_with(vec![], None), 0);
        assert!(view.sidebar.is_empty());
        assert_eq!(view.main, MainPanel::Welcome);
    }

    #[test]
    fn dangling_selection_shows_welcome() {
        let view = ViewModel::project_at(&state_with(vec![], Some(NoteId::new())), 0);
        assert_eq!(view.main, MainPanel::Welcome);
    }

    #[test]
    fn selected_row_is_marked_and_editor_shown() {
        let mut note = Note::new("Taxes");
        note.apply(&NotePatch::content("file by april"));
        let id = note.id;

        let view = ViewModel::project_at(&state_with(vec![note], Some(id)), 0);

        assert_eq!(view.sidebar.len(), 1);
        assert!(view.sidebar[0].selected);
        assert_eq!(view.sidebar[0].title, "Taxes");

        match view.main {
            MainPanel::Editor { title, content, .. } => {
                assert_eq!(title, "Taxes");
                assert_eq!(content, "file by april");
            }
            MainPanel::Welcome => panic!("expected editor panel"),
        }
    }

    #[test]
    fn blank_title_displays_as_untitled() {
        let note = Note::new("  ");
        let view = ViewModel::project_at(&state_with(vec![note], None), 0);
        assert_eq!(view.sidebar[0].title, "Untitled");
    }

    #[test]
    fn preview_is_truncated_to_cap() {
        let mut note = Note::new("Long");
        note.apply(&NotePatch::content("x".repeat(500)));

        let view = ViewModel::project_at(&state_with(vec![note], None), 0);
        assert_eq!(view.sidebar[0].preview.chars().count(), PREVIEW_MAX_CHARS);
        assert!(view.sidebar[0].preview.ends_with("..."));
    }

    #[test]
    fn escape_html_covers_injection_chars() {
        assert_eq!(
            escape_html(r#"<b>&"fish"'chips'</b>"#),
            "&lt;b&gt;&amp;&quot;fish&quot;&#39;chips&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
