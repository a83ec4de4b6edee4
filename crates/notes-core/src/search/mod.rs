//! Filter/sort engine for simple-notes
//!
//! Derives the visible, ordered note list from the full collection and a
//! free-text query. Pure and side-effect free; the stored collection is an
//! unordered bag and display order is always derived here.

use crate::models::Note;

/// Return the notes visible for `query`, most recently updated first.
///
/// The query is trimmed and case-folded; when non-empty, only notes whose
/// title or content contains it as a case-insensitive substring are kept.
/// Ties on `updated_at` keep their input order (stable sort).
#[must_use]
pub fn visible_notes(notes: &[Note], query: &str) -> Vec<Note> {
    let needle = query.trim().to_lowercase();

    let mut visible: Vec<Note> = notes
        .iter()
        .filter(|note| {
            needle.is_empty()
                || note.title.to_lowercase().contains(&needle)
                || note.content.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    visible.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    visible
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::NotePatch;

    fn note_at(title: &str, content: &str, updated_at: i64) -> Note {
        let mut note = Note::new(title);
        note.apply(&NotePatch::content(content));
        note.created_at = updated_at;
        note.updated_at = updated_at;
        note
    }

    #[test]
    fn empty_query_returns_all_sorted_by_updated_desc() {
        let notes = vec![
            note_at("Old", "", 100),
            note_at("New", "", 300),
            note_at("Mid", "", 200),
        ];

        let visible = visible_notes(&notes, "");
        let titles: Vec<&str> = visible.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "Mid", "Old"]);
    }

    #[test]
    fn query_matches_title_case_insensitively() {
        let notes = vec![
            note_at("Groceries", "milk and eggs", 100),
            note_at("Taxes", "file by april", 200),
        ];

        let visible = visible_notes(&notes, "tax");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Taxes");
    }

    #[test]
    fn query_matches_content_too() {
        let notes = vec![
            note_at("Groceries", "milk and eggs", 100),
            note_at("Taxes", "file by april", 200),
        ];

        let visible = visible_notes(&notes, "MILK");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Groceries");
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let notes = vec![note_at("Taxes", "", 100)];
        assert_eq!(visible_notes(&notes, "  tax  ").len(), 1);
        assert_eq!(visible_notes(&notes, "   ").len(), 1);
    }

    #[test]
    fn no_match_yields_empty_list() {
        let notes = vec![note_at("Groceries", "milk", 100)];
        assert!(visible_notes(&notes, "zebra").is_empty());
    }

    #[test]
    fn ties_keep_input_order() {
        let notes = vec![
            note_at("First", "", 100),
            note_at("Second", "", 100),
            note_at("Third", "", 100),
        ];

        let visible = visible_notes(&notes, "");
        let titles: Vec<&str> = visible.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn every_returned_note_matches_the_query() {
        let notes = vec![
            note_at("alpha", "one", 1),
            note_at("beta", "two", 2),
            note_at("gamma", "one two", 3),
        ];

        for note in visible_notes(&notes, "one") {
            assert!(note.title.contains("one") || note.content.contains("one"));
        }
    }
}
