//! Application state and action handlers
//!
//! `AppState` is the single process-wide state: the full note collection,
//! the current selection, and the search query. `NotesController` owns the
//! state together with a `NoteStore` and applies every user action as a
//! synchronous mutation followed by a persistence write. Rendering layers
//! read the state and re-project it after each action.

use crate::error::Result;
use crate::export::copy_format;
use crate::models::{Note, NoteId, NotePatch};
use crate::search::visible_notes;
use crate::storage::{KeyValueStore, NoteStore};

/// Process-wide application state, re-derived from storage at startup
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Full collection of notes (unordered bag; display order is derived)
    pub notes: Vec<Note>,
    /// Note currently shown in the main panel, if any
    pub selected_id: Option<NoteId>,
    /// Current free-text search filter (never persisted)
    pub query: String,
}

impl AppState {
    /// The note the selection points at; `None` for no or dangling selection
    #[must_use]
    pub fn selected_note(&self) -> Option<&Note> {
        let id = self.selected_id?;
        self.notes.iter().find(|note| note.id == id)
    }

    /// Filtered, sorted notes for the current query
    #[must_use]
    pub fn visible(&self) -> Vec<Note> {
        visible_notes(&self.notes, &self.query)
    }
}

/// Owns the application state and persists it after every mutating action.
///
/// Persistence covers the notes collection and the selected id (two
/// independent writes); the query is in-memory only.
pub struct NotesController<S: KeyValueStore> {
    state: AppState,
    store: NoteStore<S>,
}

impl<S: KeyValueStore> NotesController<S> {
    /// Initialize state from storage; corrupt or missing data yields an
    /// empty collection with no selection
    pub fn load(store: S) -> Self {
        let store = NoteStore::new(store);
        let state = AppState {
            notes: store.load_notes(),
            selected_id: store.load_selected_id(),
            query: String::new(),
        };
        Self { state, store }
    }

    /// Current state, for rendering
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Create a new note, insert it at the front, and select it
    pub fn add(&mut self) -> Result<NoteId> {
        self.add_titled(crate::models::DEFAULT_NOTE_TITLE)
    }

    /// Create a new note with the given title, insert it at the front, and
    /// select it
    pub fn add_titled(&mut self, title: impl Into<String>) -> Result<NoteId> {
        let note = Note::new(title);
        let id = note.id;

        self.state.notes.insert(0, note);
        self.state.selected_id = Some(id);
        self.persist_notes()?;
        self.persist_selection()?;

        tracing::info!("Created note {id}");
        Ok(id)
    }

    /// Select a note by id.
    ///
    /// No existence check: a dangling id simply renders as "no note found".
    pub fn select(&mut self, id: NoteId) -> Result<()> {
        self.state.selected_id = Some(id);
        self.persist_selection()
    }

    /// Merge a patch into the selected note; no-op without a selection
    pub fn update(&mut self, patch: &NotePatch) -> Result<()> {
        let Some(id) = self.state.selected_id else {
            return Ok(());
        };
        let Some(note) = self.state.notes.iter_mut().find(|note| note.id == id) else {
            return Ok(());
        };

        note.apply(patch);
        self.persist_notes()
    }

    /// Delete the selected note; no-op without a selection.
    ///
    /// Confirmation is the caller's responsibility — front-ends prompt the
    /// user before invoking this. The new first note in sort order becomes
    /// selected, or the selection clears when none remain.
    pub fn delete(&mut self) -> Result<()> {
        let Some(id) = self.state.selected_id else {
            return Ok(());
        };

        self.state.notes.retain(|note| note.id != id);
        self.state.selected_id = visible_notes(&self.state.notes, "")
            .first()
            .map(|note| note.id);

        self.persist_notes()?;
        self.persist_selection()?;

        tracing::info!("Deleted note {id}");
        Ok(())
    }

    /// Update the search query; re-render only, nothing is persisted
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
    }

    /// Clipboard payload for the selected note; `None` without a selection.
    ///
    /// The clipboard write itself lives in the front-ends, which surface
    /// success or failure only as a transient notification.
    #[must_use]
    pub fn copy_payload(&self) -> Option<String> {
        self.state.selected_note().map(copy_format)
    }

    fn persist_notes(&mut self) -> Result<()> {
        self.store.save_notes(&self.state.notes)
    }

    fn persist_selection(&mut self) -> Result<()> {
        self.store.save_selected_id(self.state.selected_id.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::storage::MemoryStore;

    fn controller() -> NotesController<MemoryStore> {
        NotesController::load(MemoryStore::new())
    }

    #[test]
    fn starts_empty_with_no_selection() {
        let ctl = controller();
        assert!(ctl.state().notes.is_empty());
        assert_eq!(ctl.state().selected_id, None);
        assert!(ctl.state().selected_note().is_none());
    }

    #[test]
    fn add_inserts_at_front_selects_and_persists() {
        let mut ctl = controller();
        let first = ctl.add().unwrap();
        let second = ctl.add().unwrap();

        assert_eq!(ctl.state().notes[0].id, second);
        assert_eq!(ctl.state().selected_id, Some(second));
        assert_eq!(ctl.state().notes[0].title, "Untitled note");
        assert_eq!(ctl.state().notes[0].content, "");
        assert_eq!(ctl.state().notes[1].id, first);

        // Both keys survive a reload.
        let store = NotesController::load(reload_store(ctl));
        assert_eq!(store.state().notes.len(), 2);
        assert_eq!(store.state().selected_id, Some(second));
    }

    #[test]
    fn new_note_appears_first_in_visible_list() {
        let mut ctl = controller();
        ctl.add().unwrap();
        let latest = ctl.add().unwrap();

        let visible = ctl.state().visible();
        assert_eq!(visible[0].id, latest);
    }

    #[test]
    fn select_allows_dangling_id() {
        let mut ctl = controller();
        let ghost = crate::models::NoteId::new();
        ctl.select(ghost).unwrap();

        assert_eq!(ctl.state().selected_id, Some(ghost));
        assert!(ctl.state().selected_note().is_none());
    }

    #[test]
    fn update_without_selection_is_a_noop() {
        let mut ctl = controller();
        ctl.update(&NotePatch::title("ignored")).unwrap();
        assert!(ctl.state().notes.is_empty());
    }

    #[test]
    fn update_patches_selected_note_and_persists() {
        let mut ctl = controller();
        let id = ctl.add().unwrap();
        let created = ctl.state().selected_note().unwrap().created_at;

        ctl.update(&NotePatch::title("Groceries")).unwrap();
        ctl.update(&NotePatch::content("milk, eggs")).unwrap();

        let note = ctl.state().selected_note().unwrap();
        assert_eq!(note.id, id);
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.content, "milk, eggs");
        assert_eq!(note.created_at, created);
        assert!(note.updated_at >= created);

        let reloaded = NotesController::load(reload_store(ctl));
        assert_eq!(reloaded.state().notes[0].title, "Groceries");
    }

    #[test]
    fn delete_without_selection_is_a_noop() {
        let mut ctl = controller();
        ctl.delete().unwrap();
        assert!(ctl.state().notes.is_empty());
    }

    #[test]
    fn delete_last_note_clears_selection_and_collection() {
        let mut ctl = controller();
        ctl.add().unwrap();
        ctl.delete().unwrap();

        assert!(ctl.state().notes.is_empty());
        assert_eq!(ctl.state().selected_id, None);

        let reloaded = NotesController::load(reload_store(ctl));
        assert!(reloaded.state().notes.is_empty());
        assert_eq!(reloaded.state().selected_id, None);
    }

    #[test]
    fn delete_selects_next_note_in_sort_order() {
        let mut ctl = controller();
        let older = ctl.add().unwrap();
        let newer = ctl.add().unwrap();

        // Make the ordering unambiguous regardless of clock resolution.
        if let Some(note) = ctl.state.notes.iter_mut().find(|n| n.id == older) {
            note.updated_at -= 10;
        }

        assert_eq!(ctl.state().selected_id, Some(newer));
        ctl.delete().unwrap();

        assert_eq!(ctl.state().selected_id, Some(older));
        assert!(ctl.state().selected_note().is_some());
    }

    #[test]
    fn delete_reselects_first_visible_note_on_ties() {
        let mut ctl = controller();
        ctl.add_titled("First").unwrap();
        ctl.add_titled("Second").unwrap();
        let newest = ctl.add_titled("Third").unwrap();

        // Force a tie so only the stable sort decides who comes first.
        for note in &mut ctl.state.notes {
            note.updated_at = 1_000;
        }

        assert_eq!(ctl.state().selected_id, Some(newest));
        ctl.delete().unwrap();

        let visible = ctl.state().visible();
        assert_eq!(ctl.state().selected_id, Some(visible[0].id));
        assert_eq!(visible[0].title, "Second");
    }

    #[test]
    fn set_query_filters_without_persisting() {
        let mut ctl = controller();
        ctl.add_titled("Groceries").unwrap();
        ctl.add_titled("Taxes").unwrap();

        ctl.set_query("tax");
        let visible = ctl.state().visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Taxes");

        // Query does not survive a reload.
        let reloaded = NotesController::load(reload_store(ctl));
        assert_eq!(reloaded.state().query, "");
        assert_eq!(reloaded.state().notes.len(), 2);
    }

    #[test]
    fn copy_payload_formats_selected_note() {
        let mut ctl = controller();
        ctl.add_titled("Taxes").unwrap();
        ctl.update(&NotePatch::content("file by april")).unwrap();

        assert_eq!(
            ctl.copy_payload().as_deref(),
            Some("# Taxes\n\nfile by april")
        );
    }

    #[test]
    fn copy_payload_is_none_without_selection() {
        let ctl = controller();
        assert_eq!(ctl.copy_payload(), None);
    }

    fn reload_store(ctl: NotesController<MemoryStore>) -> MemoryStore {
        let NotesController { store, .. } = ctl;
        store.into_inner()
    }
}
