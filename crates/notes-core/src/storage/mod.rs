//! Persistence layer for simple-notes
//!
//! Notes live as a JSON array under a single string key in a key-value
//! store, with the current selection under a second key. `FileStore` backs
//! each key with one file on disk; `MemoryStore` keeps everything in memory
//! for tests and headless use.

use std::collections::HashMap;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{Note, NoteId};

/// Storage key for the full notes collection (JSON array payload).
pub const NOTES_KEY: &str = "simple-notes-app__notes";

/// Storage key for the selected note id (plain string, empty means none).
pub const SELECTED_ID_KEY: &str = "simple-notes-app__selectedId";

/// String-keyed, string-valued storage seam.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any prior value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: one file per key under a data directory.
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-write leaves the previous payload intact.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `root`
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Directory holding the key files
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_key(key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        let temp_path = path.with_extension("json.tmp");

        let mut file = fs::File::create(&temp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&temp_path, &path)?;
        Ok(())
    }
}

/// In-memory store for tests and headless use
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Notes collection + selection accessors over a key-value store.
///
/// Reads tolerate missing or corrupt payloads by falling back to an empty
/// collection / no selection; they never raise.
pub struct NoteStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> NoteStore<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Consume the wrapper and return the underlying store
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Load the full notes collection.
    ///
    /// An absent key, unreadable file, parse failure, or non-array payload
    /// all yield an empty collection.
    pub fn load_notes(&self) -> Vec<Note> {
        let payload = match self.store.get(NOTES_KEY) {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(error) => {
                tracing::warn!("Failed to read notes payload: {error}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Note>>(&payload) {
            Ok(notes) => notes,
            Err(error) => {
                tracing::warn!("Discarding corrupt notes payload: {error}");
                Vec::new()
            }
        }
    }

    /// Serialize and write the full collection, replacing any prior value
    pub fn save_notes(&mut self, notes: &[Note]) -> Result<()> {
        let payload = serde_json::to_string(notes)?;
        self.store.set(NOTES_KEY, &payload)
    }

    /// Load the selected note id; absent, empty, or unparseable means none
    pub fn load_selected_id(&self) -> Option<NoteId> {
        let raw = match self.store.get(SELECTED_ID_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!("Failed to read selected id: {error}");
                return None;
            }
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        match trimmed.parse() {
            Ok(id) => Some(id),
            Err(error) => {
                tracing::warn!("Discarding corrupt selected id {trimmed:?}: {error}");
                None
            }
        }
    }

    /// Persist the selection; `None` is stored as the empty string
    pub fn save_selected_id(&mut self, id: Option<&NoteId>) -> Result<()> {
        let value = id.map(NoteId::as_str).unwrap_or_default();
        self.store.set(SELECTED_ID_KEY, &value)
    }
}

/// Sanitize a storage key for use as a file name
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::Note;

    fn sample_notes() -> Vec<Note> {
        vec![Note::new("Groceries"), Note::new("Taxes")]
    }

    #[test]
    fn load_notes_returns_empty_when_key_absent() {
        let store = NoteStore::new(MemoryStore::new());
        assert_eq!(store.load_notes(), Vec::new());
    }

    #[test]
    fn load_notes_returns_empty_on_corrupt_payload() {
        let mut inner = MemoryStore::new();
        inner.set(NOTES_KEY, "not json at all {{{").unwrap();
        let store = NoteStore::new(inner);
        assert_eq!(store.load_notes(), Vec::new());
    }

    #[test]
    fn load_notes_returns_empty_when_payload_is_not_an_array() {
        let mut inner = MemoryStore::new();
        inner.set(NOTES_KEY, "{\"id\": \"oops\"}").unwrap();
        let store = NoteStore::new(inner);
        assert_eq!(store.load_notes(), Vec::new());
    }

    #[test]
    fn save_then_load_round_trips() {
        let notes = sample_notes();
        let mut store = NoteStore::new(MemoryStore::new());

        store.save_notes(&notes).unwrap();
        assert_eq!(store.load_notes(), notes);
    }

    #[test]
    fn load_notes_is_idempotent() {
        let mut store = NoteStore::new(MemoryStore::new());
        store.save_notes(&sample_notes()).unwrap();

        let first = store.load_notes();
        let second = store.load_notes();
        assert_eq!(first, second);
    }

    #[test]
    fn save_notes_replaces_prior_value() {
        let mut store = NoteStore::new(MemoryStore::new());
        store.save_notes(&sample_notes()).unwrap();
        store.save_notes(&[]).unwrap();
        assert_eq!(store.load_notes(), Vec::new());
    }

    #[test]
    fn selected_id_round_trips() {
        let note = Note::new("Pick me");
        let mut store = NoteStore::new(MemoryStore::new());

        store.save_selected_id(Some(&note.id)).unwrap();
        assert_eq!(store.load_selected_id(), Some(note.id));

        store.save_selected_id(None).unwrap();
        assert_eq!(store.load_selected_id(), None);
    }

    #[test]
    fn empty_selected_id_means_no_selection() {
        let mut inner = MemoryStore::new();
        inner.set(SELECTED_ID_KEY, "").unwrap();
        let store = NoteStore::new(inner);
        assert_eq!(store.load_selected_id(), None);
    }

    #[test]
    fn unparseable_selected_id_means_no_selection() {
        let mut inner = MemoryStore::new();
        inner.set(SELECTED_ID_KEY, "definitely-not-a-uuid").unwrap();
        let store = NoteStore::new(inner);
        assert_eq!(store.load_selected_id(), None);
    }

    #[test]
    fn file_store_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let notes = sample_notes();

        {
            let mut store = NoteStore::new(FileStore::open(dir.path()).unwrap());
            store.save_notes(&notes).unwrap();
            store.save_selected_id(Some(&notes[0].id)).unwrap();
        }

        let store = NoteStore::new(FileStore::open(dir.path()).unwrap());
        assert_eq!(store.load_notes(), notes);
        assert_eq!(store.load_selected_id(), Some(notes[0].id));
    }

    #[test]
    fn file_store_tolerates_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut inner = FileStore::open(dir.path()).unwrap();
        inner.set(NOTES_KEY, "[{ truncated").unwrap();

        let store = NoteStore::new(inner);
        assert_eq!(store.load_notes(), Vec::new());
    }

    #[test]
    fn sanitize_key_replaces_path_separators() {
        assert_eq!(sanitize_key("a/b\\c:d"), "a_b_c_d");
        assert_eq!(sanitize_key(NOTES_KEY), NOTES_KEY);
    }
}
