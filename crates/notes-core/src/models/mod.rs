//! Data models for simple-notes

mod note;

pub use note::{Note, NoteId, NotePatch, DEFAULT_NOTE_TITLE};
