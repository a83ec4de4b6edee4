//! notes-core - Core library for simple-notes
//!
//! This crate contains the shared models, persistence layer, and note logic
//! used by all simple-notes interfaces (desktop, CLI).

pub mod error;
pub mod export;
pub mod models;
pub mod search;
pub mod state;
pub mod storage;
pub mod util;
pub mod view;

pub use error::{Error, Result};
pub use models::{Note, NoteId, NotePatch};
pub use state::{AppState, NotesController};
pub use storage::{FileStore, KeyValueStore, MemoryStore, NoteStore};
