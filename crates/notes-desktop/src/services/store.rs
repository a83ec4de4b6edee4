//! Local storage location for the desktop app

use std::path::PathBuf;

use notes_core::{FileStore, Result};

/// Open the file-backed store at the platform data directory
pub fn open_default_store() -> Result<FileStore> {
    FileStore::open(default_data_dir())
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("simple-notes")
}
