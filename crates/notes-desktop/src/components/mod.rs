//! UI Components
//!
//! Reusable UI components for the desktop application.

mod confirm_dialog;
mod note_card;
mod note_editor;
mod note_list;
mod notification;
mod search_bar;
mod toolbar;

pub use confirm_dialog::ConfirmDialog;
pub use note_card::NoteCard;
pub use note_editor::NoteEditor;
pub use note_list::NoteList;
pub use notification::NotificationToast;
pub use search_bar::SearchBar;
pub use toolbar::Toolbar;
