//! Application state management
//!
//! Global state accessible via Dioxus context providers. The core
//! `NotesController` is the single source of truth; every action goes
//! through it, and each write re-renders whatever reads the signal (full
//! rebuild, no partial updates).

use dioxus::prelude::*;

use notes_core::view::ViewModel;
use notes_core::{FileStore, NoteId, NotePatch, NotesController};

/// Kind of a transient notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient, auto-dismissing UI message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Sequence number, so a stale dismiss task cannot clear a newer toast
    pub seq: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Core controller (None when the local store failed to open)
    pub controller: Signal<Option<NotesController<FileStore>>>,
    /// Current transient notification, if any
    pub notification: Signal<Option<Notification>>,
    /// Whether the delete confirmation dialog is open
    pub confirm_delete_open: Signal<bool>,
    notification_seq: Signal<u64>,
}

impl AppState {
    #[must_use]
    pub fn new(
        controller: Signal<Option<NotesController<FileStore>>>,
        notification: Signal<Option<Notification>>,
        confirm_delete_open: Signal<bool>,
        notification_seq: Signal<u64>,
    ) -> Self {
        Self {
            controller,
            notification,
            confirm_delete_open,
            notification_seq,
        }
    }

    /// Project the current state for rendering
    #[must_use]
    pub fn view(&self) -> ViewModel {
        self.controller.read().as_ref().map_or_else(
            || ViewModel::project(&notes_core::AppState::default()),
            |controller| ViewModel::project(controller.state()),
        )
    }

    /// Current search query
    #[must_use]
    pub fn query(&self) -> String {
        self.controller
            .read()
            .as_ref()
            .map(|controller| controller.state().query.clone())
            .unwrap_or_default()
    }

    /// Display title of the selected note, for prompts
    #[must_use]
    pub fn selected_title(&self) -> Option<String> {
        self.controller
            .read()
            .as_ref()
            .and_then(|controller| controller.state().selected_note())
            .map(|note| note.display_title().to_string())
    }

    /// Whether a note is selected (dangling ids count as no selection)
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.controller
            .read()
            .as_ref()
            .is_some_and(|controller| controller.state().selected_note().is_some())
    }

    /// Create a new note and select it
    pub fn add_note(&mut self) {
        if let Some(controller) = self.controller.write().as_mut() {
            if let Err(error) = controller.add() {
                tracing::error!("Failed to create note: {error}");
            }
        }
    }

    /// Select a note from the sidebar
    pub fn select_note(&mut self, id: NoteId) {
        if let Some(controller) = self.controller.write().as_mut() {
            if let Err(error) = controller.select(id) {
                tracing::error!("Failed to persist selection: {error}");
            }
        }
    }

    /// Patch the selected note (called on every editor keystroke)
    pub fn update_note(&mut self, patch: &NotePatch) {
        if let Some(controller) = self.controller.write().as_mut() {
            if let Err(error) = controller.update(patch) {
                tracing::error!("Failed to save note: {error}");
            }
        }
    }

    /// Delete the selected note (the confirmation dialog calls this after
    /// the user accepts)
    pub fn delete_selected(&mut self) {
        if let Some(controller) = self.controller.write().as_mut() {
            if let Err(error) = controller.delete() {
                tracing::error!("Failed to delete note: {error}");
            }
        }
        self.confirm_delete_open.set(false);
    }

    /// Update the search filter; never persisted
    pub fn set_query(&mut self, query: String) {
        if let Some(controller) = self.controller.write().as_mut() {
            controller.set_query(query);
        }
    }

    /// Copy the selected note to the clipboard as Markdown.
    ///
    /// Clipboard access may be denied or unavailable; either outcome only
    /// produces a transient notification.
    pub fn copy_selected(&mut self) {
        let payload = self
            .controller
            .read()
            .as_ref()
            .and_then(NotesController::copy_payload);
        let Some(payload) = payload else {
            return;
        };

        match write_clipboard(&payload) {
            Ok(()) => self.notify(NotificationKind::Success, "Copied to clipboard"),
            Err(error) => {
                tracing::warn!("Clipboard write failed: {error}");
                self.notify(NotificationKind::Error, "Could not copy to clipboard");
            }
        }
    }

    /// Show a transient notification and schedule its auto-dismiss
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        let seq = (self.notification_seq)() + 1;
        self.notification_seq.set(seq);
        self.notification.set(Some(Notification {
            seq,
            kind,
            message: message.into(),
        }));

        let mut notification = self.notification;
        spawn(async move {
            tokio::time::sleep(NOTIFICATION_DISMISS_AFTER).await;
            // Only dismiss if no newer notification replaced this one.
            let is_current = notification
                .read()
                .as_ref()
                .is_some_and(|current| current.seq == seq);
            if is_current {
                notification.set(None);
            }
        });
    }
}

/// How long a transient notification stays on screen.
const NOTIFICATION_DISMISS_AFTER: std::time::Duration = std::time::Duration::from_millis(2500);

fn write_clipboard(payload: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(payload)
}
