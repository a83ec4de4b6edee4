//! Main application component

use dioxus::prelude::*;

use notes_core::NotesController;

use crate::components::{ConfirmDialog, NotificationToast};
use crate::services::open_default_store;
use crate::state::AppState;
use crate::theme::palette;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    // State signals. The controller loads synchronously from the local
    // file store; a failed open degrades to an empty, non-persisting UI.
    let controller = use_signal(|| match open_default_store() {
        Ok(store) => Some(NotesController::load(store)),
        Err(error) => {
            tracing::error!("Failed to open local store: {error}");
            None
        }
    });
    let notification = use_signal(|| None);
    let confirm_delete_open = use_signal(|| false);
    let notification_seq = use_signal(|| 0u64);

    let state = use_context_provider(|| {
        AppState::new(controller, notification, confirm_delete_open, notification_seq)
    });

    let colors = palette();

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",
            Home {}

            if (state.confirm_delete_open)() {
                ConfirmDialog {}
            }

            NotificationToast {}
        }
    }
}
