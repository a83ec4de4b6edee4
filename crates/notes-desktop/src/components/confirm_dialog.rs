//! Delete confirmation dialog

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::palette;

/// Modal yes/no prompt naming the note about to be deleted.
///
/// Declining closes the dialog without any state change.
#[component]
pub fn ConfirmDialog() -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();
    let title = state.selected_title().unwrap_or_else(|| "Untitled".to_string());

    rsx! {
        div {
            class: "confirm-overlay",
            style: "
                position: fixed;
                inset: 0;
                display: flex;
                align-items: center;
                justify-content: center;
                background: rgba(0, 0, 0, 0.4);
            ",
            onclick: move |_| state.confirm_delete_open.set(false),

            div {
                class: "confirm-dialog",
                style: "
                    min-width: 320px;
                    padding: 20px;
                    border-radius: 8px;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                ",
                onclick: move |evt| evt.stop_propagation(),

                div {
                    style: "font-weight: 600; margin-bottom: 8px;",
                    "Delete note"
                }

                div {
                    style: "margin-bottom: 16px; color: {colors.text_secondary};",
                    "Delete note '{title}'? This cannot be undone."
                }

                div {
                    style: "display: flex; justify-content: flex-end; gap: 8px;",

                    button {
                        style: "
                            padding: 6px 12px;
                            border: 1px solid {colors.border};
                            border-radius: 6px;
                            cursor: pointer;
                            background: {colors.bg_primary};
                            color: {colors.text_primary};
                        ",
                        onclick: move |_| state.confirm_delete_open.set(false),
                        "Cancel"
                    }

                    button {
                        style: "
                            padding: 6px 12px;
                            border: none;
                            border-radius: 6px;
                            cursor: pointer;
                            background: {colors.danger};
                            color: {colors.accent_text};
                        ",
                        onclick: move |_| state.delete_selected(),
                        "Delete"
                    }
                }
            }
        }
    }
}
