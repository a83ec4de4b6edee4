//! Toolbar component with actions

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::palette;

/// Toolbar with action buttons
#[component]
pub fn Toolbar() -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();
    let has_selected_note = state.has_selection();

    rsx! {
        div {
            class: "toolbar",
            style: "
                display: flex;
                gap: 8px;
                padding: 10px 16px;
                border-bottom: 1px solid {colors.border};
                background: {colors.bg_secondary};
            ",

            button {
                style: "
                    padding: 6px 12px;
                    border: none;
                    border-radius: 6px;
                    cursor: pointer;
                    background: {colors.accent};
                    color: {colors.accent_text};
                ",
                onclick: move |_| state.add_note(),
                "+ New Note"
            }

            if has_selected_note {
                button {
                    style: "
                        padding: 6px 12px;
                        border: 1px solid {colors.border};
                        border-radius: 6px;
                        cursor: pointer;
                        background: {colors.bg_primary};
                        color: {colors.text_primary};
                    ",
                    onclick: move |_| state.copy_selected(),
                    "Copy"
                }

                button {
                    style: "
                        padding: 6px 12px;
                        border: 1px solid {colors.border};
                        border-radius: 6px;
                        cursor: pointer;
                        background: {colors.bg_primary};
                        color: {colors.danger};
                    ",
                    onclick: move |_| state.confirm_delete_open.set(true),
                    "Delete"
                }
            }
        }
    }
}
