//! Note list component

use dioxus::prelude::*;

use super::NoteCard;
use crate::state::AppState;
use crate::theme::palette;

/// Sidebar list of notes with previews
#[component]
pub fn NoteList() -> Element {
    let mut state = use_context::<AppState>();
    let view = state.view();
    let colors = palette();

    rsx! {
        div {
            class: "note-list",
            style: "
                width: 280px;
                border-right: 1px solid {colors.border};
                overflow-y: auto;
                background: {colors.bg_primary};
            ",

            if view.sidebar.is_empty() {
                div {
                    style: "
                        padding: 20px;
                        text-align: center;
                        color: {colors.text_muted};
                    ",
                    "No notes yet"
                }
            } else {
                for summary in view.sidebar {
                    {
                        let note_id = summary.id;

                        rsx! {
                            NoteCard {
                                key: "{note_id}",
                                title: summary.title,
                                preview: summary.preview,
                                updated_display: summary.updated_display,
                                is_selected: summary.selected,
                                onclick: move |_| {
                                    state.select_note(note_id);
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
