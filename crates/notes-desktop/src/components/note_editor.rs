//! Note editor component

use dioxus::prelude::*;

use notes_core::view::MainPanel;
use notes_core::NotePatch;

use crate::state::AppState;
use crate::theme::palette;

/// Main panel: welcome placeholder, or the selected note's editor.
///
/// Every keystroke routes through the update action, which persists the
/// collection and re-renders. No debouncing; the collection is small and
/// the write is a single local file.
#[component]
pub fn NoteEditor() -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();
    let view = state.view();

    rsx! {
        div {
            class: "note-editor",
            style: "
                flex: 1;
                display: flex;
                flex-direction: column;
                padding: 16px;
                background: {colors.bg_primary};
            ",

            match view.main {
                MainPanel::Editor { title, content, created_display, updated_display, .. } => rsx! {
                    input {
                        class: "editor-title",
                        r#type: "text",
                        style: "
                            border: none;
                            outline: none;
                            font-size: 20px;
                            font-weight: 600;
                            margin-bottom: 4px;
                            background: transparent;
                            color: {colors.text_primary};
                        ",
                        value: "{title}",
                        placeholder: "Untitled",
                        oninput: move |evt| {
                            state.update_note(&NotePatch::title(evt.value()));
                        },
                    }

                    div {
                        class: "editor-timestamps",
                        style: "
                            font-size: 12px;
                            margin-bottom: 12px;
                            color: {colors.text_muted};
                        ",
                        "Created {created_display} · Updated {updated_display}"
                    }

                    textarea {
                        class: "editor-textarea",
                        style: "
                            flex: 1;
                            width: 100%;
                            border: none;
                            outline: none;
                            resize: none;
                            font-family: inherit;
                            font-size: inherit;
                            line-height: 1.6;
                            background: transparent;
                            color: {colors.text_primary};
                        ",
                        value: "{content}",
                        placeholder: "Start typing...",
                        oninput: move |evt| {
                            state.update_note(&NotePatch::content(evt.value()));
                        },
                    }
                },
                MainPanel::Welcome => rsx! {
                    div {
                        class: "editor-placeholder",
                        style: "
                            flex: 1;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            color: {colors.text_muted};
                        ",
                        "Select a note or create a new one"
                    }
                },
            }
        }
    }
}
