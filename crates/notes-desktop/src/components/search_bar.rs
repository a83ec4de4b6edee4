//! Search bar component

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::palette;

/// Search bar for filtering notes
#[component]
pub fn SearchBar() -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();
    let query = state.query();

    rsx! {
        div {
            class: "search-bar",
            style: "
                padding: 12px 16px;
                border-bottom: 1px solid {colors.border};
                background: {colors.bg_secondary};
            ",

            input {
                r#type: "text",
                placeholder: "Search notes...",
                value: "{query}",
                oninput: move |evt| {
                    state.set_query(evt.value());
                },
                style: "
                    width: 100%;
                    padding: 8px 12px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    font-size: 14px;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                    outline: none;
                ",
            }
        }
    }
}
