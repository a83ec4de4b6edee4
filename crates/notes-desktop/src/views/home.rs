//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{NoteEditor, NoteList, SearchBar, Toolbar};

/// Home view component - the main application screen
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-container",
            style: "display: flex; flex-direction: column; height: 100vh;",

            Toolbar {}
            SearchBar {}

            div {
                class: "content-area",
                style: "flex: 1; display: flex; overflow: hidden;",

                NoteList {}
                NoteEditor {}
            }
        }
    }
}
