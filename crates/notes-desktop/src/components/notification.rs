//! Transient notification toast

use dioxus::prelude::*;

use crate::state::{AppState, NotificationKind};
use crate::theme::palette;

/// Auto-dismissing toast for action outcomes (clipboard success/failure)
#[component]
pub fn NotificationToast() -> Element {
    let state = use_context::<AppState>();
    let colors = palette();

    let Some(notification) = (state.notification)() else {
        return rsx! {};
    };

    let bg = match notification.kind {
        NotificationKind::Success => colors.accent,
        NotificationKind::Error => colors.danger,
    };

    rsx! {
        div {
            class: "notification-toast",
            style: "
                position: fixed;
                bottom: 20px;
                right: 20px;
                padding: 10px 16px;
                border-radius: 6px;
                background: {bg};
                color: {colors.accent_text};
                font-size: 13px;
            ",
            "{notification.message}"
        }
    }
}
