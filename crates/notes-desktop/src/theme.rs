//! Color palette for the desktop UI

/// Colors used across components
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_tertiary: &'static str,
    pub border: &'static str,
    pub border_light: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub danger: &'static str,
}

/// The app palette (single light theme)
#[must_use]
pub const fn palette() -> Palette {
    Palette {
        bg_primary: "#ffffff",
        bg_secondary: "#f6f7f8",
        bg_tertiary: "#eef1f4",
        border: "#d9dde2",
        border_light: "#e8ebee",
        text_primary: "#1f2328",
        text_secondary: "#57606a",
        text_muted: "#8b949e",
        accent: "#2563eb",
        accent_text: "#ffffff",
        danger: "#d1242f",
    }
}
