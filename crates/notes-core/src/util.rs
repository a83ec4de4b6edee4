//! Shared utility functions used across multiple modules.

/// Truncate text to at most `max_chars` characters, appending "..." when
/// anything was cut. Interior newlines and runs of whitespace collapse to
/// single spaces first. Caps below 3 truncate without the ellipsis.
#[must_use]
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else if max_chars < 3 {
        collapsed.chars().take(max_chars).collect()
    } else {
        let take_len = max_chars - 3;
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

/// Render a Unix-ms timestamp relative to `now_ms` ("just now", "3m ago", ...)
#[must_use]
pub fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let diff = now_ms.saturating_sub(timestamp_ms);
    let minute = 60_000;
    let hour = 60 * minute;
    let day = 24 * hour;
    let week = 7 * day;
    let month = 30 * day;
    let year = 365 * day;

    if diff < minute {
        "just now".to_string()
    } else if diff < hour {
        format!("{}m ago", diff / minute)
    } else if diff < day {
        format!("{}h ago", diff / hour)
    } else if diff < week {
        format!("{}d ago", diff / day)
    } else if diff < month {
        format!("{}w ago", diff / week)
    } else if diff < year {
        format!("{}mo ago", diff / month)
    } else {
        format!("{}y ago", diff / year)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn truncate_preview_keeps_short_text() {
        assert_eq!(truncate_preview("short", 40), "short");
    }

    #[test]
    fn truncate_preview_collapses_whitespace() {
        assert_eq!(truncate_preview("a\nb\t c", 40), "a b c");
    }

    #[test]
    fn truncate_preview_appends_ellipsis() {
        assert_eq!(
            truncate_preview("This is a very long sentence that should be shortened", 20),
            "This is a very lo..."
        );
    }

    #[test]
    fn truncate_preview_respects_tiny_caps() {
        assert_eq!(truncate_preview("abcdef", 0), "");
        assert_eq!(truncate_preview("abcdef", 2), "ab");
        assert_eq!(truncate_preview("abcdef", 3), "...");
    }

    #[test]
    fn format_relative_time_units() {
        let now = 10_000_000;
        assert_eq!(format_relative_time(now - 30_000, now), "just now");
        assert_eq!(format_relative_time(now - 120_000, now), "2m ago");
        assert_eq!(format_relative_time(now - 2 * 60 * 60_000, now), "2h ago");
    }
}
