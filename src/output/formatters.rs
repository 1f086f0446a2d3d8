//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Utc};

/// Longest ingredient text shown on a detail card
pub const INGREDIENTS_MAX_CHARS: usize = 800;

/// Placeholder for a missing nutrition value
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder for an empty table cell
pub const EMPTY_CELL: &str = "--";

/// Cut `s` to `max_chars` characters, appending `...` when anything was cut.
///
/// Counts characters rather than bytes so multi-byte text is never split.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &s[..byte_idx]),
        None => s.to_string(),
    }
}

/// The value, or `N/A` when missing or blank
pub fn or_na(value: Option<&str>) -> String {
    or_placeholder(value, NOT_AVAILABLE)
}

/// The value, or `--` when missing or blank
pub fn or_dash(value: Option<&str>) -> String {
    or_placeholder(value, EMPTY_CELL)
}

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(placeholder)
        .to_string()
}

/// Remaining lifetime of a session, e.g. `3h 12m`
pub fn format_remaining(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let remaining = expires_at.signed_duration_since(now);
    if remaining.num_seconds() <= 0 {
        return "expired".to_string();
    }
    let hours = remaining.num_hours();
    let mins = remaining.num_minutes() % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_chars("oats, salt", 800), "oats, salt");
    }

    #[test]
    fn test_truncate_at_limit() {
        let text = "a".repeat(801);
        let out = truncate_chars(&text, INGREDIENTS_MAX_CHARS);
        assert_eq!(out.len(), 803);
        assert!(out.ends_with("..."));

        let exact = "b".repeat(800);
        assert_eq!(truncate_chars(&exact, INGREDIENTS_MAX_CHARS), exact);
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_chars("crème brûlée", 5), "crème...");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(or_na(None), "N/A");
        assert_eq!(or_na(Some("  ")), "N/A");
        assert_eq!(or_na(Some("12.0 g")), "12.0 g");
        assert_eq!(or_dash(None), "--");
    }

    #[test]
    fn test_format_remaining() {
        let now = Utc::now();
        assert_eq!(
            format_remaining(now + Duration::minutes(195), now),
            "3h 15m"
        );
        assert_eq!(format_remaining(now + Duration::seconds(20), now), "1m");
        assert_eq!(format_remaining(now - Duration::minutes(1), now), "expired");
    }
}
