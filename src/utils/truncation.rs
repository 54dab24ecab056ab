//! Character-budget truncation shared by every string the inspector emits.
//!
//! Budgets are counted in Unicode scalar values, never bytes, so a capped string
//! is always valid UTF-8 and its visible length matches the budget.

/// Marker appended to any string cut short by a budget.
pub const ELLIPSIS: &str = "...";

/// Cap `text` at `limit` characters.
///
/// Text within budget is returned unchanged. Longer text keeps its first
/// `limit - 3` characters followed by [`ELLIPSIS`], so the result is exactly
/// `limit` characters long (budgets below 3 still get the full marker).
pub fn truncate_text(text: &str, limit: usize) -> String {
    if fits_within(text, limit) {
        return text.to_string();
    }

    let keep = limit.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Truncate a binding, column or key name. `None` means no limit.
pub fn truncate_name(name: &str, max_len: Option<usize>) -> String {
    match max_len {
        None => name.to_string(),
        Some(limit) => truncate_text(name, limit),
    }
}

/// First `limit` characters of `text`, with no marker.
pub fn char_prefix(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

// Avoids counting every character of a huge string when only the first
// `limit + 1` matter.
fn fits_within(text: &str, limit: usize) -> bool {
    text.len() <= limit || text.chars().nth(limit).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_within_budget() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello", 5), "hello");
        assert_eq!(truncate_text("", 0), "");
    }

    #[test]
    fn test_truncate_text_over_budget() {
        let long = "x".repeat(100_000);
        let capped = truncate_text(&long, 200);
        assert_eq!(capped.chars().count(), 200);
        assert!(capped.ends_with("..."));
        assert!(capped.starts_with("xxx"));
    }

    #[test]
    fn test_truncate_text_counts_characters_not_bytes() {
        // 10 multi-byte characters: 30 bytes but only 10 chars
        let text = "日本語日本語日本語日";
        assert_eq!(truncate_text(text, 10), text);
        assert_eq!(truncate_text(text, 6), "日本語...");
    }

    #[test]
    fn test_truncate_text_tiny_budget() {
        assert_eq!(truncate_text("abcdef", 2), "...");
    }

    #[test]
    fn test_truncate_name() {
        let name = "a".repeat(100);
        assert_eq!(truncate_name(&name, None), name);
        let capped = truncate_name(&name, Some(60));
        assert_eq!(capped.chars().count(), 60);
        assert!(capped.ends_with("..."));
        assert_eq!(truncate_name("short", Some(60)), "short");
    }

    #[test]
    fn test_char_prefix() {
        assert_eq!(char_prefix("hello world", 5), "hello");
        assert_eq!(char_prefix("hi", 80), "hi");
        assert_eq!(char_prefix("日本語", 2), "日本");
    }
}
