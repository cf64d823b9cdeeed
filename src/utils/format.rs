use super::constants::{NOT_AVAILABLE, NO_DESCRIPTION};

/// Shortens a description to `max_chars` characters, appending `...` when cut.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.is_empty() {
        return NO_DESCRIPTION.to_string();
    }
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

pub fn format_price(price: &str) -> String {
    let price = price.trim();
    if price.is_empty() {
        format!("₹{}", NOT_AVAILABLE)
    } else {
        format!("₹{}", price)
    }
}

/// `None` for blank or `N/A` values, which cards skip entirely.
pub fn display_or_none(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() || value == NOT_AVAILABLE {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_description("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_description("short", 100), "short");
        assert_eq!(truncate_description("   ", 100), NO_DESCRIPTION);
    }

    #[test]
    fn exactly_max_chars_is_not_cut() {
        assert_eq!(truncate_description("abcde", 5), "abcde");
    }

    #[test]
    fn price_falls_back_to_not_available() {
        assert_eq!(format_price("450"), "₹450");
        assert_eq!(format_price(""), "₹N/A");
    }

    #[test]
    fn placeholder_values_are_hidden() {
        assert_eq!(display_or_none("N/A"), None);
        assert_eq!(display_or_none(" "), None);
        assert_eq!(display_or_none("CSE"), Some("CSE"));
    }
}
