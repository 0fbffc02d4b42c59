//! Persian text cleanup and validation helpers.

/// Arabic code points that commonly leak into Persian input, with their
/// Persian equivalents (letters and digits).
const ARABIC_TO_PERSIAN: &[(char, char)] = &[
    ('ك', 'ک'),
    ('ي', 'ی'),
    ('٠', '۰'),
    ('١', '۱'),
    ('٢', '۲'),
    ('٣', '۳'),
    ('٤', '۴'),
    ('٥', '۵'),
    ('٦', '۶'),
    ('٧', '۷'),
    ('٨', '۸'),
    ('٩', '۹'),
];

/// Maximum accepted length for a search query, in characters.
const MAX_QUERY_CHARS: usize = 100;

/// Clean and normalize Persian text: collapse whitespace and map Arabic
/// variant characters to their Persian forms.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let whitespace_pattern = regex::Regex::new(r"\s+").unwrap();
    let collapsed = whitespace_pattern.replace_all(text.trim(), " ");

    collapsed
        .chars()
        .map(|c| {
            ARABIC_TO_PERSIAN
                .iter()
                .find(|(arabic, _)| *arabic == c)
                .map(|(_, persian)| *persian)
                .unwrap_or(c)
        })
        .collect()
}

/// Check whether text contains Persian (or related Arabic-script) characters
pub fn is_persian(text: &str) -> bool {
    let persian_pattern = regex::Regex::new(
        r"[\x{0600}-\x{06FF}\x{0750}-\x{077F}\x{08A0}-\x{08FF}\x{FB50}-\x{FDFF}\x{FE70}-\x{FEFF}]",
    )
    .unwrap();
    persian_pattern.is_match(text)
}

/// Validate a search query: at least 2 significant characters after
/// stripping everything that is neither a word character nor Persian
/// script, and not absurdly long.
pub fn is_valid_query(query: &str) -> bool {
    let trimmed = query.trim();
    if trimmed.chars().count() < 2 || query.chars().count() > MAX_QUERY_CHARS {
        return false;
    }

    let strip_pattern = regex::Regex::new(r"[^\w\s\x{0600}-\x{06FF}]").unwrap();
    let cleaned = strip_pattern.replace_all(query, "");
    cleaned.trim().chars().count() >= 2
}

/// Truncate text to fit a transport message limit, preferring a word
/// boundary when one falls in the last fifth of the cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    if let Some(last_space) = cut.rfind(' ') {
        let boundary_floor = cut.len() * 4 / 5;
        if last_space > boundary_floor {
            return format!("{}...", &cut[..last_space]);
        }
    }
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_maps_arabic_characters() {
        assert_eq!(normalize("كيف"), "کیف");
        assert_eq!(normalize("٤٢"), "۴۲");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  سلام   دنیا \n\n خوبی  "), "سلام دنیا خوبی");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_is_persian_detects_persian_script() {
        assert!(is_persian("سلام"));
        assert!(is_persian("hello سلام"));
        assert!(!is_persian("hello world"));
        assert!(!is_persian("123!?"));
    }

    #[test]
    fn test_is_valid_query_rejects_short_queries() {
        assert!(!is_valid_query(""));
        assert!(!is_valid_query("a"));
        assert!(!is_valid_query(" ف "));
        assert!(is_valid_query("دیره"));
        assert!(is_valid_query("ab"));
    }

    #[test]
    fn test_is_valid_query_rejects_punctuation_only() {
        assert!(!is_valid_query("!?"));
        assert!(!is_valid_query("...---"));
    }

    #[test]
    fn test_is_valid_query_rejects_overlong_queries() {
        let query = "ب".repeat(MAX_QUERY_CHARS + 1);
        assert!(!is_valid_query(&query));
    }

    #[test]
    fn test_is_valid_query_accepts_persian_with_punctuation() {
        assert!(is_valid_query("محسن یگانه - دیره!"));
    }

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate("سلام دنیا", 50), "سلام دنیا");
    }

    #[test]
    fn test_truncate_cuts_long_text_with_ellipsis() {
        let text = "کلمه ".repeat(100);
        let truncated = truncate(&text, 40);
        assert!(truncated.chars().count() <= 40);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_is_char_boundary_safe() {
        // A cut in the middle of multi-byte Persian text must not panic
        let text = "ب".repeat(500);
        let truncated = truncate(&text, 100);
        assert!(truncated.chars().count() <= 100);
    }
}
