pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Display an optional field; absent or blank values become a dash.
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("Vera", 10), "Vera");
    }

    #[test]
    fn test_truncate_long_text_gets_ellipsis() {
        assert_eq!(truncate("Construtora Horizonte Azul", 14), "Construtora...");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("Joao Conceição", 20), "Joao Conceição");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(Some("Vera Lima")), "Vera Lima");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(None), "-");
    }
}
