/// Rough token estimate used for before/after comparisons.
///
/// CJK characters weigh about 1.5 tokens each; everything else averages
/// four characters per token. Close enough to judge compression, not
/// meant to match any tokenizer exactly.
pub fn estimate_tokens(text: &str) -> usize {
    let cjk = text
        .chars()
        .filter(|c| ('\u{4e00}'..='\u{9fff}').contains(c))
        .count();
    let other = text.chars().count() - cjk;
    (cjk as f64 * 1.5 + other as f64 / 4.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(estimate_tokens(""), 0);
    }

    #[test]
    fn test_ascii_averages_four_chars_per_token() {
        assert_eq!(estimate_tokens("abcd"), 1);
        assert_eq!(estimate_tokens("abcdefgh"), 2);
        // fractions truncate
        assert_eq!(estimate_tokens("abcdefg"), 1);
    }

    #[test]
    fn test_cjk_weighs_heavier() {
        assert_eq!(estimate_tokens("中"), 1);
        assert_eq!(estimate_tokens("中文"), 3);
        // counts are per character, not per byte
        assert_eq!(estimate_tokens("用户表id"), 5);
    }
}
