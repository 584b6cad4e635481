use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Number of grapheme clusters in `s`.
pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Truncate `s` to at most `max` grapheme clusters.
pub fn truncate_graphemes(s: &str, max: usize) -> String {
    match s.grapheme_indices(true).nth(max) {
        Some((i, _)) => s[..i].to_string(),
        None => s.to_string(),
    }
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    let prefix = &s[..byte_offset];
    let mut last_start = 0;
    for (i, _) in prefix.grapheme_indices(true) {
        last_start = i;
    }
    Some(last_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
    }

    #[test]
    fn display_width_cjk() {
        assert_eq!(display_width("你好"), 4);
    }

    #[test]
    fn display_width_combining() {
        // café with combining accent: c a f e ́
        assert_eq!(display_width("cafe\u{0301}"), 4);
    }

    #[test]
    fn grapheme_count_ascii() {
        assert_eq!(grapheme_count("abc"), 3);
    }

    #[test]
    fn grapheme_count_combining() {
        // e + combining accent is one cluster
        assert_eq!(grapheme_count("cafe\u{0301}"), 4);
    }

    #[test]
    fn grapheme_count_empty() {
        assert_eq!(grapheme_count(""), 0);
    }

    #[test]
    fn truncate_graphemes_short_string_unchanged() {
        assert_eq!(truncate_graphemes("abc", 5), "abc");
    }

    #[test]
    fn truncate_graphemes_exact_length_unchanged() {
        assert_eq!(truncate_graphemes("abcde", 5), "abcde");
    }

    #[test]
    fn truncate_graphemes_cuts_at_cluster_boundary() {
        // Truncating must not split e from its combining accent
        assert_eq!(truncate_graphemes("cafe\u{0301}s", 4), "cafe\u{0301}");
    }

    #[test]
    fn truncate_graphemes_cjk() {
        assert_eq!(truncate_graphemes("日本語テスト", 3), "日本語");
    }

    #[test]
    fn prev_boundary_ascii() {
        assert_eq!(prev_grapheme_boundary("abc", 3), Some(2));
    }

    #[test]
    fn prev_boundary_at_start() {
        assert_eq!(prev_grapheme_boundary("abc", 0), None);
    }

    #[test]
    fn prev_boundary_combining() {
        let s = "cafe\u{0301}"; // the final cluster is 3 bytes: e + U+0301
        assert_eq!(prev_grapheme_boundary(s, s.len()), Some(3));
    }
}
