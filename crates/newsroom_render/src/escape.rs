//! HTML escaping for text and attribute values.

/// Escape `&`, `<`, `>`, `"` and `'` so text can be placed in element content
/// or a double-quoted attribute.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_is_neutralised() {
        assert_eq!(
            escape_html(r#"<script>alert("hi")</script>"#),
            "&lt;script&gt;alert(&quot;hi&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_ampersands_and_quotes() {
        assert_eq!(escape_html("Fish & Chips"), "Fish &amp; Chips");
        assert_eq!(escape_html("Remy's"), "Remy&#39;s");
    }

    #[test]
    fn test_whitespace_untouched() {
        assert_eq!(escape_html("line one\n  line two"), "line one\n  line two");
    }
}
