//! Shared string helpers for rendering.

/// Prefix every line of `text` with `spaces` spaces.
///
/// Lines are split on `\n`. Empty lines are indented too, so the number of
/// lines never changes.
///
/// # Examples
///
/// ```
/// use hypertext::indent;
///
/// assert_eq!(indent("<b></b>\n<i></i>", 2), "  <b></b>\n  <i></i>");
/// assert_eq!(indent("plain", 0), "plain");
/// ```
pub fn indent(text: &str, spaces: usize) -> String {
    if spaces == 0 {
        return text.to_owned();
    }

    let mut out = String::with_capacity(text.len() + spaces);
    push_indented(&mut out, text, spaces);
    out
}

/// Append `spaces` spaces to `out`.
pub(crate) fn push_indent(out: &mut String, spaces: usize) {
    out.extend(std::iter::repeat_n(' ', spaces));
}

/// Append `text` to `out`, prefixing every line with `spaces` spaces.
pub(crate) fn push_indented(out: &mut String, text: &str, spaces: usize) {
    if spaces == 0 {
        out.push_str(text);
        return;
    }

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        push_indent(out, spaces);
        out.push_str(line);
    }
}

/// Escape special HTML characters.
///
/// Only used for attribute values when escaping is switched on in
/// [`RenderOptions`](crate::RenderOptions).
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_single_line() {
        assert_eq!(indent("hello", 4), "    hello");
    }

    #[test]
    fn test_indent_every_line() {
        assert_eq!(indent("a\nb\nc", 2), "  a\n  b\n  c");
    }

    #[test]
    fn test_indent_keeps_empty_lines() {
        assert_eq!(indent("a\n\nb", 1), " a\n \n b");
        assert_eq!(indent("", 3), "   ");
    }

    #[test]
    fn test_indent_zero_is_identity() {
        assert_eq!(indent("a\nb", 0), "a\nb");
    }

    #[test]
    fn test_indent_composes() {
        assert_eq!(indent(&indent("x\ny", 2), 2), indent("x\ny", 4));
    }

    #[test]
    fn test_push_indented_appends() {
        let mut out = String::from("<p>\n");
        push_indented(&mut out, "x\ny", 2);
        assert_eq!(out, "<p>\n  x\n  y");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }
}
