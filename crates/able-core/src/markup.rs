//! The inline markup subset used by assistant messages.
//!
//! Only two constructs exist: `**bold**` spans (non-greedy, within one line)
//! and line breaks. Everything else is literal text, so rendering never
//! passes message content through as markup.

use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));

/// One piece of parsed message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline<'a> {
    Text(&'a str),
    Bold(&'a str),
    LineBreak,
}

/// Splits `text` into literal text, bold spans and line breaks.
///
/// # Examples
///
/// ```rust
/// use able_core::markup::{parse, Inline};
///
/// assert_eq!(
///     parse("**Done!**\nNext"),
///     vec![Inline::Bold("Done!"), Inline::LineBreak, Inline::Text("Next")]
/// );
/// ```
pub fn parse(text: &str) -> Vec<Inline<'_>> {
    let mut out = Vec::new();
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            out.push(Inline::LineBreak);
        }
        let mut cursor = 0;
        for captures in BOLD.captures_iter(line) {
            let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            if whole.start() > cursor {
                out.push(Inline::Text(&line[cursor..whole.start()]));
            }
            out.push(Inline::Bold(inner.as_str()));
            cursor = whole.end();
        }
        if cursor < line.len() {
            out.push(Inline::Text(&line[cursor..]));
        }
    }
    out
}

/// Renders `text` as HTML: bold spans become `<strong>`, line breaks become
/// `<br/>` and everything else is escaped.
pub fn to_html(text: &str) -> String {
    let mut html = String::with_capacity(text.len());
    for inline in parse(text) {
        match inline {
            Inline::Text(s) => html.push_str(&escape_html(s)),
            Inline::Bold(s) => {
                html.push_str("<strong>");
                html.push_str(&escape_html(s));
                html.push_str("</strong>");
            }
            Inline::LineBreak => html.push_str("<br/>"),
        }
    }
    html
}

/// Drops the markup, keeping bold text and newlines.
pub fn to_plain(text: &str) -> String {
    parse(text)
        .into_iter()
        .map(|inline| match inline {
            Inline::Text(s) | Inline::Bold(s) => s,
            Inline::LineBreak => "\n",
        })
        .collect()
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_is_non_greedy() {
        assert_eq!(
            parse("**a** and **b**"),
            vec![Inline::Bold("a"), Inline::Text(" and "), Inline::Bold("b")]
        );
    }

    #[test]
    fn test_unpaired_delimiter_is_text() {
        assert_eq!(parse("5 ** 2"), vec![Inline::Text("5 ** 2")]);
    }

    #[test]
    fn test_bold_does_not_span_lines() {
        assert_eq!(
            parse("**a\nb**"),
            vec![Inline::Text("**a"), Inline::LineBreak, Inline::Text("b**")]
        );
    }

    #[test]
    fn test_html_escapes_content() {
        assert_eq!(
            to_html("**<b>hi</b>**\n<script>"),
            "<strong>&lt;b&gt;hi&lt;/b&gt;</strong><br/>&lt;script&gt;"
        );
    }

    #[test]
    fn test_plain() {
        assert_eq!(to_plain("✅ **Plan completed!**\n\nDone"), "✅ Plan completed!\n\nDone");
    }
}
