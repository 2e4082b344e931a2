//! Text classification predicates.
//!
//! Decides whether a candidate string is already wrapped in a translation call
//! or looks like a URL. Everything here is pure string matching: no AST, no I/O.

use std::sync::LazyLock;

use regex::Regex;

/// Quote characters that may delimit a string in printed source.
pub const QUOTES: [char; 3] = ['"', '\'', '`'];

/// Matches `t("...")`, `t('...')` or ``t(`...`)`` anywhere in the text.
///
/// The call name must be exactly `t`, so `format("x")` or `$t("x")` do not count.
static WRAPPED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|[^\w$])t\(["'`][^\n\r\x{2028}\x{2029}]*["'`]\)"#).unwrap()
});

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s/$.?#][^\n\r\x{2028}\x{2029}]\S*"#).unwrap()
});

/// Returns true if the text contains a translation call of the form `t("...")`.
///
/// # Examples
///
/// ```
/// use unwrapt::core::classify::is_wrapped;
///
/// assert!(is_wrapped(r#"t("hello")"#));
/// assert!(is_wrapped("cond ? t('yes') : t('no')"));
/// assert!(!is_wrapped("hello"));
/// assert!(!is_wrapped("t(key)"));
/// ```
pub fn is_wrapped(text: &str) -> bool {
    WRAPPED_REGEX.is_match(text)
}

/// Returns true if the text contains an `http://` or `https://` URL.
///
/// # Examples
///
/// ```
/// use unwrapt::core::classify::is_url;
///
/// assert!(is_url("https://example.com/path"));
/// assert!(is_url("See http://docs.rs for details"));
/// assert!(!is_url("https://"));
/// assert!(!is_url("Welcome back"));
/// ```
pub fn is_url(text: &str) -> bool {
    URL_REGEX.is_match(text)
}

/// Whitespace removed around candidate text, including the byte order mark.
pub fn is_trim_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Trims surrounding whitespace, including the byte order mark.
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(is_trim_char)
}

/// A text may become a finding iff it is non-empty after trimming and is
/// neither wrapped nor a URL.
pub fn is_eligible(text: &str) -> bool {
    let trimmed = trim_text(text);
    !trimmed.is_empty() && !is_wrapped(trimmed) && !is_url(trimmed)
}

/// The first quoted string found in a piece of printed source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotedText<'a> {
    /// Byte offset of the opening quote.
    pub start: usize,
    /// Content between the quotes, escapes left as written.
    pub inner: &'a str,
}

/// Finds the first `'`, `"` or `` ` `` delimited substring.
///
/// A backslash always consumes the following character, so escaped quotes do
/// not close the string. Line terminators end a candidate without a match, and
/// the search resumes at the next quote character.
pub fn first_quoted_substring(text: &str) -> Option<QuotedText<'_>> {
    text.char_indices()
        .filter(|(_, c)| QUOTES.contains(c))
        .find_map(|(start, quote)| {
            closing_quote(text, start, quote).map(|end| QuotedText {
                start,
                inner: &text[start + quote.len_utf8()..end],
            })
        })
}

fn closing_quote(text: &str, start: usize, quote: char) -> Option<usize> {
    let body_start = start + quote.len_utf8();
    let mut chars = text[body_start..]
        .char_indices()
        .map(|(i, c)| (body_start + i, c));

    while let Some((idx, c)) = chars.next() {
        if c == quote {
            return Some(idx);
        }
        if is_line_terminator(c) {
            return None;
        }
        if c == '\\' {
            match chars.next() {
                Some((_, escaped)) if !is_line_terminator(escaped) => {}
                _ => return None,
            }
        }
    }
    None
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
