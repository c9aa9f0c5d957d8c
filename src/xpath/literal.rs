//! XPath 1.0 string literals.
//!
//! XPath literals have no escape syntax: a literal delimited by `'` cannot
//! contain `'` and one delimited by `"` cannot contain `"`. A value holding
//! both quote characters has to be spelled as a `concat()` of pieces.

/// The quoted apostrophe placed between `concat()` fragments.
const APOSTROPHE_ARG: &str = r#""'""#;

/// Turn a raw value into a valid XPath string literal.
///
/// - both quote kinds present: `concat(...)` of the pieces around each `'`
/// - only `'` present: double-quoted
/// - otherwise: single-quoted
///
/// ```
/// assert_eq!(rbstep::xpath::escape("O'Brien"), r#""O'Brien""#);
/// assert_eq!(rbstep::xpath::escape("//a"), "'//a'");
/// ```
pub fn escape(xpath: &str) -> String {
    let has_single = xpath.contains('\'');
    let has_double = xpath.contains('"');

    if has_single && has_double {
        let fragments: Vec<String> = xpath.split('\'').map(quote_fragment).collect();
        format!("concat({})", fragments.join(&format!(",{},", APOSTROPHE_ARG)))
    } else if has_single {
        format!("\"{}\"", xpath)
    } else {
        format!("'{}'", xpath)
    }
}

/// Fragments never contain `'`, so single quotes are always available when
/// the fragment carries a `"`.
fn quote_fragment(fragment: &str) -> String {
    if fragment.contains('"') {
        format!("'{}'", fragment)
    } else {
        format!("\"{}\"", fragment)
    }
}

/// Inverse of [`escape`]: recover the raw value from any of the three
/// literal forms. Returns `None` for text that is not a well-formed literal.
pub fn unescape(literal: &str) -> Option<String> {
    if let Some(args) = literal
        .strip_prefix("concat(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return decode_concat_args(args);
    }

    let mut args = literal.chars();
    let quote = args.next()?;
    if quote != '\'' && quote != '"' {
        return None;
    }
    let body = literal[1..].strip_suffix(quote)?;
    if body.contains(quote) {
        return None;
    }
    Some(body.to_string())
}

/// Evaluate a raw `concat()` argument list (`"a","'",'b "c"'`) made only of
/// string literals, returning the concatenated value.
pub fn decode_concat_args(args: &str) -> Option<String> {
    let mut value = String::new();
    let mut rest = args.trim_start();
    let mut pieces = 0;

    loop {
        let quote = rest.chars().next()?;
        if quote != '\'' && quote != '"' {
            return None;
        }
        let body = &rest[1..];
        let end = body.find(quote)?;
        value.push_str(&body[..end]);
        pieces += 1;

        rest = body[end + 1..].trim_start();
        if rest.is_empty() {
            break;
        }
        rest = rest.strip_prefix(',')?.trim_start();
    }

    // concat() takes at least two arguments
    if pieces < 2 {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_is_single_quoted() {
        assert_eq!(escape("//button[@id=submit]"), "'//button[@id=submit]'");
        assert_eq!(escape(""), "''");
    }

    #[test]
    fn test_double_quotes_only_is_single_quoted() {
        assert_eq!(escape(r#"//a[text()="Go"]"#), r#"'//a[text()="Go"]'"#);
    }

    #[test]
    fn test_apostrophe_only_is_double_quoted() {
        assert_eq!(escape("O'Brien"), r#""O'Brien""#);
        assert_eq!(escape("//a[@title='x']"), r#""//a[@title='x']""#);
    }

    #[test]
    fn test_mixed_quotes_use_concat() {
        assert_eq!(
            escape(r#"a'b"c"#),
            r#"concat("a","'",'b"c')"#
        );
        assert_eq!(
            escape(r#"it's "big""#),
            r#"concat("it","'",'s "big"')"#
        );
    }

    #[test]
    fn test_concat_keeps_empty_fragments() {
        assert_eq!(
            escape(r#"'x""#),
            r#"concat("","'",'x"')"#
        );
        assert_eq!(
            escape(r#""a''"#),
            r#"concat('"a',"'","","'","")"#
        );
    }

    #[test]
    fn test_decode_concat_args() {
        assert_eq!(
            decode_concat_args(r#""it","'",'s "big"'"#).as_deref(),
            Some(r#"it's "big""#)
        );
        assert_eq!(
            decode_concat_args(r#" "a" , 'b' "#).as_deref(),
            Some("ab")
        );
    }

    #[test]
    fn test_decode_concat_args_rejects_garbage() {
        assert_eq!(decode_concat_args(""), None);
        assert_eq!(decode_concat_args(r#""only one""#), None);
        assert_eq!(decode_concat_args(r#""a",b"#), None);
        assert_eq!(decode_concat_args(r#""a","b"#), None);
        assert_eq!(decode_concat_args(r#""a""b""#), None);
    }

    #[test]
    fn test_unescape_inverts_escape() {
        for raw in [
            "",
            "//div",
            "O'Brien",
            r#"say "hi""#,
            r#"it's "big""#,
            r#"'"'"#,
        ] {
            assert_eq!(unescape(&escape(raw)).as_deref(), Some(raw), "{}", raw);
        }
    }

    #[test]
    fn test_unescape_rejects_unbalanced() {
        assert_eq!(unescape("'abc"), None);
        assert_eq!(unescape("abc"), None);
        assert_eq!(unescape("'a'b'"), None);
        assert_eq!(unescape(""), None);
    }
}
