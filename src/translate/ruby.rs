//! Ruby double-quoted string literals.

/// Quote `text` as a Ruby double-quoted literal.
///
/// Escapes backslashes, double quotes, interpolation openers (`#{`, `#@`,
/// `#$`) and line breaks so the literal evaluates back to `text` and stays on
/// one line.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str(r"\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            '\t' => out.push_str(r"\t"),
            '#' if matches!(chars.peek(), Some('{') | Some('@') | Some('$')) => {
                out.push_str(r"\#")
            }
            other => out.push(other),
        }
    }

    out.push('"');
    out
}

/// Evaluate the body of a double-quoted literal (delimiters already removed).
///
/// `\n`, `\r` and `\t` become control characters; any other escaped
/// character stands for itself, as in Ruby.
pub fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}

/// Double every backslash in an XPath literal so Ruby reads it unchanged
/// inside either quote style.
pub fn escape_backslashes(literal: &str) -> String {
    literal.replace('\\', r"\\")
}

/// Inverse of [`escape_backslashes`].
pub fn unescape_backslashes(body: &str) -> String {
    body.replace(r"\\", r"\")
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Ruby symbol literal for `name`: `:name` for plain identifiers, `:"..."`
/// for anything else (`:"link text"`).
pub fn symbol(name: &str) -> String {
    if is_identifier(name) {
        format!(":{}", name)
    } else {
        format!(":{}", quote(name))
    }
}

/// The name behind a symbol literal with its leading `:` removed.
pub fn symbol_name(raw: &str) -> String {
    match raw.strip_prefix('"').and_then(|r| r.strip_suffix('"')) {
        Some(body) => unescape(body),
        None => raw.to_string(),
    }
}
