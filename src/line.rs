use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between generated code and its human comment.
const COMMENT_SEPARATOR: &str = " # ";

/// One generated line of Ruby test code, optionally followed by ` # comment`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceLine(String);

impl SourceLine {
    pub fn new(line: impl Into<String>) -> Self {
        Self(line.into())
    }

    /// Code followed by a comment
    pub fn with_comment(code: impl Into<String>, comment: &str) -> Self {
        let mut line = code.into();
        line.push_str(COMMENT_SEPARATOR);
        line.push_str(comment);
        Self(line)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// The code part, without the trailing comment.
    pub fn code(&self) -> &str {
        match comment_start(&self.0) {
            Some(idx) => &self.0[..idx],
            None => &self.0,
        }
    }

    /// The comment text after ` # `, if any.
    pub fn comment(&self) -> Option<&str> {
        comment_start(&self.0).map(|idx| &self.0[idx + COMMENT_SEPARATOR.len()..])
    }
}

/// Byte offset of the first ` # ` that sits outside a string literal.
fn comment_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) => {
                if b == b'\\' && q == b'"' {
                    i += 1;
                } else if b == q {
                    quote = None;
                }
            }
            None => {
                if b == b'"' || b == b'\'' {
                    quote = Some(b);
                } else if bytes[i..].starts_with(COMMENT_SEPARATOR.as_bytes()) {
                    return Some(i);
                }
            }
        }
        i += 1;
    }

    None
}

impl fmt::Display for SourceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SourceLine {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for SourceLine {
    fn from(line: String) -> Self {
        Self(line)
    }
}

impl From<&str> for SourceLine {
    fn from(line: &str) -> Self {
        Self(line.to_string())
    }
}
