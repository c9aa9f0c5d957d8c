use regex::{Captures, Regex};
use tracing::trace;

use super::description::ParsedDescription;
use crate::config::PatternSpec;
use crate::translate::command::XPATH_STRATEGY;
use crate::translate::ruby;

/// Builds a description from a successful match.
pub type Template = fn(&'static str, &Captures) -> ParsedDescription;

/// Capture group names a pattern may define, in the order they are read.
pub const VALUE_NAMES: &[&str] = &[
    "url", "strategy", "value", "key", "text", "seconds", "script", "frame",
];

/// Groups that always hold the body of a Ruby double-quoted literal.
const RUBY_STRING_GROUPS: &[&str] = &["url", "text", "script"];

struct Pattern {
    key: &'static str,
    regex: Regex,
    template: Template,
}

/// An ordered list of (pattern, template) pairs. The first pattern that
/// matches a line decides its description.
#[derive(Default)]
pub struct PatternTable {
    patterns: Vec<Pattern>,
}

impl PatternTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `specs` in order, all sharing `template`.
    pub fn from_specs(
        specs: Vec<PatternSpec>,
        template: Template,
    ) -> std::result::Result<Self, regex::Error> {
        let mut table = Self::new();
        for (key, source) in specs {
            table.push(key, &source, template)?;
        }
        Ok(table)
    }

    /// Append a pattern with the lowest priority so far.
    pub fn push(
        &mut self,
        key: &'static str,
        source: &str,
        template: Template,
    ) -> std::result::Result<(), regex::Error> {
        self.patterns.push(Pattern {
            key,
            regex: Regex::new(source)?,
            template,
        });
        Ok(())
    }

    /// Describe `line` with the first matching pattern.
    pub fn describe(&self, line: &str) -> Option<ParsedDescription> {
        for pattern in &self.patterns {
            trace!(key = pattern.key, "probing pattern");
            if let Some(captures) = pattern.regex.captures(line) {
                return Some((pattern.template)(pattern.key, &captures));
            }
        }
        None
    }

    /// Keys in priority order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.iter().map(|p| p.key)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// The standard template: every named group that took part in the match
/// becomes a value.
///
/// Ruby string bodies are unescaped and quoted strategy symbols lose their
/// quotes. XPath locator values keep their XPath quoting and only have their
/// doubled backslashes restored.
pub fn ruby_values(key: &'static str, captures: &Captures) -> ParsedDescription {
    let is_xpath = captures
        .name("strategy")
        .map_or(false, |m| ruby::symbol_name(m.as_str()) == XPATH_STRATEGY);

    let mut description = ParsedDescription::new(key);
    for &name in VALUE_NAMES {
        let Some(m) = captures.name(name) else {
            continue;
        };
        let raw = m.as_str();
        let value = match name {
            "strategy" => ruby::symbol_name(raw),
            "value" if is_xpath => ruby::unescape_backslashes(raw),
            "value" => ruby::unescape(raw),
            _ if RUBY_STRING_GROUPS.contains(&name) => ruby::unescape(raw),
            _ => raw.to_string(),
        };
        description.values.insert(name.to_string(), value);
    }
    description
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_word(key: &'static str, captures: &Captures) -> ParsedDescription {
        ParsedDescription::new(key).with_value("text", &captures["text"])
    }

    #[test]
    fn test_first_match_wins() {
        let mut table = PatternTable::new();
        table.push("first", r"^(?P<text>\w+)", first_word).unwrap();
        table.push("second", r"^(?P<text>\w+) \w+$", first_word).unwrap();

        let described = table.describe("hello world").unwrap();
        assert_eq!(described.key, "first");

        let mut reversed = PatternTable::new();
        reversed.push("second", r"^(?P<text>\w+) \w+$", first_word).unwrap();
        reversed.push("first", r"^(?P<text>\w+)", first_word).unwrap();
        assert_eq!(reversed.describe("hello world").unwrap().key, "second");
    }

    #[test]
    fn test_no_match() {
        let mut table = PatternTable::new();
        table.push("only", r"^x$", first_word).unwrap();
        assert!(table.describe("y").is_none());
        assert!(PatternTable::new().describe("anything").is_none());
    }

    #[test]
    fn test_invalid_source_is_an_error() {
        let mut table = PatternTable::new();
        assert!(table.push("broken", r"(unclosed", first_word).is_err());
        assert!(table.is_empty());
    }

    #[test]
    fn test_ruby_values_unescapes_non_xpath_locators() {
        let re = Regex::new(r#"^:(?P<strategy>\w+), "(?P<value>.*)"$"#).unwrap();

        let caps = re.captures(r#":css, "a[x=\"1\"]""#).unwrap();
        let described = ruby_values("k", &caps);
        assert_eq!(described.get("strategy"), Some("css"));
        assert_eq!(described.get("value"), Some(r#"a[x="1"]"#));

        let caps = re.captures(r#":xpath, "//a[.='C:\d']""#).unwrap();
        let described = ruby_values("k", &caps);
        assert_eq!(described.get("value"), Some(r"//a[.='C:\d']"));

        let caps = re.captures(r#":xpath, "//a[.='x']\\""#).unwrap();
        let described = ruby_values("k", &caps);
        assert_eq!(described.get("value"), Some(r"//a[.='x']\"));
    }

    #[test]
    fn test_ruby_values_unquotes_strategy_symbols() {
        let re = Regex::new(r#"^:(?P<strategy>\w+|"[^"]*"), "(?P<value>.*)"$"#).unwrap();
        let caps = re.captures(r#":"link text", "Sign in""#).unwrap();
        let described = ruby_values("k", &caps);
        assert_eq!(described.get("strategy"), Some("link text"));
        assert_eq!(described.get("value"), Some("Sign in"));
    }

    #[test]
    fn test_ruby_values_skips_groups_that_did_not_match() {
        let re = Regex::new(r"^(?P<seconds>\d+)(?: (?P<frame>\w+))?$").unwrap();
        let caps = re.captures("5").unwrap();
        let described = ruby_values("k", &caps);
        assert_eq!(described.values.len(), 1);
        assert_eq!(described.get("seconds"), Some("5"));
    }
}
