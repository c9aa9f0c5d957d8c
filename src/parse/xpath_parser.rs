//! Patterns for XPath locators written as single-quoted or `concat()`
//! literals. Double-quoted XPath literals are plain Ruby-looking strings and
//! are covered by the generic table.

use tracing::debug;

use super::command_parser::default_parser;
use super::description::Parsed;
use super::table::{ruby_values, PatternTable};
use crate::config::xpath_patterns;

/// Build the XPath table: every element shape with a single-quoted literal,
/// then every element shape with a `concat()` literal.
pub fn xpath_table() -> PatternTable {
    PatternTable::from_specs(xpath_patterns(), ruby_values)
        .expect("built-in xpath patterns compile")
}

/// Parse `line` against the shared parser's XPath table only.
pub fn parse_xpath(line: &str) -> Parsed {
    match default_parser().xpath().describe(line) {
        Some(description) => Parsed::Description(description),
        None => {
            debug!(line, "no xpath pattern matched");
            Parsed::Raw(line.to_string())
        }
    }
}
