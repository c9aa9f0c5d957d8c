use once_cell::sync::Lazy;
use tracing::debug;

use super::description::Parsed;
use super::table::{ruby_values, PatternTable};
use super::xpath_parser::xpath_table;
use crate::config::generic_patterns;

static DEFAULT_PARSER: Lazy<CommandParser> = Lazy::new(CommandParser::new);

/// The parser behind [`parse`], built once per process.
pub(crate) fn default_parser() -> &'static CommandParser {
    &DEFAULT_PARSER
}

/// Turns generated Ruby step lines back into localizable descriptions.
///
/// The generic table is consulted first, then the XPath table. A line no
/// pattern accepts comes back unchanged as [`Parsed::Raw`].
pub struct CommandParser {
    generic: PatternTable,
    xpath: PatternTable,
}

impl CommandParser {
    /// Parser with the built-in tables.
    pub fn new() -> Self {
        Self {
            generic: generic_table(),
            xpath: xpath_table(),
        }
    }

    /// Parser with custom tables, in the same lookup order.
    pub fn with_tables(generic: PatternTable, xpath: PatternTable) -> Self {
        Self { generic, xpath }
    }

    pub fn parse(&self, line: &str) -> Parsed {
        let described = self
            .generic
            .describe(line)
            .or_else(|| self.xpath.describe(line));

        match described {
            Some(description) => {
                debug!(key = %description.key, "step line described");
                Parsed::Description(description)
            }
            None => {
                debug!(line, "no pattern matched, keeping raw line");
                Parsed::Raw(line.to_string())
            }
        }
    }

    pub fn generic(&self) -> &PatternTable {
        &self.generic
    }

    pub fn xpath(&self) -> &PatternTable {
        &self.xpath
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

/// The generic table: navigation, sleeps, scripts, frames, then every element
/// shape with a double-quoted locator literal.
pub fn generic_table() -> PatternTable {
    PatternTable::from_specs(generic_patterns(), ruby_values)
        .expect("built-in generic patterns compile")
}

/// Parse a line with the shared built-in parser.
///
/// ```
/// use rbstep::parse::parse;
///
/// let parsed = parse("sleep(1.5)");
/// assert_eq!(parsed.key(), Some("recorder.commandParser.wait"));
/// assert!(parse("puts 'hi'").is_raw());
/// ```
pub fn parse(line: &str) -> Parsed {
    DEFAULT_PARSER.parse(line)
}
