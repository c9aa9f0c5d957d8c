//! Translation between recorded browser actions and Ruby Selenium step lines.
//!
//! - [`xpath::escape`] turns a raw value into an XPath string literal.
//! - [`translate()`] turns a [`RecordedAction`] into zero, one or two
//!   [`SourceLine`]s.
//! - [`parse()`] turns a step line back into a [`ParsedDescription`] (a
//!   localization key with named values), or hands the line back unchanged.

pub mod config;
pub mod error;
pub mod line;
pub mod output;
pub mod parse;
pub mod session;
pub mod translate;
pub mod xpath;

// Re-export commonly used types
pub use error::{Result, StepError};
pub use line::SourceLine;
pub use parse::{parse, CommandParser, Parsed, ParsedDescription};
pub use session::{Recording, StepObserver};
pub use translate::{translate, ActionKind, Command, Locator, RecordedAction};
pub use xpath::escape;

/// Read recorded actions from `input` and translate them in order.
///
/// `input` is either a JSON array of actions or JSON lines (one action per
/// line, blank lines ignored).
#[must_use = "this function returns a Result that should be handled"]
pub fn translate_actions(input: &str) -> Result<Vec<SourceLine>> {
    let mut recording = Recording::new("stdin");
    for action in read_actions(input)? {
        recording.record(&action);
    }
    Ok(recording.finish())
}

/// Parse recorded actions without translating them.
pub fn read_actions(input: &str) -> Result<Vec<RecordedAction>> {
    if input.trim_start().starts_with('[') {
        return serde_json::from_str(input)
            .map_err(|e| StepError::invalid_action(e.line(), e.to_string()));
    }

    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str::<RecordedAction>(line)
                .map_err(|e| StepError::invalid_action(idx + 1, e.to_string()))
        })
        .collect()
}

/// Describe each non-blank line of `input`.
pub fn describe_lines(input: &str) -> Vec<Parsed> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse)
        .collect()
}
