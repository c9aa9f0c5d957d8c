use clap::ValueEnum;
use colored::Colorize;

use crate::error::Result;
use crate::line::SourceLine;
use crate::parse::Parsed;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per result
    #[default]
    Text,
    /// One JSON document per result
    Json,
}

/// Renders parse results and generated lines for the terminal.
pub struct StepFormatter {
    format: OutputFormat,
}

impl StepFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Text: `<key> name="value" ...` or `code: <line>`.
    /// JSON: the description object, or the raw line as a JSON string.
    pub fn format_parsed(&self, parsed: &Parsed) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(parsed)?),
            OutputFormat::Text => Ok(match parsed {
                Parsed::Description(description) => {
                    let mut out = description.key.bold().to_string();
                    for (name, value) in &description.values {
                        out.push_str(&format!(" {}={:?}", name, value));
                    }
                    out
                }
                Parsed::Raw(line) => format!("{} {}", "code:".dimmed(), line),
            }),
        }
    }

    /// Generated lines print verbatim in text mode, as JSON strings otherwise.
    pub fn format_line(&self, line: &SourceLine) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(line)?),
            OutputFormat::Text => Ok(line.to_string()),
        }
    }
}

impl Default for StepFormatter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}
