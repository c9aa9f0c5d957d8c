use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A localization key plus the named values to interpolate into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDescription {
    /// Dotted key such as `recorder.commandParser.clickElement`
    pub key: String,
    pub values: BTreeMap<String, String>,
}

impl ParsedDescription {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Parser output: a description, or the original line when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Parsed {
    Description(ParsedDescription),
    Raw(String),
}

impl Parsed {
    pub fn description(&self) -> Option<&ParsedDescription> {
        match self {
            Parsed::Description(description) => Some(description),
            Parsed::Raw(_) => None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.description().map(|d| d.key.as_str())
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Parsed::Raw(_))
    }
}

impl From<ParsedDescription> for Parsed {
    fn from(description: ParsedDescription) -> Self {
        Parsed::Description(description)
    }
}
