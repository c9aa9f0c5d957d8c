use serde::{Deserialize, Serialize};

/// What the user did on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    Click,
    Type,
    SendKey,
    /// Any event kind the recorder sends that has no Ruby counterpart
    #[serde(other)]
    Unknown,
}

/// A browser event captured by the recorder, consumed once by the translator.
///
/// Field names follow the recorder's JSON (`locatorStrategy`, `tagName`, ...).
/// Every field defaults so that incomplete events reach the translator, which
/// turns them into no lines at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedAction {
    pub kind: ActionKind,
    #[serde(default)]
    pub locator_strategy: String,
    #[serde(default)]
    pub locator_value: String,
    #[serde(default)]
    pub tag_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
}

impl RecordedAction {
    fn new(kind: ActionKind, strategy: &str, value: &str, tag_name: &str) -> Self {
        Self {
            kind,
            locator_strategy: strategy.to_string(),
            locator_value: value.to_string(),
            tag_name: tag_name.to_string(),
            text_value: None,
            key_name: None,
        }
    }

    /// A click on the element found by `strategy`/`value`
    pub fn click(strategy: &str, value: &str, tag_name: &str) -> Self {
        Self::new(ActionKind::Click, strategy, value, tag_name)
    }

    /// Text typed into the element
    pub fn typed(strategy: &str, value: &str, tag_name: &str, text: &str) -> Self {
        Self {
            text_value: Some(text.to_string()),
            ..Self::new(ActionKind::Type, strategy, value, tag_name)
        }
    }

    /// A named key pressed while the element had focus
    pub fn key_press(strategy: &str, value: &str, tag_name: &str, key_name: &str) -> Self {
        Self {
            key_name: Some(key_name.to_string()),
            ..Self::new(ActionKind::SendKey, strategy, value, tag_name)
        }
    }
}
