use tracing::debug;

use super::action::{ActionKind, RecordedAction};
use super::command::{Command, Locator};
use crate::config::key_symbol;
use crate::line::SourceLine;

/// Steps for a recorded action, in the order they must run.
///
/// Returns an empty list when the action has no Ruby counterpart: an unknown
/// kind, an empty locator, a `Type` without text or a `SendKey` whose key is
/// missing or not in the key map.
pub fn commands_for(action: &RecordedAction) -> Vec<Command> {
    if action.locator_strategy.is_empty() || action.locator_value.is_empty() {
        debug!(kind = ?action.kind, "action has no locator, skipping");
        return Vec::new();
    }

    let locator = Locator::new(
        action.locator_strategy.as_str(),
        action.locator_value.as_str(),
    );

    match action.kind {
        ActionKind::Click => vec![Command::Click {
            locator,
            tag: action.tag_name.clone(),
        }],
        ActionKind::Type => match &action.text_value {
            Some(text) => vec![
                Command::Clear(locator.clone()),
                Command::Type {
                    locator,
                    text: text.clone(),
                },
            ],
            None => {
                debug!("type action without text, skipping");
                Vec::new()
            }
        },
        ActionKind::SendKey => {
            let symbol = action.key_name.as_deref().and_then(key_symbol);
            match symbol {
                Some(symbol) => vec![Command::SendKey {
                    locator,
                    symbol: symbol.to_string(),
                }],
                None => {
                    debug!(key = ?action.key_name, "key is not replayable, skipping");
                    Vec::new()
                }
            }
        }
        ActionKind::Unknown => {
            debug!("unknown action kind, skipping");
            Vec::new()
        }
    }
}

/// Translate a recorded action into Ruby source lines.
///
/// Clicks and key presses give one line, typing gives two (`clear` then
/// `send_keys`). Anything untranslatable gives none.
pub fn translate(action: &RecordedAction) -> Vec<SourceLine> {
    commands_for(action).iter().map(Command::to_line).collect()
}
