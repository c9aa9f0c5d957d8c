pub mod action;
pub mod command;
pub mod converter;
pub mod ruby;

pub use action::{ActionKind, RecordedAction};
pub use command::{Command, Locator};
pub use converter::{commands_for, translate};
