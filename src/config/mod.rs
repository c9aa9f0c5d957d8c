pub mod keymap;
pub mod patterns;

pub use keymap::{key_symbol, KEY_SYMBOLS};
pub use patterns::{generic_patterns, xpath_patterns, PatternSpec};
