/// DOM `KeyboardEvent.key` names the recorder understands, paired with the
/// Selenium Ruby key symbol they are replayed with.
///
/// Keys missing from this table are not recorded.
pub const KEY_SYMBOLS: &[(&str, &str)] = &[
    ("Enter", "enter"),
    ("Tab", "tab"),
    (" ", "space"),
    ("Space", "space"),
    ("Backspace", "backspace"),
    ("Delete", "delete"),
    ("Escape", "escape"),
    ("ArrowUp", "arrow_up"),
    ("ArrowDown", "arrow_down"),
    ("ArrowLeft", "arrow_left"),
    ("ArrowRight", "arrow_right"),
    ("Home", "home"),
    ("End", "end"),
    ("PageUp", "page_up"),
    ("PageDown", "page_down"),
    ("F1", "f1"),
    ("F2", "f2"),
    ("F3", "f3"),
    ("F4", "f4"),
    ("F5", "f5"),
    ("F6", "f6"),
    ("F7", "f7"),
    ("F8", "f8"),
    ("F9", "f9"),
    ("F10", "f10"),
    ("F11", "f11"),
    ("F12", "f12"),
];

/// Look up the Selenium symbol for a physical key name.
pub fn key_symbol(key_name: &str) -> Option<&'static str> {
    KEY_SYMBOLS
        .iter()
        .find(|(name, _)| *name == key_name)
        .map(|(_, symbol)| *symbol)
}
