//! Regex sources for every step line shape the translator emits.
//!
//! Sources are plain strings so the parser can compile them once and so the
//! same element shapes can be instantiated for each locator literal form.

/// Localization keys produced by the parser.
pub mod keys {
    pub const VISIT: &str = "recorder.commandParser.visit";
    pub const WAIT_DISPLAYED: &str = "recorder.commandParser.waitDisplayed";
    pub const WAIT_ENABLED: &str = "recorder.commandParser.waitEnabled";
    pub const CLICK: &str = "recorder.commandParser.clickElement";
    pub const CLEAR: &str = "recorder.commandParser.clearElement";
    pub const SEND_KEYS: &str = "recorder.commandParser.sendKeys";
    pub const TYPE_TEXT: &str = "recorder.commandParser.typeText";
    pub const WAIT: &str = "recorder.commandParser.wait";
    pub const EXECUTE_SCRIPT: &str = "recorder.commandParser.executeScript";
    pub const SWITCH_FRAME: &str = "recorder.commandParser.switchFrame";
    pub const SWITCH_DEFAULT: &str = "recorder.commandParser.switchDefault";
    pub const ASSERT_DISPLAYED: &str = "recorder.commandParser.assertDisplayed";
    pub const ASSERT_ENABLED: &str = "recorder.commandParser.assertEnabled";
    pub const ASSERT_TEXT: &str = "recorder.commandParser.assertText";
}

/// Optional trailing human comment, then end of line.
pub const COMMENT: &str = r"(?: # .*)?$";

/// Single-quoted XPath literal. Never contains `'`.
pub const XPATH_SINGLE: &str = r"'(?P<value>[^']*)'";

/// `concat(...)` XPath literal; `value` holds the raw argument list. Greedy,
/// so the literal ends at the last closing parenthesis that still lets the
/// rest of the line match.
pub const XPATH_CONCAT: &str = r#"concat\((?P<value>.*["'])\)"#;

/// A key/regex-source pair, listed in match priority order.
pub type PatternSpec = (&'static str, String);

/// Ruby double-quoted string literal capturing its body into `group`.
pub fn ruby_string(group: &str) -> String {
    format!(r#""(?P<{}>(?:[^"\\]|\\.)*)""#, group)
}

/// `@driver.find_element(:<strategy>, <literal>)` for any strategy symbol,
/// plain (`:css`) or quoted (`:"link text"`).
pub fn element(literal: &str) -> String {
    format!(
        r#"@driver\.find_element\(:(?P<strategy>\w+|"(?:[^"\\]|\\.)*"), {}\)"#,
        literal
    )
}

/// `@driver.find_element(:xpath, <literal>)`.
pub fn xpath_element(literal: &str) -> String {
    format!(r"@driver\.find_element\(:(?P<strategy>xpath), {}\)", literal)
}

/// Shapes that act on an element, instantiated for the element expression `el`.
pub fn element_patterns(el: &str) -> Vec<PatternSpec> {
    vec![
        (
            keys::WAIT_DISPLAYED,
            format!(r"^@wait\.until \{{ {}\.displayed\? \}}{}", el, COMMENT),
        ),
        (
            keys::WAIT_ENABLED,
            format!(r"^@wait\.until \{{ {}\.enabled\? \}}{}", el, COMMENT),
        ),
        (keys::CLICK, format!(r"^{}\.click{}", el, COMMENT)),
        (keys::CLEAR, format!(r"^{}\.clear{}", el, COMMENT)),
        (
            keys::SEND_KEYS,
            format!(r"^{}\.send_keys\(:(?P<key>\w+)\){}", el, COMMENT),
        ),
        (
            keys::TYPE_TEXT,
            format!(r"^{}\.send_keys\({}\){}", el, ruby_string("text"), COMMENT),
        ),
        (
            keys::ASSERT_DISPLAYED,
            format!(r"^expect\({}\.displayed\?\)\.to be\(true\){}", el, COMMENT),
        ),
        (
            keys::ASSERT_ENABLED,
            format!(r"^expect\({}\.enabled\?\)\.to be\(true\){}", el, COMMENT),
        ),
        (
            keys::ASSERT_TEXT,
            format!(
                r"^expect\({}\.text\)\.to eq\({}\){}",
                el,
                ruby_string("text"),
                COMMENT
            ),
        ),
    ]
}

/// Shapes that do not reference an element.
pub fn standalone_patterns() -> Vec<PatternSpec> {
    vec![
        (
            keys::VISIT,
            format!(r"^@?driver\.get\({}\){}", ruby_string("url"), COMMENT),
        ),
        (
            keys::WAIT,
            format!(r"^sleep\((?P<seconds>\d+(?:\.\d+)?)\){}", COMMENT),
        ),
        (
            keys::EXECUTE_SCRIPT,
            format!(
                r"^@driver\.execute_script\({}\){}",
                ruby_string("script"),
                COMMENT
            ),
        ),
        (
            keys::SWITCH_FRAME,
            format!(r"^@driver\.switch_to\.frame\((?P<frame>.+?)\){}", COMMENT),
        ),
        (
            keys::SWITCH_DEFAULT,
            format!(r"^@driver\.switch_to\.default_content{}", COMMENT),
        ),
    ]
}

/// The generic table: plain double-quoted locator literals for any strategy.
pub fn generic_patterns() -> Vec<PatternSpec> {
    let mut patterns = standalone_patterns();
    patterns.extend(element_patterns(&element(&ruby_string("value"))));
    patterns
}

/// The XPath table: single-quoted literals first, then `concat(...)`.
pub fn xpath_patterns() -> Vec<PatternSpec> {
    let mut patterns = element_patterns(&xpath_element(XPATH_SINGLE));
    patterns.extend(element_patterns(&xpath_element(XPATH_CONCAT)));
    patterns
}
