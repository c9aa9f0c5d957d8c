use serde::{Deserialize, Serialize};

use super::ruby;
use crate::line::SourceLine;
use crate::xpath;

/// Strategy name whose values are written as XPath literals.
pub const XPATH_STRATEGY: &str = "xpath";

/// How to find an element: a strategy symbol (`id`, `css`, `xpath`, ...) and
/// its raw value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    pub strategy: String,
    pub value: String,
}

impl Locator {
    pub fn new(strategy: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
            value: value.into(),
        }
    }

    pub fn is_xpath(&self) -> bool {
        self.strategy == XPATH_STRATEGY
    }

    /// The value as it appears in generated code.
    pub fn literal(&self) -> String {
        if self.is_xpath() {
            ruby::escape_backslashes(&xpath::escape(&self.value))
        } else {
            ruby::quote(&self.value)
        }
    }

    /// `@driver.find_element(:<strategy>, <literal>)`, with the strategy
    /// quoted (`:"link text"`) when it is not a plain identifier.
    pub fn to_ruby(&self) -> String {
        format!(
            "@driver.find_element({}, {})",
            ruby::symbol(&self.strategy),
            self.literal()
        )
    }
}

/// One test step. Recorded actions translate into these; the IDE also
/// inserts the non-recorded ones (visits, waits, assertions) directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Visit { url: String },
    WaitDisplayed(Locator),
    WaitEnabled(Locator),
    Click { locator: Locator, tag: String },
    Clear(Locator),
    /// `symbol` is a Selenium key symbol such as `enter` or `arrow_up`
    SendKey { locator: Locator, symbol: String },
    Type { locator: Locator, text: String },
    Sleep { seconds: f64 },
    ExecuteScript { script: String },
    /// `frame` is a Ruby expression, emitted verbatim. A blank frame switches
    /// back to the default content.
    SwitchFrame { frame: String },
    SwitchDefault,
    AssertDisplayed(Locator),
    AssertEnabled(Locator),
    AssertText { locator: Locator, text: String },
}

impl Command {
    /// Render the step as a single line of Ruby.
    pub fn to_line(&self) -> SourceLine {
        match self {
            Command::Visit { url } => SourceLine::new(format!("@driver.get({})", ruby::quote(url))),
            Command::WaitDisplayed(locator) => SourceLine::new(format!(
                "@wait.until {{ {}.displayed? }}",
                locator.to_ruby()
            )),
            Command::WaitEnabled(locator) => SourceLine::new(format!(
                "@wait.until {{ {}.enabled? }}",
                locator.to_ruby()
            )),
            Command::Click { locator, tag } => {
                let code = format!("{}.click", locator.to_ruby());
                if tag.is_empty() {
                    SourceLine::new(code)
                } else {
                    SourceLine::with_comment(code, &format!("Clicked <{}>", tag.to_lowercase()))
                }
            }
            Command::Clear(locator) => SourceLine::new(format!("{}.clear", locator.to_ruby())),
            Command::SendKey { locator, symbol } => SourceLine::with_comment(
                format!("{}.send_keys(:{})", locator.to_ruby(), symbol),
                &format!("Pressed {}", symbol),
            ),
            Command::Type { locator, text } => SourceLine::new(format!(
                "{}.send_keys({})",
                locator.to_ruby(),
                ruby::quote(text)
            )),
            Command::Sleep { seconds } => {
                let seconds = if seconds.is_finite() && *seconds > 0.0 {
                    *seconds
                } else {
                    0.0
                };
                SourceLine::new(format!("sleep({})", seconds))
            }
            Command::ExecuteScript { script } => SourceLine::new(format!(
                "@driver.execute_script({})",
                ruby::quote(script)
            )),
            Command::SwitchFrame { frame } if frame.trim().is_empty() => {
                Command::SwitchDefault.to_line()
            }
            Command::SwitchFrame { frame } => {
                SourceLine::new(format!("@driver.switch_to.frame({})", frame))
            }
            Command::SwitchDefault => SourceLine::new("@driver.switch_to.default_content"),
            Command::AssertDisplayed(locator) => SourceLine::new(format!(
                "expect({}.displayed?).to be(true)",
                locator.to_ruby()
            )),
            Command::AssertEnabled(locator) => SourceLine::new(format!(
                "expect({}.enabled?).to be(true)",
                locator.to_ruby()
            )),
            Command::AssertText { locator, text } => SourceLine::new(format!(
                "expect({}.text).to eq({})",
                locator.to_ruby(),
                ruby::quote(text)
            )),
        }
    }
}
