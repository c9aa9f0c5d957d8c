use tracing::{debug, info};

use crate::line::SourceLine;
use crate::parse::{parse, Parsed};
use crate::translate::{translate, Command, RecordedAction};

/// Notified whenever steps are appended to a recording.
pub trait StepObserver {
    /// `first_index` is the position of `lines[0]` in the test's step list.
    fn steps_appended(&self, test: &str, first_index: usize, lines: &[SourceLine]);
}

impl<F> StepObserver for F
where
    F: Fn(&str, usize, &[SourceLine]),
{
    fn steps_appended(&self, test: &str, first_index: usize, lines: &[SourceLine]) {
        self(test, first_index, lines)
    }
}

/// The step list of the test currently being recorded.
///
/// Owns the side effect the translator leaves to its caller: produced lines
/// are appended in order and observers are told about each append.
pub struct Recording {
    test: String,
    steps: Vec<SourceLine>,
    observers: Vec<Box<dyn StepObserver>>,
}

impl Recording {
    pub fn new(test: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            steps: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Continue recording into an existing step list.
    pub fn with_steps(test: impl Into<String>, steps: Vec<SourceLine>) -> Self {
        Self {
            steps,
            ..Self::new(test)
        }
    }

    pub fn subscribe(&mut self, observer: impl StepObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Translate `action` and append its lines. Returns the appended lines,
    /// empty when the action produced nothing.
    pub fn record(&mut self, action: &RecordedAction) -> &[SourceLine] {
        let lines = translate(action);
        self.append(lines)
    }

    /// Append a hand-built step.
    pub fn insert_command(&mut self, command: &Command) -> &[SourceLine] {
        self.append(vec![command.to_line()])
    }

    fn append(&mut self, lines: Vec<SourceLine>) -> &[SourceLine] {
        let first_index = self.steps.len();
        if lines.is_empty() {
            return &self.steps[first_index..];
        }

        debug!(test = %self.test, count = lines.len(), "appending steps");
        self.steps.extend(lines);

        let appended = &self.steps[first_index..];
        for observer in &self.observers {
            observer.steps_appended(&self.test, first_index, appended);
        }
        appended
    }

    pub fn test(&self) -> &str {
        &self.test
    }

    pub fn steps(&self) -> &[SourceLine] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Describe every step for display, in order.
    pub fn describe(&self) -> Vec<Parsed> {
        self.steps.iter().map(|line| parse(line.as_str())).collect()
    }

    /// Stop recording and hand the steps back.
    pub fn finish(self) -> Vec<SourceLine> {
        info!(test = %self.test, steps = self.steps.len(), "recording finished");
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_record_appends_in_order() {
        let mut recording = Recording::new("login");
        recording.record(&RecordedAction::typed("id", "user", "INPUT", "alice"));
        recording.record(&RecordedAction::click("css", "#login", "BUTTON"));

        let steps = recording.steps();
        assert_eq!(steps.len(), 3);
        assert!(steps[0].as_str().ends_with(".clear"));
        assert!(steps[1].as_str().ends_with(r#".send_keys("alice")"#));
        assert!(steps[2].as_str().contains(".click"));
    }

    #[test]
    fn test_untranslatable_action_appends_nothing() {
        let mut recording = Recording::new("t");
        let appended = recording.record(&RecordedAction::key_press("id", "q", "INPUT", "Shift"));
        assert!(appended.is_empty());
        assert!(recording.is_empty());
    }

    #[test]
    fn test_observers_see_each_append() {
        let seen: Rc<RefCell<Vec<(String, usize, usize)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut recording = Recording::new("search");
        recording.subscribe(move |test: &str, first: usize, lines: &[SourceLine]| {
            sink.borrow_mut().push((test.to_string(), first, lines.len()));
        });

        recording.record(&RecordedAction::typed("id", "q", "INPUT", "rust"));
        recording.record(&RecordedAction::key_press("id", "q", "INPUT", "Nope"));
        recording.record(&RecordedAction::key_press("id", "q", "INPUT", "Enter"));

        assert_eq!(
            *seen.borrow(),
            vec![("search".to_string(), 0, 2), ("search".to_string(), 2, 1)]
        );
    }

    #[test]
    fn test_insert_command_and_describe() {
        let mut recording = Recording::with_steps("t", vec![SourceLine::new("puts 1")]);
        recording.insert_command(&Command::Sleep { seconds: 2.0 });

        let described = recording.describe();
        assert!(described[0].is_raw());
        assert_eq!(described[1].key(), Some("recorder.commandParser.wait"));
        assert_eq!(recording.finish().len(), 2);
    }
}
