pub mod recording;

pub use recording::{Recording, StepObserver};
