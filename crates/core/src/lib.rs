#![forbid(unsafe_code)]

pub mod error;
pub mod filter;
pub mod model;
pub mod progress;
pub mod quiz;
pub mod time;

pub use error::Error;
pub use filter::ProductFilter;
pub use progress::{ProgressRecord, ProgressStore, Score, ScoreTone, percent};
pub use quiz::{ChoiceFeedback, ChoiceMark, QuizError, QuizSession, QuizState};
pub use time::Clock;
