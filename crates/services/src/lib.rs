#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod quiz;
pub mod shuffle;

pub use config::{ConfigOverrides, QuizConfig};
pub use error::{CatalogError, ConfigError, SessionError};
pub use quiz::{
    QuestionScreen, QuizOutcome, QuizProgress, QuizScreen, QuizSession, QuizState, ResultScreen,
};
pub use shuffle::{Shuffler, shuffled};
