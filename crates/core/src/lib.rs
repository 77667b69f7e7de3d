#![forbid(unsafe_code)]

pub mod model;
pub mod scoring;
pub mod share;

pub use model::{
    Animal, Answer, BankError, Category, CategoryError, Question, QuestionBank, QuestionError,
};
pub use scoring::{ScoreError, ScoreTally, score};
pub use share::{ShareError, ShareIntent, SharePayload, ShareSettings, SiteUrl};
