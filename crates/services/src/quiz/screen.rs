use quiz_core::share::{asset_path, headline};
use quiz_core::{Answer, Category, SharePayload, ShareSettings};

use super::session::QuizOutcome;

/// What the presentation layer renders next.
///
/// Presentation-agnostic: the UI decides layout and wording around these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizScreen<C> {
    Question(QuestionScreen<C>),
    Result(ResultScreen<C>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionScreen<C> {
    /// Zero-based position of the question in the bank.
    pub index: usize,
    pub total: usize,
    pub prompt: String,
    /// Answers in display order, freshly shuffled for this screen.
    pub options: Vec<Answer<C>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultScreen<C> {
    pub outcome: QuizOutcome<C>,
    pub headline: String,
    pub image_path: String,
    pub share: SharePayload,
}

impl<C: Category> ResultScreen<C> {
    #[must_use]
    pub fn new(outcome: QuizOutcome<C>, share: &ShareSettings) -> Self {
        let category = outcome.category;
        Self {
            headline: headline(category),
            image_path: asset_path(category),
            share: share.payload(category),
            outcome,
        }
    }
}
