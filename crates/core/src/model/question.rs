use thiserror::Error;

use crate::model::Category;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question must offer at least one answer")]
    NoAnswers,
}

//
// ─── ANSWER ───────────────────────────────────────────────────────────────────
//

/// One selectable option, tagged with the category it votes for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer<C> {
    text: String,
    category: C,
}

impl<C: Category> Answer<C> {
    #[must_use]
    pub fn new(text: impl Into<String>, category: C) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn category(&self) -> C {
        self.category
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A prompt with its ordered answers.
///
/// Usually one answer per category, but that is not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question<C> {
    prompt: String,
    answers: Vec<Answer<C>>,
}

impl<C: Category> Question<C> {
    /// Create a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` if the prompt is blank after trimming.
    /// Returns `QuestionError::NoAnswers` if `answers` is empty.
    pub fn new(prompt: impl Into<String>, answers: Vec<Answer<C>>) -> Result<Self, QuestionError> {
        let raw: String = prompt.into();
        let prompt = raw.trim();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if answers.is_empty() {
            return Err(QuestionError::NoAnswers);
        }

        Ok(Self {
            prompt: prompt.to_string(),
            answers,
        })
    }

    /// Skips validation; only for data that is known to be well formed.
    pub(crate) fn from_parts(prompt: &str, answers: Vec<Answer<C>>) -> Self {
        Self {
            prompt: prompt.to_string(),
            answers,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Answers in their defined order. Presentation order is decided elsewhere.
    #[must_use]
    pub fn answers(&self) -> &[Answer<C>] {
        &self.answers
    }
}
