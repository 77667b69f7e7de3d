use std::fmt;
use std::sync::Arc;

use quiz_core::{Category, Question, QuestionBank, ScoreTally, ShareSettings, score};
use tracing::{debug, info};

use super::progress::QuizProgress;
use super::screen::{QuestionScreen, QuizScreen, ResultScreen};
use crate::error::SessionError;
use crate::shuffle::Shuffler;

//
// ─── STATE ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    InProgress { index: usize },
    Completed,
}

/// Resolved result of a completed quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome<C> {
    pub category: C,
    pub tally: ScoreTally<C>,
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// In-memory run through a question bank.
///
/// Records one category per answered question. `recorded_answers().len()` equals
/// `current_index()` at every point, and both equal the bank length once the
/// quiz is completed.
pub struct QuizSession<C> {
    bank: Arc<QuestionBank<C>>,
    current: usize,
    answers: Vec<C>,
    completed: bool,
}

impl<C: Category> QuizSession<C> {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank<C>>) -> Self {
        let capacity = bank.len();
        Self {
            bank,
            current: 0,
            answers: Vec::with_capacity(capacity),
            completed: false,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank<C> {
        &self.bank
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        if self.completed {
            QuizState::Completed
        } else {
            QuizState::InProgress {
                index: self.current,
            }
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn recorded_answers(&self) -> &[C] {
        &self.answers
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let total = self.bank.len();
        QuizProgress {
            total,
            answered: self.answers.len(),
            remaining: total.saturating_sub(self.answers.len()),
            is_complete: self.completed,
        }
    }

    /// The question waiting for an answer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once every question has been answered.
    pub fn current_question(&self) -> Result<&Question<C>, SessionError> {
        if self.completed {
            return Err(SessionError::Completed);
        }
        Ok(self.bank.question_at(self.current)?)
    }

    /// Record `category` for the current question and advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the quiz has already finished. The
    /// session is left unchanged in that case.
    pub fn submit_answer(&mut self, category: C) -> Result<QuizState, SessionError> {
        self.current_question()?;

        self.answers.push(category);
        self.current += 1;

        if self.current == self.bank.len() {
            self.completed = true;
            info!(answers = self.answers.len(), "quiz completed");
        } else {
            debug!(
                answered = self.answers.len(),
                next = self.current,
                category = category.slug(),
                "answer recorded"
            );
        }

        Ok(self.state())
    }

    /// Start over from the first question with nothing recorded.
    pub fn reset(&mut self) {
        debug!(discarded = self.answers.len(), "quiz reset");
        self.current = 0;
        self.answers.clear();
        self.completed = false;
    }

    /// Score the recorded answers.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InProgress` until the last question is answered.
    pub fn outcome(&self) -> Result<QuizOutcome<C>, SessionError> {
        if !self.completed {
            return Err(SessionError::InProgress);
        }
        let category = score(&self.answers)?;
        Ok(QuizOutcome {
            category,
            tally: ScoreTally::from_answers(&self.answers),
        })
    }

    /// Build what the presentation layer should show next.
    ///
    /// Answer options are reshuffled on every call, so redrawing the same
    /// question reorders them. Do not cache the order per question.
    ///
    /// # Errors
    ///
    /// Propagates bank or scoring failures, which only occur if the session
    /// invariants were broken.
    pub fn present(
        &self,
        shuffler: &mut Shuffler,
        share: &ShareSettings,
    ) -> Result<QuizScreen<C>, SessionError> {
        if self.completed {
            let outcome = self.outcome()?;
            return Ok(QuizScreen::Result(ResultScreen::new(outcome, share)));
        }

        let question = self.bank.question_at(self.current)?;
        Ok(QuizScreen::Question(QuestionScreen {
            index: self.current,
            total: self.bank.len(),
            prompt: question.prompt().to_string(),
            options: shuffler.shuffle(question.answers()),
        }))
    }
}

impl<C: Category> fmt::Debug for QuizSession<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.bank.len())
            .field("current", &self.current)
            .field("answers", &self.answers)
            .field("completed", &self.completed)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
