use std::sync::Arc;

use quiz_core::{Animal, QuestionBank, ShareSettings};
use services::Shuffler;

use crate::vm::QuizVm;

pub trait UiApp: Send + Sync {
    fn question_bank(&self) -> Arc<QuestionBank<Animal>>;
    fn share_settings(&self) -> ShareSettings;
    /// Fixed seed for answer shuffling; `None` uses OS entropy.
    fn shuffle_seed(&self) -> Option<u64>;
}

#[derive(Clone)]
pub struct AppContext {
    question_bank: Arc<QuestionBank<Animal>>,
    share_settings: ShareSettings,
    shuffle_seed: Option<u64>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            question_bank: app.question_bank(),
            share_settings: app.share_settings(),
            shuffle_seed: app.shuffle_seed(),
        }
    }

    #[must_use]
    pub fn question_bank(&self) -> Arc<QuestionBank<Animal>> {
        Arc::clone(&self.question_bank)
    }

    #[must_use]
    pub fn share_settings(&self) -> &ShareSettings {
        &self.share_settings
    }

    #[must_use]
    pub fn shuffle_seed(&self) -> Option<u64> {
        self.shuffle_seed
    }

    /// Fresh quiz over the configured bank.
    #[must_use]
    pub fn new_quiz(&self) -> QuizVm {
        QuizVm::new(self.question_bank(), self.share_settings.clone())
    }

    #[must_use]
    pub fn new_shuffler(&self) -> Shuffler {
        Shuffler::from_seed_option(self.shuffle_seed)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
