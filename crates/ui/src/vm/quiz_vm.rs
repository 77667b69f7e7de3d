use std::sync::Arc;

use quiz_core::{Animal, QuestionBank, ShareSettings};
use services::{QuizScreen, QuizSession, QuizState, SessionError, Shuffler};

use crate::views::ViewError;
use crate::vm::result_vm::{ResultVm, map_result_screen};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOptionVm {
    pub text: String,
    pub category: Animal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub prompt: String,
    pub progress_label: String,
    pub options: Vec<AnswerOptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreenVm {
    Question(QuestionVm),
    Result(ResultVm),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizStep {
    Continue,
    Completed,
}

fn map_session_error(err: &SessionError) -> ViewError {
    match err {
        SessionError::Completed | SessionError::InProgress => ViewError::InvalidState,
        _ => ViewError::Unknown,
    }
}

pub struct QuizVm {
    session: QuizSession<Animal>,
    share: ShareSettings,
}

impl QuizVm {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank<Animal>>, share: ShareSettings) -> Self {
        Self {
            session: QuizSession::new(bank),
            share,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    /// Build the screen to draw. Options come back in a new order on every call.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the session cannot be presented.
    pub fn screen(&self, shuffler: &mut Shuffler) -> Result<QuizScreenVm, ViewError> {
        let screen = self.session.present(shuffler, &self.share).map_err(|err| {
            tracing::error!(error = %err, "failed to present quiz screen");
            map_session_error(&err)
        })?;

        Ok(match screen {
            QuizScreen::Question(question) => QuizScreenVm::Question(QuestionVm {
                progress_label: format!("Question {} of {}", question.index + 1, question.total),
                options: question
                    .options
                    .iter()
                    .map(|answer| AnswerOptionVm {
                        text: answer.text().to_string(),
                        category: answer.category(),
                    })
                    .collect(),
                prompt: question.prompt,
            }),
            QuizScreen::Result(result) => QuizScreenVm::Result(map_result_screen(&result)),
        })
    }

    /// # Errors
    ///
    /// Returns `ViewError::InvalidState` when the quiz is already completed.
    pub fn answer(&mut self, category: Animal) -> Result<QuizStep, ViewError> {
        match self.session.submit_answer(category) {
            Ok(QuizState::Completed) => Ok(QuizStep::Completed),
            Ok(QuizState::InProgress { .. }) => Ok(QuizStep::Continue),
            Err(err) => {
                tracing::warn!(error = %err, "answer rejected");
                Err(map_session_error(&err))
            }
        }
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::TallyRowVm;
    use quiz_core::{ShareIntent, SiteUrl};

    fn build_vm() -> QuizVm {
        QuizVm::new(
            Arc::new(QuestionBank::reference()),
            ShareSettings::new(
                SiteUrl::parse("https://quiz.example.com").unwrap(),
                ShareIntent::parse("https://warpcast.com/~/compose").unwrap(),
            ),
        )
    }

    #[test]
    fn first_screen_is_question_one_of_five() {
        let vm = build_vm();
        let QuizScreenVm::Question(question) = vm.screen(&mut Shuffler::seeded(4)).unwrap() else {
            panic!("expected question");
        };
        assert_eq!(question.progress_label, "Question 1 of 5");
        assert_eq!(question.options.len(), 5);
    }

    #[test]
    fn answering_every_question_reaches_the_result() {
        let mut vm = build_vm();
        let mut shuffler = Shuffler::seeded(4);
        let plan = [Animal::Fox, Animal::Fox, Animal::Dog, Animal::Horse, Animal::Fox];

        for (i, category) in plan.into_iter().enumerate() {
            let step = vm.answer(category).unwrap();
            let expected = if i + 1 == plan.len() {
                QuizStep::Completed
            } else {
                QuizStep::Continue
            };
            assert_eq!(step, expected);
        }

        let QuizScreenVm::Result(result) = vm.screen(&mut shuffler).unwrap() else {
            panic!("expected result");
        };
        assert_eq!(result.category, Animal::Fox);
        assert_eq!(result.headline, "You are a fox!");
        assert_eq!(result.image_src, "/fox.png");
        assert_eq!(result.image_alt, "fox");
        assert_eq!(
            result.breakdown,
            vec![
                TallyRowVm { label: "fox".to_string(), count: 3 },
                TallyRowVm { label: "dog".to_string(), count: 1 },
                TallyRowVm { label: "horse".to_string(), count: 1 },
            ]
        );
        assert!(result.share_link.contains("text=I+am+a+fox"));
    }

    #[test]
    fn answer_after_completion_is_invalid_until_reset() {
        let mut vm = build_vm();
        for _ in 0..5 {
            vm.answer(Animal::Cat).unwrap();
        }
        assert!(vm.is_complete());
        assert_eq!(vm.answer(Animal::Cat), Err(ViewError::InvalidState));

        vm.reset();
        assert!(!vm.is_complete());
        assert_eq!(vm.answer(Animal::Cat), Ok(QuizStep::Continue));
    }
}
