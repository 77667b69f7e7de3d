use thiserror::Error;

use crate::model::{Animal, Answer, Category, Question, QuestionError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank must contain at least one question")]
    Empty,

    #[error("question index {index} is out of range for a bank of {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("question {index} is invalid: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Ordered, immutable set of questions a quiz session walks through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank<C> {
    questions: Vec<Question<C>>,
}

impl<C: Category> QuestionBank<C> {
    /// Build a bank from already validated questions.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Empty` if `questions` is empty.
    pub fn new(questions: Vec<Question<C>>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        Ok(Self { questions })
    }

    /// Returns the question at `index`.
    ///
    /// # Errors
    ///
    /// Returns `BankError::OutOfRange` if `index >= len()`.
    pub fn question_at(&self, index: usize) -> Result<&Question<C>, BankError> {
        self.questions.get(index).ok_or(BankError::OutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question<C>> {
        self.questions.iter()
    }

    /// Distinct categories referenced by any answer, in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<C> {
        let mut seen = Vec::new();
        for answer in self.questions.iter().flat_map(Question::answers) {
            let category = answer.category();
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }
}

//
// ─── REFERENCE DATA ───────────────────────────────────────────────────────────
//

type QuestionRow = (&'static str, [(&'static str, Animal); 5]);

const REFERENCE_QUESTIONS: [QuestionRow; 5] = [
    (
        "What’s your favorite way to spend a weekend?",
        [
            ("Reading a book in a cozy corner", Animal::Cat),
            ("Going for a long hike", Animal::Horse),
            ("Playing with friends at the park", Animal::Dog),
            ("Exploring a new city", Animal::Fox),
            ("Staying home and watching a movie", Animal::Hamster),
        ],
    ),
    (
        "Which of these traits describes you best?",
        [
            ("Independent", Animal::Cat),
            ("Loyal", Animal::Dog),
            ("Curious", Animal::Fox),
            ("Playful", Animal::Hamster),
            ("Strong and energetic", Animal::Horse),
        ],
    ),
    (
        "What’s your ideal pet?",
        [
            ("A quiet cat", Animal::Cat),
            ("A friendly dog", Animal::Dog),
            ("A clever fox", Animal::Fox),
            ("A small hamster", Animal::Hamster),
            ("A majestic horse", Animal::Horse),
        ],
    ),
    (
        "How do you handle stress?",
        [
            ("I retreat to a quiet space", Animal::Cat),
            ("I go for a run", Animal::Horse),
            ("I talk it out with friends", Animal::Dog),
            ("I find a clever solution", Animal::Fox),
            ("I keep busy with small tasks", Animal::Hamster),
        ],
    ),
    (
        "What’s your favorite food?",
        [
            ("Fish and fresh greens", Animal::Cat),
            ("Meat and treats", Animal::Dog),
            ("Berries and nuts", Animal::Fox),
            ("Seeds and grains", Animal::Hamster),
            ("Grass and hay", Animal::Horse),
        ],
    ),
];

impl QuestionBank<Animal> {
    /// The built-in five question "which animal are you" bank.
    #[must_use]
    pub fn reference() -> Self {
        let questions = REFERENCE_QUESTIONS
            .iter()
            .map(|(prompt, answers)| {
                let answers = answers
                    .iter()
                    .map(|(text, animal)| Answer::new(*text, *animal))
                    .collect();
                Question::from_parts(prompt, answers)
            })
            .collect();
        Self { questions }
    }
}
