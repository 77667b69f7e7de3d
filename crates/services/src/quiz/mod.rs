mod progress;
mod screen;
mod session;

// Public API of the quiz subsystem.
pub use crate::error::SessionError;
pub use progress::QuizProgress;
pub use screen::{QuestionScreen, QuizScreen, ResultScreen};
pub use session::{QuizOutcome, QuizSession, QuizState};
