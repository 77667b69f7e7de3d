mod quiz_vm;
mod result_vm;

pub use quiz_vm::{AnswerOptionVm, QuestionVm, QuizScreenVm, QuizStep, QuizVm};
pub use result_vm::{ResultVm, TallyRowVm, map_result_screen};
