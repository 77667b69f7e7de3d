mod bank;
mod category;
mod question;

pub use bank::{BankError, QuestionBank};
pub use category::{Animal, Category, CategoryError};
pub use question::{Answer, Question, QuestionError};
