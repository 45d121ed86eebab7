pub mod question;
pub mod quiz;
pub use question::{Question, QuestionOption, QuestionUpdate};
pub use quiz::{Quiz, QuizUpdate};
