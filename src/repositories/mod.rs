pub mod in_memory;
pub mod question_repository;
pub mod quiz_repository;

pub use in_memory::{InMemoryQuestionRepository, InMemoryQuizRepository};
pub use question_repository::{MongoQuestionRepository, QuestionRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};

#[cfg(test)]
pub use question_repository::MockQuestionRepository;
#[cfg(test)]
pub use quiz_repository::MockQuizRepository;
