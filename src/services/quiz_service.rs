use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Quiz, QuizUpdate},
    repositories::{QuestionRepository, QuizRepository},
    services::validation_service::ValidationService,
};

pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl QuizService {
    pub fn new(quizzes: Arc<dyn QuizRepository>, questions: Arc<dyn QuestionRepository>) -> Self {
        Self { quizzes, questions }
    }

    pub async fn create_quiz(&self, title: Option<&str>) -> AppResult<Quiz> {
        let title = ValidationService::normalize_title(title)?;
        let quiz = self.quizzes.create(Quiz::new(&title)).await?;

        log::info!("Created quiz {} ({})", quiz.id, quiz.title);
        Ok(quiz)
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        self.quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::QuizNotFound(id.to_string()))
    }

    pub async fn list_quizzes(&self) -> AppResult<Vec<Quiz>> {
        self.quizzes.list().await
    }

    /// A blank or absent title leaves the quiz unchanged.
    pub async fn update_quiz(&self, id: &str, title: Option<&str>) -> AppResult<Quiz> {
        let update = QuizUpdate {
            title: title
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        };

        self.quizzes
            .update(id, update)
            .await?
            .ok_or_else(|| AppError::QuizNotFound(id.to_string()))
    }

    /// Removes the quiz's questions first and the quiz last, so a failed
    /// cascade leaves the quiz addressable and the delete can be retried.
    pub async fn delete_quiz(&self, id: &str) -> AppResult<Quiz> {
        self.get_quiz(id).await?;

        let removed = self.questions.delete_all_by_quiz(id).await?;
        let quiz = self
            .quizzes
            .delete(id)
            .await?
            .ok_or_else(|| AppError::QuizNotFound(id.to_string()))?;

        log::info!("Deleted quiz {} and {} question(s)", id, removed);
        Ok(quiz)
    }
}
