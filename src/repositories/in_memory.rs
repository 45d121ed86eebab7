use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult, ValidationError},
    models::domain::{Question, QuestionUpdate, Quiz, QuizUpdate},
    repositories::{QuestionRepository, QuizRepository},
};

/// Process-local quiz store. Insertion order is the listing order.
#[derive(Clone, Default)]
pub struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<Vec<Quiz>>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.iter().any(|q| q.id == quiz.id) {
            return Err(AppError::StorageUnavailable(format!(
                "Quiz with id '{}' already exists",
                quiz.id
            )));
        }

        quizzes.push(quiz.clone());
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.iter().find(|q| q.id == id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.clone())
    }

    async fn update(&self, id: &str, update: QuizUpdate) -> AppResult<Option<Quiz>> {
        let mut quizzes = self.quizzes.write().await;
        let Some(slot) = quizzes.iter_mut().find(|q| q.id == id) else {
            return Ok(None);
        };

        *slot = update.apply(slot);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: &str) -> AppResult<Option<Quiz>> {
        let mut quizzes = self.quizzes.write().await;
        let position = quizzes.iter().position(|q| q.id == id);
        Ok(position.map(|idx| quizzes.remove(idx)))
    }
}

/// Process-local question store enforcing the same `(quiz_id, text)`
/// uniqueness as the MongoDB index.
#[derive(Clone, Default)]
pub struct InMemoryQuestionRepository {
    questions: Arc<RwLock<Vec<Question>>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn text_taken(questions: &[Question], quiz_id: &str, text: &str, except_id: Option<&str>) -> bool {
    questions
        .iter()
        .any(|q| q.quiz_id == quiz_id && q.text == text && Some(q.id.as_str()) != except_id)
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn create(&self, question: Question) -> AppResult<Question> {
        let mut questions = self.questions.write().await;
        if text_taken(&questions, &question.quiz_id, &question.text, None) {
            return Err(ValidationError::DuplicateQuestion.into());
        }

        questions.push(question.clone());
        Ok(question)
    }

    async fn create_many(&self, batch: Vec<Question>) -> AppResult<Vec<Question>> {
        let mut questions = self.questions.write().await;

        for (idx, candidate) in batch.iter().enumerate() {
            let clashes_with_batch = batch[..idx]
                .iter()
                .any(|q| q.quiz_id == candidate.quiz_id && q.text == candidate.text);
            if clashes_with_batch
                || text_taken(&questions, &candidate.quiz_id, &candidate.text, None)
            {
                return Err(ValidationError::DuplicateQuestion.into());
            }
        }

        questions.extend(batch.iter().cloned());
        Ok(batch)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.iter().find(|q| q.id == id).cloned())
    }

    async fn find_by_quiz_and_text(&self, quiz_id: &str, text: &str) -> AppResult<Option<Question>> {
        let questions = self.questions.read().await;
        Ok(questions
            .iter()
            .find(|q| q.quiz_id == quiz_id && q.text == text)
            .cloned())
    }

    async fn list_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        Ok(questions
            .iter()
            .filter(|q| q.quiz_id == quiz_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: &str, update: QuestionUpdate) -> AppResult<Option<Question>> {
        let mut questions = self.questions.write().await;
        let Some(idx) = questions.iter().position(|q| q.id == id) else {
            return Ok(None);
        };

        if let Some(text) = &update.text {
            if text_taken(&questions, &questions[idx].quiz_id, text, Some(id)) {
                return Err(ValidationError::DuplicateQuestion.into());
            }
        }

        let updated = update.apply(&questions[idx], Utc::now());
        questions[idx] = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: &str) -> AppResult<Option<Question>> {
        let mut questions = self.questions.write().await;
        let position = questions.iter().position(|q| q.id == id);
        Ok(position.map(|idx| questions.remove(idx)))
    }

    async fn delete_all_by_quiz(&self, quiz_id: &str) -> AppResult<u64> {
        let mut questions = self.questions.write().await;
        let before = questions.len();
        questions.retain(|q| q.quiz_id != quiz_id);
        Ok((before - questions.len()) as u64)
    }
}
