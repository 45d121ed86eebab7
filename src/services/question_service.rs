use std::sync::Arc;

use serde_json::Value;

use crate::{
    errors::{AppError, AppResult, ValidationError},
    models::{
        domain::{Question, QuestionUpdate},
        dto::{
            quiz_dto::PublicQuestionDto,
            request::{QuestionCandidate, UpdateQuestionRequest},
        },
    },
    repositories::{QuestionRepository, QuizRepository},
    services::validation_service::ValidationService,
};

pub struct QuestionService {
    quizzes: Arc<dyn QuizRepository>,
    questions: Arc<dyn QuestionRepository>,
    validator: ValidationService,
}

impl QuestionService {
    pub fn new(quizzes: Arc<dyn QuizRepository>, questions: Arc<dyn QuestionRepository>) -> Self {
        let validator = ValidationService::new(questions.clone());
        Self {
            quizzes,
            questions,
            validator,
        }
    }

    async fn ensure_quiz_exists(&self, quiz_id: &str) -> AppResult<()> {
        match self.quizzes.find_by_id(quiz_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::QuizNotFound(quiz_id.to_string())),
        }
    }

    pub async fn add_question(
        &self,
        quiz_id: &str,
        candidate: &QuestionCandidate,
    ) -> AppResult<Question> {
        self.ensure_quiz_exists(quiz_id).await?;

        let question = self.validator.validate(quiz_id, candidate).await?;
        let question = self.questions.create(question).await?;

        log::info!("Added question {} to quiz {}", question.id, quiz_id);
        Ok(question)
    }

    /// All-or-nothing: every item is validated before any is written.
    pub async fn add_questions(&self, quiz_id: &str, items: &Value) -> AppResult<Vec<Question>> {
        self.ensure_quiz_exists(quiz_id).await?;

        let questions = self.validator.validate_batch(quiz_id, items).await?;
        let questions = self.questions.create_many(questions).await?;

        log::info!("Added {} question(s) to quiz {}", questions.len(), quiz_id);
        Ok(questions)
    }

    /// Participant view: the answer key is stripped here, before anything
    /// leaves the service layer.
    pub async fn list_questions_for_quiz(&self, quiz_id: &str) -> AppResult<Vec<PublicQuestionDto>> {
        self.ensure_quiz_exists(quiz_id).await?;

        let questions = self.questions.list_by_quiz(quiz_id).await?;
        Ok(questions.into_iter().map(PublicQuestionDto::from).collect())
    }

    pub async fn update_question(
        &self,
        question_id: &str,
        request: &UpdateQuestionRequest,
    ) -> AppResult<Question> {
        let current = self
            .questions
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| AppError::QuestionNotFound(question_id.to_string()))?;

        if request.text.is_none() && request.options.is_none() {
            return Err(ValidationError::NothingToUpdate.into());
        }

        let text = match request.text.as_deref() {
            Some(raw) => {
                let text = ValidationService::normalize_text(Some(raw))?;
                self.validator
                    .ensure_unique_text(&current.quiz_id, &text, Some(current.id.as_str()))
                    .await?;
                Some(text)
            }
            None => None,
        };
        let options = match request.options.as_deref() {
            Some(raw) => Some(ValidationService::normalize_options(Some(raw))?),
            None => None,
        };

        let update = QuestionUpdate { text, options };
        let updated = self
            .questions
            .update(question_id, update)
            .await?
            .ok_or_else(|| AppError::QuestionNotFound(question_id.to_string()))?;

        log::info!("Updated question {}", updated.id);
        Ok(updated)
    }

    pub async fn delete_question(&self, question_id: &str) -> AppResult<Question> {
        let question = self
            .questions
            .delete(question_id)
            .await?
            .ok_or_else(|| AppError::QuestionNotFound(question_id.to_string()))?;

        log::info!("Deleted question {} from quiz {}", question.id, question.quiz_id);
        Ok(question)
    }
}
