use std::{collections::HashSet, sync::Arc};

use serde_json::Value;

use crate::{
    errors::{AppError, AppResult, ValidationError},
    models::{
        domain::{Question, QuestionOption},
        dto::request::{OptionCandidate, QuestionCandidate},
    },
    repositories::QuestionRepository,
};

pub const MAX_QUESTION_TEXT_CHARS: usize = 300;
pub const MIN_OPTIONS: usize = 2;

/// Structural rules a question must pass before it is persisted.
///
/// Rules run in a fixed order and the first failure wins:
/// text present, text length, option count, option normalisation,
/// exactly one correct option, and finally uniqueness of the text within
/// the quiz.
pub struct ValidationService {
    questions: Arc<dyn QuestionRepository>,
}

impl ValidationService {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    pub fn normalize_title(title: Option<&str>) -> Result<String, ValidationError> {
        title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .ok_or(ValidationError::EmptyTitle)
    }

    pub fn normalize_text(text: Option<&str>) -> Result<String, ValidationError> {
        let text = text
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ValidationError::MissingText)?;

        if text.chars().count() > MAX_QUESTION_TEXT_CHARS {
            return Err(ValidationError::TextTooLong {
                max: MAX_QUESTION_TEXT_CHARS,
            });
        }

        Ok(text.to_string())
    }

    /// Trims option text, coerces `isCorrect` to a strict boolean and
    /// assigns fresh option ids.
    pub fn normalize_options(
        options: Option<&[OptionCandidate]>,
    ) -> Result<Vec<QuestionOption>, ValidationError> {
        let options = options.unwrap_or_default();
        if options.len() < MIN_OPTIONS {
            return Err(ValidationError::InsufficientOptions);
        }

        let normalized = options
            .iter()
            .map(|candidate| {
                let text = candidate
                    .text
                    .as_deref()
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .ok_or(ValidationError::MissingOptionText)?;
                let is_correct = matches!(candidate.is_correct, Some(Value::Bool(true)));
                Ok(QuestionOption::new(text, is_correct))
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        let correct_count = normalized.iter().filter(|opt| opt.is_correct).count();
        if correct_count != 1 {
            return Err(ValidationError::InvalidCorrectCount);
        }

        Ok(normalized)
    }

    /// Pure part of the rule set: everything except the duplicate check.
    pub fn normalize_question(
        quiz_id: &str,
        candidate: &QuestionCandidate,
    ) -> Result<Question, ValidationError> {
        let text = Self::normalize_text(candidate.text.as_deref())?;
        let options = Self::normalize_options(candidate.options.as_deref())?;
        Ok(Question::new(quiz_id, &text, options))
    }

    /// Fails with `DuplicateQuestion` if another question of the quiz
    /// already uses `text`. `except_id` excludes the question being edited.
    pub async fn ensure_unique_text(
        &self,
        quiz_id: &str,
        text: &str,
        except_id: Option<&str>,
    ) -> AppResult<()> {
        match self.questions.find_by_quiz_and_text(quiz_id, text).await? {
            Some(existing) if Some(existing.id.as_str()) != except_id => {
                Err(ValidationError::DuplicateQuestion.into())
            }
            _ => Ok(()),
        }
    }

    pub async fn validate(&self, quiz_id: &str, candidate: &QuestionCandidate) -> AppResult<Question> {
        let question = Self::normalize_question(quiz_id, candidate)?;
        self.ensure_unique_text(quiz_id, &question.text, None).await?;
        Ok(question)
    }

    /// Validates every item of a batch before anything is written. Two
    /// items sharing the same text count as duplicates of each other.
    pub async fn validate_batch(&self, quiz_id: &str, items: &Value) -> AppResult<Vec<Question>> {
        let items = items
            .as_array()
            .filter(|items| !items.is_empty())
            .ok_or(ValidationError::NotAnArray("questions"))?;

        let mut seen = HashSet::new();
        let mut questions = Vec::with_capacity(items.len());

        for (idx, item) in items.iter().enumerate() {
            let candidate: QuestionCandidate =
                serde_json::from_value(item.clone()).map_err(|err| {
                    AppError::from(ValidationError::MalformedBody(format!(
                        "questions[{}]: {}",
                        idx, err
                    )))
                })?;

            let question = self.validate(quiz_id, &candidate).await?;
            if !seen.insert(question.text.clone()) {
                return Err(ValidationError::DuplicateQuestion.into());
            }
            questions.push(question);
        }

        Ok(questions)
    }
}
