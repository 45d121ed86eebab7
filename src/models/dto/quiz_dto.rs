use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{Question, QuestionOption, Quiz};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDto {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl From<Quiz> for QuizDto {
    fn from(quiz: Quiz) -> Self {
        QuizDto {
            id: quiz.id,
            title: quiz.title,
            created_at: quiz.created_at,
        }
    }
}

/// Authoring view of a question, answer key included.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDto {
    pub id: String,
    pub quiz_id: String,
    pub text: String,
    pub options: Vec<OptionDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionDto {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
}

impl From<QuestionOption> for OptionDto {
    fn from(option: QuestionOption) -> Self {
        OptionDto {
            id: option.id,
            text: option.text,
            is_correct: option.is_correct,
        }
    }
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        QuestionDto {
            id: question.id,
            quiz_id: question.quiz_id,
            text: question.text,
            options: question.options.into_iter().map(OptionDto::from).collect(),
            created_at: question.created_at,
            updated_at: question.updated_at,
        }
    }
}

/// Participant view of a question. There is no correctness
/// field on `PublicOptionDto`, so the answer key cannot be serialized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicQuestionDto {
    pub id: String,
    pub quiz_id: String,
    pub text: String,
    pub options: Vec<PublicOptionDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PublicOptionDto {
    pub id: String,
    pub text: String,
}

impl From<Question> for PublicQuestionDto {
    fn from(question: Question) -> Self {
        PublicQuestionDto {
            id: question.id,
            quiz_id: question.quiz_id,
            text: question.text,
            options: question
                .options
                .into_iter()
                .map(|opt| PublicOptionDto {
                    id: opt.id,
                    text: opt.text,
                })
                .collect(),
            created_at: question.created_at,
            updated_at: question.updated_at,
        }
    }
}
