use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub quiz_id: String,
    pub text: String,
    pub options: Vec<QuestionOption>, // At least two, exactly one correct
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

impl QuestionOption {
    pub fn new(text: &str, is_correct: bool) -> Self {
        QuestionOption {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            is_correct,
        }
    }
}

impl Question {
    pub fn new(quiz_id: &str, text: &str, options: Vec<QuestionOption>) -> Self {
        let now = Utc::now();
        Question {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz_id.to_string(),
            text: text.to_string(),
            options,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn find_option(&self, option_id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|opt| opt.id == option_id)
    }
}

/// Partial update applied to a stored question. Supplied options replace
/// the stored ones wholesale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionUpdate {
    pub text: Option<String>,
    pub options: Option<Vec<QuestionOption>>,
}

impl QuestionUpdate {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.options.is_none()
    }

    pub fn apply(&self, question: &Question, updated_at: DateTime<Utc>) -> Question {
        Question {
            id: question.id.clone(),
            quiz_id: question.quiz_id.clone(),
            text: self.text.clone().unwrap_or_else(|| question.text.clone()),
            options: self
                .options
                .clone()
                .unwrap_or_else(|| question.options.clone()),
            created_at: question.created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> Question {
        Question::new(
            "quiz-1",
            "2+2?",
            vec![
                QuestionOption::new("3", false),
                QuestionOption::new("4", true),
            ],
        )
    }

    #[test]
    fn find_option_matches_by_id() {
        let question = sample_question();
        let correct_id = question.options[1].id.clone();

        assert_eq!(question.find_option(&correct_id).map(|o| o.is_correct), Some(true));
        assert!(question.find_option("no-such-option").is_none());
    }

    #[test]
    fn option_is_correct_defaults_to_false_when_absent() {
        let parsed: QuestionOption =
            serde_json::from_str(r#"{"id":"o1","text":"Paris"}"#).expect("option should parse");
        assert!(!parsed.is_correct);
    }

    #[test]
    fn question_update_replaces_options_and_keeps_identity() {
        let question = sample_question();
        let replacement = vec![
            QuestionOption::new("yes", true),
            QuestionOption::new("no", false),
        ];
        let update = QuestionUpdate {
            text: None,
            options: Some(replacement.clone()),
        };

        let later = question.updated_at + chrono::Duration::seconds(5);
        let updated = update.apply(&question, later);

        assert_eq!(updated.id, question.id);
        assert_eq!(updated.text, "2+2?");
        assert_eq!(updated.options, replacement);
        assert_eq!(updated.updated_at, later);
        assert!(!update.is_empty());
        assert!(QuestionUpdate::default().is_empty());
    }
}
