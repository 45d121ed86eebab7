use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub title: String, // Trimmed, never empty
    pub created_at: DateTime<Utc>,
}

impl Quiz {
    /// Builds a new quiz from an already-trimmed title.
    pub fn new(title: &str) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Partial update applied to a stored quiz. `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizUpdate {
    pub title: Option<String>,
}

impl QuizUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
    }

    pub fn apply(&self, quiz: &Quiz) -> Quiz {
        Quiz {
            id: quiz.id.clone(),
            title: self.title.clone().unwrap_or_else(|| quiz.title.clone()),
            created_at: quiz.created_at,
        }
    }
}
