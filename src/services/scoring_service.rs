use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use serde_json::Value;

use crate::{
    errors::{AppResult, ValidationError},
    models::{
        domain::Question,
        dto::{request::AnswerInput, response::ScoreResult},
    },
    repositories::QuestionRepository,
};

/// Grades submissions against the stored answer keys. Read-only.
pub struct ScoringService {
    questions: Arc<dyn QuestionRepository>,
}

impl ScoringService {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    pub async fn submit_quiz(&self, quiz_id: &str, answers: &Value) -> AppResult<ScoreResult> {
        let entries = answers
            .as_array()
            .ok_or(ValidationError::NotAnArray("answers"))?;
        let answers = Self::parse_answers(entries);

        let questions = self.questions.list_by_quiz(quiz_id).await?;
        let result = Self::grade(&questions, &answers);

        log::info!(
            "Scored submission for quiz {}: {}/{}",
            quiz_id,
            result.score,
            result.total
        );
        Ok(result)
    }

    /// Keeps the entries shaped like `{questionId, selectedOptionId}` and
    /// drops everything else.
    pub fn parse_answers(entries: &[Value]) -> Vec<AnswerInput> {
        entries
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| {
                match serde_json::from_value::<AnswerInput>(entry.clone()) {
                    Ok(answer) => Some(answer),
                    Err(err) => {
                        log::debug!("Skipping malformed answer at index {}: {}", idx, err);
                        None
                    }
                }
            })
            .collect()
    }

    /// `total` is the number of questions in the quiz, not the number of
    /// answers. Only the first answer naming a known question is graded, so
    /// repeating a question id can neither add points nor probe options.
    pub fn grade(questions: &[Question], answers: &[AnswerInput]) -> ScoreResult {
        let by_id: HashMap<&str, &Question> =
            questions.iter().map(|q| (q.id.as_str(), q)).collect();
        let mut graded: HashSet<&str> = HashSet::new();
        let mut score = 0;

        for answer in answers {
            let Some(question) = by_id.get(answer.question_id.as_str()) else {
                continue;
            };
            if !graded.insert(question.id.as_str()) {
                continue;
            }

            let correct = question
                .find_option(&answer.selected_option_id)
                .is_some_and(|opt| opt.is_correct);
            if correct {
                score += 1;
            }
        }

        ScoreResult {
            score,
            total: questions.len(),
        }
    }
}
