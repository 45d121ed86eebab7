#[cfg(test)]
pub mod fixtures {
    use crate::models::{
        domain::{Question, QuestionOption},
        dto::request::{OptionCandidate, QuestionCandidate},
    };

    /// A valid candidate with one correct and one wrong option.
    pub fn candidate(text: &str) -> QuestionCandidate {
        QuestionCandidate::new(
            text,
            vec![
                OptionCandidate::new("right", true),
                OptionCandidate::new("wrong", false),
            ],
        )
    }

    /// A stored question whose second option is the correct one.
    pub fn sample_question(quiz_id: &str, text: &str) -> Question {
        Question::new(
            quiz_id,
            text,
            vec![
                QuestionOption::new("wrong", false),
                QuestionOption::new("right", true),
                QuestionOption::new("also wrong", false),
            ],
        )
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_candidate_has_two_options() {
        let c = candidate("Q");
        assert_eq!(c.text.as_deref(), Some("Q"));
        assert_eq!(c.options.map(|o| o.len()), Some(2));
    }

    #[test]
    fn test_fixture_sample_question_has_one_correct_option() {
        let q = sample_question("quiz-1", "Q");
        assert_eq!(q.quiz_id, "quiz-1");
        assert_eq!(q.options.iter().filter(|o| o.is_correct).count(), 1);
    }
}
