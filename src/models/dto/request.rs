use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuizRequest {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateQuizRequest {
    #[serde(default)]
    pub title: Option<String>,
}

/// A question as submitted by a client, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionCandidate {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<OptionCandidate>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionCandidate {
    #[serde(default)]
    pub text: Option<String>,
    // Kept loose: only a literal JSON `true` marks an option as correct.
    #[serde(default)]
    pub is_correct: Option<Value>,
}

impl OptionCandidate {
    pub fn new(text: &str, is_correct: bool) -> Self {
        OptionCandidate {
            text: Some(text.to_string()),
            is_correct: Some(Value::Bool(is_correct)),
        }
    }
}

impl QuestionCandidate {
    pub fn new(text: &str, options: Vec<OptionCandidate>) -> Self {
        QuestionCandidate {
            text: Some(text.to_string()),
            options: Some(options),
        }
    }
}

/// The `questions` field is left untyped so a non-array can be reported
/// as such instead of as a generic parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddQuestionsRequest {
    #[serde(default)]
    pub questions: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateQuestionRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<OptionCandidate>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitQuizRequest {
    #[serde(default)]
    pub answers: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerInput {
    pub question_id: String,
    pub selected_option_id: String,
}

impl AnswerInput {
    pub fn new(question_id: &str, selected_option_id: &str) -> Self {
        AnswerInput {
            question_id: question_id.to_string(),
            selected_option_id: selected_option_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn option_candidate_keeps_raw_is_correct() {
        let option: OptionCandidate =
            serde_json::from_value(json!({ "text": " 4 ", "isCorrect": "true" }))
                .expect("option should parse");

        assert_eq!(option.text.as_deref(), Some(" 4 "));
        assert_eq!(option.is_correct, Some(json!("true")));
    }

    #[test]
    fn question_candidate_tolerates_missing_fields() {
        let candidate: QuestionCandidate =
            serde_json::from_value(json!({})).expect("empty object should parse");

        assert!(candidate.text.is_none());
        assert!(candidate.options.is_none());
    }

    #[test]
    fn submit_request_defaults_answers_to_null() {
        let request: SubmitQuizRequest =
            serde_json::from_value(json!({})).expect("empty body should parse");
        assert!(request.answers.is_null());
    }

    #[test]
    fn answer_input_uses_camel_case() {
        let answer: AnswerInput = serde_json::from_value(json!({
            "questionId": "q-1",
            "selectedOptionId": "o-2"
        }))
        .expect("answer should parse");

        assert_eq!(answer, AnswerInput::new("q-1", "o-2"));
    }
}
