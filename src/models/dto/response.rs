use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: &str, data: T) -> Self {
        ApiResponse {
            message: message.to_string(),
            data,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: usize,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_response_serializes_message_and_data() {
        let response = ApiResponse::new("Quiz deleted successfully", ScoreResult { score: 1, total: 2 });
        let json = serde_json::to_value(&response).expect("response should serialize");

        assert_eq!(json["message"], "Quiz deleted successfully");
        assert_eq!(json["data"]["score"], 1);
        assert_eq!(json["data"]["total"], 2);
    }
}
