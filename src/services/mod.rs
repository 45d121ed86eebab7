pub mod http_helpers;
pub mod question_service;
pub mod quiz_service;
pub mod scoring_service;
pub mod validation_service;
