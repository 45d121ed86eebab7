pub mod health_handler;
pub mod question_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::errors::{AppError, ValidationError};

pub use health_handler::{health_check, health_check_ready};
pub use question_handler::{
    add_question, add_questions, delete_question, list_questions, update_question,
};
pub use quiz_handler::{create_quiz, delete_quiz, list_quizzes, submit_quiz, update_quiz};

/// Registers every route plus a JSON extractor config that reports bad
/// bodies in the same error shape as the rest of the API.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        AppError::from(ValidationError::MalformedBody(err.to_string())).into()
    });

    cfg.app_data(json_config)
        .service(health_check)
        .service(health_check_ready)
        .service(create_quiz)
        .service(list_quizzes)
        .service(add_questions)
        .service(add_question)
        .service(list_questions)
        .service(submit_quiz)
        .service(update_quiz)
        .service(delete_quiz)
        .service(update_question)
        .service(delete_question);
}
