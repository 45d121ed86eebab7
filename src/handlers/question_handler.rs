use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        quiz_dto::QuestionDto,
        request::{AddQuestionsRequest, QuestionCandidate, UpdateQuestionRequest},
    },
    services::http_helpers::{created, success, success_json},
};

#[post("/api/quizzes/{quiz_id}/questions")]
pub async fn add_question(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    request: web::Json<QuestionCandidate>,
) -> Result<HttpResponse, AppError> {
    let question = state
        .question_service
        .add_question(&quiz_id, &request)
        .await?;
    Ok(created("Question added successfully", QuestionDto::from(question)))
}

#[post("/api/quizzes/{quiz_id}/questions/multiple")]
pub async fn add_questions(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    request: web::Json<AddQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    let questions: Vec<QuestionDto> = state
        .question_service
        .add_questions(&quiz_id, &request.questions)
        .await?
        .into_iter()
        .map(QuestionDto::from)
        .collect();
    Ok(created("Questions added successfully", questions))
}

#[get("/api/quizzes/{quiz_id}/questions")]
pub async fn list_questions(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let questions = state
        .question_service
        .list_questions_for_quiz(&quiz_id)
        .await?;
    Ok(success_json(questions))
}

// The quiz segment mirrors the public route shape; questions are addressed
// by their own id.
#[put("/api/quizzes/{quiz_id}/{question_id}")]
pub async fn update_question(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    request: web::Json<UpdateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let (_quiz_id, question_id) = path.into_inner();
    let question = state
        .question_service
        .update_question(&question_id, &request)
        .await?;
    Ok(success("Question updated successfully", QuestionDto::from(question)))
}

#[delete("/api/quizzes/{quiz_id}/{question_id}")]
pub async fn delete_question(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (_quiz_id, question_id) = path.into_inner();
    let question = state.question_service.delete_question(&question_id).await?;
    Ok(success("Question deleted successfully", QuestionDto::from(question)))
}
