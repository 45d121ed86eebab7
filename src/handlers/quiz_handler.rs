use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        quiz_dto::QuizDto,
        request::{CreateQuizRequest, SubmitQuizRequest, UpdateQuizRequest},
    },
    services::http_helpers::{created, success, success_json},
};

#[post("/api/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .create_quiz(request.title.as_deref())
        .await?;
    Ok(created("Quiz created successfully", QuizDto::from(quiz)))
}

#[get("/api/quizzes")]
pub async fn list_quizzes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let quizzes: Vec<QuizDto> = state
        .quiz_service
        .list_quizzes()
        .await?
        .into_iter()
        .map(QuizDto::from)
        .collect();
    Ok(success("Quizzes fetched successfully", quizzes))
}

#[put("/api/quizzes/{quiz_id}")]
pub async fn update_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    request: web::Json<UpdateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .update_quiz(&quiz_id, request.title.as_deref())
        .await?;
    Ok(success("Quiz updated successfully", QuizDto::from(quiz)))
}

#[delete("/api/quizzes/{quiz_id}")]
pub async fn delete_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.delete_quiz(&quiz_id).await?;
    Ok(success("Quiz deleted successfully", QuizDto::from(quiz)))
}

#[post("/api/quizzes/{quiz_id}/submit")]
pub async fn submit_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    request: web::Json<SubmitQuizRequest>,
) -> Result<HttpResponse, AppError> {
    log::debug!(
        "[{}] Submission received for quiz {}",
        get_request_id(&req).unwrap_or_default(),
        quiz_id
    );

    let result = state
        .scoring_service
        .submit_quiz(&quiz_id, &request.answers)
        .await?;
    Ok(success_json(result))
}
