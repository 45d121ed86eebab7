use actix_web::HttpResponse;
use serde::Serialize;

use crate::models::dto::response::ApiResponse;

/// Creates a 201 response wrapping `data` in the standard envelope
pub fn created<T: Serialize>(message: &str, data: T) -> HttpResponse {
    HttpResponse::Created().json(ApiResponse::new(message, data))
}

/// Creates a 200 response wrapping `data` in the standard envelope
pub fn success<T: Serialize>(message: &str, data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::new(message, data))
}

/// Creates a bare 200 JSON response
pub fn success_json<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(data)
}
