use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
pub async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let storage = match &state.db {
        Some(db) => match db.health_check().await {
            Ok(()) => Ok("mongodb"),
            Err(err) => {
                log::error!("Readiness check failed: {}", err);
                Err("mongodb")
            }
        },
        None => Ok("memory"),
    };

    let (status, backend, healthy) = match storage {
        Ok(backend) => ("ready", backend, true),
        Err(backend) => ("not_ready", backend, false),
    };

    let mut dependencies = serde_json::Map::new();
    dependencies.insert(
        backend.to_string(),
        serde_json::Value::from(if healthy { "ok" } else { "error" }),
    );

    let response = serde_json::json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": dependencies
    });

    if healthy {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_ready_on_memory_backend() {
        let state = web::Data::new(AppState::in_memory(Config::test_config()));
        let app = test::init_service(App::new().app_data(state).service(health_check_ready)).await;

        let req = test::TestRequest::get().uri("/health/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["dependencies"]["memory"], "ok");
    }
}
