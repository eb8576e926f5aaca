use actix_web::web;

use crate::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .route("/health", web::get().to(health_check))
        // User routes
        .service(
            web::scope("/users")
                // List all users
                .route("", web::get().to(handlers::get_all_users))
                // Create a new user
                .route("", web::post().to(handlers::create_user))
                // Get specific user by ID
                .route("/{id}", web::get().to(handlers::get_user))
                // Update user fields
                .route("/{id}", web::put().to(handlers::update_user))
                // Delete user
                .route("/{id}", web::delete().to(handlers::delete_user)),
        );
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = crate::models::HealthResponse)
    )
)]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(serde_json::json!({
        "status": "OK",
        "message": "Server is running"
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};

    use super::*;

    #[actix_web::test]
    async fn test_health_check_returns_200() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "OK");
    }
}
