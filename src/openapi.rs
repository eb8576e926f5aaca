use utoipa::OpenApi;

use crate::models::{
    CreateUserRequest, ErrorResponse, HealthResponse, UpdateUserRequest, UserResponse,
};

/// OpenAPI documentation for the User Service API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "1.0.0",
        description = "A REST API for managing users: create, read, update, and delete."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User management endpoints (CRUD operations)")
    ),
    paths(
        crate::routes::health_check,
        crate::handlers::get_all_users,
        crate::handlers::create_user,
        crate::handlers::get_user,
        crate::handlers::update_user,
        crate::handlers::delete_user,
    ),
    components(schemas(
        CreateUserRequest,
        UpdateUserRequest,
        UserResponse,
        ErrorResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;
