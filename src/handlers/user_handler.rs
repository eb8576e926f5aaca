//! User management handlers for CRUD operations.

use actix_web::{web, HttpResponse};
use log::{debug, info, warn};

use crate::constants::{ERR_INVALID_USER_ID, MSG_USER_CREATED, MSG_USER_DELETED, MSG_USER_UPDATED};
use crate::errors::ApiError;
use crate::models::{ApiResponse, CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::services::UserService;

/// Parse the `id` path segment as a database identifier.
fn parse_user_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse().map_err(|_| {
        warn!("Rejected non-integer user id: {}", raw);
        ApiError::BadRequest(ERR_INVALID_USER_ID.to_string())
    })
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users, ordered by id", body = [UserResponse]),
        (status = 500, description = "Storage failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_all_users(
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, ApiError> {
    let users = user_service.get_all_users().await?;
    let user_responses: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::data(user_responses)))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Malformed request body", body = crate::models::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = user_service.create_user(body.into_inner()).await?;
    let user_response: UserResponse = user.into();

    info!("Successfully created user: {}", user_response.id);
    Ok(HttpResponse::Created().json(ApiResponse::success(MSG_USER_CREATED, user_response)))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Non-integer user ID", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_user_id(&path.into_inner())?;
    debug!("Fetching user with id: {}", id);

    let user = user_service.get_user(id).await?;
    let user_response: UserResponse = user.into();

    info!("Successfully fetched user: {}", id);
    Ok(HttpResponse::Ok().json(ApiResponse::data(user_response)))
}

/// Update a user's fields
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Malformed request body or non-integer user ID", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    body: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_user_id(&path.into_inner())?;

    let user = user_service.update_user(id, body.into_inner()).await?;
    let user_response: UserResponse = user.into();

    info!("Successfully updated user: {}", id);
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_USER_UPDATED, user_response)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 400, description = "Non-integer user ID", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_user_id(&path.into_inner())?;

    user_service.delete_user(id).await?;

    info!("Successfully deleted user: {}", id);
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(MSG_USER_DELETED)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id_accepts_integers() {
        assert_eq!(parse_user_id("42").unwrap(), 42);
        assert_eq!(parse_user_id("1").unwrap(), 1);
    }

    #[test]
    fn test_parse_user_id_rejects_non_integers() {
        assert!(matches!(
            parse_user_id("abc").unwrap_err(),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            parse_user_id("1.5").unwrap_err(),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            parse_user_id("").unwrap_err(),
            ApiError::BadRequest(_)
        ));
    }
}
