//! Handlers for user endpoints.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::user::{CreateUserRequest, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users in creation order.
///
/// # Endpoint
///
/// `GET /api/v1/users`
///
/// # Response
///
/// ```json
/// [{ "id": 1, "name": "A", "email": "a@b.com" }]
/// ```
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /api/v1/users`
///
/// # Request Body
///
/// ```json
/// { "name": "A", "email": "a@b.com", "password": "x" }
/// ```
///
/// # Response
///
/// 201 Created with the stored user; the password is never returned.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON for this shape.
/// Field contents are not checked.
pub async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let Json(payload) = payload?;

    let user = state.user_service.create_user(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
