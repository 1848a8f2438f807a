//! User service routes

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use crate::{
    error::ApiResult,
    models::{UserModificationData, UserRegistrationData, UserResponse},
    state::AppState,
    validation::ValidatedJson,
};

/// Create the router for the user service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/user", post(create_user))
        .route("/user/:id", post(update_user).delete(delete_user))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "user-service"
    }))
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserRegistrationData>,
) -> ApiResult<impl IntoResponse> {
    let user = state.user_service.create_user(payload).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::try_from(user)?)))
}

/// Update name and password of a user
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UserModificationData>,
) -> ApiResult<impl IntoResponse> {
    let user = state.user_service.update_user(id, payload).await?;

    Ok(Json(UserResponse::try_from(user)?))
}

/// Soft-delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    state.user_service.delete_user(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
