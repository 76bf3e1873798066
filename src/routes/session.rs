use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::Session;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// User id; generated when omitted
    pub user_id: Option<String>,
    /// Display name
    pub name: String,
}

/// Start a session for a user
#[utoipa::path(
    post,
    path = "/session",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session started", body = Session),
        (status = 400, description = "Empty display name")
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Session>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "display name must not be empty".to_string(),
        ));
    }
    let session = Session {
        user_id: request
            .user_id
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
        name: request.name,
    };
    state.sessions.login(session.clone());
    Ok(Json(session))
}

/// Fetch the current session
#[utoipa::path(
    get,
    path = "/session",
    responses(
        (status = 200, description = "Current session", body = Session),
        (status = 404, description = "Nobody is signed in")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn current_session(State(state): State<AppState>) -> Result<Json<Session>, AppError> {
    state
        .sessions
        .current()
        .map(Json)
        .ok_or(AppError::NoActiveSession)
}

/// End the current session
#[utoipa::path(
    delete,
    path = "/session",
    responses(
        (status = 204, description = "Session cleared; idempotent")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    state.sessions.logout();
    StatusCode::NO_CONTENT
}
