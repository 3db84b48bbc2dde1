use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::shell::auth::AuthUser;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct StartEntryBody {
    pub task_id: String,
}

#[derive(Deserialize)]
pub struct UpdateNotesBody {
    #[serde(default)]
    pub notes: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Response, ApiError> {
    let entries = state.entries.list(&user.user_id).await?;
    Ok(Json(entries).into_response())
}

/// Answers `null` when nothing is being tracked.
pub async fn active(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Response, ApiError> {
    let entry = state.entries.active(&user.user_id).await?;
    Ok(Json(entry).into_response())
}

pub async fn start(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    body: Result<Json<StartEntryBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Ok(Json(body)) = body else {
        return Ok(StatusCode::UNPROCESSABLE_ENTITY.into_response());
    };

    let entry = state.entries.start(&user.user_id, &body.task_id).await?;
    Ok((StatusCode::CREATED, Json(entry)).into_response())
}

pub async fn stop(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(entry_id): Path<String>,
) -> Result<Response, ApiError> {
    let entry = state.entries.stop(&user.user_id, &entry_id).await?;
    Ok(Json(entry).into_response())
}

pub async fn update_notes(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(entry_id): Path<String>,
    body: Result<Json<UpdateNotesBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Ok(Json(body)) = body else {
        return Ok(StatusCode::UNPROCESSABLE_ENTITY.into_response());
    };

    let entry = state
        .entries
        .update_notes(&user.user_id, &entry_id, body.notes)
        .await?;
    Ok(Json(entry).into_response())
}

pub async fn remove(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(entry_id): Path<String>,
) -> Result<Response, ApiError> {
    state.entries.delete(&user.user_id, &entry_id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
