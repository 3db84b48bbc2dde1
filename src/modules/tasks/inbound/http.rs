use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::modules::tasks::core::model::{TaskDraft, TaskPriority, TaskStatus, UpdateTask};
use crate::shell::auth::AuthUser;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateTaskBody {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub estimated_minutes: Option<i64>,
}

#[derive(Deserialize)]
pub struct UpdateTaskBody {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub estimated_minutes: Option<i64>,
}

pub async fn list(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Response, ApiError> {
    let tasks = state.tasks.list(&user.user_id).await?;
    Ok(Json(tasks).into_response())
}

pub async fn create(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    body: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Ok(Json(body)) = body else {
        return Ok(StatusCode::UNPROCESSABLE_ENTITY.into_response());
    };

    let draft = TaskDraft {
        title: body.title,
        description: body.description,
        status: body.status,
        priority: body.priority,
        estimated_minutes: body.estimated_minutes,
    };
    let task = state.tasks.create(&user.user_id, draft).await?;
    Ok((StatusCode::CREATED, Json(task)).into_response())
}

pub async fn update(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(task_id): Path<String>,
    body: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Ok(Json(body)) = body else {
        return Ok(StatusCode::UNPROCESSABLE_ENTITY.into_response());
    };

    let update = UpdateTask {
        title: body.title,
        description: body.description,
        status: body.status,
        priority: body.priority,
        estimated_minutes: body.estimated_minutes,
    };
    let task = state.tasks.update(&user.user_id, &task_id, update).await?;
    Ok(Json(task).into_response())
}

pub async fn remove(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(task_id): Path<String>,
) -> Result<Response, ApiError> {
    state.tasks.delete(&user.user_id, &task_id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
