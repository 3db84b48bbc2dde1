use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use chrono::Local;
use serde::Deserialize;

use crate::modules::stats::engine::summarize;
use crate::modules::stats::range::{DateRange, RangePreset, resolve_preset};
use crate::shared::core::errors::DomainError;
use crate::shell::auth::AuthUser;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct StatsParams {
    pub range: Option<RangePreset>,
    pub from: Option<i64>,
    pub to: Option<i64>,
}

pub async fn summary(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(params): Query<StatsParams>,
) -> Result<Response, ApiError> {
    let preset = params.range.unwrap_or(RangePreset::Week);
    let range = match resolve_preset(preset, Local::now().date_naive()) {
        Some(range) => range,
        None => custom_range(&params)?,
    };

    let tasks = state.tasks.list(&user.user_id).await?;
    let entries = state.entries.list(&user.user_id).await?;
    Ok(Json(summarize(range, &tasks, &entries)).into_response())
}

fn custom_range(params: &StatsParams) -> Result<DateRange, DomainError> {
    let (Some(from), Some(to)) = (params.from, params.to) else {
        return Err(DomainError::validation(
            "custom range requires from and to",
        ));
    };
    if from > to {
        return Err(DomainError::validation("from must not exceed to"));
    }
    Ok(DateRange::custom(from, to))
}
