use axum::{
    Json, Router,
    routing::{get, post, put},
};

use crate::modules::stats::inbound::http as stats_http;
use crate::modules::tasks::inbound::http as tasks_http;
use crate::modules::time_entries::inbound::http as entries_http;
use crate::shared::infrastructure::identity_gate::AccountProfile;
use crate::shell::auth::AuthUser;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/users/me", get(me))
        .route("/api/tasks", get(tasks_http::list).post(tasks_http::create))
        .route(
            "/api/tasks/{id}",
            put(tasks_http::update).delete(tasks_http::remove),
        )
        .route("/api/time-entries", get(entries_http::list))
        .route("/api/time-entries/active", get(entries_http::active))
        .route("/api/time-entries/start", post(entries_http::start))
        .route("/api/time-entries/{id}/stop", put(entries_http::stop))
        .route(
            "/api/time-entries/{id}",
            put(entries_http::update_notes).delete(entries_http::remove),
        )
        .route("/api/stats", get(stats_http::summary))
        .with_state(state)
}

async fn me(AuthUser(profile): AuthUser) -> Json<AccountProfile> {
    Json(profile)
}
