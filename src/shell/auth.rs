// Bearer-token extraction for every authenticated route.
//
// Purpose
// - Resolve the Authorization header through the identity gate before a
//   handler runs; handlers only ever see the resolved profile.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::shared::core::errors::DomainError;
use crate::shared::infrastructure::identity_gate::AccountProfile;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

pub struct AuthUser(pub AccountProfile);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(DomainError::Authentication)?;
        let profile = state.identity.resolve(token).await?;
        Ok(AuthUser(profile))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
