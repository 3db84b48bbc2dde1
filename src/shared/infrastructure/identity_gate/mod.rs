// Port for resolving a presented credential to a user identity.
//
// Purpose
// - Keep credential verification outside the domain core; services only ever
//   see a resolved user id.
//
// Responsibilities
// - Describe the contract: a bearer token either resolves to a profile or
//   fails with an authentication error.
//
// Boundaries
// - No token parsing or hashing here. Adapters own the mechanics.

pub mod static_tokens;

use async_trait::async_trait;
use serde::Serialize;

use crate::shared::core::errors::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountProfile {
    pub user_id: String,
    pub name: String,
    pub email: String,
}

#[async_trait]
pub trait IdentityGate: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<AccountProfile, DomainError>;
}
