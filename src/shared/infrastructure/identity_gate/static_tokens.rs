// In memory implementation of the IdentityGate port.
//
// Purpose
// - Support tests and local development without a real token issuer.
//
// Responsibilities
// - Map opaque bearer tokens to account profiles seeded at startup.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::shared::core::errors::DomainError;
use crate::shared::infrastructure::identity_gate::{AccountProfile, IdentityGate};

#[derive(Default)]
pub struct StaticTokenGate {
    tokens: HashMap<String, AccountProfile>,
}

impl StaticTokenGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: impl Into<String>, profile: AccountProfile) -> Self {
        self.tokens.insert(token.into(), profile);
        self
    }
}

#[async_trait]
impl IdentityGate for StaticTokenGate {
    async fn resolve(&self, token: &str) -> Result<AccountProfile, DomainError> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or(DomainError::Authentication)
    }
}
