// Runtime configuration read from the environment.
//
// Purpose
// - Keep the binary bootable with zero setup: sensible defaults for the
//   bind address and a seeded development token when nothing is set.

use std::net::SocketAddr;

use crate::shared::infrastructure::identity_gate::AccountProfile;

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub struct StaticToken {
    pub token: String,
    pub profile: AccountProfile,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub tokens: Vec<StaticToken>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let addr = std::env::var("TASKDASH_ADDR")
            .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
            .parse()?;
        let tokens = match std::env::var("TASKDASH_TOKENS") {
            Ok(raw) => parse_tokens(&raw)?,
            Err(_) => default_tokens(),
        };
        Ok(Self { addr, tokens })
    }
}

/// Parses `token:user_id:name:email` entries separated by commas.
fn parse_tokens(raw: &str) -> anyhow::Result<Vec<StaticToken>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let mut fields = entry.splitn(4, ':');
            match (
                fields.next(),
                fields.next(),
                fields.next(),
                fields.next(),
            ) {
                (Some(token), Some(user_id), Some(name), Some(email))
                    if !token.is_empty() && !user_id.is_empty() =>
                {
                    Ok(StaticToken {
                        token: token.to_string(),
                        profile: AccountProfile {
                            user_id: user_id.to_string(),
                            name: name.to_string(),
                            email: email.to_string(),
                        },
                    })
                }
                _ => Err(anyhow::anyhow!(
                    "malformed token entry '{entry}', expected token:user_id:name:email"
                )),
            }
        })
        .collect()
}

fn default_tokens() -> Vec<StaticToken> {
    vec![StaticToken {
        token: "dev-token".to_string(),
        profile: AccountProfile {
            user_id: "user-dev".to_string(),
            name: "Dev User".to_string(),
            email: "dev@example.com".to_string(),
        },
    }]
}
