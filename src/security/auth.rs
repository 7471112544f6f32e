// AUTHENTICATION: API key -> user identity
//
// Keys are configured up front (API_KEYS) and never change at runtime, so the
// lookup table is read-only and shared between requests without locking.

use std::collections::HashMap;

use axum::http::HeaderMap;
use serde::Serialize;
use tracing::debug;

/// Identity of the authenticated requester, inserted into request extensions
/// by [`super::middleware::require_user`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestUser {
    pub id: String,
}

#[derive(Debug, Clone, Default)]
pub struct ApiKeyAuth {
    keys: HashMap<String, String>,
}

impl ApiKeyAuth {
    pub fn new(keys: HashMap<String, String>) -> Self {
        Self { keys }
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub fn authenticate(&self, api_key: &str) -> Option<RequestUser> {
        let user = self.keys.get(api_key).map(|id| RequestUser { id: id.clone() });
        if user.is_none() {
            debug!("Rejected unknown API key");
        }
        user
    }

    /// Resolve the requester from `Authorization: Bearer <key>` or `X-API-Key`.
    pub fn authenticate_headers(&self, headers: &HeaderMap) -> Option<RequestUser> {
        extract_api_key(headers).and_then(|key| self.authenticate(&key))
    }
}

pub fn extract_api_key(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|v| v.trim().to_string())
        .or_else(|| {
            headers
                .get("x-api-key")
                .and_then(|v| v.to_str().ok())
                .map(|v| v.trim().to_string())
        })
        .filter(|key| !key.is_empty())
}
