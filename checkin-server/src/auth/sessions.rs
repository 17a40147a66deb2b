//! Session token verification.
//!
//! Credential checking and session issuance belong to an external
//! identity system; this server only needs to resolve a bearer token to
//! a user id. [`SessionVerifier`] is that seam. [`MemorySessions`] is an
//! in-process implementation for development and tests.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use tokio::sync::RwLock;

use crate::domain::UserId;

/// Resolves a bearer token to the user it belongs to.
pub trait SessionVerifier {
    /// Returns the session's user, or `None` for unknown/expired tokens.
    fn verify(&self, token: &str) -> impl Future<Output = Option<UserId>> + Send;
}

/// In-memory session store.
///
/// Tokens are opaque URL-safe strings; they carry no authenticated
/// claims, so everything rides on the token being unguessable within the
/// store's lifetime. Real deployments plug an external session service
/// into [`SessionVerifier`] instead.
#[derive(Clone, Default)]
pub struct MemorySessions {
    tokens: Arc<RwLock<HashMap<String, UserId>>>,
    counter: Arc<AtomicU64>,
}

impl MemorySessions {
    /// Create an empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new token for a user.
    pub async fn issue(&self, user: &UserId) -> String {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let serial = self.counter.fetch_add(1, Ordering::Relaxed);

        let token = URL_SAFE_NO_PAD.encode(format!("{}:{}:{}", user, nanos, serial));

        let mut tokens = self.tokens.write().await;
        tokens.insert(token.clone(), user.clone());
        token
    }

    /// Revoke a token. Returns whether it existed.
    pub async fn revoke(&self, token: &str) -> bool {
        let mut tokens = self.tokens.write().await;
        tokens.remove(token).is_some()
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    /// Whether the store has no live sessions.
    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

impl SessionVerifier for MemorySessions {
    async fn verify(&self, token: &str) -> Option<UserId> {
        let tokens = self.tokens.read().await;
        tokens.get(token).cloned()
    }
}
