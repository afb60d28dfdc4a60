//! Session token store.
//!
//! Opaque bearer tokens mapping to a customer ID with a fixed TTL.
//! Expired entries are dropped lazily on resolve.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use tienda_core::CustomerId;

#[derive(Debug, Clone, Copy)]
struct SessionRecord {
    customer_id: CustomerId,
    issued_at: DateTime<Utc>,
}

/// Store for issued session tokens.
#[derive(Debug)]
pub struct SessionStore {
    ttl: chrono::Duration,
    inner: RwLock<HashMap<String, SessionRecord>>,
}

impl SessionStore {
    /// Create a store issuing tokens with the given lifetime.
    #[must_use]
    pub fn new(ttl: chrono::Duration) -> Self {
        Self {
            ttl,
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Issue a fresh token for a customer.
    pub async fn issue(&self, customer_id: CustomerId) -> String {
        let token = Uuid::new_v4().to_string();
        self.inner.write().await.insert(
            token.clone(),
            SessionRecord {
                customer_id,
                issued_at: Utc::now(),
            },
        );
        token
    }

    /// Resolve a token to its customer, dropping it if expired.
    pub async fn resolve(&self, token: &str) -> Option<CustomerId> {
        let mut inner = self.inner.write().await;
        let record = *inner.get(token)?;

        if Utc::now() - record.issued_at > self.ttl {
            inner.remove(token);
            return None;
        }

        Some(record.customer_id)
    }

    /// Revoke a token (logout). Returns `true` if it existed.
    pub async fn revoke(&self, token: &str) -> bool {
        self.inner.write().await.remove(token).is_some()
    }
}
