//! Credential store: email/password-hash accounts.
//!
//! Owns the authentication credentials and the unique email index. The
//! duplicate check and the insert happen under the same write lock, so
//! concurrent registrations with the same email cannot both commit.

use std::collections::HashMap;

use tokio::sync::RwLock;

use tienda_core::{AccountId, Email};

use super::StoreError;

/// A stored credential record.
#[derive(Debug, Clone)]
pub struct AccountRecord {
    pub id: AccountId,
    pub email: Email,
    pub password_hash: String,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    accounts: HashMap<AccountId, AccountRecord>,
    by_email: HashMap<String, AccountId>,
}

/// Store for authentication accounts.
#[derive(Debug, Default)]
pub struct CredentialStore {
    inner: RwLock<Inner>,
}

impl CredentialStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an account with this email exists.
    pub async fn exists(&self, email: &Email) -> bool {
        self.inner.read().await.by_email.contains_key(email.as_str())
    }

    /// Create an account, enforcing email uniqueness at commit time.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the email is already taken.
    pub async fn create(
        &self,
        email: &Email,
        password_hash: &str,
    ) -> Result<AccountId, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.by_email.contains_key(email.as_str()) {
            return Err(StoreError::Conflict("email already exists".to_owned()));
        }

        inner.next_id += 1;
        let id = AccountId::new(inner.next_id);

        inner.by_email.insert(email.as_str().to_owned(), id);
        inner.accounts.insert(
            id,
            AccountRecord {
                id,
                email: email.clone(),
                password_hash: password_hash.to_owned(),
            },
        );

        Ok(id)
    }

    /// Look up the account ID and password hash for an email.
    ///
    /// Returns `None` if no account with this email exists.
    pub async fn credentials(&self, email: &Email) -> Option<(AccountId, String)> {
        let inner = self.inner.read().await;
        let id = *inner.by_email.get(email.as_str())?;
        let record = inner.accounts.get(&id)?;
        Some((id, record.password_hash.clone()))
    }

    /// Remove an account, freeing its email.
    ///
    /// Used to roll back a registration whose customer write failed.
    /// Returns `true` if the account existed.
    pub async fn remove(&self, id: AccountId) -> bool {
        let mut inner = self.inner.write().await;
        match inner.accounts.remove(&id) {
            Some(record) => {
                inner.by_email.remove(record.email.as_str());
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn email(s: &str) -> Email {
        Email::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_exists() {
        let store = CredentialStore::new();
        assert!(!store.exists(&email("a@x.com")).await);

        store.create(&email("a@x.com"), "hash").await.unwrap();
        assert!(store.exists(&email("a@x.com")).await);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let store = CredentialStore::new();
        store.create(&email("a@x.com"), "hash").await.unwrap();

        let err = store.create(&email("a@x.com"), "hash2").await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_credentials_roundtrip() {
        let store = CredentialStore::new();
        let id = store.create(&email("a@x.com"), "hash").await.unwrap();

        let (found_id, hash) = store.credentials(&email("a@x.com")).await.unwrap();
        assert_eq!(found_id, id);
        assert_eq!(hash, "hash");

        assert!(store.credentials(&email("b@x.com")).await.is_none());
    }

    #[tokio::test]
    async fn test_remove_frees_email() {
        let store = CredentialStore::new();
        let id = store.create(&email("a@x.com"), "hash").await.unwrap();

        assert!(store.remove(id).await);
        assert!(!store.exists(&email("a@x.com")).await);
        assert!(!store.remove(id).await);

        // Email can be registered again after rollback
        store.create(&email("a@x.com"), "hash").await.unwrap();
    }
}
