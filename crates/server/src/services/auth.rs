//! Authentication service.
//!
//! Verifies credentials against the credential store and issues session
//! tokens. Password hashing uses Argon2id.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

use tienda_core::Email;

use crate::models::Customer;
use crate::store::{CredentialStore, CustomerRegistry, SessionStore};

/// Errors that can occur during authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong email or password. Never distinguishes the two.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Password hashing failed.
    #[error("failed to hash password")]
    PasswordHash,
}

/// Service handling login and logout.
pub struct AuthService<'a> {
    accounts: &'a CredentialStore,
    customers: &'a CustomerRegistry,
    sessions: &'a SessionStore,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(
        accounts: &'a CredentialStore,
        customers: &'a CustomerRegistry,
        sessions: &'a SessionStore,
    ) -> Self {
        Self {
            accounts,
            customers,
            sessions,
        }
    }

    /// Login with email and password, issuing a session token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email is unknown,
    /// the password is wrong, or the account has no customer profile.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(Customer, String), AuthError> {
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let (account_id, password_hash) = self
            .accounts
            .credentials(&email)
            .await
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        let customer = self
            .customers
            .get_by_account(account_id)
            .await
            .ok_or(AuthError::InvalidCredentials)?;

        let token = self.sessions.issue(customer.id).await;

        Ok((customer, token))
    }

    /// Revoke a session token. Returns `true` if it existed.
    pub async fn logout(&self, token: &str) -> bool {
        self.sessions.revoke(token).await
    }
}

/// Hash a password using Argon2id.
pub(crate) fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use crate::services::RegistrationService;

    use super::*;

    struct Fixture {
        accounts: CredentialStore,
        customers: CustomerRegistry,
        sessions: SessionStore,
    }

    impl Fixture {
        async fn with_registered_customer() -> Self {
            let fixture = Self {
                accounts: CredentialStore::new(),
                customers: CustomerRegistry::new(),
                sessions: SessionStore::new(chrono::Duration::hours(1)),
            };
            RegistrationService::new(&fixture.accounts, &fixture.customers)
                .register(
                    "a@x.com",
                    "pw123456",
                    "pw123456",
                    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
                )
                .await
                .unwrap();
            fixture
        }

        fn service(&self) -> AuthService<'_> {
            AuthService::new(&self.accounts, &self.customers, &self.sessions)
        }
    }

    #[tokio::test]
    async fn test_login_issues_resolvable_token() {
        let fixture = Fixture::with_registered_customer().await;

        let (customer, token) = fixture.service().login("a@x.com", "pw123456").await.unwrap();
        assert_eq!(
            fixture.sessions.resolve(&token).await,
            Some(customer.id)
        );
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let fixture = Fixture::with_registered_customer().await;

        let err = fixture
            .service()
            .login("a@x.com", "wrong-password")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let fixture = Fixture::with_registered_customer().await;

        let err = fixture
            .service()
            .login("nobody@x.com", "pw123456")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_logout_revokes_token() {
        let fixture = Fixture::with_registered_customer().await;
        let (_, token) = fixture.service().login("a@x.com", "pw123456").await.unwrap();

        assert!(fixture.service().logout(&token).await);
        assert_eq!(fixture.sessions.resolve(&token).await, None);
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("pw123456").unwrap();
        assert!(verify_password("pw123456", &hash).is_ok());
        assert!(verify_password("pw123457", &hash).is_err());
    }
}
