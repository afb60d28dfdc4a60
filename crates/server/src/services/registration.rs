//! Registration service.
//!
//! Validates and commits new customer sign-ups. Validation is a pure
//! step separate from persistence, so the persistence pair (account +
//! customer) can be tested and rolled back on its own.

use chrono::NaiveDate;
use thiserror::Error;

use tienda_core::{Email, EmailError};

use crate::models::Customer;
use crate::services::auth;
use crate::store::{CredentialStore, CustomerRegistry, StoreError};

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Errors that can occur during registration.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The email is not syntactically valid.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The password is shorter than [`MIN_PASSWORD_LENGTH`].
    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,

    /// The password and its confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// The email is already registered.
    #[error("this email is already registered")]
    DuplicateEmail,

    /// Password hashing failed.
    #[error("failed to hash password")]
    PasswordHash,

    /// The customer write failed after the account write.
    #[error("store error: {0}")]
    Store(StoreError),
}

/// Service committing new customer sign-ups.
pub struct RegistrationService<'a> {
    accounts: &'a CredentialStore,
    customers: &'a CustomerRegistry,
}

impl<'a> RegistrationService<'a> {
    /// Create a new registration service.
    #[must_use]
    pub const fn new(accounts: &'a CredentialStore, customers: &'a CustomerRegistry) -> Self {
        Self {
            accounts,
            customers,
        }
    }

    /// Register a new customer.
    ///
    /// On success a credential account and a customer profile with role
    /// `Customer` exist, linked 1:1. Email uniqueness is enforced by the
    /// credential store at commit time, not by a separate read, so
    /// concurrent registrations with the same email cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad email, short password, or
    /// mismatched confirmation; `DuplicateEmail` if the email is taken.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        password_confirm: &str,
        birth_date: NaiveDate,
    ) -> Result<Customer, RegistrationError> {
        let email = validate(email, password, password_confirm)?;

        let password_hash =
            auth::hash_password(password).map_err(|_| RegistrationError::PasswordHash)?;

        let account_id = self
            .accounts
            .create(&email, &password_hash)
            .await
            .map_err(|e| match e {
                StoreError::Conflict(_) => RegistrationError::DuplicateEmail,
                other => RegistrationError::Store(other),
            })?;

        // The account and customer writes must land as a pair: if the
        // customer write fails, roll the account back so the email is
        // free to retry.
        match self.customers.create(account_id, email, birth_date).await {
            Ok(customer) => Ok(customer),
            Err(e) => {
                self.accounts.remove(account_id).await;
                Err(RegistrationError::Store(e))
            }
        }
    }
}

/// Pure validation step: checks the email shape, password length, and
/// confirmation match without touching any store.
fn validate(
    email: &str,
    password: &str,
    password_confirm: &str,
) -> Result<Email, RegistrationError> {
    let email = Email::parse(email)?;

    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(RegistrationError::PasswordTooShort);
    }

    if password != password_confirm {
        return Err(RegistrationError::PasswordMismatch);
    }

    Ok(email)
}
