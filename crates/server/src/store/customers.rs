//! Customer registry: profiles and role state.
//!
//! Enforces the 1:1 account binding: a second profile for the same
//! account is rejected, and the binding is never reassigned.

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use tienda_core::{AccountId, CustomerId, Email, Role};

use crate::models::Customer;

use super::StoreError;

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    customers: BTreeMap<CustomerId, Customer>,
    by_account: HashMap<AccountId, CustomerId>,
}

/// Store for customer profiles. Owns role state.
#[derive(Debug, Default)]
pub struct CustomerRegistry {
    inner: RwLock<Inner>,
}

impl CustomerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a customer bound to an account, with role `Customer`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the account already has a
    /// customer profile.
    pub async fn create(
        &self,
        account_id: AccountId,
        email: Email,
        birth_date: NaiveDate,
    ) -> Result<Customer, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.by_account.contains_key(&account_id) {
            return Err(StoreError::Conflict(
                "account already has a customer profile".to_owned(),
            ));
        }

        inner.next_id += 1;
        let id = CustomerId::new(inner.next_id);

        let customer = Customer {
            id,
            account_id,
            email,
            birth_date,
            role: Role::Customer,
            created_at: Utc::now(),
        };

        inner.by_account.insert(account_id, id);
        inner.customers.insert(id, customer.clone());

        Ok(customer)
    }

    /// Get a customer by ID.
    pub async fn get(&self, id: CustomerId) -> Option<Customer> {
        self.inner.read().await.customers.get(&id).cloned()
    }

    /// Get the customer bound to an account.
    pub async fn get_by_account(&self, account_id: AccountId) -> Option<Customer> {
        let inner = self.inner.read().await;
        let id = inner.by_account.get(&account_id)?;
        inner.customers.get(id).cloned()
    }

    /// Set a customer's role, returning the updated profile.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the customer does not exist.
    pub async fn set_role(&self, id: CustomerId, role: Role) -> Result<Customer, StoreError> {
        let mut inner = self.inner.write().await;
        let customer = inner.customers.get_mut(&id).ok_or(StoreError::NotFound)?;
        customer.role = role;
        Ok(customer.clone())
    }

    /// All customers in registration order.
    ///
    /// IDs are monotonic, so ascending map order is registration order.
    pub async fn list(&self) -> Vec<Customer> {
        self.inner.read().await.customers.values().cloned().collect()
    }
}
