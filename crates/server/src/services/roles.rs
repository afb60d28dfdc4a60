//! Role service.
//!
//! Role changes and customer listings are manager-gated; the gate is a
//! pure function of the actor's role, so a customer can never promote
//! themselves.

use thiserror::Error;

use tienda_core::{CustomerId, Role};

use crate::models::{Actor, Customer};
use crate::store::CustomerRegistry;

/// Errors that can occur in role operations.
#[derive(Debug, Error)]
pub enum RoleError {
    /// The actor's role does not permit this operation.
    #[error("only managers may perform this action")]
    Unauthorized,

    /// The target customer does not exist.
    #[error("customer not found")]
    CustomerNotFound,
}

/// Service owning role transitions and customer projections.
pub struct RoleService<'a> {
    customers: &'a CustomerRegistry,
}

impl<'a> RoleService<'a> {
    /// Create a new role service.
    #[must_use]
    pub const fn new(customers: &'a CustomerRegistry) -> Self {
        Self { customers }
    }

    /// Change a customer's role. Manager-only.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` if the actor is not a manager, or
    /// `CustomerNotFound` if the target does not exist.
    pub async fn change_role(
        &self,
        actor: &Actor,
        target: CustomerId,
        new_role: Role,
    ) -> Result<Customer, RoleError> {
        ensure_manager(actor)?;

        self.customers
            .set_role(target, new_role)
            .await
            .map_err(|_| RoleError::CustomerNotFound)
    }

    /// Read a customer's current role. No side effects.
    ///
    /// # Errors
    ///
    /// Returns `CustomerNotFound` if the customer does not exist.
    pub async fn verify_role(&self, customer_id: CustomerId) -> Result<Role, RoleError> {
        self.customers
            .get(customer_id)
            .await
            .map(|c| c.role)
            .ok_or(RoleError::CustomerNotFound)
    }

    /// List all customers in registration order. Manager-only.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` if the actor is not a manager.
    pub async fn list_customers(&self, actor: &Actor) -> Result<Vec<Customer>, RoleError> {
        ensure_manager(actor)?;
        Ok(self.customers.list().await)
    }
}

/// Capability check against the role enumeration.
const fn ensure_manager(actor: &Actor) -> Result<(), RoleError> {
    if actor.role.is_manager() {
        Ok(())
    } else {
        Err(RoleError::Unauthorized)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use tienda_core::{AccountId, Email};

    use super::*;

    async fn registry_with(n: i32) -> CustomerRegistry {
        let registry = CustomerRegistry::new();
        for i in 1..=n {
            registry
                .create(
                    AccountId::new(i),
                    Email::parse(&format!("c{i}@x.com")).unwrap(),
                    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
                )
                .await
                .unwrap();
        }
        registry
    }

    fn manager() -> Actor {
        Actor {
            customer_id: CustomerId::new(1),
            role: Role::Manager,
        }
    }

    fn customer(id: i32) -> Actor {
        Actor {
            customer_id: CustomerId::new(id),
            role: Role::Customer,
        }
    }

    #[tokio::test]
    async fn test_manager_can_change_role() {
        let registry = registry_with(2).await;
        let service = RoleService::new(&registry);

        let updated = service
            .change_role(&manager(), CustomerId::new(2), Role::Manager)
            .await
            .unwrap();
        assert_eq!(updated.role, Role::Manager);
        assert_eq!(
            service.verify_role(CustomerId::new(2)).await.unwrap(),
            Role::Manager
        );
    }

    #[tokio::test]
    async fn test_customer_cannot_change_roles() {
        let registry = registry_with(2).await;
        let service = RoleService::new(&registry);

        // Not even their own
        for target in [1, 2] {
            let err = service
                .change_role(&customer(1), CustomerId::new(target), Role::Manager)
                .await
                .unwrap_err();
            assert!(matches!(err, RoleError::Unauthorized));
        }
        assert_eq!(
            service.verify_role(CustomerId::new(1)).await.unwrap(),
            Role::Customer
        );
    }

    #[tokio::test]
    async fn test_change_role_unknown_target() {
        let registry = registry_with(1).await;
        let service = RoleService::new(&registry);

        let err = service
            .change_role(&manager(), CustomerId::new(42), Role::Manager)
            .await
            .unwrap_err();
        assert!(matches!(err, RoleError::CustomerNotFound));
    }

    #[tokio::test]
    async fn test_verify_role_unknown_customer() {
        let registry = registry_with(0).await;
        let service = RoleService::new(&registry);
        assert!(matches!(
            service.verify_role(CustomerId::new(1)).await,
            Err(RoleError::CustomerNotFound)
        ));
    }

    #[tokio::test]
    async fn test_list_customers_is_manager_only() {
        let registry = registry_with(3).await;
        let service = RoleService::new(&registry);

        let listed = service.list_customers(&manager()).await.unwrap();
        assert_eq!(listed.len(), 3);
        let ids: Vec<i32> = listed.iter().map(|c| c.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        assert!(matches!(
            service.list_customers(&customer(2)).await,
            Err(RoleError::Unauthorized)
        ));
    }
}
