//! Customer domain types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use tienda_core::{AccountId, CustomerId, Email, Role};

/// A customer profile, linked 1:1 to a credential account.
///
/// The account binding is set at registration and never reassigned.
/// The role is mutated only through the role service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer ID.
    pub id: CustomerId,
    /// The credential account this profile belongs to.
    pub account_id: AccountId,
    /// Email address, mirrored from the account for read projections.
    pub email: Email,
    /// Birth date captured at registration.
    pub birth_date: NaiveDate,
    /// Current role.
    pub role: Role,
    /// When the customer registered.
    pub created_at: DateTime<Utc>,
}

/// The authenticated caller of a service operation.
///
/// Built by the `RequireAuth` extractor from a session token and passed
/// explicitly into every service call, so authorization checks are pure
/// functions of (actor, action, target).
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    /// The customer issuing the request.
    pub customer_id: CustomerId,
    /// The customer's role at the time the request was authenticated.
    pub role: Role,
}

impl From<&Customer> for Actor {
    fn from(customer: &Customer) -> Self {
        Self {
            customer_id: customer.id,
            role: customer.role,
        }
    }
}
