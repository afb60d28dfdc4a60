//! Application services.
//!
//! Services compose the stores and own validation and authorization.
//! They hold no state of their own: handlers construct them per request
//! from references into [`crate::state::AppState`], and every operation
//! receives the authenticated [`crate::models::Actor`] explicitly.

pub mod auth;
pub mod orders;
pub mod registration;
pub mod roles;

pub use auth::{AuthError, AuthService};
pub use orders::{DashboardSummary, OrderError, OrderService};
pub use registration::{RegistrationError, RegistrationService};
pub use roles::{RoleError, RoleService};
