//! Role management route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use tienda_core::{CustomerId, Role};

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::Customer;
use crate::services::RoleService;
use crate::state::AppState;

/// Role change request body.
///
/// The role arrives as a string so an unknown value can be rejected
/// with a validation error instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ChangeRoleRequest {
    pub customer_id: CustomerId,
    pub role: String,
}

/// Change a customer's role. Manager-only.
pub async fn change_role(
    State(state): State<AppState>,
    RequireAuth(actor): RequireAuth,
    Json(req): Json<ChangeRoleRequest>,
) -> Result<Json<Customer>> {
    let role: Role = req
        .role
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid role: {}", req.role)))?;

    let service = RoleService::new(state.customers());
    let customer = service.change_role(&actor, req.customer_id, role).await?;

    tracing::info!(customer_id = %customer.id, role = %customer.role, "role changed");

    Ok(Json(customer))
}

/// Role verification response body.
#[derive(Debug, Serialize)]
pub struct VerifyRoleResponse {
    pub customer_id: CustomerId,
    pub role: Role,
}

/// Return the actor's current role.
pub async fn verify_role(
    State(state): State<AppState>,
    RequireAuth(actor): RequireAuth,
) -> Result<Json<VerifyRoleResponse>> {
    let service = RoleService::new(state.customers());
    let role = service.verify_role(actor.customer_id).await?;

    Ok(Json(VerifyRoleResponse {
        customer_id: actor.customer_id,
        role,
    }))
}

/// List all customers in registration order. Manager-only.
pub async fn list_customers(
    State(state): State<AppState>,
    RequireAuth(actor): RequireAuth,
) -> Result<Json<Vec<Customer>>> {
    let service = RoleService::new(state.customers());
    let customers = service.list_customers(&actor).await?;
    Ok(Json(customers))
}
