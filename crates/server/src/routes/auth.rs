//! Registration, login, and profile route handlers.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tienda_core::{CustomerId, Email, Role};

use crate::error::{AppError, Result};
use crate::middleware::{RequireAuth, bearer_token};
use crate::models::Customer;
use crate::services::{AuthService, RegistrationService};
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub birth_date: NaiveDate,
}

/// Registration response body.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub customer_id: CustomerId,
    pub email: Email,
    pub role: Role,
}

/// Handle customer registration.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    let service = RegistrationService::new(state.accounts(), state.customers());
    let customer = service
        .register(&req.email, &req.password, &req.password_confirm, req.birth_date)
        .await?;

    tracing::info!(customer_id = %customer.id, "customer registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            customer_id: customer.id,
            email: customer.email,
            role: customer.role,
        }),
    ))
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response body carrying the session token.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub customer_id: CustomerId,
    pub email: Email,
    pub role: Role,
}

/// Handle login, issuing a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let service = AuthService::new(state.accounts(), state.customers(), state.sessions());
    let (customer, token) = service.login(&req.email, &req.password).await?;

    tracing::info!(customer_id = %customer.id, "customer logged in");

    Ok(Json(LoginResponse {
        token,
        customer_id: customer.id,
        email: customer.email,
        role: customer.role,
    }))
}

/// Handle logout, revoking the presented token.
///
/// Always returns 204: revoking an unknown or expired token is a no-op.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    if let Some(token) = bearer_token(&headers) {
        let service = AuthService::new(state.accounts(), state.customers(), state.sessions());
        service.logout(token).await;
    }
    StatusCode::NO_CONTENT
}

/// Return the authenticated customer's profile.
pub async fn profile(
    State(state): State<AppState>,
    RequireAuth(actor): RequireAuth,
) -> Result<Json<Customer>> {
    let customer = state
        .customers()
        .get(actor.customer_id)
        .await
        .ok_or_else(|| AppError::NotFound("customer not found".to_owned()))?;

    Ok(Json(customer))
}
