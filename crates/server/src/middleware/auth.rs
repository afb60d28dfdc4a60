//! Authentication extractor.
//!
//! Resolves the `Authorization: Bearer` token into an [`Actor`] so
//! handlers and services never touch session state directly.

use axum::{extract::FromRequestParts, http::HeaderMap, http::request::Parts};

use crate::error::AppError;
use crate::models::Actor;
use crate::state::AppState;

/// Extractor that requires an authenticated session.
///
/// The actor's role is read from the registry at request time, so a
/// role change takes effect on the next request without reissuing the
/// token.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(actor): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("hello, customer {}", actor.customer_id)
/// }
/// ```
pub struct RequireAuth(pub Actor);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)
            .ok_or_else(|| AppError::Unauthorized("missing session token".to_owned()))?;

        let customer_id = state
            .sessions()
            .resolve(token)
            .await
            .ok_or_else(|| AppError::Unauthorized("invalid or expired session".to_owned()))?;

        let customer = state
            .customers()
            .get(customer_id)
            .await
            .ok_or_else(|| AppError::Unauthorized("invalid or expired session".to_owned()))?;

        Ok(Self(Actor::from(&customer)))
    }
}

/// Extract the bearer token from the `Authorization` header.
#[must_use]
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
