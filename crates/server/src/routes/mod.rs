//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                      - Liveness check
//!
//! # Auth
//! POST /registro                    - Register customer
//! POST /login                       - Authenticate, issue session token
//! POST /logout                      - Revoke session token
//! GET  /mi-perfil                   - Own profile (session)
//!
//! # Catalog (public reads)
//! GET  /catalogo                    - Products plus sliders
//! GET  /productos                   - Product listing
//! GET  /producto/{id}               - Product detail
//! GET  /sliders                     - Slider listing
//! POST /productos/{id}/actualizar   - Update product (manager)
//!
//! # Orders
//! POST /crear-pedido                - Create order (session)
//! GET  /mis-pedidos                 - Own orders (session)
//! GET  /dashboard-gerente           - All orders plus summary (manager)
//! POST /marcar-pagado               - Mark order paid (manager)
//!
//! # Roles
//! POST /cambiar-rol                 - Change role (manager)
//! GET  /verificar-rol               - Own role (session)
//! GET  /listar-clientes             - Customer listing (manager)
//! ```

pub mod auth;
pub mod catalog;
pub mod orders;
pub mod roles;

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;

/// Liveness response body.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Liveness check.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Build the full application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Auth
        .route("/registro", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/mi-perfil", get(auth::profile))
        // Catalog
        .route("/catalogo", get(catalog::catalog))
        .route("/productos", get(catalog::list_products))
        .route("/producto/{id}", get(catalog::product_detail))
        .route("/sliders", get(catalog::list_sliders))
        .route("/productos/{id}/actualizar", post(catalog::update_product))
        // Orders
        .route("/crear-pedido", post(orders::create_order))
        .route("/mis-pedidos", get(orders::my_orders))
        .route("/dashboard-gerente", get(orders::manager_dashboard))
        .route("/marcar-pagado", post(orders::mark_paid))
        // Roles
        .route("/cambiar-rol", post(roles::change_role))
        .route("/verificar-rol", get(roles::verify_role))
        .route("/listar-clientes", get(roles::list_customers))
        .with_state(state)
}
