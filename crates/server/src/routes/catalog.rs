//! Catalog and slider route handlers.
//!
//! All reads are public; the product update is manager-gated.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use tienda_core::ProductId;

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{Product, ProductUpdate, Slider};
use crate::state::AppState;

/// Catalog response body: products plus home-page sliders.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub products: Vec<Product>,
    pub sliders: Vec<Slider>,
}

/// The storefront catalog page payload.
pub async fn catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        products: state.products().list().await,
        sliders: state.sliders().list().await,
    })
}

/// Plain product listing.
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.products().list().await)
}

/// Product detail by ID.
pub async fn product_detail(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    state
        .products()
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id} not found")))
}

/// Slider listing.
pub async fn list_sliders(State(state): State<AppState>) -> Json<Vec<Slider>> {
    Json(state.sliders().list().await)
}

/// Apply a partial product update. Manager-only.
pub async fn update_product(
    State(state): State<AppState>,
    RequireAuth(actor): RequireAuth,
    Path(id): Path<ProductId>,
    Json(update): Json<ProductUpdate>,
) -> Result<Json<Product>> {
    if !actor.role.is_manager() {
        return Err(AppError::Forbidden(
            "only managers may update products".to_owned(),
        ));
    }

    let product = state
        .products()
        .update(id, update)
        .await
        .map_err(|_| AppError::NotFound(format!("product {id} not found")))?;

    tracing::info!(product_id = %product.id, "product updated");

    Ok(Json(product))
}
