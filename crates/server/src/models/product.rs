//! Product catalog and media domain types.
//!
//! Catalog browsing is a plain read projection; the only mutation in
//! scope is the manager-gated product update.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tienda_core::{ProductId, SliderId};

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long description.
    pub description: String,
    /// Current unit price. Orders snapshot this at creation time.
    pub price: Decimal,
    /// Optional product image.
    pub image_url: Option<String>,
}

/// Payload for inserting a product into the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Partial update to a product; unset fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub image_url: Option<String>,
}

/// A home-page slider image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slider {
    /// Unique slider ID.
    pub id: SliderId,
    /// Caption shown over the image.
    pub title: String,
    /// Image location.
    pub image_url: String,
}
