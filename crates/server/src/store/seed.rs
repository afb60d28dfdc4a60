//! Catalog seeding from a JSON file.
//!
//! The catalog and slider stores start empty; deployments point
//! `TIENDA_CATALOG_PATH` at a JSON document like:
//!
//! ```json
//! {
//!   "products": [
//!     { "name": "Caja de mangos", "description": "5 kg", "price": "10.00" }
//!   ],
//!   "sliders": [
//!     { "title": "Rebajas de verano", "image_url": "/img/rebajas.jpg" }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::NewProduct;

use super::{ProductCatalog, SliderGallery};

/// Errors loading a catalog seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid seed file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct SliderSeed {
    title: String,
    image_url: String,
}

#[derive(Debug, Deserialize)]
struct CatalogSeed {
    #[serde(default)]
    products: Vec<NewProduct>,
    #[serde(default)]
    sliders: Vec<SliderSeed>,
}

/// Load a seed file and insert its contents into the stores.
///
/// Returns the number of products and sliders inserted.
///
/// # Errors
///
/// Returns `SeedError` if the file cannot be read or parsed.
pub async fn apply(
    path: &Path,
    catalog: &ProductCatalog,
    gallery: &SliderGallery,
) -> Result<(usize, usize), SeedError> {
    let raw = std::fs::read_to_string(path)?;
    let seed: CatalogSeed = serde_json::from_str(&raw)?;

    let counts = (seed.products.len(), seed.sliders.len());

    for product in seed.products {
        catalog.insert(product).await;
    }
    for slider in seed.sliders {
        gallery.insert(slider.title, slider.image_url).await;
    }

    Ok(counts)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[tokio::test]
    async fn test_apply_seed() {
        let dir = std::env::temp_dir().join("tienda-seed-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("catalog.json");
        std::fs::write(
            &path,
            r#"{
                "products": [
                    { "name": "Caja de mangos", "description": "5 kg", "price": "10.00" }
                ],
                "sliders": [
                    { "title": "Rebajas", "image_url": "/img/rebajas.jpg" }
                ]
            }"#,
        )
        .unwrap();

        let catalog = ProductCatalog::new();
        let gallery = SliderGallery::new();
        let (products, sliders) = apply(&path, &catalog, &gallery).await.unwrap();

        assert_eq!((products, sliders), (1, 1));
        let listed = catalog.list().await;
        assert_eq!(listed[0].price, Decimal::new(1000, 2));
        assert_eq!(gallery.list().await[0].title, "Rebajas");
    }

    #[tokio::test]
    async fn test_apply_missing_file() {
        let catalog = ProductCatalog::new();
        let gallery = SliderGallery::new();
        let err = apply(Path::new("/nonexistent/catalog.json"), &catalog, &gallery)
            .await
            .unwrap_err();
        assert!(matches!(err, SeedError::Io(_)));
    }
}
