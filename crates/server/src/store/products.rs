//! Product catalog: read collaborator plus manager updates.

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use tienda_core::ProductId;

use crate::models::{NewProduct, Product, ProductUpdate};

use super::StoreError;

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    products: BTreeMap<ProductId, Product>,
}

/// Store for catalog products.
#[derive(Debug, Default)]
pub struct ProductCatalog {
    inner: RwLock<Inner>,
}

impl ProductCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a product, assigning it the next ID.
    pub async fn insert(&self, new: NewProduct) -> Product {
        let mut inner = self.inner.write().await;

        inner.next_id += 1;
        let id = ProductId::new(inner.next_id);

        let product = Product {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
            image_url: new.image_url,
        };

        inner.products.insert(id, product.clone());
        product
    }

    /// Get a product by ID.
    pub async fn get(&self, id: ProductId) -> Option<Product> {
        self.inner.read().await.products.get(&id).cloned()
    }

    /// All products in catalog order.
    pub async fn list(&self) -> Vec<Product> {
        self.inner.read().await.products.values().cloned().collect()
    }

    /// Apply a partial update, returning the updated product.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the product does not exist.
    pub async fn update(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, StoreError> {
        let mut inner = self.inner.write().await;
        let product = inner.products.get_mut(&id).ok_or(StoreError::NotFound)?;

        if let Some(name) = update.name {
            product.name = name;
        }
        if let Some(description) = update.description {
            product.description = description;
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(image_url) = update.image_url {
            product.image_url = Some(image_url);
        }

        Ok(product.clone())
    }
}
