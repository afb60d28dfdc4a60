//! Order domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tienda_core::{CustomerId, OrderId, ProductId};

/// A single position in a cart payload, as submitted by the client.
///
/// Carries no price: unit prices are resolved from the catalog at order
/// creation time, never trusted from client input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A line item with the unit price snapshotted at order creation.
///
/// The snapshot protects the order against later catalog price changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl LineItem {
    /// The subtotal contributed by this line.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// A checkout transaction ("pedido").
///
/// The paid flag transitions false to true exactly once; re-marking a
/// paid order is a no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// The customer who placed the order.
    pub customer_id: CustomerId,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
    /// Ordered line items with snapshotted unit prices.
    pub items: Vec<LineItem>,
    /// Derived sum of quantity times unit price over all items.
    pub total: Decimal,
    /// Whether the order has been paid.
    pub paid: bool,
}

impl Order {
    /// Recompute an order total from its line items.
    #[must_use]
    pub fn compute_total(items: &[LineItem]) -> Decimal {
        items.iter().map(LineItem::subtotal).sum()
    }
}
