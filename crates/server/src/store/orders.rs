//! Order ledger: orders, totals, and the paid flag.
//!
//! `mark_paid` is the one mutation with a race window (concurrent
//! payment confirmations, retries after a timeout). It is applied as a
//! compare-and-set under the write lock: the false-to-true transition
//! happens exactly once, and a repeat is reported as
//! [`PaidTransition::AlreadyPaid`] rather than applied again.

use std::collections::BTreeMap;

use chrono::Utc;
use tokio::sync::RwLock;

use tienda_core::{CustomerId, OrderId};

use crate::models::{LineItem, Order};

use super::StoreError;

/// Outcome of a `mark_paid` compare-and-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaidTransition {
    /// The order transitioned from unpaid to paid.
    Marked,
    /// The order was already paid; nothing changed.
    AlreadyPaid,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    orders: BTreeMap<OrderId, Order>,
}

/// Store for orders.
#[derive(Debug, Default)]
pub struct OrderLedger {
    inner: RwLock<Inner>,
}

impl OrderLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist a new unpaid order, recomputing the total from the items.
    pub async fn create(&self, customer_id: CustomerId, items: Vec<LineItem>) -> Order {
        let mut inner = self.inner.write().await;

        inner.next_id += 1;
        let id = OrderId::new(inner.next_id);

        let order = Order {
            id,
            customer_id,
            created_at: Utc::now(),
            total: Order::compute_total(&items),
            items,
            paid: false,
        };

        inner.orders.insert(id, order.clone());
        order
    }

    /// Get an order by ID.
    pub async fn get(&self, id: OrderId) -> Option<Order> {
        self.inner.read().await.orders.get(&id).cloned()
    }

    /// Orders owned by one customer, newest first.
    pub async fn list_for(&self, customer_id: CustomerId) -> Vec<Order> {
        self.inner
            .read()
            .await
            .orders
            .values()
            .rev()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect()
    }

    /// All orders, newest first.
    pub async fn list_all(&self) -> Vec<Order> {
        self.inner.read().await.orders.values().rev().cloned().collect()
    }

    /// Mark an order paid (compare-and-set on the paid flag).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the order does not exist.
    pub async fn mark_paid(&self, id: OrderId) -> Result<PaidTransition, StoreError> {
        let mut inner = self.inner.write().await;
        let order = inner.orders.get_mut(&id).ok_or(StoreError::NotFound)?;

        if order.paid {
            return Ok(PaidTransition::AlreadyPaid);
        }

        order.paid = true;
        Ok(PaidTransition::Marked)
    }
}
