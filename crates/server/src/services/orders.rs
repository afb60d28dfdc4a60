//! Order service.
//!
//! Creates orders from cart payloads, lists them, and drives the
//! `CREATED -> PAID` transition. Unit prices come from the catalog at
//! creation time and are snapshotted on the order; totals are computed
//! server-side, never trusted from client input.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use tienda_core::{OrderId, ProductId};

use crate::models::{Actor, CartItem, LineItem, Order};
use crate::store::{OrderLedger, PaidTransition, ProductCatalog, StoreError};

/// Errors that can occur in order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The cart payload contained no items.
    #[error("cart cannot be empty")]
    EmptyCart,

    /// A cart item had a zero quantity.
    #[error("quantity must be greater than zero for product {0}")]
    InvalidQuantity(ProductId),

    /// A cart item referenced an unknown product.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// The referenced order does not exist.
    #[error("order not found")]
    OrderNotFound,

    /// The actor's role does not permit this operation.
    #[error("only managers may perform this action")]
    Unauthorized,
}

/// Derived aggregation for the manager dashboard. Never stored.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardSummary {
    /// Total number of orders.
    pub total_orders: usize,
    /// Orders not yet paid.
    pub unpaid_orders: usize,
    /// Revenue over paid orders only.
    pub paid_revenue: Decimal,
}

impl DashboardSummary {
    fn from_orders(orders: &[Order]) -> Self {
        Self {
            total_orders: orders.len(),
            unpaid_orders: orders.iter().filter(|o| !o.paid).count(),
            paid_revenue: orders.iter().filter(|o| o.paid).map(|o| o.total).sum(),
        }
    }
}

/// Service owning the order lifecycle.
pub struct OrderService<'a> {
    orders: &'a OrderLedger,
    products: &'a ProductCatalog,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(orders: &'a OrderLedger, products: &'a ProductCatalog) -> Self {
        Self { orders, products }
    }

    /// Create an order for the actor from a cart payload.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCart` for an empty payload, `InvalidQuantity` for a
    /// zero quantity, and `ProductNotFound` for an unknown product.
    /// Nothing is persisted unless every item resolves.
    pub async fn create_order(
        &self,
        actor: &Actor,
        cart: &[CartItem],
    ) -> Result<Order, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let mut items = Vec::with_capacity(cart.len());
        for cart_item in cart {
            if cart_item.quantity == 0 {
                return Err(OrderError::InvalidQuantity(cart_item.product_id));
            }

            let product = self
                .products
                .get(cart_item.product_id)
                .await
                .ok_or(OrderError::ProductNotFound(cart_item.product_id))?;

            items.push(LineItem {
                product_id: cart_item.product_id,
                quantity: cart_item.quantity,
                unit_price: product.price,
            });
        }

        Ok(self.orders.create(actor.customer_id, items).await)
    }

    /// The actor's own orders, newest first.
    pub async fn list_orders(&self, actor: &Actor) -> Vec<Order> {
        self.orders.list_for(actor.customer_id).await
    }

    /// All orders, newest first. Manager-only.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` if the actor is not a manager.
    pub async fn list_all_orders(&self, actor: &Actor) -> Result<Vec<Order>, OrderError> {
        ensure_manager(actor)?;
        Ok(self.orders.list_all().await)
    }

    /// Mark an order paid. Manager-only, idempotent.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` if the actor is not a manager, or
    /// `OrderNotFound` if the order does not exist. An already-paid
    /// order is success, not an error.
    pub async fn mark_paid(
        &self,
        actor: &Actor,
        order_id: OrderId,
    ) -> Result<PaidTransition, OrderError> {
        ensure_manager(actor)?;

        self.orders.mark_paid(order_id).await.map_err(|e| match e {
            StoreError::NotFound => OrderError::OrderNotFound,
            StoreError::Conflict(_) => OrderError::OrderNotFound,
        })
    }

    /// The manager dashboard aggregation over all orders.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` if the actor is not a manager.
    pub async fn dashboard(&self, actor: &Actor) -> Result<DashboardSummary, OrderError> {
        let orders = self.list_all_orders(actor).await?;
        Ok(DashboardSummary::from_orders(&orders))
    }
}

/// Capability check against the role enumeration.
const fn ensure_manager(actor: &Actor) -> Result<(), OrderError> {
    if actor.role.is_manager() {
        Ok(())
    } else {
        Err(OrderError::Unauthorized)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tienda_core::{CustomerId, Role};

    use crate::models::NewProduct;

    use super::*;

    struct Fixture {
        orders: OrderLedger,
        products: ProductCatalog,
    }

    impl Fixture {
        async fn with_product(cents: i64) -> (Self, ProductId) {
            let fixture = Self {
                orders: OrderLedger::new(),
                products: ProductCatalog::new(),
            };
            let product = fixture
                .products
                .insert(NewProduct {
                    name: "Caja de mangos".to_owned(),
                    description: "5 kg".to_owned(),
                    price: Decimal::new(cents, 2),
                    image_url: None,
                })
                .await;
            (fixture, product.id)
        }

        fn service(&self) -> OrderService<'_> {
            OrderService::new(&self.orders, &self.products)
        }
    }

    fn customer(id: i32) -> Actor {
        Actor {
            customer_id: CustomerId::new(id),
            role: Role::Customer,
        }
    }

    fn manager(id: i32) -> Actor {
        Actor {
            customer_id: CustomerId::new(id),
            role: Role::Manager,
        }
    }

    #[tokio::test]
    async fn test_create_order_snapshots_price_and_computes_total() {
        let (fixture, product_id) = Fixture::with_product(1000).await;
        let service = fixture.service();

        let order = service
            .create_order(
                &customer(1),
                &[CartItem {
                    product_id,
                    quantity: 2,
                }],
            )
            .await
            .unwrap();

        assert_eq!(order.total, Decimal::new(2000, 2));
        assert!(!order.paid);
        assert_eq!(order.items[0].unit_price, Decimal::new(1000, 2));

        // A later price change does not touch the snapshot
        fixture
            .products
            .update(
                product_id,
                crate::models::ProductUpdate {
                    price: Some(Decimal::new(9900, 2)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let stored = fixture.orders.get(order.id).await.unwrap();
        assert_eq!(stored.items[0].unit_price, Decimal::new(1000, 2));
        assert_eq!(stored.total, Decimal::new(2000, 2));
    }

    #[tokio::test]
    async fn test_create_order_rejects_empty_cart() {
        let (fixture, _) = Fixture::with_product(1000).await;

        let err = fixture
            .service()
            .create_order(&customer(1), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::EmptyCart));
        assert!(fixture.orders.list_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_order_rejects_zero_quantity() {
        let (fixture, product_id) = Fixture::with_product(1000).await;

        let err = fixture
            .service()
            .create_order(
                &customer(1),
                &[CartItem {
                    product_id,
                    quantity: 0,
                }],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidQuantity(_)));
    }

    #[tokio::test]
    async fn test_create_order_rejects_unknown_product() {
        let (fixture, product_id) = Fixture::with_product(1000).await;

        let err = fixture
            .service()
            .create_order(
                &customer(1),
                &[
                    CartItem {
                        product_id,
                        quantity: 1,
                    },
                    CartItem {
                        product_id: ProductId::new(99),
                        quantity: 1,
                    },
                ],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::ProductNotFound(_)));
        // The whole order is rejected, not partially persisted
        assert!(fixture.orders.list_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_orders_only_returns_own() {
        let (fixture, product_id) = Fixture::with_product(1000).await;
        let service = fixture.service();
        let cart = [CartItem {
            product_id,
            quantity: 1,
        }];

        service.create_order(&customer(1), &cart).await.unwrap();
        service.create_order(&customer(2), &cart).await.unwrap();

        let own = service.list_orders(&customer(1)).await;
        assert_eq!(own.len(), 1);
        assert_eq!(own[0].customer_id, CustomerId::new(1));
    }

    #[tokio::test]
    async fn test_list_all_orders_is_manager_only() {
        let (fixture, product_id) = Fixture::with_product(1000).await;
        let service = fixture.service();
        let cart = [CartItem {
            product_id,
            quantity: 1,
        }];

        service.create_order(&customer(1), &cart).await.unwrap();
        service.create_order(&customer(2), &cart).await.unwrap();

        assert!(matches!(
            service.list_all_orders(&customer(1)).await,
            Err(OrderError::Unauthorized)
        ));
        assert_eq!(service.list_all_orders(&manager(3)).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_mark_paid_gated_and_idempotent() {
        let (fixture, product_id) = Fixture::with_product(1000).await;
        let service = fixture.service();
        let order = service
            .create_order(
                &customer(1),
                &[CartItem {
                    product_id,
                    quantity: 1,
                }],
            )
            .await
            .unwrap();

        assert!(matches!(
            service.mark_paid(&customer(1), order.id).await,
            Err(OrderError::Unauthorized)
        ));
        assert_eq!(
            service.mark_paid(&manager(2), order.id).await.unwrap(),
            PaidTransition::Marked
        );
        assert_eq!(
            service.mark_paid(&manager(2), order.id).await.unwrap(),
            PaidTransition::AlreadyPaid
        );
        assert!(matches!(
            service.mark_paid(&manager(2), OrderId::new(99)).await,
            Err(OrderError::OrderNotFound)
        ));
    }

    #[tokio::test]
    async fn test_dashboard_counts_revenue_once() {
        let (fixture, product_id) = Fixture::with_product(1000).await;
        let service = fixture.service();
        let cart = [CartItem {
            product_id,
            quantity: 2,
        }];

        let paid_order = service.create_order(&customer(1), &cart).await.unwrap();
        service.create_order(&customer(2), &cart).await.unwrap();

        let boss = manager(3);
        service.mark_paid(&boss, paid_order.id).await.unwrap();
        // Re-marking must not double-count revenue
        service.mark_paid(&boss, paid_order.id).await.unwrap();

        let summary = service.dashboard(&boss).await.unwrap();
        assert_eq!(
            summary,
            DashboardSummary {
                total_orders: 2,
                unpaid_orders: 1,
                paid_revenue: Decimal::new(2000, 2),
            }
        );

        assert!(matches!(
            service.dashboard(&customer(1)).await,
            Err(OrderError::Unauthorized)
        ));
    }
}
