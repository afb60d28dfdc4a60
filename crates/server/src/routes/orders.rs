//! Order route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use tienda_core::OrderId;

use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::models::{CartItem, Order};
use crate::services::{DashboardSummary, OrderService};
use crate::state::AppState;
use crate::store::PaidTransition;

/// Order creation request body: the cart payload.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Vec<CartItem>,
}

/// Create an order from the actor's cart.
pub async fn create_order(
    State(state): State<AppState>,
    RequireAuth(actor): RequireAuth,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>)> {
    let service = OrderService::new(state.orders(), state.products());
    let order = service.create_order(&actor, &req.items).await?;

    tracing::info!(order_id = %order.id, customer_id = %actor.customer_id, total = %order.total, "order created");

    Ok((StatusCode::CREATED, Json(order)))
}

/// List the actor's own orders, newest first.
pub async fn my_orders(
    State(state): State<AppState>,
    RequireAuth(actor): RequireAuth,
) -> Json<Vec<Order>> {
    let service = OrderService::new(state.orders(), state.products());
    Json(service.list_orders(&actor).await)
}

/// Manager dashboard response body.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub summary: DashboardSummary,
    pub orders: Vec<Order>,
}

/// All orders plus the derived aggregation. Manager-only.
pub async fn manager_dashboard(
    State(state): State<AppState>,
    RequireAuth(actor): RequireAuth,
) -> Result<Json<DashboardResponse>> {
    let service = OrderService::new(state.orders(), state.products());
    let orders = service.list_all_orders(&actor).await?;
    let summary = service.dashboard(&actor).await?;

    Ok(Json(DashboardResponse { summary, orders }))
}

/// Mark-paid request body.
#[derive(Debug, Deserialize)]
pub struct MarkPaidRequest {
    pub order_id: OrderId,
}

/// Mark-paid response body.
#[derive(Debug, Serialize)]
pub struct MarkPaidResponse {
    pub order_id: OrderId,
    pub paid: bool,
    /// Whether the order had already been paid (idempotent no-op).
    pub already_paid: bool,
}

/// Mark an order paid. Manager-only, idempotent.
pub async fn mark_paid(
    State(state): State<AppState>,
    RequireAuth(actor): RequireAuth,
    Json(req): Json<MarkPaidRequest>,
) -> Result<Json<MarkPaidResponse>> {
    let service = OrderService::new(state.orders(), state.products());
    let transition = service.mark_paid(&actor, req.order_id).await?;

    if transition == PaidTransition::Marked {
        tracing::info!(order_id = %req.order_id, "order marked paid");
    }

    Ok(Json(MarkPaidResponse {
        order_id: req.order_id,
        paid: true,
        already_paid: transition == PaidTransition::AlreadyPaid,
    }))
}
