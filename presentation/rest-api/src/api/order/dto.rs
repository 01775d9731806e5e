use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::order::model::{Order, OrderItem};

#[derive(Debug, Clone, Object)]
pub struct CheckoutRequest {
    /// Caller-computed total including any shipping, in decimal major
    /// units, e.g. "26.98". Stored as supplied.
    pub total_amount: String,
    /// Opaque delivery metadata, e.g. "retirada" or "entrega"
    pub delivery_type: String,
    /// Client-generated key; resubmitting the same key returns the order
    /// already created instead of committing the cart again
    pub idempotency_key: String,
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutResponse {
    /// Identifier of the created (or replayed) order
    pub order_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct OrderResponse {
    /// Order unique identifier
    pub id: String,
    /// Lifecycle status, e.g. "pending"
    pub status: String,
    /// Total as supplied at checkout, decimal major units
    pub total_amount: String,
    /// Delivery metadata as supplied at checkout
    pub delivery_type: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            status: order.status.to_string(),
            total_amount: order.total_amount.to_string(),
            delivery_type: order.delivery_type,
            created_at: order.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderItemResponse {
    /// Order item unique identifier
    pub id: String,
    /// Purchased product
    pub product_id: String,
    /// Purchased units
    pub quantity: i32,
    /// Unit price captured at commit time; never the live product price
    pub unit_price_snapshot: String,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id.to_string(),
            product_id: item.product_id.to_string(),
            quantity: item.quantity,
            unit_price_snapshot: item.unit_price_snapshot.to_string(),
        }
    }
}
