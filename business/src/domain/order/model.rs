use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use uuid::Uuid;

use super::errors::OrderError;
use super::value_objects::OrderStatus;
use crate::domain::cart::model::CartItem;
use crate::domain::shared::value_objects::UserId;

/// Immutable purchase record created from a cart snapshot. The supplied
/// total is stored as-is; it is not recomputed from line items here.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub user_id: UserId,
    pub status: OrderStatus,
    pub total_amount: BigDecimal,
    pub delivery_type: String,
    pub idempotency_key: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        user_id: UserId,
        total_amount: BigDecimal,
        delivery_type: String,
        idempotency_key: Uuid,
    ) -> Result<Self, OrderError> {
        if total_amount < BigDecimal::zero() {
            return Err(OrderError::TotalNegative);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            status: OrderStatus::Pending,
            total_amount,
            delivery_type,
            idempotency_key,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        status: OrderStatus,
        total_amount: BigDecimal,
        delivery_type: String,
        idempotency_key: Uuid,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            status,
            total_amount,
            delivery_type,
            idempotency_key,
            created_at,
        }
    }
}

/// A purchased line. `unit_price_snapshot` is the product price captured
/// at commit time and must never be recomputed from the live product.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price_snapshot: BigDecimal,
}

impl OrderItem {
    pub fn from_cart_item(order_id: Uuid, item: &CartItem) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            product_id: item.product_id,
            quantity: item.quantity,
            unit_price_snapshot: item.unit_price.clone(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        order_id: Uuid,
        product_id: Uuid,
        quantity: i32,
        unit_price_snapshot: BigDecimal,
    ) -> Self {
        Self {
            id,
            order_id,
            product_id,
            quantity,
            unit_price_snapshot,
        }
    }
}
