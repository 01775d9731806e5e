use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::order::model::{Order, OrderItem};
use business::domain::order::value_objects::OrderStatus;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: Uuid,
    pub user_id: String,
    pub status: String,
    pub total_amount: BigDecimal,
    pub delivery_type: String,
    pub idempotency_key: Uuid,
    pub created_at: DateTime<Utc>,
}

impl OrderEntity {
    pub fn into_domain(self) -> Order {
        Order::from_repository(
            self.id,
            UserId::new(&self.user_id),
            self.status
                .parse::<OrderStatus>()
                .unwrap_or(OrderStatus::Pending),
            self.total_amount,
            self.delivery_type,
            self.idempotency_key,
            self.created_at,
        )
    }
}

#[derive(Debug, FromRow)]
pub struct OrderItemEntity {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price_snapshot: BigDecimal,
}

impl OrderItemEntity {
    pub fn into_domain(self) -> OrderItem {
        OrderItem::from_repository(
            self.id,
            self.order_id,
            self.product_id,
            self.quantity,
            self.unit_price_snapshot,
        )
    }
}
