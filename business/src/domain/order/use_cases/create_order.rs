use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::shared::value_objects::UserId;

pub struct CreateOrderParams {
    pub user_id: UserId,
    /// Caller-computed total including any shipping. Stored as supplied;
    /// not verified against line items.
    pub total_amount: BigDecimal,
    /// Opaque delivery metadata chosen by the caller.
    pub delivery_type: String,
    /// Client-generated key. Replaying a key returns the already-created
    /// order instead of committing the cart a second time.
    pub idempotency_key: Uuid,
}

/// Converts the caller's cart into an immutable order plus snapshot line
/// items, then empties the cart. Returns the new order's id.
#[async_trait]
pub trait CreateOrderUseCase: Send + Sync {
    async fn execute(&self, params: CreateOrderParams) -> Result<Uuid, OrderError>;
}
