use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::shared::value_objects::UserId;

pub struct SetCartItemQuantityParams {
    pub user_id: UserId,
    pub item_id: Uuid,
    pub quantity: i32,
}

/// A quantity of zero or less removes the item instead of storing a zero row.
#[async_trait]
pub trait SetCartItemQuantityUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SetCartItemQuantityParams,
    ) -> Result<Vec<CartItem>, CartError>;
}
