use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::shared::value_objects::UserId;

pub struct AddCartItemParams {
    pub user_id: UserId,
    pub product_id: Uuid,
    pub quantity: i32,
}

/// Merge-on-add: an existing line for the product is incremented, a new
/// product gets a fresh line. Resolves with the reloaded authoritative
/// item list, never with a locally patched one.
#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Result<Vec<CartItem>, CartError>;
}
