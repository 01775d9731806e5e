use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::shared::value_objects::UserId;

pub struct LoadCartParams {
    pub user_id: UserId,
}

/// Returns the authoritative item list, creating the user's cart on first
/// access. Prices and names come from the live products at read time.
#[async_trait]
pub trait LoadCartUseCase: Send + Sync {
    async fn execute(&self, params: LoadCartParams) -> Result<Vec<CartItem>, CartError>;
}
