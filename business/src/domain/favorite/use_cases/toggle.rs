use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::shared::value_objects::UserId;

pub struct ToggleFavoriteParams {
    pub user_id: UserId,
    pub product_id: Uuid,
}

/// Flips membership and returns the new state: `true` when the product is
/// now a favorite, `false` when the toggle removed it.
#[async_trait]
pub trait ToggleFavoriteUseCase: Send + Sync {
    async fn execute(&self, params: ToggleFavoriteParams) -> Result<bool, FavoriteError>;
}
