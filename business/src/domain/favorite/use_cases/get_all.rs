use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::Favorite;
use crate::domain::shared::value_objects::UserId;

pub struct GetFavoritesParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetFavoritesUseCase: Send + Sync {
    async fn execute(&self, params: GetFavoritesParams) -> Result<Vec<Favorite>, FavoriteError>;
}
