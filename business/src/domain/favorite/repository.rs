use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Favorite;

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn find(
        &self,
        user_id: &UserId,
        product_id: Uuid,
    ) -> Result<Option<Favorite>, RepositoryError>;
    async fn insert(&self, favorite: &Favorite) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Favorite>, RepositoryError>;
}
