use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{Order, OrderItem};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn insert(&self, order: &Order) -> Result<(), RepositoryError>;
    /// Compensation only: removes a header whose items failed to write.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn find_by_idempotency_key(
        &self,
        key: Uuid,
        user_id: &UserId,
    ) -> Result<Option<Order>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<Order, RepositoryError>;
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError>;
}

#[async_trait]
pub trait OrderItemRepository: Send + Sync {
    /// Bulk insert; either all rows land or the call fails as a unit from
    /// the caller's perspective.
    async fn insert_many(&self, items: &[OrderItem]) -> Result<(), RepositoryError>;
    async fn get_by_order(&self, order_id: Uuid) -> Result<Vec<OrderItem>, RepositoryError>;
}
