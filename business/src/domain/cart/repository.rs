use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{Cart, CartItem};

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Idempotent get-or-create. Never fails because the cart "doesn't
    /// exist yet"; that case self-heals by creating one.
    async fn get_or_create(&self, user_id: &UserId) -> Result<Cart, RepositoryError>;

    /// Plain lookup, used where a missing cart must be an error instead of
    /// being created (the checkout path).
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError>;
}

#[async_trait]
pub trait CartItemRepository: Send + Sync {
    /// Items joined with their product's current name, price and image.
    /// Fails with `Integrity` when an item's product no longer resolves.
    async fn get_by_cart(&self, cart_id: Uuid) -> Result<Vec<CartItem>, RepositoryError>;
    async fn find_by_product(
        &self,
        cart_id: Uuid,
        product_id: Uuid,
    ) -> Result<Option<CartItem>, RepositoryError>;
    async fn insert(&self, item: &CartItem) -> Result<(), RepositoryError>;
    /// Single atomic increment at the store; no read-then-write.
    async fn increment_quantity(&self, id: Uuid, by: i32) -> Result<(), RepositoryError>;
    async fn update_quantity(&self, id: Uuid, quantity: i32) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn delete_by_cart(&self, cart_id: Uuid) -> Result<u64, RepositoryError>;
}
