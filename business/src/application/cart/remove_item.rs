use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::{CartItemRepository, CartRepository};
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub cart_item_repository: Arc<dyn CartItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<Vec<CartItem>, CartError> {
        self.logger
            .info(&format!("Removing cart item {}", params.item_id));

        self.cart_item_repository.delete(params.item_id).await?;

        let cart = self.cart_repository.get_or_create(&params.user_id).await?;
        let items = self
            .cart_item_repository
            .get_by_cart(cart.id)
            .await
            .map_err(|e| match e {
                RepositoryError::Integrity => CartError::PriceIntegrity,
                other => CartError::Repository(other),
            })?;

        Ok(items)
    }
}
