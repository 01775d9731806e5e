use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::{CartItemRepository, CartRepository};
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub cart_item_repository: Arc<dyn CartItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, params: ClearCartParams) -> Result<Vec<CartItem>, CartError> {
        self.logger
            .info(&format!("Clearing cart for user {}", params.user_id));

        let cart = self.cart_repository.get_or_create(&params.user_id).await?;
        let items = self
            .cart_item_repository
            .get_by_cart(cart.id)
            .await
            .map_err(|e| match e {
                RepositoryError::Integrity => CartError::PriceIntegrity,
                other => CartError::Repository(other),
            })?;

        // One removal per item; a failure part-way leaves the remaining
        // items in place and surfaces to the caller.
        for item in &items {
            self.cart_item_repository.delete(item.id).await?;
        }

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
