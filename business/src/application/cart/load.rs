use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::{CartItemRepository, CartRepository};
use crate::domain::cart::use_cases::load::{LoadCartParams, LoadCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct LoadCartUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub cart_item_repository: Arc<dyn CartItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadCartUseCase for LoadCartUseCaseImpl {
    async fn execute(&self, params: LoadCartParams) -> Result<Vec<CartItem>, CartError> {
        self.logger
            .debug(&format!("Loading cart for user {}", params.user_id));

        // Get-or-create: a missing cart self-heals instead of failing.
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
