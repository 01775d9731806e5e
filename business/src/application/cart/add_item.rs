use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::{CartItemRepository, CartRepository};
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddCartItemUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub cart_item_repository: Arc<dyn CartItemRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Vec<CartItem>, CartError> {
        if params.quantity < 1 {
            return Err(CartError::QuantityInvalid);
        }

        self.logger.info(&format!(
            "Adding product {} x{} to cart of user {}",
            params.product_id, params.quantity, params.user_id
        ));

        let cart = self.cart_repository.get_or_create(&params.user_id).await?;

        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        // Merge-on-add: one line per product. The bump is atomic at the
        // store, so concurrent adds for the same product do not lose units.
        match self
            .cart_item_repository
            .find_by_product(cart.id, product.id)
            .await?
        {
            Some(existing) => {
                self.cart_item_repository
                    .increment_quantity(existing.id, params.quantity)
                    .await?;
            }
            None => {
                let item = CartItem::new(
                    cart.id,
                    product.id,
                    product.name.clone(),
                    product.price_amount.clone(),
                    params.quantity,
                    product.image_url.clone(),
                )?;
                self.cart_item_repository.insert(&item).await?;
            }
        }

        // Reload instead of patching local state; the store stays the
        // single source of truth.
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
