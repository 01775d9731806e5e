use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::{CartItemRepository, CartRepository};
use crate::domain::cart::use_cases::set_quantity::{
    SetCartItemQuantityParams, SetCartItemQuantityUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct SetCartItemQuantityUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub cart_item_repository: Arc<dyn CartItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetCartItemQuantityUseCase for SetCartItemQuantityUseCaseImpl {
    async fn execute(
        &self,
        params: SetCartItemQuantityParams,
    ) -> Result<Vec<CartItem>, CartError> {
        self.logger.info(&format!(
            "Setting quantity of cart item {} to {}",
            params.item_id, params.quantity
        ));

        // Zero or below is a removal, never a stored zero row.
        if params.quantity <= 0 {
            self.cart_item_repository.delete(params.item_id).await?;
        } else {
            self.cart_item_repository
                .update_quantity(params.item_id, params.quantity)
                .await
                .map_err(|e| match e {
                    RepositoryError::NotFound => CartError::ItemNotFound,
                    other => CartError::Repository(other),
                })?;
        }

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::Cart;
    use crate::domain::shared::value_objects::UserId;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use mockall::predicate::eq;
    use std::str::FromStr;
    use uuid::Uuid;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn get_or_create(&self, user_id: &UserId) -> Result<Cart, RepositoryError>;
            async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError>;
        }
    }

    mock! {
        pub CartItemRepo {}

        #[async_trait]
        impl CartItemRepository for CartItemRepo {
            async fn get_by_cart(&self, cart_id: Uuid) -> Result<Vec<CartItem>, RepositoryError>;
            async fn find_by_product(&self, cart_id: Uuid, product_id: Uuid) -> Result<Option<CartItem>, RepositoryError>;
            async fn insert(&self, item: &CartItem) -> Result<(), RepositoryError>;
            async fn increment_quantity(&self, id: Uuid, by: i32) -> Result<(), RepositoryError>;
            async fn update_quantity(&self, id: Uuid, quantity: i32) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn delete_by_cart(&self, cart_id: Uuid) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn test_user_id() -> UserId {
        UserId::new("test-user-id")
    }

    fn test_cart() -> Cart {
        Cart::from_repository(Uuid::new_v4(), test_user_id(), chrono::Utc::now())
    }

    fn test_item(cart_id: Uuid, quantity: i32) -> CartItem {
        CartItem::from_repository(
            Uuid::new_v4(),
            cart_id,
            Uuid::new_v4(),
            "Espresso Beans".to_string(),
            BigDecimal::from_str("10.99").unwrap(),
            quantity,
            None,
        )
    }

    #[tokio::test]
    async fn should_update_quantity_when_positive() {
        let cart = test_cart();
        let cart_id = cart.id;
        let item_id = Uuid::new_v4();

        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_get_or_create()
            .returning(move |_| Ok(cart.clone()));

        let mut item_repo = MockCartItemRepo::new();
        item_repo
            .expect_update_quantity()
            .with(eq(item_id), eq(5))
            .times(1)
            .returning(|_, _| Ok(()));
        item_repo.expect_delete().never();
        item_repo
            .expect_get_by_cart()
            .returning(move |_| Ok(vec![test_item(cart_id, 5)]));

        let use_case = SetCartItemQuantityUseCaseImpl {
            cart_repository: Arc::new(cart_repo),
            cart_item_repository: Arc::new(item_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetCartItemQuantityParams {
                user_id: test_user_id(),
                item_id,
                quantity: 5,
            })
            .await;

        assert_eq!(result.unwrap()[0].quantity, 5);
    }

    #[tokio::test]
    async fn should_remove_item_when_quantity_zero() {
        let cart = test_cart();
        let item_id = Uuid::new_v4();

        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_get_or_create()
            .returning(move |_| Ok(cart.clone()));

        let mut item_repo = MockCartItemRepo::new();
        item_repo
            .expect_delete()
            .with(eq(item_id))
            .times(1)
            .returning(|_| Ok(()));
        item_repo.expect_update_quantity().never();
        item_repo.expect_get_by_cart().returning(|_| Ok(vec![]));

        let use_case = SetCartItemQuantityUseCaseImpl {
            cart_repository: Arc::new(cart_repo),
            cart_item_repository: Arc::new(item_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetCartItemQuantityParams {
                user_id: test_user_id(),
                item_id,
                quantity: 0,
            })
            .await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_remove_item_when_quantity_negative() {
        let cart = test_cart();
        let item_id = Uuid::new_v4();

        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_get_or_create()
            .returning(move |_| Ok(cart.clone()));

        let mut item_repo = MockCartItemRepo::new();
        item_repo
            .expect_delete()
            .with(eq(item_id))
            .times(1)
            .returning(|_| Ok(()));
        item_repo.expect_get_by_cart().returning(|_| Ok(vec![]));

        let use_case = SetCartItemQuantityUseCaseImpl {
            cart_repository: Arc::new(cart_repo),
            cart_item_repository: Arc::new(item_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetCartItemQuantityParams {
                user_id: test_user_id(),
                item_id,
                quantity: -1,
            })
            .await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_fail_with_item_not_found_for_unknown_item() {
        let mut item_repo = MockCartItemRepo::new();
        item_repo
            .expect_update_quantity()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = SetCartItemQuantityUseCaseImpl {
            cart_repository: Arc::new(MockCartRepo::new()),
            cart_item_repository: Arc::new(item_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetCartItemQuantityParams {
                user_id: test_user_id(),
                item_id: Uuid::new_v4(),
                quantity: 3,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ItemNotFound));
    }
}
