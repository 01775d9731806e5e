use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::repository::{CartItemRepository, CartRepository};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{Order, OrderItem};
use crate::domain::order::repository::{OrderItemRepository, OrderRepository};
use crate::domain::order::use_cases::create_order::{CreateOrderParams, CreateOrderUseCase};

/// Converts a cart into an order through several dependent writes. The
/// store offers no cross-statement transaction, so the workflow acts as a
/// small saga: the order header is compensated away when the line-item
/// insert fails, and the post-commit cart clear is the only failure that
/// is swallowed (the paid order must stand).
pub struct CreateOrderUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub cart_item_repository: Arc<dyn CartItemRepository>,
    pub order_repository: Arc<dyn OrderRepository>,
    pub order_item_repository: Arc<dyn OrderItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateOrderUseCase for CreateOrderUseCaseImpl {
    async fn execute(&self, params: CreateOrderParams) -> Result<Uuid, OrderError> {
        self.logger.info(&format!(
            "Creating order for user {} (delivery: {})",
            params.user_id, params.delivery_type
        ));

        // A replayed submission returns the order it already created.
        if let Some(existing) = self
            .order_repository
            .find_by_idempotency_key(params.idempotency_key, &params.user_id)
            .await?
        {
            self.logger.info(&format!(
                "Idempotency key {} already committed as order {}",
                params.idempotency_key, existing.id
            ));
            return Ok(existing.id);
        }

        // Steps 1-2 only read; nothing is mutated before the header insert.
        let cart = self
            .cart_repository
            .find_by_user(&params.user_id)
            .await?
            .ok_or(OrderError::CartNotFound)?;

        let items = self
            .cart_item_repository
            .get_by_cart(cart.id)
            .await
            .map_err(|e| match e {
                RepositoryError::Integrity => OrderError::PriceIntegrity,
                other => OrderError::Repository(other),
            })?;
        if items.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let order = Order::new(
            params.user_id.clone(),
            params.total_amount,
            params.delivery_type,
            params.idempotency_key,
        )?;
        self.order_repository.insert(&order).await?;

        // Line items carry the price snapshot taken above, never the live
        // product price at some later time.
        let order_items: Vec<OrderItem> = items
            .iter()
            .map(|item| OrderItem::from_cart_item(order.id, item))
            .collect();

        if let Err(insert_err) = self.order_item_repository.insert_many(&order_items).await {
            // Compensation: no order header may survive without its items.
            if let Err(delete_err) = self.order_repository.delete(order.id).await {
                self.logger.error(&format!(
                    "Orphaned order header {}: item insert failed ({}) and compensating delete failed ({})",
                    order.id, insert_err, delete_err
                ));
            } else {
                self.logger.warn(&format!(
                    "Rolled back order header {} after item insert failure",
                    order.id
                ));
            }
            return Err(OrderError::Repository(insert_err));
        }

        // The order is now the source of truth; a failed cart clear is
        // logged and swallowed.
        if let Err(clear_err) = self.cart_item_repository.delete_by_cart(cart.id).await {
            self.logger.warn(&format!(
                "Cart {} not cleared after order {}: {}",
                cart.id, order.id, clear_err
            ));
        }

        self.logger
            .info(&format!("Order created: {}", order.id));
        Ok(order.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{Cart, CartItem};
    use crate::domain::order::value_objects::OrderStatus;
    use crate::domain::shared::value_objects::UserId;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use mockall::predicate::eq;
    use std::str::FromStr;
    use std::sync::Mutex;

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
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn insert(&self, order: &Order) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn find_by_idempotency_key(&self, key: Uuid, user_id: &UserId) -> Result<Option<Order>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<Order, RepositoryError>;
            async fn get_all(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError>;
        }
    }

    mock! {
        pub OrderItemRepo {}

        #[async_trait]
        impl OrderItemRepository for OrderItemRepo {
            async fn insert_many(&self, items: &[OrderItem]) -> Result<(), RepositoryError>;
            async fn get_by_order(&self, order_id: Uuid) -> Result<Vec<OrderItem>, RepositoryError>;
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

    fn cart_item(cart_id: Uuid, name: &str, price: &str, quantity: i32) -> CartItem {
        CartItem::from_repository(
            Uuid::new_v4(),
            cart_id,
            Uuid::new_v4(),
            name.to_string(),
            BigDecimal::from_str(price).unwrap(),
            quantity,
            None,
        )
    }

    fn params(total: &str, delivery: &str) -> CreateOrderParams {
        CreateOrderParams {
            user_id: test_user_id(),
            total_amount: BigDecimal::from_str(total).unwrap(),
            delivery_type: delivery.to_string(),
            idempotency_key: Uuid::new_v4(),
        }
    }

    fn no_replay(order_repo: &mut MockOrderRepo) {
        order_repo
            .expect_find_by_idempotency_key()
            .returning(|_, _| Ok(None));
    }

    #[tokio::test]
    async fn should_commit_cart_into_order_with_snapshot_items() {
        // Cart: 2x A @ 10.99, 1x B @ 5.00 -> subtotal 26.98.
        let cart = test_cart();
        let cart_id = cart.id;
        let items = vec![
            cart_item(cart_id, "Product A", "10.99", 2),
            cart_item(cart_id, "Product B", "5.00", 1),
        ];

        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_find_by_user()
            .returning(move |_| Ok(Some(cart.clone())));

        let mut item_repo = MockCartItemRepo::new();
        let loaded = items.clone();
        item_repo
            .expect_get_by_cart()
            .returning(move |_| Ok(loaded.clone()));
        item_repo
            .expect_delete_by_cart()
            .with(eq(cart_id))
            .times(1)
            .returning(|_| Ok(2));

        let inserted_order: Arc<Mutex<Option<Order>>> = Arc::new(Mutex::new(None));
        let mut order_repo = MockOrderRepo::new();
        no_replay(&mut order_repo);
        let sink = inserted_order.clone();
        order_repo
            .expect_insert()
            .times(1)
            .returning(move |order| {
                *sink.lock().unwrap() = Some(order.clone());
                Ok(())
            });
        order_repo.expect_delete().never();

        let inserted_items: Arc<Mutex<Vec<OrderItem>>> = Arc::new(Mutex::new(Vec::new()));
        let mut order_item_repo = MockOrderItemRepo::new();
        let item_sink = inserted_items.clone();
        order_item_repo
            .expect_insert_many()
            .times(1)
            .returning(move |rows| {
                item_sink.lock().unwrap().extend_from_slice(rows);
                Ok(())
            });

        let use_case = CreateOrderUseCaseImpl {
            cart_repository: Arc::new(cart_repo),
            cart_item_repository: Arc::new(item_repo),
            order_repository: Arc::new(order_repo),
            order_item_repository: Arc::new(order_item_repo),
            logger: mock_logger(),
        };

        let order_id = use_case.execute(params("26.98", "retirada")).await.unwrap();

        let order = inserted_order.lock().unwrap().clone().unwrap();
        assert_eq!(order.id, order_id);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total_amount, BigDecimal::from_str("26.98").unwrap());
        assert_eq!(order.delivery_type, "retirada");

        let rows = inserted_items.lock().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.iter().map(|r| r.quantity).sum::<i32>(), 3);
        assert!(rows.iter().all(|r| r.order_id == order_id));
        // Snapshot prices come from the loaded cart, not any later read.
        assert_eq!(
            rows[0].unit_price_snapshot,
            BigDecimal::from_str("10.99").unwrap()
        );
        assert_eq!(
            rows[1].unit_price_snapshot,
            BigDecimal::from_str("5.00").unwrap()
        );
    }

    #[tokio::test]
    async fn should_fail_with_cart_not_found_without_mutating_anything() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_find_by_user().returning(|_| Ok(None));

        let mut order_repo = MockOrderRepo::new();
        no_replay(&mut order_repo);
        order_repo.expect_insert().never();

        let use_case = CreateOrderUseCaseImpl {
            cart_repository: Arc::new(cart_repo),
            cart_item_repository: Arc::new(MockCartItemRepo::new()),
            order_repository: Arc::new(order_repo),
            order_item_repository: Arc::new(MockOrderItemRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("26.98", "retirada")).await;

        assert!(matches!(result.unwrap_err(), OrderError::CartNotFound));
    }

    #[tokio::test]
    async fn should_fail_with_empty_cart_without_creating_order_rows() {
        let cart = test_cart();

        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_find_by_user()
            .returning(move |_| Ok(Some(cart.clone())));

        let mut item_repo = MockCartItemRepo::new();
        item_repo.expect_get_by_cart().returning(|_| Ok(vec![]));
        item_repo.expect_delete_by_cart().never();

        let mut order_repo = MockOrderRepo::new();
        no_replay(&mut order_repo);
        order_repo.expect_insert().never();

        let use_case = CreateOrderUseCaseImpl {
            cart_repository: Arc::new(cart_repo),
            cart_item_repository: Arc::new(item_repo),
            order_repository: Arc::new(order_repo),
            order_item_repository: Arc::new(MockOrderItemRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("26.98", "retirada")).await;

        assert!(matches!(result.unwrap_err(), OrderError::EmptyCart));
    }

    #[tokio::test]
    async fn should_compensate_header_when_item_insert_fails() {
        let cart = test_cart();
        let cart_id = cart.id;
        let items = vec![cart_item(cart_id, "Product A", "10.99", 2)];

        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_find_by_user()
            .returning(move |_| Ok(Some(cart.clone())));

        let mut item_repo = MockCartItemRepo::new();
        item_repo
            .expect_get_by_cart()
            .returning(move |_| Ok(items.clone()));
        // The cart survives a failed commit untouched.
        item_repo.expect_delete_by_cart().never();

        let inserted_order: Arc<Mutex<Option<Uuid>>> = Arc::new(Mutex::new(None));
        let mut order_repo = MockOrderRepo::new();
        no_replay(&mut order_repo);
        let sink = inserted_order.clone();
        order_repo.expect_insert().returning(move |order| {
            *sink.lock().unwrap() = Some(order.id);
            Ok(())
        });
        let created = inserted_order.clone();
        order_repo
            .expect_delete()
            .times(1)
            .withf(move |id| Some(*id) == *created.lock().unwrap())
            .returning(|_| Ok(()));

        let mut order_item_repo = MockOrderItemRepo::new();
        order_item_repo
            .expect_insert_many()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateOrderUseCaseImpl {
            cart_repository: Arc::new(cart_repo),
            cart_item_repository: Arc::new(item_repo),
            order_repository: Arc::new(order_repo),
            order_item_repository: Arc::new(order_item_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("21.98", "entrega")).await;

        // The original failure surfaces, not the compensation outcome.
        assert!(matches!(
            result.unwrap_err(),
            OrderError::Repository(RepositoryError::DatabaseError)
        ));
    }

    #[tokio::test]
    async fn should_surface_original_error_even_when_compensation_fails() {
        let cart = test_cart();
        let cart_id = cart.id;
        let items = vec![cart_item(cart_id, "Product A", "10.99", 1)];

        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_find_by_user()
            .returning(move |_| Ok(Some(cart.clone())));

        let mut item_repo = MockCartItemRepo::new();
        item_repo
            .expect_get_by_cart()
            .returning(move |_| Ok(items.clone()));

        let mut order_repo = MockOrderRepo::new();
        no_replay(&mut order_repo);
        order_repo.expect_insert().returning(|_| Ok(()));
        order_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let mut order_item_repo = MockOrderItemRepo::new();
        order_item_repo
            .expect_insert_many()
            .returning(|_| Err(RepositoryError::Persistence));

        let use_case = CreateOrderUseCaseImpl {
            cart_repository: Arc::new(cart_repo),
            cart_item_repository: Arc::new(item_repo),
            order_repository: Arc::new(order_repo),
            order_item_repository: Arc::new(order_item_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("10.99", "retirada")).await;

        assert!(matches!(
            result.unwrap_err(),
            OrderError::Repository(RepositoryError::Persistence)
        ));
    }

    #[tokio::test]
    async fn should_swallow_cart_clear_failure_after_commit() {
        let cart = test_cart();
        let cart_id = cart.id;
        let items = vec![cart_item(cart_id, "Product A", "10.99", 1)];

        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_find_by_user()
            .returning(move |_| Ok(Some(cart.clone())));

        let mut item_repo = MockCartItemRepo::new();
        item_repo
            .expect_get_by_cart()
            .returning(move |_| Ok(items.clone()));
        item_repo
            .expect_delete_by_cart()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let mut order_repo = MockOrderRepo::new();
        no_replay(&mut order_repo);
        order_repo.expect_insert().returning(|_| Ok(()));
        order_repo.expect_delete().never();

        let mut order_item_repo = MockOrderItemRepo::new();
        order_item_repo.expect_insert_many().returning(|_| Ok(()));

        let use_case = CreateOrderUseCaseImpl {
            cart_repository: Arc::new(cart_repo),
            cart_item_repository: Arc::new(item_repo),
            order_repository: Arc::new(order_repo),
            order_item_repository: Arc::new(order_item_repo),
            logger: mock_logger(),
        };

        // The order stands even though the cart was not cleared.
        let result = use_case.execute(params("10.99", "retirada")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_existing_order_for_replayed_idempotency_key() {
        let key = Uuid::new_v4();
        let existing = Order::from_repository(
            Uuid::new_v4(),
            test_user_id(),
            OrderStatus::Pending,
            BigDecimal::from_str("26.98").unwrap(),
            "retirada".to_string(),
            key,
            chrono::Utc::now(),
        );
        let existing_id = existing.id;

        let mut order_repo = MockOrderRepo::new();
        order_repo
            .expect_find_by_idempotency_key()
            .with(eq(key), eq(test_user_id()))
            .returning(move |_, _| Ok(Some(existing.clone())));
        order_repo.expect_insert().never();

        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_find_by_user().never();

        let use_case = CreateOrderUseCaseImpl {
            cart_repository: Arc::new(cart_repo),
            cart_item_repository: Arc::new(MockCartItemRepo::new()),
            order_repository: Arc::new(order_repo),
            order_item_repository: Arc::new(MockOrderItemRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateOrderParams {
                user_id: test_user_id(),
                total_amount: BigDecimal::from_str("26.98").unwrap(),
                delivery_type: "retirada".to_string(),
                idempotency_key: key,
            })
            .await;

        assert_eq!(result.unwrap(), existing_id);
    }

    #[tokio::test]
    async fn should_reject_negative_total_before_any_insert() {
        let cart = test_cart();
        let cart_id = cart.id;
        let items = vec![cart_item(cart_id, "Product A", "10.99", 1)];

        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_find_by_user()
            .returning(move |_| Ok(Some(cart.clone())));

        let mut item_repo = MockCartItemRepo::new();
        item_repo
            .expect_get_by_cart()
            .returning(move |_| Ok(items.clone()));

        let mut order_repo = MockOrderRepo::new();
        no_replay(&mut order_repo);
        order_repo.expect_insert().never();

        let use_case = CreateOrderUseCaseImpl {
            cart_repository: Arc::new(cart_repo),
            cart_item_repository: Arc::new(item_repo),
            order_repository: Arc::new(order_repo),
            order_item_repository: Arc::new(MockOrderItemRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("-1.00", "retirada")).await;

        assert!(matches!(result.unwrap_err(), OrderError::TotalNegative));
    }
}
