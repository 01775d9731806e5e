use std::sync::{Arc, RwLock};

use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::state::{CartAction, CartState, reduce};
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::cart::use_cases::load::{LoadCartParams, LoadCartUseCase};
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::cart::use_cases::set_quantity::{
    SetCartItemQuantityParams, SetCartItemQuantityUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;

/// Receives every state change, synchronously, after the reducer ran.
pub trait CartObserver: Send + Sync {
    fn on_change(&self, state: &CartState);
}

/// Session-scoped cart service. Owns the locally-held view of the remote
/// cart and is passed by reference to its consumers; there is no ambient
/// global instance. Every mutation goes remote-first, then the reloaded
/// authoritative state is fed through the pure reducer and observers are
/// notified.
pub struct CartStateContainer {
    user_id: UserId,
    state: RwLock<CartState>,
    observers: RwLock<Vec<Arc<dyn CartObserver>>>,
    load_use_case: Arc<dyn LoadCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    set_quantity_use_case: Arc<dyn SetCartItemQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
    logger: Arc<dyn Logger>,
}

impl CartStateContainer {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: UserId,
        load_use_case: Arc<dyn LoadCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        set_quantity_use_case: Arc<dyn SetCartItemQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            user_id,
            state: RwLock::new(CartState::default()),
            observers: RwLock::new(Vec::new()),
            load_use_case,
            add_item_use_case,
            set_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
            logger,
        }
    }

    pub fn subscribe(&self, observer: Arc<dyn CartObserver>) {
        match self.observers.write() {
            Ok(mut observers) => observers.push(observer),
            Err(poisoned) => poisoned.into_inner().push(observer),
        }
    }

    /// Runs the pure reducer under the lock, then notifies observers with
    /// a snapshot taken after the transition.
    fn dispatch(&self, action: CartAction) {
        let snapshot = {
            let mut guard = match self.state.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            let previous = std::mem::take(&mut *guard);
            *guard = reduce(previous, action);
            guard.clone()
        };

        let observers = match self.observers.read() {
            Ok(observers) => observers.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        for observer in observers {
            observer.on_change(&snapshot);
        }
    }

    fn settle(&self, result: Result<Vec<CartItem>, CartError>) -> Result<(), CartError> {
        let outcome = match result {
            Ok(items) => {
                self.dispatch(CartAction::SetItems(items));
                Ok(())
            }
            Err(e) => {
                self.logger.error(&format!("Cart operation failed: {}", e));
                self.dispatch(CartAction::SetError(e.to_string()));
                Err(e)
            }
        };
        self.dispatch(CartAction::SetLoading(false));
        outcome
    }

    pub async fn add_item(&self, product_id: Uuid, quantity: i32) -> Result<(), CartError> {
        self.dispatch(CartAction::SetLoading(true));
        let result = self
            .add_item_use_case
            .execute(AddCartItemParams {
                user_id: self.user_id.clone(),
                product_id,
                quantity,
            })
            .await;
        self.settle(result)
    }

    pub async fn set_quantity(&self, item_id: Uuid, quantity: i32) -> Result<(), CartError> {
        self.dispatch(CartAction::SetLoading(true));
        let result = self
            .set_quantity_use_case
            .execute(SetCartItemQuantityParams {
                user_id: self.user_id.clone(),
                item_id,
                quantity,
            })
            .await;
        self.settle(result)
    }

    pub async fn remove_item(&self, item_id: Uuid) -> Result<(), CartError> {
        self.dispatch(CartAction::SetLoading(true));
        let result = self
            .remove_item_use_case
            .execute(RemoveCartItemParams {
                user_id: self.user_id.clone(),
                item_id,
            })
            .await;
        self.settle(result)
    }

    pub async fn clear(&self) -> Result<(), CartError> {
        self.dispatch(CartAction::SetLoading(true));
        let result = self
            .clear_use_case
            .execute(ClearCartParams {
                user_id: self.user_id.clone(),
            })
            .await;
        self.settle(result)
    }

    /// Reloads authoritative state, discarding anything local-only.
    pub async fn refresh(&self) -> Result<(), CartError> {
        self.dispatch(CartAction::SetLoading(true));
        let result = self
            .load_use_case
            .execute(LoadCartParams {
                user_id: self.user_id.clone(),
            })
            .await;
        self.settle(result)
    }

    fn read_state(&self) -> CartState {
        match self.state.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn state(&self) -> CartState {
        self.read_state()
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.read_state().items
    }

    pub fn total(&self) -> BigDecimal {
        self.read_state().total()
    }

    pub fn count(&self) -> i32 {
        self.read_state().count()
    }

    pub fn loading(&self) -> bool {
        self.read_state().loading
    }

    pub fn last_error(&self) -> Option<String> {
        self.read_state().last_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use std::str::FromStr;
    use std::sync::Mutex;

    mock! {
        pub LoadUc {}

        #[async_trait]
        impl LoadCartUseCase for LoadUc {
            async fn execute(&self, params: LoadCartParams) -> Result<Vec<CartItem>, CartError>;
        }
    }

    mock! {
        pub AddUc {}

        #[async_trait]
        impl AddCartItemUseCase for AddUc {
            async fn execute(&self, params: AddCartItemParams) -> Result<Vec<CartItem>, CartError>;
        }
    }

    mock! {
        pub SetQtyUc {}

        #[async_trait]
        impl SetCartItemQuantityUseCase for SetQtyUc {
            async fn execute(&self, params: SetCartItemQuantityParams) -> Result<Vec<CartItem>, CartError>;
        }
    }

    mock! {
        pub RemoveUc {}

        #[async_trait]
        impl RemoveCartItemUseCase for RemoveUc {
            async fn execute(&self, params: RemoveCartItemParams) -> Result<Vec<CartItem>, CartError>;
        }
    }

    mock! {
        pub ClearUc {}

        #[async_trait]
        impl ClearCartUseCase for ClearUc {
            async fn execute(&self, params: ClearCartParams) -> Result<Vec<CartItem>, CartError>;
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

    struct RecordingObserver {
        states: Mutex<Vec<CartState>>,
    }

    impl RecordingObserver {
        fn new() -> Self {
            Self {
                states: Mutex::new(Vec::new()),
            }
        }
    }

    impl CartObserver for RecordingObserver {
        fn on_change(&self, state: &CartState) {
            self.states.lock().unwrap().push(state.clone());
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

    fn test_item(quantity: i32, price: &str) -> CartItem {
        CartItem::from_repository(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Espresso Beans".to_string(),
            BigDecimal::from_str(price).unwrap(),
            quantity,
            None,
        )
    }

    fn container_with(
        load: MockLoadUc,
        add: MockAddUc,
        set_qty: MockSetQtyUc,
        remove: MockRemoveUc,
        clear: MockClearUc,
    ) -> CartStateContainer {
        CartStateContainer::new(
            UserId::new("test-user-id"),
            Arc::new(load),
            Arc::new(add),
            Arc::new(set_qty),
            Arc::new(remove),
            Arc::new(clear),
            mock_logger(),
        )
    }

    #[tokio::test]
    async fn should_adopt_authoritative_items_after_add() {
        let mut add = MockAddUc::new();
        add.expect_execute()
            .returning(|_| Ok(vec![test_item(2, "10.99"), test_item(1, "5.00")]));

        let container = container_with(
            MockLoadUc::new(),
            add,
            MockSetQtyUc::new(),
            MockRemoveUc::new(),
            MockClearUc::new(),
        );

        let result = container.add_item(Uuid::new_v4(), 2).await;

        assert!(result.is_ok());
        assert_eq!(container.items().len(), 2);
        assert_eq!(container.count(), 3);
        assert_eq!(container.total(), BigDecimal::from_str("26.98").unwrap());
        assert!(!container.loading());
        assert!(container.last_error().is_none());
    }

    #[tokio::test]
    async fn should_notify_observers_for_each_transition() {
        let mut add = MockAddUc::new();
        add.expect_execute().returning(|_| Ok(vec![test_item(1, "10.99")]));

        let container = container_with(
            MockLoadUc::new(),
            add,
            MockSetQtyUc::new(),
            MockRemoveUc::new(),
            MockClearUc::new(),
        );

        let observer = Arc::new(RecordingObserver::new());
        container.subscribe(observer.clone());

        container.add_item(Uuid::new_v4(), 1).await.unwrap();

        let states = observer.states.lock().unwrap();
        // SetLoading(true), SetItems, SetLoading(false)
        assert_eq!(states.len(), 3);
        assert!(states[0].loading);
        assert_eq!(states[1].items.len(), 1);
        assert!(!states[2].loading);
    }

    #[tokio::test]
    async fn should_record_error_and_stop_loading_on_failure() {
        let mut add = MockAddUc::new();
        add.expect_execute()
            .returning(|_| Err(CartError::ProductNotFound));

        let container = container_with(
            MockLoadUc::new(),
            add,
            MockSetQtyUc::new(),
            MockRemoveUc::new(),
            MockClearUc::new(),
        );

        let result = container.add_item(Uuid::new_v4(), 1).await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
        assert!(!container.loading());
        assert_eq!(
            container.last_error().as_deref(),
            Some("cart.product_not_found")
        );
        assert!(container.items().is_empty());
    }

    #[tokio::test]
    async fn should_discard_local_state_on_refresh() {
        let mut add = MockAddUc::new();
        add.expect_execute()
            .returning(|_| Err(CartError::ProductNotFound));
        let mut load = MockLoadUc::new();
        load.expect_execute().returning(|_| Ok(vec![test_item(4, "2.50")]));

        let container = container_with(
            load,
            add,
            MockSetQtyUc::new(),
            MockRemoveUc::new(),
            MockClearUc::new(),
        );

        let _ = container.add_item(Uuid::new_v4(), 1).await;
        assert!(container.last_error().is_some());

        container.refresh().await.unwrap();

        // The authoritative reload replaces items and clears the error.
        assert_eq!(container.count(), 4);
        assert!(container.last_error().is_none());
    }

    #[tokio::test]
    async fn should_empty_items_after_clear() {
        let mut add = MockAddUc::new();
        add.expect_execute().returning(|_| Ok(vec![test_item(2, "10.99")]));
        let mut clear = MockClearUc::new();
        clear.expect_execute().returning(|_| Ok(vec![]));

        let container = container_with(
            MockLoadUc::new(),
            add,
            MockSetQtyUc::new(),
            MockRemoveUc::new(),
            clear,
        );

        container.add_item(Uuid::new_v4(), 2).await.unwrap();
        assert_eq!(container.count(), 2);

        container.clear().await.unwrap();
        assert_eq!(container.count(), 0);
        assert!(container.items().is_empty());
    }

    #[tokio::test]
    async fn should_route_set_quantity_through_use_case() {
        let item = test_item(5, "3.00");
        let item_id = item.id;
        let mut set_qty = MockSetQtyUc::new();
        set_qty
            .expect_execute()
            .withf(move |p| p.item_id == item_id && p.quantity == 5)
            .returning(move |_| Ok(vec![item.clone()]));

        let container = container_with(
            MockLoadUc::new(),
            MockAddUc::new(),
            set_qty,
            MockRemoveUc::new(),
            MockClearUc::new(),
        );

        container.set_quantity(item_id, 5).await.unwrap();
        assert_eq!(container.items()[0].quantity, 5);
    }
}
