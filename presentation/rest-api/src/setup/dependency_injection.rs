use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::{CartItemRepositoryPostgres, CartRepositoryPostgres};
use persistence::favorite::repository::FavoriteRepositoryPostgres;
use persistence::order::repository::{OrderItemRepositoryPostgres, OrderRepositoryPostgres};
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::load::LoadCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::set_quantity::SetCartItemQuantityUseCaseImpl;
use business::application::favorite::get_all::GetFavoritesUseCaseImpl;
use business::application::favorite::toggle::ToggleFavoriteUseCaseImpl;
use business::application::order::create_order::CreateOrderUseCaseImpl;
use business::application::order::get_all::GetUserOrdersUseCaseImpl;
use business::application::order::get_items::GetOrderItemsUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub order_api: crate::api::order::routes::OrderApi,
    pub favorite_api: crate::api::favorite::routes::FavoriteApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool.clone()));
        let cart_item_repository = Arc::new(CartItemRepositoryPostgres::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool.clone()));
        let order_item_repository = Arc::new(OrderItemRepositoryPostgres::new(pool.clone()));
        let favorite_repository = Arc::new(FavoriteRepositoryPostgres::new(pool));

        // Product use cases
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let load_cart_use_case = Arc::new(LoadCartUseCaseImpl {
            cart_repository: cart_repository.clone(),
            cart_item_repository: cart_item_repository.clone(),
            logger: logger.clone(),
        });
        let add_cart_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            cart_repository: cart_repository.clone(),
            cart_item_repository: cart_item_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let set_quantity_use_case = Arc::new(SetCartItemQuantityUseCaseImpl {
            cart_repository: cart_repository.clone(),
            cart_item_repository: cart_item_repository.clone(),
            logger: logger.clone(),
        });
        let remove_cart_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            cart_repository: cart_repository.clone(),
            cart_item_repository: cart_item_repository.clone(),
            logger: logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            cart_repository: cart_repository.clone(),
            cart_item_repository: cart_item_repository.clone(),
            logger: logger.clone(),
        });

        // Order use cases
        let create_order_use_case = Arc::new(CreateOrderUseCaseImpl {
            cart_repository,
            cart_item_repository,
            order_repository: order_repository.clone(),
            order_item_repository: order_item_repository.clone(),
            logger: logger.clone(),
        });
        let get_orders_use_case = Arc::new(GetUserOrdersUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let get_order_items_use_case = Arc::new(GetOrderItemsUseCaseImpl {
            order_repository,
            order_item_repository,
            logger: logger.clone(),
        });

        // Favorite use cases
        let toggle_favorite_use_case = Arc::new(ToggleFavoriteUseCaseImpl {
            repository: favorite_repository.clone(),
            product_repository,
            logger: logger.clone(),
        });
        let get_favorites_use_case = Arc::new(GetFavoritesUseCaseImpl {
            repository: favorite_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            get_all_products_use_case,
            get_product_by_id_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            load_cart_use_case,
            add_cart_item_use_case,
            set_quantity_use_case,
            remove_cart_item_use_case,
            clear_cart_use_case,
        );

        let order_api = crate::api::order::routes::OrderApi::new(
            create_order_use_case,
            get_orders_use_case,
            get_order_items_use_case,
        );

        let favorite_api = crate::api::favorite::routes::FavoriteApi::new(
            toggle_favorite_use_case,
            get_favorites_use_case,
        );

        Self {
            health_api,
            product_api,
            cart_api,
            order_api,
            favorite_api,
        }
    }
}
