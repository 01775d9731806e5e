use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::load::{LoadCartParams, LoadCartUseCase};
use business::domain::cart::use_cases::remove_item::{
    RemoveCartItemParams, RemoveCartItemUseCase,
};
use business::domain::cart::use_cases::set_quantity::{
    SetCartItemQuantityParams, SetCartItemQuantityUseCase,
};
use business::domain::shared::value_objects::UserId;

use crate::api::cart::dto::{AddCartItemRequest, CartResponse, UpdateCartItemRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct CartApi {
    load_use_case: Arc<dyn LoadCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    set_quantity_use_case: Arc<dyn SetCartItemQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        load_use_case: Arc<dyn LoadCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        set_quantity_use_case: Arc<dyn SetCartItemQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            load_use_case,
            add_item_use_case,
            set_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
        }
    }
}

/// Cart management API
///
/// Every mutation responds with the reloaded authoritative cart, so
/// clients never have to patch local state.
#[OpenApi]
impl CartApi {
    /// Read the caller's cart
    ///
    /// Creates the cart lazily on first access.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, auth: BearerAuth) -> CartOpResponse {
        let result = self
            .load_use_case
            .execute(LoadCartParams {
                user_id: UserId::new(auth.0),
            })
            .await;

        match result {
            Ok(items) => CartOpResponse::Ok(Json(items.into())),
            Err(err) => map_cart_error(err),
        }
    }

    /// Add a product to the cart
    ///
    /// Adding a product that is already in the cart increments its
    /// quantity instead of creating a second line.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, auth: BearerAuth, body: Json<AddCartItemRequest>) -> CartOpResponse {
        let product_id = match Uuid::parse_str(&body.0.product_id) {
            Ok(uuid) => uuid,
            Err(_) => {
                return CartOpResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "cart.invalid_product_id".to_string(),
                }));
            }
        };

        let result = self
            .add_item_use_case
            .execute(AddCartItemParams {
                user_id: UserId::new(auth.0),
                product_id,
                quantity: body.0.quantity,
            })
            .await;

        match result {
            Ok(items) => CartOpResponse::Ok(Json(items.into())),
            Err(err) => map_cart_error(err),
        }
    }

    /// Set a cart item's quantity
    ///
    /// A quantity of zero or less removes the item.
    #[oai(path = "/cart/items/:id", method = "put", tag = "ApiTags::Cart")]
    async fn set_quantity(
        &self,
        auth: BearerAuth,
        id: Path<String>,
        body: Json<UpdateCartItemRequest>,
    ) -> CartOpResponse {
        let item_id = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return CartOpResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "cart.invalid_item_id".to_string(),
                }));
            }
        };

        let result = self
            .set_quantity_use_case
            .execute(SetCartItemQuantityParams {
                user_id: UserId::new(auth.0),
                item_id,
                quantity: body.0.quantity,
            })
            .await;

        match result {
            Ok(items) => CartOpResponse::Ok(Json(items.into())),
            Err(err) => map_cart_error(err),
        }
    }

    /// Remove a cart item
    #[oai(path = "/cart/items/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(&self, auth: BearerAuth, id: Path<String>) -> CartOpResponse {
        let item_id = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return CartOpResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "cart.invalid_item_id".to_string(),
                }));
            }
        };

        let result = self
            .remove_item_use_case
            .execute(RemoveCartItemParams {
                user_id: UserId::new(auth.0),
                item_id,
            })
            .await;

        match result {
            Ok(items) => CartOpResponse::Ok(Json(items.into())),
            Err(err) => map_cart_error(err),
        }
    }

    /// Empty the cart
    #[oai(path = "/cart/items", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self, auth: BearerAuth) -> CartOpResponse {
        let result = self
            .clear_use_case
            .execute(ClearCartParams {
                user_id: UserId::new(auth.0),
            })
            .await;

        match result {
            Ok(items) => CartOpResponse::Ok(Json(items.into())),
            Err(err) => map_cart_error(err),
        }
    }
}

fn map_cart_error(err: business::domain::cart::errors::CartError) -> CartOpResponse {
    let (status, json) = err.into_error_response();
    match status.as_u16() {
        400 => CartOpResponse::BadRequest(json),
        404 => CartOpResponse::NotFound(json),
        _ => CartOpResponse::InternalError(json),
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartOpResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
