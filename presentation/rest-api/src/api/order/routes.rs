use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::order::use_cases::create_order::{CreateOrderParams, CreateOrderUseCase};
use business::domain::order::use_cases::get_all::{GetUserOrdersParams, GetUserOrdersUseCase};
use business::domain::order::use_cases::get_items::{GetOrderItemsParams, GetOrderItemsUseCase};
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{
    CheckoutRequest, CheckoutResponse, OrderItemResponse, OrderResponse,
};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    create_order_use_case: Arc<dyn CreateOrderUseCase>,
    get_orders_use_case: Arc<dyn GetUserOrdersUseCase>,
    get_items_use_case: Arc<dyn GetOrderItemsUseCase>,
}

impl OrderApi {
    pub fn new(
        create_order_use_case: Arc<dyn CreateOrderUseCase>,
        get_orders_use_case: Arc<dyn GetUserOrdersUseCase>,
        get_items_use_case: Arc<dyn GetOrderItemsUseCase>,
    ) -> Self {
        Self {
            create_order_use_case,
            get_orders_use_case,
            get_items_use_case,
        }
    }
}

/// Checkout and order history API
#[OpenApi]
impl OrderApi {
    /// Commit the cart into an order
    ///
    /// Creates a pending order from the current cart snapshot and empties
    /// the cart. Safe to retry with the same idempotency key.
    #[oai(path = "/checkout", method = "post", tag = "ApiTags::Orders")]
    async fn checkout(&self, auth: BearerAuth, body: Json<CheckoutRequest>) -> CheckoutApiResponse {
        let total_amount = match BigDecimal::from_str(&body.0.total_amount) {
            Ok(amount) => amount,
            Err(_) => {
                return CheckoutApiResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "order.invalid_total".to_string(),
                }));
            }
        };

        let idempotency_key = match Uuid::parse_str(&body.0.idempotency_key) {
            Ok(uuid) => uuid,
            Err(_) => {
                return CheckoutApiResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "order.invalid_idempotency_key".to_string(),
                }));
            }
        };

        let result = self
            .create_order_use_case
            .execute(CreateOrderParams {
                user_id: UserId::new(auth.0),
                total_amount,
                delivery_type: body.0.delivery_type,
                idempotency_key,
            })
            .await;

        match result {
            Ok(order_id) => CheckoutApiResponse::Created(Json(CheckoutResponse {
                order_id: order_id.to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CheckoutApiResponse::BadRequest(json),
                    404 => CheckoutApiResponse::NotFound(json),
                    409 => CheckoutApiResponse::Conflict(json),
                    _ => CheckoutApiResponse::InternalError(json),
                }
            }
        }
    }

    /// List the caller's orders, newest first
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_orders(&self, auth: BearerAuth) -> GetOrdersResponse {
        match self
            .get_orders_use_case
            .execute(GetUserOrdersParams {
                user_id: UserId::new(auth.0),
            })
            .await
        {
            Ok(orders) => {
                let responses: Vec<OrderResponse> = orders.into_iter().map(|o| o.into()).collect();
                GetOrdersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetOrdersResponse::InternalError(json)
            }
        }
    }

    /// List an order's line items
    #[oai(path = "/orders/:id/items", method = "get", tag = "ApiTags::Orders")]
    async fn get_order_items(&self, auth: BearerAuth, id: Path<String>) -> GetOrderItemsResponse {
        let order_id = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetOrderItemsResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "order.invalid_id".to_string(),
                }));
            }
        };

        match self
            .get_items_use_case
            .execute(GetOrderItemsParams {
                user_id: UserId::new(auth.0),
                order_id,
            })
            .await
        {
            Ok(items) => {
                let responses: Vec<OrderItemResponse> =
                    items.into_iter().map(|i| i.into()).collect();
                GetOrderItemsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetOrderItemsResponse::NotFound(json),
                    _ => GetOrderItemsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutApiResponse {
    #[oai(status = 201)]
    Created(Json<CheckoutResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
