use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            OrderError::CartNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "order.cart_not_found")
            }
            OrderError::EmptyCart => (StatusCode::CONFLICT, "Conflict", "order.empty_cart"),
            OrderError::TotalNegative => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.total_negative",
            ),
            OrderError::PriceIntegrity => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "order.price_integrity",
            ),
            OrderError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "order.not_found"),
            OrderError::Repository(RepositoryError::Duplicated) => {
                (StatusCode::CONFLICT, "Conflict", "repository.duplicated")
            }
            OrderError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
