use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::favorite::use_cases::get_all::{GetFavoritesParams, GetFavoritesUseCase};
use business::domain::favorite::use_cases::toggle::{ToggleFavoriteParams, ToggleFavoriteUseCase};
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::favorite::dto::{FavoriteResponse, ToggleFavoriteResponse};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct FavoriteApi {
    toggle_use_case: Arc<dyn ToggleFavoriteUseCase>,
    get_all_use_case: Arc<dyn GetFavoritesUseCase>,
}

impl FavoriteApi {
    pub fn new(
        toggle_use_case: Arc<dyn ToggleFavoriteUseCase>,
        get_all_use_case: Arc<dyn GetFavoritesUseCase>,
    ) -> Self {
        Self {
            toggle_use_case,
            get_all_use_case,
        }
    }
}

/// Favorites API
#[OpenApi]
impl FavoriteApi {
    /// Toggle a product as favorite
    #[oai(
        path = "/favorites/:product_id",
        method = "put",
        tag = "ApiTags::Favorites"
    )]
    async fn toggle(&self, auth: BearerAuth, product_id: Path<String>) -> ToggleResponse {
        let uuid = match Uuid::parse_str(&product_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return ToggleResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "favorite.invalid_product_id".to_string(),
                }));
            }
        };

        match self
            .toggle_use_case
            .execute(ToggleFavoriteParams {
                user_id: UserId::new(auth.0),
                product_id: uuid,
            })
            .await
        {
            Ok(favorite) => ToggleResponse::Ok(Json(ToggleFavoriteResponse {
                product_id: uuid.to_string(),
                favorite,
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ToggleResponse::NotFound(json),
                    _ => ToggleResponse::InternalError(json),
                }
            }
        }
    }

    /// List the caller's favorites
    #[oai(path = "/favorites", method = "get", tag = "ApiTags::Favorites")]
    async fn get_all(&self, auth: BearerAuth) -> GetFavoritesResponse {
        match self
            .get_all_use_case
            .execute(GetFavoritesParams {
                user_id: UserId::new(auth.0),
            })
            .await
        {
            Ok(favorites) => {
                let responses: Vec<FavoriteResponse> =
                    favorites.into_iter().map(|f| f.into()).collect();
                GetFavoritesResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetFavoritesResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ToggleResponse {
    #[oai(status = 200)]
    Ok(Json<ToggleFavoriteResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetFavoritesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<FavoriteResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
