use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::favorite::model::Favorite;

#[derive(Debug, Clone, Object)]
pub struct ToggleFavoriteResponse {
    /// The toggled product
    pub product_id: String,
    /// Whether the product is a favorite after the toggle
    pub favorite: bool,
}

#[derive(Debug, Clone, Object)]
pub struct FavoriteResponse {
    /// Favorite unique identifier
    pub id: String,
    /// Bookmarked product
    pub product_id: String,
    /// When the product was favorited
    pub created_at: DateTime<Utc>,
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        Self {
            id: favorite.id.to_string(),
            product_id: favorite.product_id.to_string(),
            created_at: favorite.created_at,
        }
    }
}
