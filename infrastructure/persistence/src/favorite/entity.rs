use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::favorite::model::Favorite;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct FavoriteEntity {
    pub id: Uuid,
    pub user_id: String,
    pub product_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl FavoriteEntity {
    pub fn into_domain(self) -> Favorite {
        Favorite::from_repository(
            self.id,
            UserId::new(&self.user_id),
            self.product_id,
            self.created_at,
        )
    }
}
