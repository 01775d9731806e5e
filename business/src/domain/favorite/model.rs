use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;

/// A user's bookmark on a product. At most one per (user, product).
#[derive(Debug, Clone)]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: UserId,
    pub product_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(user_id: UserId, product_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            product_id,
            created_at: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        product_id: Uuid,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            product_id,
            created_at,
        }
    }
}
