use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartItem};
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub id: Uuid,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl CartEntity {
    pub fn into_domain(self) -> Cart {
        Cart::from_repository(self.id, UserId::new(&self.user_id), self.created_at)
    }
}

/// A cart item row left-joined with its product. The product columns are
/// nullable in the query so a dangling product reference is detected here
/// instead of silently dropping the row.
#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub id: Uuid,
    pub cart_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub product_name: Option<String>,
    pub unit_price: Option<BigDecimal>,
    pub image_url: Option<String>,
}

impl CartItemEntity {
    pub fn into_domain(self) -> Result<CartItem, RepositoryError> {
        let (Some(name), Some(unit_price)) = (self.product_name, self.unit_price) else {
            return Err(RepositoryError::Integrity);
        };

        Ok(CartItem::from_repository(
            self.id,
            self.cart_id,
            self.product_id,
            name,
            unit_price,
            self.quantity,
            self.image_url,
        ))
    }
}
