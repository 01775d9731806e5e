use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CartError;
use crate::domain::shared::value_objects::UserId;

/// Per-user container of pending line items. Exactly one cart exists per
/// user; it is created lazily on first access and emptied, never deleted.
#[derive(Debug, Clone)]
pub struct Cart {
    pub id: Uuid,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(user_id: UserId) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            created_at: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: Uuid, user_id: UserId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            created_at,
        }
    }
}

/// A cart line item joined with its product's current name, price and image.
/// At most one item exists per (cart, product); a quantity below 1 never
/// materializes as a row.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: Uuid,
    pub cart_id: Uuid,
    pub product_id: Uuid,
    pub name: String,
    pub unit_price: BigDecimal,
    pub quantity: i32,
    pub image_url: Option<String>,
}

impl CartItem {
    pub fn new(
        cart_id: Uuid,
        product_id: Uuid,
        name: String,
        unit_price: BigDecimal,
        quantity: i32,
        image_url: Option<String>,
    ) -> Result<Self, CartError> {
        if quantity < 1 {
            return Err(CartError::QuantityInvalid);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            cart_id,
            product_id,
            name,
            unit_price,
            quantity,
            image_url,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        cart_id: Uuid,
        product_id: Uuid,
        name: String,
        unit_price: BigDecimal,
        quantity: i32,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id,
            cart_id,
            product_id,
            name,
            unit_price,
            quantity,
            image_url,
        }
    }

    pub fn line_total(&self) -> BigDecimal {
        &self.unit_price * BigDecimal::from(self.quantity)
    }
}
