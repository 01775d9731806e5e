use poem_openapi::Object;

use business::domain::cart::model::CartItem;
use business::domain::cart::state::CartState;

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Product to add
    pub product_id: String,
    /// Units to add; must be at least 1
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCartItemRequest {
    /// New quantity; zero or less removes the item
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Cart item unique identifier
    pub id: String,
    /// Referenced product
    pub product_id: String,
    /// Product name at read time
    pub name: String,
    /// Current unit price in decimal major units, e.g. "10.99"
    pub unit_price: String,
    /// Units of this product in the cart
    pub quantity: i32,
    /// Product image URL
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id.to_string(),
            product_id: item.product_id.to_string(),
            name: item.name,
            unit_price: item.unit_price.to_string(),
            quantity: item.quantity,
            image_url: item.image_url,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    /// Subtotal over all lines, computed server-side at read time
    pub total: String,
    /// Total unit count across lines
    pub count: i32,
}

impl From<Vec<CartItem>> for CartResponse {
    fn from(items: Vec<CartItem>) -> Self {
        let state = CartState {
            items,
            ..CartState::default()
        };
        Self {
            total: state.total().to_string(),
            count: state.count(),
            items: state.items.into_iter().map(|i| i.into()).collect(),
        }
    }
}
