use bigdecimal::BigDecimal;
use num_traits::Zero;
use uuid::Uuid;

use super::model::CartItem;

/// Snapshot of the locally-held cart view. Owned by the state container,
/// replaced wholesale on every dispatch; consumers only ever see clones.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    pub items: Vec<CartItem>,
    pub loading: bool,
    pub last_error: Option<String>,
}

impl CartState {
    /// Subtotal over all line items, computed client-side.
    pub fn total(&self) -> BigDecimal {
        self.items
            .iter()
            .fold(BigDecimal::zero(), |acc, item| acc + item.line_total())
    }

    /// Total unit count across items, not the number of lines.
    pub fn count(&self) -> i32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Replace the item list with the authoritative store state.
    /// Clears any previous error.
    SetItems(Vec<CartItem>),
    SetLoading(bool),
    SetError(String),
    /// Optimistic local add; merges on product, never duplicates a line.
    AddItem(CartItem),
    /// A quantity of zero or less removes the item.
    UpdateItemQty { item_id: Uuid, quantity: i32 },
    RemoveItem { item_id: Uuid },
    Clear,
}

/// Pure state transition. All I/O stays in the application layer; this
/// function is the single place local cart state changes shape.
pub fn reduce(state: CartState, action: CartAction) -> CartState {
    match action {
        CartAction::SetItems(items) => CartState {
            items,
            last_error: None,
            ..state
        },
        CartAction::SetLoading(loading) => CartState { loading, ..state },
        CartAction::SetError(message) => CartState {
            last_error: Some(message),
            ..state
        },
        CartAction::AddItem(item) => {
            let mut items = state.items;
            match items.iter().position(|i| i.product_id == item.product_id) {
                Some(index) => items[index].quantity += item.quantity,
                None => items.push(item),
            }
            CartState { items, ..state }
        }
        CartAction::UpdateItemQty { item_id, quantity } => {
            let mut items = state.items;
            if quantity <= 0 {
                items.retain(|i| i.id != item_id);
            } else if let Some(existing) = items.iter_mut().find(|i| i.id == item_id) {
                existing.quantity = quantity;
            }
            CartState { items, ..state }
        }
        CartAction::RemoveItem { item_id } => {
            let mut items = state.items;
            items.retain(|i| i.id != item_id);
            CartState { items, ..state }
        }
        CartAction::Clear => CartState {
            items: Vec::new(),
            ..state
        },
    }
}
