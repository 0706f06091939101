use crate::domain::Cart;
use serde::Serialize;

// Response payload for the cart lookup.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub cart: Vec<String>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            cart: cart.into_items(),
        }
    }
}
