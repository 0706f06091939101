mod cart;

pub use cart::{CART_ITEMS, Cart, SERVICE_STATUS};
