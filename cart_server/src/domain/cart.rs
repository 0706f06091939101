// Labels every cart is built from.
pub const CART_ITEMS: [&str; 2] = ["item1", "item2"];

// Body returned by the root probe.
pub const SERVICE_STATUS: &str = "Cart Service Running";

// A shopper's cart. Built fresh per request; nothing is stored between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    items: Vec<String>,
}

impl Cart {
    pub fn current() -> Self {
        Self {
            items: CART_ITEMS.iter().map(|item| item.to_string()).collect(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn into_items(self) -> Vec<String> {
        self.items
    }
}
