// Products on offer, in display order.
pub const PRODUCT_NAMES: [&str; 3] = ["Telescope", "Binoculars", "Camera Lens"];

pub const HEALTH_MESSAGE: &str = "✅ Product service is up and running!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<String>,
}

impl Catalog {
    pub fn current() -> Self {
        Self {
            products: PRODUCT_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn products(&self) -> &[String] {
        &self.products
    }

    pub fn into_products(self) -> Vec<String> {
        self.products
    }
}
