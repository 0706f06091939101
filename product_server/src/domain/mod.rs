mod catalog;

pub use catalog::{Catalog, HEALTH_MESSAGE, PRODUCT_NAMES};
