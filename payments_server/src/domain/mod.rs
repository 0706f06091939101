mod payment;

pub use payment::{PAYMENT_PROCESSED, SERVICE_STATUS};
