// Acknowledgement for a payment request. No charge is made.
pub const PAYMENT_PROCESSED: &str = "Payment processed";

pub const SERVICE_STATUS: &str = "Payments Service Running";
