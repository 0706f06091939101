// Landing text shown to every visitor.
pub const WELCOME_MESSAGE: &str = "Welcome to Kube Shop Frontend!";
