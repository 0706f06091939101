mod greeting;

pub use greeting::WELCOME_MESSAGE;
