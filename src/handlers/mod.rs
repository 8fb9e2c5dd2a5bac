// Handlers module

pub mod account;
pub mod checkout;
pub mod message;
pub mod subscription;

pub use account::delete_account_handler;
pub use checkout::checkout_handler;
pub use message::message_handler;
pub use subscription::cancel_subscription_handler;
