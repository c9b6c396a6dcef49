pub mod directory_handler;
pub mod payment_handler;
pub mod quote_handler;
