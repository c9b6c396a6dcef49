pub mod directory_router;
pub mod payment_router;
pub mod quote_router;
