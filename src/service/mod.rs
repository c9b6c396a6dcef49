pub mod payment_service;
pub mod quote_service;
