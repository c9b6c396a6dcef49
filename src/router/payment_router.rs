use axum::{Router, routing::post};
use std::sync::Arc;

use crate::handler::payment_handler::create_payment_link_handler;
use crate::service::payment_service::RevolutPaymentService;

pub fn payment_router(service: Arc<RevolutPaymentService>) -> Router {
    Router::new()
        .route("/payment-links", post(create_payment_link_handler))
        .with_state(service)
}
