use axum::{Router, routing::{delete, get, post, put}};
use std::sync::Arc;

use crate::handler::quote_handler::{
    create_quote_handler,
    delete_quote_handler,
    get_quote_handler,
    list_quotes_handler,
    record_quote_view_handler,
    update_quote_status_handler,
};
use crate::service::quote_service::QuoteServiceImpl;

pub fn quote_router(service: Arc<QuoteServiceImpl>) -> Router {
    Router::new()
        .route("/quotes", post(create_quote_handler))
        .route("/quotes", get(list_quotes_handler))
        .route("/quotes/{id}", get(get_quote_handler))
        .route("/quotes/{id}", delete(delete_quote_handler))
        .route("/quotes/{id}/status", put(update_quote_status_handler))
        .route("/quotes/{id}/view", post(record_quote_view_handler))
        .with_state(service)
}
