use axum::{Router, routing::get};
use std::sync::Arc;

use crate::handler::directory_handler::{list_clients_handler, list_leads_handler};
use crate::repository::directory_repo::MongoDirectoryRepository;

pub fn directory_router(repo: Arc<MongoDirectoryRepository>) -> Router {
    Router::new()
        .route("/clients", get(list_clients_handler))
        .route("/leads", get(list_leads_handler))
        .with_state(repo)
}
