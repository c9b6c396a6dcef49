use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::repository::directory_repo::{DirectoryRepository, MongoDirectoryRepository};
use crate::util::error::{HandlerError, ServiceError};

/// Handler: List active clients for the selection dropdown.
pub async fn list_clients_handler(
    State(repo): State<Arc<MongoDirectoryRepository>>,
) -> Result<impl IntoResponse, HandlerError> {
    let clients = repo
        .active_clients()
        .await
        .map_err(|e| HandlerError::from(ServiceError::from(e)))?;
    Ok(Json(clients))
}

/// Handler: List open leads (new/contacted/qualified) for the dropdown.
pub async fn list_leads_handler(
    State(repo): State<Arc<MongoDirectoryRepository>>,
) -> Result<impl IntoResponse, HandlerError> {
    let leads = repo
        .open_leads()
        .await
        .map_err(|e| HandlerError::from(ServiceError::from(e)))?;
    Ok(Json(leads))
}
