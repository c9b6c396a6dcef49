use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use bson::oid::ObjectId;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::dto::quote_dto::{CreateQuoteRequest, UpdateQuoteStatusRequest};
use crate::service::quote_service::{QuoteService, QuoteServiceImpl};
use crate::util::error::{HandlerError, HandlerErrorKind};

fn parse_quote_id(id: &str) -> Result<ObjectId, HandlerError> {
    ObjectId::parse_str(id).map_err(|_| HandlerError::bad_request("Invalid quote id"))
}

/// Handler: Create Quote. One insert; the UI navigates to
/// `/crm/quotes/{id}` using the returned record's id.
pub async fn create_quote_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Json(payload): Json<CreateQuoteRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    info!("[create_quote_handler] Handler called");
    if let Err(e) = payload.validate() {
        return Err(HandlerError {
            error: HandlerErrorKind::Validation,
            message: format!("Validation error: {}", e),
            details: None,
        });
    }

    let draft = payload.into_draft();
    let created = service.create_quote(draft).await.map_err(HandlerError::from)?;
    Ok(Json(created))
}

/// Handler: List Quotes
pub async fn list_quotes_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Query(params): Query<std::collections::HashMap<String, String>>,
) -> Result<impl IntoResponse, HandlerError> {
    let page = params.get("page").and_then(|v| v.parse().ok()).unwrap_or(1);
    let limit = params.get("limit").and_then(|v| v.parse().ok()).unwrap_or(20);
    let quotes = service.list_quotes(page, limit).await.map_err(HandlerError::from)?;
    Ok(Json(quotes))
}

/// Handler: Get Quote
pub async fn get_quote_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_quote_id(&id)?;
    let quote = service.get_quote(id).await.map_err(HandlerError::from)?;
    Ok(Json(quote))
}

/// Handler: Update Quote Status
pub async fn update_quote_status_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateQuoteStatusRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_quote_id(&id)?;
    if let Err(e) = payload.validate() {
        return Err(HandlerError {
            error: HandlerErrorKind::Validation,
            message: format!("Validation error: {}", e),
            details: None,
        });
    }
    let updated = service.update_quote_status(id, &payload.status).await.map_err(HandlerError::from)?;
    Ok(Json(updated))
}

/// Handler: Record Quote View (client-facing quote page tracking)
pub async fn record_quote_view_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_quote_id(&id)?;
    let updated = service.record_quote_view(id).await.map_err(HandlerError::from)?;
    Ok(Json(updated))
}

/// Handler: Delete Quote
pub async fn delete_quote_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_quote_id(&id)?;
    service.delete_quote(id).await.map_err(HandlerError::from)?;
    Ok(Json(serde_json::json!({ "deleted": true })))
}
