use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::dto::quote_dto::PaymentLinkRequest;
use crate::service::payment_service::{PaymentLinkService, RevolutPaymentService};
use crate::util::error::{HandlerError, HandlerErrorKind};

/// Handler: Generate Payment Link. One provider round trip, no retry; on
/// failure the draft's payment fields stay untouched and the operator may
/// click again.
pub async fn create_payment_link_handler(
    State(service): State<Arc<RevolutPaymentService>>,
    Json(payload): Json<PaymentLinkRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    info!("[create_payment_link_handler] Handler called");
    if let Err(e) = payload.validate() {
        return Err(HandlerError {
            error: HandlerErrorKind::Validation,
            message: format!("Validation error: {}", e),
            details: None,
        });
    }

    let link = service.create_payment_link(&payload).await.map_err(HandlerError::from)?;
    Ok(Json(link))
}
