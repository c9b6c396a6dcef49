use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::model::draft::QuoteDraft;
use crate::model::quote::{LineItem, Maintenance, QUOTE_STATUSES};

/// Payload of `POST /quotes`: the full quote draft as edited in the
/// quote maker, ready to be snapshotted and persisted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateQuoteRequest {
    pub client_id: Option<String>,
    pub lead_id: Option<String>,

    #[serde(default)]
    pub title: String,

    #[validate(length(min = 1, message = "client name is required"))]
    pub client_name: String,

    #[serde(default)]
    pub client_email: String,

    #[serde(default)]
    pub duration: String,

    #[validate(length(min = 1, message = "project overview is required"))]
    pub project_overview: String,

    #[serde(default)]
    pub objectives: Vec<String>,

    #[serde(default)]
    pub scope_consultation: Vec<String>,
    #[serde(default)]
    pub scope_design: Vec<String>,
    #[serde(default)]
    pub scope_development: Vec<String>,
    #[serde(default)]
    pub scope_launch: Vec<String>,

    pub items: Vec<LineItem>,

    #[serde(default)]
    pub discount_rate: f64,
    #[serde(default)]
    pub deposit_rate: f64,

    pub maintenance: Option<Maintenance>,

    pub payment_link: Option<String>,
    pub revolut_order_id: Option<String>,
    #[serde(default)]
    pub payment_link_generated: bool,
}

impl CreateQuoteRequest {
    /// Lift the wire payload into draft state, funnelling identity and
    /// payment-link fields through the draft's invariant-preserving methods.
    pub fn into_draft(self) -> QuoteDraft {
        let mut draft = QuoteDraft {
            title: self.title,
            client_name: self.client_name,
            client_email: self.client_email,
            duration: self.duration,
            project_overview: self.project_overview,
            objectives: self.objectives,
            scope_items: [
                self.scope_consultation,
                self.scope_design,
                self.scope_development,
                self.scope_launch,
            ],
            items: self.items,
            discount_rate: self.discount_rate,
            deposit_rate: self.deposit_rate,
            maintenance: self.maintenance,
            ..QuoteDraft::default()
        };

        if let Some(client_id) = self.client_id {
            draft.select_client(client_id);
        } else if let Some(lead_id) = self.lead_id {
            draft.select_lead(lead_id);
        }

        match (self.payment_link, self.revolut_order_id, self.payment_link_generated) {
            (Some(link), Some(order_id), true) => {
                let generation = draft.begin_payment_request();
                draft.apply_payment_link(generation, link, order_id);
            }
            (Some(link), _, _) => draft.set_payment_link_manual(link),
            _ => {}
        }

        draft
    }
}

/// Payload of `POST /payment-links`. Carries the draft fields the deposit
/// amount is derived from; amounts are recomputed server-side rather than
/// trusted from the client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PaymentLinkRequest {
    #[validate(length(min = 1, message = "client name is required"))]
    pub client_name: String,

    #[validate(length(min = 1, message = "client email is required"))]
    pub client_email: String,

    #[serde(default)]
    pub project_overview: String,

    pub items: Vec<LineItem>,

    #[serde(default)]
    pub discount_rate: f64,
    #[serde(default)]
    pub deposit_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentLinkResponse {
    pub checkout_url: String,
    pub order_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateQuoteStatusRequest {
    #[validate(custom(function = "validate_quote_status"))]
    pub status: String,
}

fn validate_quote_status(status: &str) -> Result<(), ValidationError> {
    if QUOTE_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_quote_status"))
    }
}
