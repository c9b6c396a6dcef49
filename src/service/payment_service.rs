use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, instrument};

use crate::config::revolut_conf::RevolutConfig;
use crate::dto::quote_dto::{PaymentLinkRequest, PaymentLinkResponse};
use crate::util::error::ServiceError;
use crate::util::pricing;

/// Longest project-overview prefix carried into the provider-side
/// payment description.
const DESCRIPTION_OVERVIEW_CHARS: usize = 80;

#[async_trait]
pub trait PaymentLinkService: Send + Sync {
    /// Request a hosted checkout link for the draft's deposit amount.
    /// Single attempt; a failure is terminal for this user action and the
    /// operator retries manually.
    async fn create_payment_link(
        &self,
        request: &PaymentLinkRequest,
    ) -> Result<PaymentLinkResponse, ServiceError>;
}

pub struct RevolutPaymentService {
    config: RevolutConfig,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct RevolutOrderResponse {
    checkout_url: Option<String>,
    order_id: Option<String>,
    error: Option<String>,
}

impl RevolutPaymentService {
    pub fn new(config: RevolutConfig) -> Self {
        RevolutPaymentService {
            config,
            http: Client::new(),
        }
    }

    /// Check the client-side gates before any network I/O: a name and email
    /// to bill, and a positive discounted total.
    pub fn check_preconditions(request: &PaymentLinkRequest) -> Result<(), ServiceError> {
        if request.client_name.trim().is_empty() {
            return Err(ServiceError::InvalidInput("Client name is required before generating a payment link".to_string()));
        }
        if request.client_email.trim().is_empty() {
            return Err(ServiceError::InvalidInput("Client email is required before generating a payment link".to_string()));
        }
        let total = pricing::total(&request.items, request.discount_rate);
        if total <= 0.0 {
            return Err(ServiceError::InvalidInput("Quote total must be positive before generating a payment link".to_string()));
        }
        Ok(())
    }

    /// Provider-facing description: deposit percentage plus a truncated
    /// prefix of the project overview.
    pub fn deposit_description(deposit_rate: f64, project_overview: &str) -> String {
        let percent = (pricing::clamp_rate(deposit_rate) * 100.0).round() as i64;
        let prefix: String = project_overview.chars().take(DESCRIPTION_OVERVIEW_CHARS).collect();
        if prefix.is_empty() {
            format!("{}% project deposit", percent)
        } else {
            format!("{}% project deposit: {}", percent, prefix)
        }
    }
}

#[async_trait]
impl PaymentLinkService for RevolutPaymentService {
    #[instrument(skip(self, request), fields(client_name = %request.client_name))]
    async fn create_payment_link(
        &self,
        request: &PaymentLinkRequest,
    ) -> Result<PaymentLinkResponse, ServiceError> {
        Self::check_preconditions(request)?;

        let deposit = pricing::deposit_amount(&request.items, request.discount_rate, request.deposit_rate);
        let payload = json!({
            "amount": pricing::to_minor_units(deposit),
            "currency": self.config.currency,
            "clientEmail": request.client_email,
            "clientName": request.client_name,
            "description": Self::deposit_description(request.deposit_rate, &request.project_overview),
        });

        info!(amount_minor = pricing::to_minor_units(deposit), "Requesting Revolut checkout link");

        let response = self
            .http
            .post(&self.config.api_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("Payment link request failed: {}", e);
                ServiceError::PaymentProvider(format!("Payment link request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(%status, "Payment provider returned an error: {}", body);
            return Err(ServiceError::PaymentProvider(format!("Payment provider returned {}: {}", status, body)));
        }

        let body: RevolutOrderResponse = response.json().await.map_err(|e| {
            error!("Failed to parse payment provider response: {}", e);
            ServiceError::PaymentProvider(format!("Failed to parse payment provider response: {}", e))
        })?;

        // A success status without a checkout URL is still a failure.
        match (body.checkout_url, body.order_id) {
            (Some(checkout_url), order_id) => {
                info!("Checkout link generated");
                Ok(PaymentLinkResponse {
                    checkout_url,
                    order_id: order_id.unwrap_or_default(),
                })
            }
            (None, _) => {
                let detail = body.error.unwrap_or_else(|| "response missing checkout_url".to_string());
                error!("Payment provider success without checkout_url: {}", detail);
                Err(ServiceError::PaymentProvider(detail))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::quote::LineItem;

    fn request(name: &str, email: &str, price: f64) -> PaymentLinkRequest {
        PaymentLinkRequest {
            client_name: name.to_string(),
            client_email: email.to_string(),
            project_overview: "Marketing site redesign".to_string(),
            items: vec![LineItem {
                name: "Website".to_string(),
                description: String::new(),
                price,
            }],
            discount_rate: 0.0,
            deposit_rate: 0.5,
        }
    }

    #[test]
    fn test_preconditions_require_name_email_and_positive_total() {
        assert!(RevolutPaymentService::check_preconditions(&request("Acme", "acme@example.com", 1000.0)).is_ok());
        assert!(RevolutPaymentService::check_preconditions(&request("", "acme@example.com", 1000.0)).is_err());
        assert!(RevolutPaymentService::check_preconditions(&request("Acme", "  ", 1000.0)).is_err());
        assert!(RevolutPaymentService::check_preconditions(&request("Acme", "acme@example.com", 0.0)).is_err());
    }

    #[test]
    fn test_full_discount_blocks_generation() {
        let mut req = request("Acme", "acme@example.com", 1000.0);
        req.discount_rate = 1.0;
        assert!(RevolutPaymentService::check_preconditions(&req).is_err());
    }

    #[test]
    fn test_description_includes_percent_and_truncated_overview() {
        let description = RevolutPaymentService::deposit_description(0.5, "Full redesign of the marketing site");
        assert_eq!(description, "50% project deposit: Full redesign of the marketing site");

        let long = "x".repeat(200);
        let description = RevolutPaymentService::deposit_description(0.25, &long);
        assert!(description.starts_with("25% project deposit: "));
        assert!(description.ends_with(&"x".repeat(80)));
        assert_eq!(description.chars().count(), "25% project deposit: ".chars().count() + 80);
    }

    #[test]
    fn test_description_without_overview() {
        assert_eq!(RevolutPaymentService::deposit_description(0.5, ""), "50% project deposit");
    }
}
