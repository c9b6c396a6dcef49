use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Lifecycle statuses a persisted quote may carry. Records are created as
/// "draft"; later transitions stay within this set.
pub const QUOTE_STATUSES: [&str; 6] = ["draft", "sent", "viewed", "accepted", "declined", "expired"];

/// A single priced service/deliverable entry contributing to the subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
}

/// Optional recurring maintenance add-on. Reported and stored alongside the
/// quote but never folded into subtotal/discount/total/deposit arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maintenance {
    pub enabled: bool,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

/// One of the four fixed scope groupings shown to the client
/// (consultation/planning, UI design, development, testing/launch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeSection {
    pub number: String,
    pub title: String,
    pub items: Vec<String>,
}

/// Pricing snapshot frozen into the record at persistence time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingSnapshot {
    pub items: Vec<LineItem>,
    pub discount_rate: f64,
    pub deposit_rate: f64,
    pub subtotal: f64,
    pub discount_amount: f64,
    pub total: f64,
    pub deposit_amount: f64,
    pub maintenance: Option<Maintenance>,
}

/// Descriptive/scope snapshot frozen into the record at persistence time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteData {
    pub reference: String,
    pub title: String,
    pub client_name: String,
    pub client_email: String,
    pub duration: String,
    pub project_overview: String,
    pub objectives: Vec<String>,
    pub scope: Vec<ScopeSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub reference: String,
    pub client_id: Option<String>,
    pub lead_id: Option<String>,
    pub quote_data: QuoteData,
    pub pricing: PricingSnapshot,
    pub payment_link: Option<String>,
    pub revolut_order_id: Option<String>,
    /// Set only when the payment link is a provider-issued Revolut URL.
    pub revolut_checkout_url: Option<String>,
    pub status: Option<String>,
    pub view_count: u32,
    pub last_viewed_at: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
