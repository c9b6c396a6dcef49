use serde::{Deserialize, Serialize};

use crate::model::quote::{LineItem, Maintenance};

/// The four fixed scope categories, in presentation order. Ordinals "1".."4"
/// and titles are hardcoded into the persisted record.
pub const SCOPE_TITLES: [&str; 4] = [
    "Consultation & Planning",
    "UI Design",
    "Development",
    "Testing & Launch",
];

/// The in-memory, not-yet-persisted state of a quote being edited.
///
/// All mutation that carries an invariant goes through a method here rather
/// than through direct field writes: client/lead selection is mutually
/// exclusive, and the payment-link fields move together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteDraft {
    pub client_id: Option<String>,
    pub lead_id: Option<String>,

    pub title: String,
    pub client_name: String,
    pub client_email: String,
    pub duration: String,
    pub project_overview: String,
    pub objectives: Vec<String>,

    /// Free-text bullets per scope category, indexed like [`SCOPE_TITLES`].
    pub scope_items: [Vec<String>; 4],

    pub items: Vec<LineItem>,
    pub discount_rate: f64,
    pub deposit_rate: f64,
    pub maintenance: Option<Maintenance>,

    pub payment_link: Option<String>,
    pub revolut_order_id: Option<String>,
    /// True only while `payment_link` is the provider-issued URL from the
    /// most recent successful generation.
    #[serde(default)]
    pub payment_link_generated: bool,
    /// Monotonic counter used to discard late provider responses after the
    /// operator has re-triggered or edited the draft.
    #[serde(skip)]
    pub payment_generation: u64,
}

impl QuoteDraft {
    /// Select an existing client. Clears any selected lead.
    pub fn select_client(&mut self, client_id: impl Into<String>) {
        self.client_id = Some(client_id.into());
        self.lead_id = None;
    }

    /// Select a lead. Clears any selected client.
    pub fn select_lead(&mut self, lead_id: impl Into<String>) {
        self.lead_id = Some(lead_id.into());
        self.client_id = None;
    }

    /// Switch to manual entry: no linked client or lead.
    pub fn select_manual(&mut self) {
        self.client_id = None;
        self.lead_id = None;
    }

    /// The operator typed or pasted a link by hand. The link is no longer
    /// provider-issued, so the generated flag and the stored order id are
    /// cleared together.
    pub fn set_payment_link_manual(&mut self, link: impl Into<String>) {
        let link = link.into();
        self.payment_link = if link.is_empty() { None } else { Some(link) };
        self.payment_link_generated = false;
        self.revolut_order_id = None;
        self.payment_generation += 1;
    }

    /// Mark the start of a payment-link request and return the generation
    /// the response must present to be applied.
    pub fn begin_payment_request(&mut self) -> u64 {
        self.payment_generation += 1;
        self.payment_generation
    }

    /// Apply a provider response. Returns false (draft untouched) when the
    /// response is stale, i.e. the draft moved on since the request fired.
    pub fn apply_payment_link(
        &mut self,
        generation: u64,
        checkout_url: impl Into<String>,
        order_id: impl Into<String>,
    ) -> bool {
        if generation != self.payment_generation {
            return false;
        }
        self.payment_link = Some(checkout_url.into());
        self.revolut_order_id = Some(order_id.into());
        self.payment_link_generated = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_and_lead_selection_are_exclusive() {
        let mut draft = QuoteDraft::default();
        draft.select_client("client-1");
        assert_eq!(draft.client_id.as_deref(), Some("client-1"));
        assert_eq!(draft.lead_id, None);

        draft.select_lead("lead-7");
        assert_eq!(draft.lead_id.as_deref(), Some("lead-7"));
        assert_eq!(draft.client_id, None);

        draft.select_manual();
        assert_eq!(draft.client_id, None);
        assert_eq!(draft.lead_id, None);
    }

    #[test]
    fn test_manual_link_edit_clears_generated_state() {
        let mut draft = QuoteDraft::default();
        let gen = draft.begin_payment_request();
        assert!(draft.apply_payment_link(gen, "https://checkout.revolut.com/pay/x", "ord_1"));
        assert!(draft.payment_link_generated);
        assert_eq!(draft.revolut_order_id.as_deref(), Some("ord_1"));

        draft.set_payment_link_manual("https://pay.example.com/custom");
        assert!(!draft.payment_link_generated);
        assert_eq!(draft.revolut_order_id, None);
        assert_eq!(
            draft.payment_link.as_deref(),
            Some("https://pay.example.com/custom")
        );
    }

    #[test]
    fn test_stale_payment_response_is_discarded() {
        let mut draft = QuoteDraft::default();
        let first = draft.begin_payment_request();
        // Operator re-triggers before the first response lands.
        let second = draft.begin_payment_request();

        assert!(!draft.apply_payment_link(first, "https://checkout.revolut.com/a", "ord_a"));
        assert_eq!(draft.payment_link, None);
        assert_eq!(draft.revolut_order_id, None);
        assert!(!draft.payment_link_generated);

        assert!(draft.apply_payment_link(second, "https://checkout.revolut.com/b", "ord_b"));
        assert_eq!(draft.revolut_order_id.as_deref(), Some("ord_b"));
    }

    #[test]
    fn test_editing_after_success_invalidates_inflight_generation() {
        let mut draft = QuoteDraft::default();
        let gen = draft.begin_payment_request();
        draft.set_payment_link_manual("https://pay.example.com/other");
        // The manual edit bumped the generation, so the old response is late.
        assert!(!draft.apply_payment_link(gen, "https://checkout.revolut.com/c", "ord_c"));
        assert_eq!(
            draft.payment_link.as_deref(),
            Some("https://pay.example.com/other")
        );
    }
}
