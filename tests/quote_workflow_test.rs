use chrono::NaiveDate;

use novaforge_backend::dto::quote_dto::CreateQuoteRequest;
use novaforge_backend::model::quote::LineItem;
use novaforge_backend::service::quote_service::assemble_quote;
use novaforge_backend::util::pricing;

fn item(name: &str, price: f64) -> LineItem {
    LineItem {
        name: name.to_string(),
        description: String::new(),
        price,
    }
}

fn request() -> CreateQuoteRequest {
    serde_json::from_value(serde_json::json!({
        "client_id": "client-42",
        "title": "Marketing site",
        "client_name": "Acme Ltd",
        "client_email": "hello@acme.test",
        "duration": "6 weeks",
        "project_overview": "Full redesign of the marketing site",
        "objectives": ["Modernise the brand", "", "Improve conversion"],
        "scope_consultation": ["Kickoff workshop"],
        "scope_design": ["Wireframes", "High-fidelity mockups"],
        "scope_development": ["Next.js build"],
        "scope_launch": ["QA pass", "Go-live support"],
        "items": [
            { "name": "Website", "description": "Design and build", "price": 3200.0 },
            { "name": "", "price": 500.0 },
            { "name": "Logo", "price": 0.0 }
        ],
        "discount_rate": 0.20,
        "deposit_rate": 0.50,
        "maintenance": { "enabled": true, "price": 99.0, "description": "Care plan" }
    }))
    .expect("request payload should deserialize")
}

#[test]
fn create_request_flows_through_draft_into_persistable_record() {
    let draft = request().into_draft();
    assert_eq!(draft.client_id.as_deref(), Some("client-42"));
    assert_eq!(draft.lead_id, None);

    let today = NaiveDate::from_ymd_opt(2025, 1, 18).unwrap();
    let quote = assemble_quote(&draft, today).expect("draft should persist");

    assert_eq!(quote.reference, "NF-20250118-ACM");
    assert_eq!(quote.quote_data.reference, "NF-20250118-ACM");
    assert_eq!(quote.quote_data.objectives, vec!["Modernise the brand", "Improve conversion"]);

    // Save-time filtering keeps only the strictly valid entry.
    assert_eq!(
        quote.pricing.items,
        vec![LineItem {
            name: "Website".to_string(),
            description: "Design and build".to_string(),
            price: 3200.0,
        }]
    );
    assert_eq!(quote.pricing.subtotal, 3200.0);
    assert_eq!(quote.pricing.discount_amount, 640.0);
    assert_eq!(quote.pricing.total, 2560.0);
    assert_eq!(quote.pricing.deposit_amount, 1280.0);

    // Maintenance rides along without touching the amounts.
    assert_eq!(quote.pricing.maintenance.as_ref().unwrap().price, 99.0);

    // Fresh record lifecycle fields.
    assert_eq!(quote.view_count, 0);
    assert_eq!(quote.last_viewed_at, None);
}

#[test]
fn deposit_and_final_payment_split_the_total() {
    let items = vec![item("Website", 3200.0)];
    let deposit = pricing::deposit_amount(&items, 0.20, 0.50);
    let final_payment = pricing::final_payment_amount(&items, 0.20, 0.50);
    assert_eq!(deposit, 1280.0);
    assert_eq!(final_payment, 1280.0);
    assert!((deposit + final_payment - pricing::total(&items, 0.20)).abs() < 1e-9);
}

#[test]
fn lead_selection_in_payload_clears_nothing_but_client() {
    let mut payload = request();
    payload.client_id = None;
    payload.lead_id = Some("lead-7".to_string());
    let draft = payload.into_draft();
    assert_eq!(draft.lead_id.as_deref(), Some("lead-7"));
    assert_eq!(draft.client_id, None);
}

#[test]
fn hand_entered_link_is_stored_without_provider_fields() {
    let mut payload = request();
    payload.payment_link = Some("https://pay.example.com/custom".to_string());
    payload.revolut_order_id = Some("stale-order".to_string());
    payload.payment_link_generated = false;

    let draft = payload.into_draft();
    // A non-generated link may not carry a provider order id.
    assert_eq!(draft.revolut_order_id, None);
    assert!(!draft.payment_link_generated);

    let today = NaiveDate::from_ymd_opt(2025, 1, 18).unwrap();
    let quote = assemble_quote(&draft, today).unwrap();
    assert_eq!(quote.payment_link.as_deref(), Some("https://pay.example.com/custom"));
    assert_eq!(quote.revolut_order_id, None);
    assert_eq!(quote.revolut_checkout_url, None);
}

#[test]
fn generated_revolut_link_is_mirrored_into_checkout_url() {
    let mut payload = request();
    payload.payment_link = Some("https://checkout.revolut.com/pay/abc".to_string());
    payload.revolut_order_id = Some("ord_123".to_string());
    payload.payment_link_generated = true;

    let draft = payload.into_draft();
    assert!(draft.payment_link_generated);

    let today = NaiveDate::from_ymd_opt(2025, 1, 18).unwrap();
    let quote = assemble_quote(&draft, today).unwrap();
    assert_eq!(quote.revolut_order_id.as_deref(), Some("ord_123"));
    assert_eq!(
        quote.revolut_checkout_url.as_deref(),
        Some("https://checkout.revolut.com/pay/abc")
    );
}
