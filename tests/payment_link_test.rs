use novaforge_backend::dto::quote_dto::PaymentLinkRequest;
use novaforge_backend::model::draft::QuoteDraft;
use novaforge_backend::model::quote::LineItem;
use novaforge_backend::service::payment_service::RevolutPaymentService;

fn link_request(name: &str, email: &str, prices: &[f64]) -> PaymentLinkRequest {
    PaymentLinkRequest {
        client_name: name.to_string(),
        client_email: email.to_string(),
        project_overview: "Marketing site redesign with CMS".to_string(),
        items: prices
            .iter()
            .map(|price| LineItem {
                name: "Service".to_string(),
                description: String::new(),
                price: *price,
            })
            .collect(),
        discount_rate: 0.0,
        deposit_rate: 0.5,
    }
}

#[test]
fn generation_is_blocked_before_it_reaches_the_network() {
    // Missing name, missing email, and a zero total each short-circuit.
    assert!(RevolutPaymentService::check_preconditions(&link_request("", "a@b.c", &[1000.0])).is_err());
    assert!(RevolutPaymentService::check_preconditions(&link_request("Acme", "", &[1000.0])).is_err());
    assert!(RevolutPaymentService::check_preconditions(&link_request("Acme", "a@b.c", &[])).is_err());
    assert!(RevolutPaymentService::check_preconditions(&link_request("Acme", "a@b.c", &[0.0])).is_err());

    assert!(RevolutPaymentService::check_preconditions(&link_request("Acme", "a@b.c", &[1.0])).is_ok());
}

#[test]
fn double_click_keeps_only_the_latest_response() {
    let mut draft = QuoteDraft::default();

    // Two overlapping requests: the first response arrives late.
    let first = draft.begin_payment_request();
    let second = draft.begin_payment_request();

    assert!(draft.apply_payment_link(second, "https://checkout.revolut.com/b", "ord_b"));
    assert!(!draft.apply_payment_link(first, "https://checkout.revolut.com/a", "ord_a"));

    assert_eq!(draft.payment_link.as_deref(), Some("https://checkout.revolut.com/b"));
    assert_eq!(draft.revolut_order_id.as_deref(), Some("ord_b"));
    assert!(draft.payment_link_generated);
}

#[test]
fn manual_edit_supersedes_generated_link() {
    let mut draft = QuoteDraft::default();
    let generation = draft.begin_payment_request();
    assert!(draft.apply_payment_link(generation, "https://checkout.revolut.com/x", "ord_x"));

    draft.set_payment_link_manual("https://other-provider.example/pay");

    assert!(!draft.payment_link_generated);
    assert_eq!(draft.revolut_order_id, None);
    assert_eq!(draft.payment_link.as_deref(), Some("https://other-provider.example/pay"));
}
