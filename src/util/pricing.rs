use crate::model::quote::LineItem;

/// Clamp a rate entered as a fraction into [0, 1]. Applied to both the
/// discount and the deposit rate so neither can drive a negative total.
pub fn clamp_rate(rate: f64) -> f64 {
    if rate.is_nan() {
        return 0.0;
    }
    rate.clamp(0.0, 1.0)
}

/// Sum of item prices. Non-finite prices count as zero, so degenerate
/// drafts yield zero amounts rather than errors.
pub fn subtotal(items: &[LineItem]) -> f64 {
    items
        .iter()
        .map(|item| if item.price.is_finite() { item.price } else { 0.0 })
        .sum()
}

pub fn discount_amount(items: &[LineItem], discount_rate: f64) -> f64 {
    subtotal(items) * clamp_rate(discount_rate)
}

pub fn total(items: &[LineItem], discount_rate: f64) -> f64 {
    subtotal(items) - discount_amount(items, discount_rate)
}

/// Fraction of the discounted total requested upfront before work begins.
pub fn deposit_amount(items: &[LineItem], discount_rate: f64, deposit_rate: f64) -> f64 {
    total(items, discount_rate) * clamp_rate(deposit_rate)
}

/// The complementary amount due on completion. Shown to the operator but
/// not separately stored.
pub fn final_payment_amount(items: &[LineItem], discount_rate: f64, deposit_rate: f64) -> f64 {
    total(items, discount_rate) - deposit_amount(items, discount_rate, deposit_rate)
}

/// Convert a major-unit amount to integer minor units for the payment
/// provider (EUR cents).
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
