//! Pricing service - validation and VAT totals, no state.

use crate::domain::{Result, TicketError, TicketSale, Violation};

/// VAT added on top of the pre-tax subtotal (14%).
pub const VAT_RATE: f64 = 0.14;

/// Check a sale, reporting the first failed rule.
///
/// Rules run in order: movie name, unit price, ticket count.
///
/// # Errors
///
/// Returns [`TicketError::InvalidSale`] when the name is blank or the price or
/// count is not positive
pub fn check(sale: &TicketSale) -> Result {
    if sale.movie_name.trim().is_empty() {
        return Err(TicketError::InvalidSale(Violation::EmptyMovieName));
    }
    if sale.unit_price <= 0.0 {
        return Err(TicketError::InvalidSale(Violation::NonPositivePrice));
    }
    if sale.ticket_count <= 0 {
        return Err(TicketError::InvalidSale(Violation::NonPositiveCount));
    }
    Ok(())
}

#[must_use]
pub fn validate(sale: &TicketSale) -> bool {
    check(sale).is_ok()
}

#[must_use]
pub fn subtotal(ticket_count: i32, unit_price: f64) -> f64 {
    unit_price * f64::from(ticket_count)
}

#[must_use]
pub fn vat_amount(subtotal: f64) -> f64 {
    subtotal * VAT_RATE
}

/// Total price including VAT. Expects a validated sale; no rounding.
#[must_use]
pub fn compute_total(ticket_count: i32, unit_price: f64) -> f64 {
    let subtotal = subtotal(ticket_count, unit_price);
    subtotal + vat_amount(subtotal)
}
