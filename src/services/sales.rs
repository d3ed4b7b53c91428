//! Sales service - turns raw shell input into a report or an error.

use crate::domain::{Field, Result, SalesReport, TicketError, TicketSale};
use crate::services::pricing;
use tracing::{debug, warn};

/// Parse a ticket price.
///
/// `NaN`, `Infinity` and out-of-range exponents parse; the price rule in
/// [`pricing::check`] decides what to do with them.
///
/// # Errors
///
/// Returns [`TicketError::InvalidNumber`] if the text is not a decimal
pub fn parse_price(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| TicketError::InvalidNumber {
            field: Field::Price,
            input: text.to_string(),
        })
}

/// Parse a ticket count. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`TicketError::InvalidNumber`] if the text is not a base-10 `i32`
pub fn parse_count(text: &str) -> Result<i32> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| TicketError::InvalidNumber {
            field: Field::Count,
            input: text.to_string(),
        })
}

/// Process one submission from the shell
///
/// # Errors
///
/// Returns a parse error if either number is malformed (the sale is never
/// built), otherwise a validation error if the sale is invalid
pub fn process_sale(movie_name: &str, price_text: &str, count_text: &str) -> Result<SalesReport> {
    let unit_price = parse_price(price_text).inspect_err(|e| warn!(error = %e, "rejected input"))?;
    let ticket_count =
        parse_count(count_text).inspect_err(|e| warn!(error = %e, "rejected input"))?;
    debug!(movie_name, unit_price, ticket_count, "parsed sale");

    let sale = TicketSale::new(movie_name, ticket_count, unit_price);
    pricing::check(&sale).inspect_err(|e| warn!(error = %e, "rejected sale"))?;

    let subtotal = pricing::subtotal(sale.ticket_count, sale.unit_price);
    let vat = pricing::vat_amount(subtotal);
    let total = pricing::compute_total(sale.ticket_count, sale.unit_price);
    debug!(subtotal, vat, total, "computed totals");

    Ok(SalesReport {
        movie_name: sale.movie_name,
        unit_price: sale.unit_price,
        ticket_count: sale.ticket_count,
        subtotal,
        vat,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_price(" 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_count(" 3").unwrap(), 3);
        assert_eq!(parse_count("\t3\n").unwrap(), 3);
    }

    #[test]
    fn test_parse_price_accepts_non_finite() {
        assert!(parse_price("NaN").unwrap().is_nan());
        assert_eq!(parse_price("Infinity").unwrap(), f64::INFINITY);
        assert_eq!(parse_price("1e400").unwrap(), f64::INFINITY);
        assert_eq!(parse_price("-Infinity").unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_price_rejects_text() {
        assert!(parse_price("").is_err());
        assert!(parse_price("12,50").is_err());
        assert!(parse_price("R50").is_err());
    }

    #[test]
    fn test_parse_count_rejects_fraction_and_overflow() {
        assert!(parse_count("2.5").is_err());
        assert!(parse_count("99999999999").is_err());
    }
}
