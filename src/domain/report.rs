//! Sales report produced for a valid sale.

use crate::config::ReportConfig;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    pub movie_name: String,
    pub unit_price: f64,
    pub ticket_count: i32,
    pub subtotal: f64,
    pub vat: f64,
    pub total: f64,
}

impl SalesReport {
    /// Multi-line text report, prices to two decimals
    pub fn render(&self, config: &ReportConfig) -> String {
        let cur = &config.currency_symbol;
        let mut out = String::new();
        let _ = writeln!(out, "{}:", config.heading);
        let _ = writeln!(out, "Movie: {}", self.movie_name);
        let _ = writeln!(out, "Ticket Price: {cur}{:.2}", self.unit_price);
        let _ = writeln!(out, "Number of Tickets: {}", self.ticket_count);
        let _ = writeln!(out, "Total Price (with VAT): {cur}{:.2}", self.total);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SalesReport {
        SalesReport {
            movie_name: "Damsel".to_string(),
            unit_price: 75.0,
            ticket_count: 3,
            subtotal: 225.0,
            vat: 31.5,
            total: 256.5,
        }
    }

    #[test]
    fn test_render_default_config() {
        let text = sample().render(&ReportConfig::default());
        assert_eq!(
            text,
            "Movie Ticket Sales Report:\n\
             Movie: Damsel\n\
             Ticket Price: R75.00\n\
             Number of Tickets: 3\n\
             Total Price (with VAT): R256.50\n"
        );
    }

    #[test]
    fn test_render_custom_currency() {
        let config = ReportConfig {
            currency_symbol: "$".to_string(),
            heading: "Box Office".to_string(),
        };
        let text = sample().render(&config);
        assert!(text.starts_with("Box Office:\n"));
        assert!(text.contains("Total Price (with VAT): $256.50"));
    }
}
