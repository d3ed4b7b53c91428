//! Report presentation settings.

pub const DEFAULT_CURRENCY: &str = "R";
pub const DEFAULT_HEADING: &str = "Movie Ticket Sales Report";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub currency_symbol: String,
    pub heading: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY.to_string(),
            heading: DEFAULT_HEADING.to_string(),
        }
    }
}
