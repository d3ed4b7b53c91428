pub mod config;
pub mod domain;
#[cfg(feature = "cli")]
pub mod logging;
pub mod services;

// Public, stable-ish API surface for shells (CLI / GUI)

pub use crate::services::pricing::{compute_total, validate, VAT_RATE};
pub use crate::services::sales::{parse_count, parse_price, process_sale};

pub use crate::domain::{Movie, SalesReport, TicketSale};

pub use crate::domain::{Field, Result, TicketError, Violation};

pub use crate::config::ReportConfig;

pub mod prelude {
    pub use crate::config::ReportConfig;
    pub use crate::domain::{
        Field, Movie, Result, SalesReport, TicketError, TicketSale, Violation,
    };
    pub use crate::services::pricing::{self, compute_total, validate, VAT_RATE};
    pub use crate::services::sales::{parse_count, parse_price, process_sale};
}
