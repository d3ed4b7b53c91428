//! Ticket sale domain types.

use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

/// Titles offered by the box office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr, EnumIter)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Movie {
    #[default]
    Napoleon,
    Oppenheimer,
    Damsel,
}

impl Movie {
    pub fn all() -> impl Iterator<Item = Movie> {
        Self::iter()
    }
}

/// One purchase attempt, exactly as entered.
///
/// Nothing is checked on construction; run
/// [`pricing::validate`](crate::services::pricing::validate) before use.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketSale {
    pub movie_name: String,
    pub ticket_count: i32,
    pub unit_price: f64,
}

impl TicketSale {
    pub fn new(movie_name: impl Into<String>, ticket_count: i32, unit_price: f64) -> Self {
        Self {
            movie_name: movie_name.into(),
            ticket_count,
            unit_price,
        }
    }
}
