//! Error types for ticket sales.

use strum::Display;
use thiserror::Error;

pub type Result<T = (), E = TicketError> = std::result::Result<T, E>;

/// Raw input field the shell hands over as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Price,
    Count,
}

/// First check a sale failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    EmptyMovieName,
    NonPositivePrice,
    NonPositiveCount,
}

impl Violation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyMovieName => "movie name is empty",
            Self::NonPositivePrice => "ticket price must be greater than zero",
            Self::NonPositiveCount => "ticket count must be greater than zero",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TicketError {
    #[error("Failed to parse ticket {field} from {input:?}")]
    InvalidNumber { field: Field, input: String },

    #[error("Invalid ticket sale: {}", .0.as_str())]
    InvalidSale(Violation),
}

impl TicketError {
    /// Message the shell shows in its error dialog
    pub fn to_user_message(&self) -> String {
        match self {
            Self::InvalidNumber { .. } => {
                "Please enter valid numbers for ticket price and count.".to_string()
            }
            Self::InvalidSale(_) => "Invalid input. Please check the values entered.".to_string(),
        }
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::InvalidNumber { .. })
    }
}
