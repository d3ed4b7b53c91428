pub mod error;
pub mod report;
pub mod sale;

pub use error::*;
pub use report::*;
pub use sale::*;
