pub mod pricing;
pub mod sales;
