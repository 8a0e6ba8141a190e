pub mod aggregate;
pub mod comparison;
