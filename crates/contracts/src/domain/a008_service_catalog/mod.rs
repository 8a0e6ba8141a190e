pub mod aggregate;
pub mod grouping;
