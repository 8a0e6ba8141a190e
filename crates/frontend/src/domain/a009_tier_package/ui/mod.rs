pub mod comparison;
pub mod details;
pub mod list;
