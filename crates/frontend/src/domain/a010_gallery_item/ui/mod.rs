pub mod details;
pub mod grid;
