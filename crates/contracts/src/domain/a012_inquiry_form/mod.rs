pub mod aggregate;
pub mod submission;
