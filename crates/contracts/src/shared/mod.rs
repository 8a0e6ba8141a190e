pub mod api_error;
pub mod money;
pub mod validation;
