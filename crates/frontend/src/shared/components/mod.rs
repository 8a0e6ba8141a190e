pub mod confirm_dialog;
pub mod form_error;
pub mod pagination_controls;
pub mod table;

pub use confirm_dialog::ConfirmDialog;
pub use form_error::FormError;
pub use pagination_controls::PaginationControls;
