//! B2B account details tab
//!
//! - view_model.rs: form state and commands
//! - view.rs: tab layout with General / Locations / Contract pricing sections
//! - locations.rs, pricing.rs: the two child collections

mod locations;
mod pricing;
mod view;
mod view_model;

pub use view::B2bAccountDetails;
pub use view_model::B2bAccountDetailsViewModel;
