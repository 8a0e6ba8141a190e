pub mod auth;
pub mod notification_prefs;
pub mod pages;
pub mod users;
