use contracts::system::users::User;
use leptos::prelude::*;

use crate::shared::config::config;

#[derive(Clone, Debug)]
pub struct UsersListState {
    pub items: Vec<User>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            sort_field: "email".to_string(),
            sort_ascending: true,
            page: 0,
            page_size: config().ui.default_page_size,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}
