use std::cell::Cell;

use contracts::system::auth::UserInfo;
use contracts::system::users::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// True while a stored token is being validated on startup
    pub restoring: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.user_info.is_some()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user_info.as_ref().map(|u| u.role)
    }

    pub fn has_role(&self, required: UserRole) -> bool {
        self.user_info
            .as_ref()
            .map(|u| u.has_role(required))
            .unwrap_or(false)
    }
}

thread_local! {
    static SESSION_SETTER: Cell<Option<WriteSignal<AuthState>>> = const { Cell::new(None) };
}

/// Drops the in-memory session; called by the REST client on 401.
pub fn expire_session() {
    SESSION_SETTER.with(|cell| {
        if let Some(set_auth_state) = cell.get() {
            set_auth_state.set(AuthState::default());
        }
    });
}

#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let stored = storage::get_access_token();
    let (auth_state, set_auth_state) = signal(AuthState {
        restoring: stored.is_some(),
        ..Default::default()
    });
    SESSION_SETTER.with(|cell| cell.set(Some(set_auth_state)));

    if let Some(access_token) = stored {
        spawn_local(async move {
            match api::get_current_user().await {
                Ok(user_info) => {
                    log::info!("Session restored for {}", user_info.email);
                    set_auth_state.set(AuthState {
                        access_token: Some(access_token),
                        user_info: Some(user_info),
                        restoring: false,
                    });
                }
                Err(e) => {
                    log::info!("Stored session rejected: {}", e);
                    storage::clear_tokens();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

pub async fn do_login(
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let response = api::login(email, password).await?;
    storage::save_access_token(&response.token);
    log::info!("Signed in as {}", response.user.email);
    set_auth_state.set(AuthState {
        access_token: Some(response.token),
        user_info: Some(response.user),
        restoring: false,
    });
    Ok(())
}

pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Err(e) = api::logout().await {
        log::warn!("Logout request failed: {}", e);
    }
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_state_roles() {
        let mut state = AuthState::default();
        assert!(!state.is_authenticated());
        assert!(!state.has_role(UserRole::Staff));

        state.access_token = Some("t".into());
        state.user_info = Some(UserInfo {
            id: "u1".into(),
            email: "m@printdesk.test".into(),
            full_name: None,
            role: UserRole::Manager,
        });
        assert!(state.is_authenticated());
        assert!(state.has_role(UserRole::Manager));
        assert!(!state.has_role(UserRole::Admin));
        assert_eq!(state.role(), Some(UserRole::Manager));
    }
}
