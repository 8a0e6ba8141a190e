use contracts::domain::a004_b2b_account::aggregate::{B2bAccount, B2bAccountDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_b2b_account::api;
use crate::layout::toast_service::ToastService;
use crate::shared::mutation::run_mutation;

#[derive(Clone, Copy)]
pub struct B2bAccountDetailsViewModel {
    pub form: RwSignal<B2bAccountDto>,
    /// Last loaded/saved state, for dirty tracking
    pub saved: RwSignal<B2bAccountDto>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl B2bAccountDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(B2bAccountDto::new()),
            saved: RwSignal::new(B2bAccountDto::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn is_dirty(&self) -> bool {
        self.form.with(|f| self.saved.with(|s| f != s))
    }

    pub fn account_id(&self) -> Option<String> {
        self.form.with(|f| f.id.clone())
    }

    /// Loads the account when `id` names an existing one
    pub fn load_if_needed(&self, id: Option<String>, on_loaded: Callback<B2bAccount>) {
        let Some(existing_id) = id else {
            return;
        };
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match api::fetch_account(&existing_id).await {
                Ok(account) => {
                    let dto = B2bAccountDto::from_account(&account);
                    vm.form.set(dto.clone());
                    vm.saved.set(dto);
                    on_loaded.run(account);
                }
                Err(e) => vm.error.set(Some(format!("Failed to load account: {}", e))),
            }
            vm.loading.set(false);
        });
    }

    pub fn reset(&self) {
        self.error.set(None);
        self.form.set(self.saved.get_untracked());
    }

    pub fn save_command(&self, toast: ToastService, on_saved: Callback<B2bAccount>) {
        let current = self.form.get_untracked();
        if let Err(e) = current.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }
        self.error.set(None);

        let vm = *self;
        let message = if current.id.is_some() {
            "Account saved"
        } else {
            "Account created"
        };
        run_mutation(
            self.saving,
            toast,
            message,
            async move { api::save_account(&current).await },
            move |account| {
                let dto = B2bAccountDto::from_account(&account);
                vm.form.set(dto.clone());
                vm.saved.set(dto);
                on_saved.run(account);
            },
        );
    }
}

impl Default for B2bAccountDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
