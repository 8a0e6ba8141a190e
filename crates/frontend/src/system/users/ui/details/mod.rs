use contracts::system::users::{CreateUserDto, UpdateUserDto, User, UserRole};
use leptos::prelude::*;
use thaw::*;

use crate::layout::toast_service::use_toast;
use crate::shared::components::FormError;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::mutation::run_mutation;
use crate::system::users::api;

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
fn RoleSelect(role: RwSignal<UserRole>, #[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    view! {
        <select
            class="form__select"
            prop:value=move || role.get().code()
            on:change=move |ev| {
                if let Some(r) = UserRole::from_code(&event_target_value(&ev)) {
                    role.set(r);
                }
            }
            disabled=move || disabled.get()
        >
            {UserRole::all().into_iter().map(|r| view! {
                <option value=r.code()>{r.label()}</option>
            }).collect_view()}
        </select>
    }
}

#[component]
pub fn CreateUserForm(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let role = RwSignal::new(UserRole::Staff);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_save = move |_| {
        let dto = CreateUserDto {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            full_name: optional(full_name.get_untracked()),
            role: role.get_untracked(),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        let message = format!("User {} created", dto.email);
        run_mutation(
            saving,
            toast,
            message,
            async move { api::create_user(&dto).await },
            move |_| on_created.run(()),
        );
    };

    view! {
        <ModalFrame on_close=on_close modal_class="modal".to_string()>
            <div class="modal-header">
                <h2 class="modal-title">"New user"</h2>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    {icon("x")}
                </Button>
            </div>

            <div class="modal-body">
                <FormError error=error />

                <div class="form__group">
                    <Label>"Email"</Label>
                    <Input value=email input_type=InputType::Email />
                </div>
                <div class="form__group">
                    <Label>"Password"</Label>
                    <Input value=password input_type=InputType::Password placeholder="At least 8 characters" />
                </div>
                <div class="form__group">
                    <Label>"Full name"</Label>
                    <Input value=full_name />
                </div>
                <div class="form__group">
                    <Label>"Role"</Label>
                    <RoleSelect role=role disabled=saving />
                </div>
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                    disabled=saving
                >
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=saving>
                    {move || if saving.get() { "Creating..." } else { "Create" }}
                </Button>
            </div>
        </ModalFrame>
    }
}

#[component]
pub fn EditUserForm(user: User, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let email = RwSignal::new(user.email.clone());
    let full_name = RwSignal::new(user.full_name.clone().unwrap_or_default());
    let role = RwSignal::new(user.role);
    let is_active = RwSignal::new(user.is_active);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let title = format!("Edit {}", user.email);
    let user_id = StoredValue::new(user.id);

    let on_save = move |_| {
        let dto = UpdateUserDto {
            email: email.get_untracked().trim().to_string(),
            full_name: optional(full_name.get_untracked()),
            role: role.get_untracked(),
            is_active: is_active.get_untracked(),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        let id = user_id.get_value();
        run_mutation(
            saving,
            toast,
            "User updated",
            async move { api::update_user(&id, &dto).await },
            move |_| on_saved.run(()),
        );
    };

    view! {
        <ModalFrame on_close=on_close modal_class="modal".to_string()>
            <div class="modal-header">
                <h2 class="modal-title">{title}</h2>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    {icon("x")}
                </Button>
            </div>

            <div class="modal-body">
                <FormError error=error />

                <div class="form__group">
                    <Label>"Email"</Label>
                    <Input value=email input_type=InputType::Email disabled=saving />
                </div>
                <div class="form__group">
                    <Label>"Full name"</Label>
                    <Input value=full_name disabled=saving />
                </div>
                <div class="form__group">
                    <Label>"Role"</Label>
                    <RoleSelect role=role disabled=saving />
                </div>
                <div class="form__group">
                    <Checkbox checked=is_active label="Active" />
                </div>
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                    disabled=saving
                >
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=saving>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
