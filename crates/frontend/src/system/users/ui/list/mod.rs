mod state;

use contracts::system::users::{filter_users, User, UserFilter, UserRole, UserStatusFilter};
use leptos::prelude::*;
use thaw::*;

use crate::layout::toast_service::use_toast;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::{ConfirmDialog, PaginationControls};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, page_count, page_slice, sort_list, Sortable};
use crate::shared::mutation::run_mutation;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::query_state::{read_for, sync_filters};
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api;
use crate::system::users::ui::details::{CreateUserForm, EditUserForm};
use state::{create_state, UsersListState};

pub const TAB_KEY: &str = "sys_users";

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "full_name" => cmp_text(self.full_name.as_deref(), other.full_name.as_deref()),
            "role" => self.role.cmp(&other.role),
            "is_active" => self.is_active.cmp(&other.is_active),
            "created_at" => self.created_at.cmp(&other.created_at),
            "last_login_at" => cmp_text(self.last_login_at.as_deref(), other.last_login_at.as_deref()),
            _ => self.email.to_lowercase().cmp(&other.email.to_lowercase()),
        }
    }
}

fn role_badge(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "badge badge--warning",
        UserRole::Manager => "badge badge--success",
        UserRole::Staff => "badge badge--neutral",
    }
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UsersList />
        </RequireAdmin>
    }
}

fn refresh(state: &mut UsersListState, all: &[User], filter: &UserFilter) {
    let mut data = filter_users(all, filter);
    sort_list(&mut data, &state.sort_field, state.sort_ascending);
    state.total_count = data.len();
    state.total_pages = page_count(data.len(), state.page_size);
    let (items, page) = page_slice(&data, state.page, state.page_size);
    state.items = items;
    state.page = page;
}

#[component]
fn UsersList() -> impl IntoView {
    let toast = use_toast();
    let (auth_state, _) = use_auth();
    let state = create_state();
    let all_users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let filters: RwSignal<UserFilter> = RwSignal::new(read_for(TAB_KEY));
    sync_filters(TAB_KEY, filters);

    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let deleting = RwSignal::new(false);
    let show_create_form = RwSignal::new(false);
    let editing_user: RwSignal<Option<User>> = RwSignal::new(None);
    let deleting_user: RwSignal<Option<User>> = RwSignal::new(None);
    let search_signal = RwSignal::new(filters.get_untracked().search);

    let current_user_id = move || auth_state.with(|s| s.user_info.as_ref().map(|u| u.id.clone()));

    Effect::new(move |_| {
        let filter = filters.get();
        let all = all_users.get();
        state.update(|s| refresh(s, &all, &filter));
    });

    let load_data = move || {
        loading.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::fetch_users().await {
                Ok(data) => {
                    state.update(|s| s.is_loaded = true);
                    all_users.set(data);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let rerender = move || {
        let filter = filters.get_untracked();
        all_users.with_untracked(|all| state.update(|s| refresh(s, all, &filter)));
    };

    let apply_search = move || {
        state.update(|s| s.page = 0);
        filters.update(|f| f.search = search_signal.get_untracked());
    };

    let toggle_sort = move |field: String| {
        state.update(|s| {
            if s.sort_field == field {
                s.sort_ascending = !s.sort_ascending;
            } else {
                s.sort_field = field;
                s.sort_ascending = true;
            }
        });
        rerender();
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        rerender();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 0;
        });
        rerender();
    };

    let confirm_delete = move |_| {
        let Some(user) = deleting_user.get_untracked() else {
            return;
        };
        run_mutation(
            deleting,
            toast,
            format!("User {} deleted", user.email),
            async move { api::delete_user(&user.id).await },
            move |_| {
                deleting_user.set(None);
                load_data();
            },
        );
    };

    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                    <Badge>
                        {move || state.get().total_count.to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| show_create_form.set(true)
                    >
                        {icon("plus")}
                        " New user"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Filters"</span>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.get().page)
                                total_pages=Signal::derive(move || state.get().total_pages)
                                total_count=Signal::derive(move || state.get().total_count)
                                page_size=Signal::derive(move || state.get().page_size)
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                            />
                        </div>
                        <div class="filter-panel-header__right"></div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <Input value=search_signal placeholder="Email or name..." />
                            </div>
                            <div class="form__group">
                                <Label>"Role"</Label>
                                <select
                                    class="form__select"
                                    prop:value=move || filters.with(|f| f.role.map(|r| r.code()).unwrap_or(""))
                                    on:change=move |ev| {
                                        let role = UserRole::from_code(&event_target_value(&ev));
                                        state.update(|s| s.page = 0);
                                        filters.update(|f| f.role = role);
                                    }
                                >
                                    <option value="">"All roles"</option>
                                    {UserRole::all().into_iter().map(|r| view! {
                                        <option value=r.code()>{r.label()}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <div class="form__group">
                                <Label>"Status"</Label>
                                <select
                                    class="form__select"
                                    prop:value=move || filters.with(|f| match f.status {
                                        UserStatusFilter::All => "all",
                                        UserStatusFilter::Active => "active",
                                        UserStatusFilter::Inactive => "inactive",
                                    })
                                    on:change=move |ev| {
                                        let status = match event_target_value(&ev).as_str() {
                                            "active" => UserStatusFilter::Active,
                                            "inactive" => UserStatusFilter::Inactive,
                                            _ => UserStatusFilter::All,
                                        };
                                        state.update(|s| s.page = 0);
                                        filters.update(|f| f.status = status);
                                    }
                                >
                                    <option value="all">"All"</option>
                                    <option value="active">"Active"</option>
                                    <option value="inactive">"Inactive"</option>
                                </select>
                            </div>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| apply_search()
                            >
                                "Search"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    search_signal.set(String::new());
                                    state.update(|s| s.page = 0);
                                    filters.set(UserFilter::default());
                                }
                                disabled=Signal::derive(move || filters.with(|f| f.is_empty()))
                            >
                                "Reset"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Email" sort_field="email" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=180.0 />
                                <SortableHeaderCell label="Name" sort_field="full_name" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=160.0 />
                                <SortableHeaderCell label="Role" sort_field="role" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=90.0 />
                                <SortableHeaderCell label="Status" sort_field="is_active" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=90.0 />
                                <SortableHeaderCell label="Created" sort_field="created_at" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=130.0 />
                                <SortableHeaderCell label="Last sign-in" sort_field="last_login_at" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=130.0 />
                                <TableHeaderCell min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|u| (u.id.clone(), u.email.clone(), u.role, u.is_active, u.full_name.clone())
                                children=move |user| {
                                    let user_for_edit = user.clone();
                                    let user_for_delete = user.clone();
                                    let user_id = user.id.clone();
                                    let is_self = Signal::derive(move || current_user_id().as_deref() == Some(user_id.as_str()));
                                    let created = format_datetime(&user.created_at);
                                    let last_login = user
                                        .last_login_at
                                        .as_deref()
                                        .map(format_datetime)
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{user.email.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {user.full_name.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=role_badge(user.role)>{user.role.label()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if user.is_active {
                                                        view! { <span class="badge badge--success">"Active"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--error">"Inactive"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{last_login}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing_user.set(Some(user_for_edit.clone()))
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| deleting_user.set(Some(user_for_delete.clone()))
                                                    disabled=is_self
                                                    attr:title=move || if is_self.get() { "You cannot delete your own account" } else { "Delete" }
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.is_loaded && s.items.is_empty())>
                        <div class="table__empty">"No users match the current filters."</div>
                    </Show>
                </div>

                <Show when=move || show_create_form.get()>
                    <CreateUserForm
                        on_close=Callback::new(move |_| show_create_form.set(false))
                        on_created=Callback::new(move |_| {
                            show_create_form.set(false);
                            load_data();
                        })
                    />
                </Show>

                {move || editing_user.get().map(|user| view! {
                    <EditUserForm
                        user=user
                        on_close=Callback::new(move |_| editing_user.set(None))
                        on_saved=Callback::new(move |_| {
                            editing_user.set(None);
                            load_data();
                        })
                    />
                })}

                {move || deleting_user.get().map(|user| view! {
                    <ConfirmDialog
                        title="Delete user"
                        message=format!("Delete {}? This cannot be undone.", user.email)
                        busy=deleting
                        on_confirm=Callback::new(confirm_delete)
                        on_cancel=Callback::new(move |_| deleting_user.set(None))
                    />
                })}
            </div>
        </PageFrame>
    }
}
