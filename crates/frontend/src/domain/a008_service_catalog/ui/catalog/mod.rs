use contracts::domain::a008_service_catalog::aggregate::{
    Service, ServiceCategory, ServiceCategoryDto, ServiceDto,
};
use contracts::domain::a008_service_catalog::grouping::{
    filter_by_category, group_services, CatalogFilter, UNCATEGORISED,
};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a008_service_catalog::api;
use crate::domain::a008_service_catalog::ui::details::{CategoryDetails, ServiceDetails};
use crate::layout::toast_service::use_toast;
use crate::shared::components::ConfirmDialog;
use crate::shared::icons::icon;
use crate::shared::mutation::{load_into, run_mutation};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_state::{read_for, sync_filters};

pub const TAB_KEY: &str = "a008_service_catalog";

#[derive(Clone)]
enum Modal {
    Category(ServiceCategoryDto),
    Service(ServiceDto),
    DeleteCategory(ServiceCategory),
    DeleteService(Service),
}

#[component]
pub fn ServiceCatalogPage() -> impl IntoView {
    let toast = use_toast();
    let categories = RwSignal::new(Vec::<ServiceCategory>::new());
    let services = RwSignal::new(Vec::<Service>::new());
    let filters: RwSignal<CatalogFilter> = RwSignal::new(read_for(TAB_KEY));
    sync_filters(TAB_KEY, filters);

    let loading = RwSignal::new(false);
    let categories_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let modal = RwSignal::new(None::<Modal>);
    let deleting = RwSignal::new(false);

    let load = move || {
        load_into(categories_loading, error, api::fetch_categories(), categories);
        load_into(loading, error, api::fetch_services(), services);
    };
    load();

    let groups = Memo::new(move |_| {
        let slug = filters.with(|f| f.category.clone());
        let all = categories.with(|c| services.with(|s| group_services(c, s)));
        filter_by_category(all, &slug)
    });

    let close_modal = Callback::new(move |_| modal.set(None));
    let saved = Callback::new(move |_| {
        modal.set(None);
        load();
    });

    let after_delete = move |_| {
        modal.set(None);
        load();
    };
    let confirm_delete = move |_| match modal.get_untracked() {
        Some(Modal::DeleteCategory(c)) => run_mutation(
            deleting,
            toast,
            "Category deleted",
            async move { api::delete_category(&c.id).await },
            after_delete,
        ),
        Some(Modal::DeleteService(s)) => run_mutation(
            deleting,
            toast,
            "Service deleted",
            async move { api::delete_service(&s.id).await },
            after_delete,
        ),
        _ => {}
    };

    view! {
        <PageFrame page_id="a008_service_catalog--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Service catalog"</h1>
                    <Badge>{move || services.with(|s| s.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| modal.set(Some(Modal::Category(ServiceCategoryDto::default())))
                    >
                        {icon("plus")}
                        " New category"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            let slug = filters.with_untracked(|f| f.category.clone());
                            let category_id = categories.with_untracked(|all| {
                                all.iter().find(|c| c.slug == slug).map(|c| c.id.clone())
                            });
                            modal.set(Some(Modal::Service(ServiceDto::new_in_category(category_id))));
                        }
                    >
                        {icon("plus")}
                        " New service"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="segmented">
                    <button
                        class="segmented__item"
                        class:segmented__item--active=move || filters.with(|f| f.category.is_empty())
                        on:click=move |_| filters.update(|f| f.category.clear())
                    >
                        "All"
                    </button>
                    {move || categories.get().into_iter().map(|c| {
                        let slug = c.slug.clone();
                        let active_slug = c.slug.clone();
                        view! {
                            <button
                                class="segmented__item"
                                class:segmented__item--active=move || filters.with(|f| f.category == active_slug)
                                on:click=move |_| filters.update(|f| f.category = slug.clone())
                            >
                                {c.name}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <Show when=move || !loading.get() && groups.with(|g| g.is_empty())>
                    <div class="table__empty">"No services in this category yet."</div>
                </Show>

                {move || groups.get().into_iter().map(|group| {
                    let title = group.title().to_string();
                    let category = group.category.clone();
                    let header_actions = category.clone().map(|c| {
                        let to_edit = ServiceCategoryDto::from_category(&c);
                        let to_delete = c.clone();
                        let category_id = c.id.clone();
                        view! {
                            <Flex gap=FlexGap::Small>
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| modal.set(Some(Modal::Service(ServiceDto::new_in_category(Some(category_id.clone())))))
                                >
                                    {icon("plus")}
                                    " Service"
                                </Button>
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    attr:title="Edit category"
                                    on_click=move |_| modal.set(Some(Modal::Category(to_edit.clone())))
                                >
                                    {icon("edit")}
                                </Button>
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    attr:title="Delete category"
                                    on_click=move |_| modal.set(Some(Modal::DeleteCategory(to_delete.clone())))
                                >
                                    {icon("trash")}
                                </Button>
                            </Flex>
                        }
                    });
                    view! {
                        <div class="settings-section">
                            <div class="settings-section__header">
                                <h3 class="settings-section__title">{title}</h3>
                                {category.and_then(|c| c.description).map(|d| view! { <span class="text-muted">{d}</span> })}
                                {header_actions}
                            </div>
                            <Table attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell min_width=220.0>"Service"</TableHeaderCell>
                                        <TableHeaderCell min_width=150.0>"Price"</TableHeaderCell>
                                        <TableHeaderCell min_width=70.0>"Options"</TableHeaderCell>
                                        <TableHeaderCell min_width=140.0>""</TableHeaderCell>
                                        <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {group.services.into_iter().map(|service| {
                                        let to_edit = ServiceDto::from_service(&service);
                                        let to_delete = service.clone();
                                        view! {
                                            <TableRow attr:class=if service.is_active { "" } else { "table__row--muted" }>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <span style="font-weight: 500;">{service.name.clone()}</span>
                                                        {service.short_description.clone().map(|d| view! { <span class="text-muted">{format!(" · {}", d)}</span> })}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>{service.price_label()}</TableCell>
                                                <TableCell>{service.options.len()}</TableCell>
                                                <TableCell>
                                                    {(!service.is_active).then(|| view! { <span class="badge badge--neutral">"Inactive"</span> })}
                                                    {service.is_featured.then(|| view! { <span class="badge badge--primary">"Featured"</span> })}
                                                </TableCell>
                                                <TableCell>
                                                    <Flex gap=FlexGap::Small>
                                                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| modal.set(Some(Modal::Service(to_edit.clone())))>
                                                            {icon("edit")}
                                                        </Button>
                                                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| modal.set(Some(Modal::DeleteService(to_delete.clone())))>
                                                            {icon("trash")}
                                                        </Button>
                                                    </Flex>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }).collect_view()}
                                </TableBody>
                            </Table>
                        </div>
                    }
                }).collect_view()}
            </div>

            {move || match modal.get() {
                None => ().into_any(),
                Some(Modal::Category(dto)) => view! {
                    <CategoryDetails dto=dto existing=categories.get_untracked() on_close=close_modal on_saved=saved />
                }.into_any(),
                Some(Modal::Service(dto)) => view! {
                    <ServiceDetails dto=dto categories=categories.get_untracked() on_close=close_modal on_saved=saved />
                }.into_any(),
                Some(Modal::DeleteCategory(c)) => view! {
                    <ConfirmDialog
                        title="Delete category"
                        message=format!("Delete \"{}\"? Its services move to {}.", c.name, UNCATEGORISED)
                        busy=deleting
                        on_confirm=Callback::new(confirm_delete)
                        on_cancel=close_modal
                    />
                }.into_any(),
                Some(Modal::DeleteService(s)) => view! {
                    <ConfirmDialog
                        title="Delete service"
                        message=format!("Delete \"{}\" with its options and packages?", s.name)
                        busy=deleting
                        on_confirm=Callback::new(confirm_delete)
                        on_cancel=close_modal
                    />
                }.into_any(),
            }}
        </PageFrame>
    }
}
