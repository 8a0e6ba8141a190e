use contracts::domain::a008_service_catalog::aggregate::Service;
use contracts::domain::a009_tier_package::aggregate::{TierPackage, TierPackageDto, TierPackageFilter};
use contracts::domain::a009_tier_package::comparison::packages_for_service;
use contracts::shared::money::format_currency;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a008_service_catalog::api as catalog_api;
use crate::domain::a009_tier_package::api;
use crate::domain::a009_tier_package::ui::comparison::TierComparison;
use crate::domain::a009_tier_package::ui::details::TierPackageDetails;
use crate::layout::toast_service::use_toast;
use crate::shared::components::ConfirmDialog;
use crate::shared::icons::icon;
use crate::shared::mutation::{load_into, run_mutation};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_state::{read_for, sync_filters};

pub const TAB_KEY: &str = "a009_tier_package";

#[component]
pub fn TierPackageList() -> impl IntoView {
    let toast = use_toast();
    let packages = RwSignal::new(Vec::<TierPackage>::new());
    let services = RwSignal::new(Vec::<Service>::new());
    let filters: RwSignal<TierPackageFilter> = RwSignal::new(read_for(TAB_KEY));
    sync_filters(TAB_KEY, filters);

    let loading = RwSignal::new(false);
    let services_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let editing = RwSignal::new(None::<TierPackageDto>);
    let pending_delete = RwSignal::new(None::<TierPackage>);
    let deleting = RwSignal::new(false);
    let show_comparison = RwSignal::new(false);

    let load = move || load_into(loading, error, api::fetch_packages(), packages);
    load();
    load_into(services_loading, error, catalog_api::fetch_services(), services);

    let service_name = move |id: &str| {
        services.with(|all| {
            all.iter()
                .find(|s| s.id == id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| "Unknown service".to_string())
        })
    };

    let visible = Memo::new(move |_| {
        let service_id = filters.with(|f| f.service_id.clone());
        let mut out = if service_id.is_empty() {
            packages.get()
        } else {
            packages.with(|all| packages_for_service(all, &service_id))
        };
        out.sort_by(|a, b| {
            a.service_id
                .cmp(&b.service_id)
                .then_with(|| a.tier.cmp(&b.tier))
                .then_with(|| a.sort_order.cmp(&b.sort_order))
        });
        out
    });

    let confirm_delete = move |_| {
        let Some(package) = pending_delete.get_untracked() else {
            return;
        };
        run_mutation(
            deleting,
            toast,
            "Package deleted",
            async move { api::delete_package(&package.id).await },
            move |_| {
                pending_delete.set(None);
                load();
            },
        );
    };

    view! {
        <PageFrame page_id="a009_tier_package--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Tier packages"</h1>
                    <Badge>{move || visible.with(|v| v.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            let service_id = filters.with_untracked(|f| f.service_id.clone());
                            editing.set(Some(TierPackageDto::new_for_service(&service_id)));
                        }
                    >
                        {icon("plus")}
                        " New package"
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

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <select
                                class="form__select"
                                prop:value=move || filters.with(|f| f.service_id.clone())
                                on:change=move |ev| {
                                    let v = event_target_value(&ev);
                                    if v.is_empty() {
                                        show_comparison.set(false);
                                    }
                                    filters.update(|f| f.service_id = v);
                                }
                            >
                                <option value="">"All services"</option>
                                {move || services.get().into_iter().map(|s| view! {
                                    <option value=s.id>{s.name}</option>
                                }).collect_view()}
                            </select>
                            <Show when=move || filters.with(|f| !f.service_id.is_empty())>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| show_comparison.update(|v| *v = !*v)
                                >
                                    {move || if show_comparison.get() { "Show table" } else { "Preview comparison" }}
                                </Button>
                            </Show>
                        </Flex>
                    </div>
                </div>

                <Show
                    when=move || show_comparison.get()
                    fallback=move || view! {
                        <div class="table-wrapper">
                            <Table attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell min_width=180.0>"Service"</TableHeaderCell>
                                        <TableHeaderCell min_width=90.0>"Tier"</TableHeaderCell>
                                        <TableHeaderCell min_width=180.0>"Name"</TableHeaderCell>
                                        <TableHeaderCell min_width=100.0>"Price"</TableHeaderCell>
                                        <TableHeaderCell min_width=80.0>"Features"</TableHeaderCell>
                                        <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || visible.get()
                                        key=|p| (p.id.clone(), p.name.clone(), p.price.to_bits(), p.tier, p.features.len(), p.is_popular)
                                        children=move |package| {
                                            let to_edit = TierPackageDto::from_package(&package);
                                            let to_delete = package.clone();
                                            let sid = package.service_id.clone();
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{move || service_name(&sid)}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>{package.tier.label()}</TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            {package.name.clone()}
                                                            {package.is_popular.then(|| view! { <span class="badge badge--primary">"Popular"</span> })}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell class="table-cell--right">{format_currency(package.price)}</TableCell>
                                                    <TableCell>{package.features.iter().filter(|f| f.included).count()}</TableCell>
                                                    <TableCell>
                                                        <Flex gap=FlexGap::Small>
                                                            <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| editing.set(Some(to_edit.clone()))>
                                                                {icon("edit")}
                                                            </Button>
                                                            <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| pending_delete.set(Some(to_delete.clone()))>
                                                                {icon("trash")}
                                                            </Button>
                                                        </Flex>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        }
                                    />
                                </TableBody>
                            </Table>
                            <Show when=move || !loading.get() && visible.with(|v| v.is_empty())>
                                <div class="table__empty">"No packages for this service."</div>
                            </Show>
                        </div>
                    }
                >
                    {move || view! { <TierComparison packages=visible.get() /> }}
                </Show>
            </div>

            {move || editing.get().map(|dto| view! {
                <TierPackageDetails
                    dto=dto
                    services=services.get_untracked()
                    on_close=Callback::new(move |_| editing.set(None))
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        load();
                    })
                />
            })}

            <Show when=move || pending_delete.with(|p| p.is_some())>
                <ConfirmDialog
                    title="Delete package"
                    message=pending_delete
                        .get_untracked()
                        .map(|p| format!("Delete the {} package \"{}\"?", p.tier.label(), p.name))
                        .unwrap_or_default()
                    busy=deleting
                    on_confirm=Callback::new(confirm_delete)
                    on_cancel=Callback::new(move |_| pending_delete.set(None))
                />
            </Show>
        </PageFrame>
    }
}
