//! Weekly capacity board: one column per weekday.

use chrono::Datelike;
use contracts::domain::a001_capacity_rule::aggregate::{CapacityRule, CapacityRuleDto, DayOfWeek};
use contracts::domain::a001_capacity_rule::schedule::{group_by_day, weekly_totals, CapacityBoardFilter};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_capacity_rule::api;
use crate::domain::a001_capacity_rule::ui::details::CapacityRuleDetails;
use crate::layout::toast_service::use_toast;
use crate::shared::components::ConfirmDialog;
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::mutation::{load_into, run_mutation};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_BOARD;
use crate::shared::query_state::{read_for, sync_filters};

pub const TAB_KEY: &str = "a001_capacity_rule";

#[component]
pub fn CapacityBoard() -> impl IntoView {
    let toast = use_toast();
    let rules: RwSignal<Vec<CapacityRule>> = RwSignal::new(Vec::new());
    let filters: RwSignal<CapacityBoardFilter> = RwSignal::new(read_for(TAB_KEY));
    sync_filters(TAB_KEY, filters);

    let today_dow = DayOfWeek::from_chrono(today().weekday());

    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(false);
    let editing: RwSignal<Option<CapacityRuleDto>> = RwSignal::new(None);
    let deleting_rule: RwSignal<Option<CapacityRule>> = RwSignal::new(None);

    let show_inactive = RwSignal::new(filters.get_untracked().show_inactive);
    Effect::new(move |_| {
        let value = show_inactive.get();
        if filters.with_untracked(|f| f.show_inactive != value) {
            filters.update(|f| f.show_inactive = value);
        }
    });

    let load = move || load_into(loading, error, api::fetch_rules(), rules);
    load();

    let groups = Memo::new(move |_| {
        let include_inactive = filters.with(|f| f.show_inactive);
        rules.with(|r| group_by_day(r, include_inactive))
    });
    let totals = Memo::new(move |_| groups.with(|g| weekly_totals(g)));

    let confirm_delete = move |_| {
        let Some(rule) = deleting_rule.get_untracked() else {
            return;
        };
        run_mutation(
            deleting,
            toast,
            "Capacity rule deleted",
            async move { api::delete_rule(&rule.id).await },
            move |_| {
                deleting_rule.set(None);
                load();
            },
        );
    };

    let open_new = move |day: DayOfWeek| editing.set(Some(CapacityRuleDto::new_for_day(day)));

    view! {
        <PageFrame page_id="a001_capacity_rule--board" category=PAGE_CAT_BOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Capacity rules"</h1>
                    <span class="page__subtitle">
                        {move || {
                            let (standard, emergency) = totals.get();
                            format!("{} standard / {} emergency slots per week", standard, emergency)
                        }}
                    </span>
                </div>
                <div class="page__header-right">
                    <Checkbox checked=show_inactive label="Show inactive" />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="capacity-board">
                    {move || groups.get().into_iter().map(|group| {
                        let day = group.day;
                        view! {
                            <div class="capacity-board__day" class:capacity-board__day--today={day == today_dow}>
                                <div class="capacity-board__day-header">
                                    <span class="capacity-board__day-name" title=day.name()>{day.short_name()}</span>
                                    <span class="capacity-board__day-totals">
                                        {format!("{} / {}", group.total_standard_slots, group.total_emergency_slots)}
                                    </span>
                                </div>
                                {group.rules.is_empty().then(|| view! {
                                    <div class="capacity-board__empty">"Closed"</div>
                                })}
                                {group.rules.into_iter().map(|rule| {
                                    let rule_for_edit = rule.clone();
                                    let rule_for_delete = rule.clone();
                                    view! {
                                        <div
                                            class="capacity-card"
                                            class:capacity-card--inactive=!rule.is_active
                                        >
                                            <div class="capacity-card__window">{rule.window_label()}</div>
                                            <div class="capacity-card__slots">
                                                {format!("{} standard · {} emergency", rule.max_standard_slots, rule.max_emergency_slots)}
                                            </div>
                                            {(!rule.is_active).then(|| view! {
                                                <span class="badge badge--neutral">"Inactive"</span>
                                            })}
                                            {rule.notes.clone().map(|n| view! {
                                                <div class="capacity-card__notes">{n}</div>
                                            })}
                                            <div class="capacity-card__actions">
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(CapacityRuleDto::from_rule(&rule_for_edit)))
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| deleting_rule.set(Some(rule_for_delete.clone()))
                                                    attr:title="Delete"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| open_new(day)
                                >
                                    {icon("plus")}
                                    " Add window"
                                </Button>
                            </div>
                        }
                    }).collect_view()}
                </div>

                {move || editing.get().map(|dto| view! {
                    <CapacityRuleDetails
                        dto=dto
                        existing=rules.get_untracked()
                        on_close=Callback::new(move |_| editing.set(None))
                        on_saved=Callback::new(move |_| {
                            editing.set(None);
                            load();
                        })
                    />
                })}

                {move || deleting_rule.get().map(|rule| view! {
                    <ConfirmDialog
                        title="Delete capacity rule"
                        message=format!("Delete the {} window {}?", rule.day_of_week.name(), rule.window_label())
                        busy=deleting
                        on_confirm=Callback::new(confirm_delete)
                        on_cancel=Callback::new(move |_| deleting_rule.set(None))
                    />
                })}
            </div>
        </PageFrame>
    }
}
