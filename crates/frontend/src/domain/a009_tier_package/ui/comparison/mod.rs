use contracts::domain::a009_tier_package::comparison::build_comparison;
use contracts::domain::a009_tier_package::aggregate::TierPackage;
use contracts::shared::money::format_currency;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Feature matrix of one service's packages. Shared by the admin list and the public site.
#[component]
pub fn TierComparison(packages: Vec<TierPackage>) -> impl IntoView {
    let table = build_comparison(&packages);
    if table.is_empty() {
        return view! { <p class="text-muted">"No packages yet."</p> }.into_any();
    }

    let header = table
        .columns
        .iter()
        .map(|p| {
            let turnaround = p.turnaround_days.map(|d| {
                if d == 1 { "1 day".to_string() } else { format!("{} days", d) }
            });
            view! {
                <th class="tier-table__column" class:tier-table__column--popular=p.is_popular>
                    {p.is_popular.then(|| view! { <span class="badge badge--primary">"Most popular"</span> })}
                    <div class="tier-table__tier">{p.tier.label()}</div>
                    <div class="tier-table__name">{p.name.clone()}</div>
                    <div class="tier-table__price">{format_currency(p.price)}</div>
                    {turnaround.map(|t| view! { <div class="tier-table__turnaround">{t}</div> })}
                </th>
            }
        })
        .collect_view();

    let rows = table
        .rows
        .into_iter()
        .map(|row| {
            view! {
                <tr>
                    <td class="tier-table__feature">{row.label}</td>
                    {row.cells.into_iter().map(|included| view! {
                        <td class="tier-table__cell" class:tier-table__cell--included=included>
                            {if included { icon("check") } else { view! { <span class="text-muted">"-"</span> }.into_any() }}
                        </td>
                    }).collect_view()}
                </tr>
            }
        })
        .collect_view();

    let deliverables = table
        .columns
        .iter()
        .map(|p| {
            view! {
                <td class="tier-table__cell">
                    <ul class="tier-table__deliverables">
                        {p.deliverables.iter().map(|d| view! { <li>{d.clone()}</li> }).collect_view()}
                    </ul>
                </td>
            }
        })
        .collect_view();
    let has_deliverables = table.columns.iter().any(|p| !p.deliverables.is_empty());

    view! {
        <div class="tier-table-wrapper">
            <table class="tier-table">
                <thead>
                    <tr>
                        <th></th>
                        {header}
                    </tr>
                </thead>
                <tbody>
                    {rows}
                    {has_deliverables.then(|| view! {
                        <tr>
                            <td class="tier-table__feature">"Deliverables"</td>
                            {deliverables}
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
    .into_any()
}
