//! Billing tab: usage totals, history table, and the rate explainer.
//!
//! Costs shown here are display figures only: per-row amounts come from
//! the backend records and the summed total is labeled as an estimate.
//! The payment processor owns the authoritative invoice.

#[cfg(test)]
#[path = "billing_tab_test.rs"]
mod billing_tab_test;

use api::types::UsageRecord;
use leptos::prelude::*;

use crate::repo::Repositories;
use crate::state::toasts::{ToastKind, ToastState, show_toast};
use crate::util::billing::{RATE_USD_PER_MINUTE, format_duration, format_usd};

/// Total conversation time across all records.
pub(crate) fn total_duration_secs(records: &[UsageRecord]) -> u32 {
    records.iter().map(|record| record.duration).sum()
}

/// Sum of the backend-reported costs.
pub(crate) fn total_cost(records: &[UsageRecord]) -> f64 {
    records.iter().map(|record| record.cost).sum()
}

#[component]
pub fn BillingTab() -> impl IntoView {
    let repos = expect_context::<Repositories>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let usage = LocalResource::new(move || {
        let repos = repos.clone();
        async move { repos.usage.list_usage().await.unwrap_or_default() }
    });

    let on_top_up = move |_| {
        show_toast(toasts, ToastKind::Info, "Redirecting to payment page...");
    };

    view! {
        <div class="billing-tab">
            <Suspense fallback=move || view! { <p>"Loading usage..."</p> }>
                {move || {
                    usage
                        .get()
                        .map(|records| {
                            view! {
                                <div class="billing-tab__totals">
                                    <div class="stat-card">
                                        <div class="stat-card__title">"Total Usage"</div>
                                        <div class="stat-card__value">
                                            {format_duration(total_duration_secs(&records))}
                                        </div>
                                    </div>
                                    <div class="stat-card">
                                        <div class="stat-card__title">"Total Cost"</div>
                                        <div class="stat-card__value">
                                            {format_usd(total_cost(&records))}
                                        </div>
                                    </div>
                                    <div class="stat-card">
                                        <div class="stat-card__title">"Rate"</div>
                                        <div class="stat-card__value">
                                            {format!("${RATE_USD_PER_MINUTE:.2}/minute")}
                                        </div>
                                    </div>
                                </div>

                                <div class="billing-tab__history card">
                                    <div class="billing-tab__history-header">
                                        <h2>"Usage History"</h2>
                                        <button class="btn btn--primary" on:click=on_top_up>
                                            "Top Up Credit"
                                        </button>
                                    </div>
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                <th>"Date"</th>
                                                <th>"Assistant"</th>
                                                <th>"Website"</th>
                                                <th>"Duration"</th>
                                                <th>"Cost"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {records
                                                .iter()
                                                .map(|record| {
                                                    view! {
                                                        <tr>
                                                            <td>{record.date.clone()}</td>
                                                            <td>{record.assistant_name.clone()}</td>
                                                            <td>{record.website.clone()}</td>
                                                            <td>{format_duration(record.duration)}</td>
                                                            <td>{format_usd(record.cost)}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                    <p class="billing-tab__estimate">
                                        {format!(
                                            "Totals are estimated from usage at ${RATE_USD_PER_MINUTE:.2} per minute. Your invoice is calculated by the payment provider.",
                                        )}
                                    </p>
                                </div>
                            }
                        })
                }}
            </Suspense>

            <div class="billing-tab__explainer card">
                <h2>"Understanding Your Billing"</h2>
                <ul>
                    <li>
                        {format!("You are charged ${RATE_USD_PER_MINUTE:.2} per minute of conversation time.")}
                    </li>
                    <li>
                        "Time is measured from when a visitor starts speaking until the assistant finishes responding."
                    </li>
                    <li>"You can view detailed usage statistics per website and assistant."</li>
                    <li>"Add credit at any time to ensure your assistants keep running."</li>
                </ul>
            </div>
        </div>
    }
}
