//! Dashboard home: stat cards, quick actions, and recent activity.

#[cfg(test)]
#[path = "home_tab_test.rs"]
mod home_tab_test;

use api::types::UsageRecord;
use leptos::prelude::*;

use crate::components::action_card::ActionCard;
use crate::components::stat_card::StatCard;
use crate::repo::Repositories;
use crate::state::ui::{DashboardTab, UiState};
use crate::util::billing::{format_duration, format_usd};

/// Aggregated account stats for the four cards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeStats {
    pub websites: usize,
    pub assistants: usize,
    pub minutes: u32,
    pub cost: f64,
}

/// Pure aggregation over repository snapshots.
#[must_use]
pub(crate) fn stats_from(websites: usize, assistants: usize, usage: &[UsageRecord]) -> HomeStats {
    let total_secs: u32 = usage.iter().map(|record| record.duration).sum();
    HomeStats {
        websites,
        assistants,
        minutes: total_secs / 60,
        cost: usage.iter().map(|record| record.cost).sum(),
    }
}

async fn load_home(repos: Repositories) -> (HomeStats, Vec<UsageRecord>) {
    let websites = repos.websites.list_websites().await.unwrap_or_default();
    let assistants = repos.assistants.list_assistants().await.unwrap_or_default();
    let usage = repos.usage.list_usage().await.unwrap_or_default();
    (stats_from(websites.len(), assistants.len(), &usage), usage)
}

#[component]
pub fn HomeTab() -> impl IntoView {
    let repos = expect_context::<Repositories>();
    let ui = expect_context::<RwSignal<UiState>>();

    let home = LocalResource::new(move || load_home(repos.clone()));

    let go_to = move |tab: DashboardTab| {
        Callback::new(move |()| ui.update(|state| state.active_tab = tab))
    };

    view! {
        <div class="home-tab">
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    home.get()
                        .map(|(stats, usage)| {
                            view! {
                                <div class="home-tab__stats">
                                    <StatCard
                                        title="Websites"
                                        value=stats.websites.to_string()
                                        description="Total websites analyzed"
                                    />
                                    <StatCard
                                        title="Assistants"
                                        value=stats.assistants.to_string()
                                        description="Active voice assistants"
                                    />
                                    <StatCard
                                        title="Minutes"
                                        value=stats.minutes.to_string()
                                        description="Total conversation time"
                                    />
                                    <StatCard
                                        title="Cost"
                                        value=format_usd(stats.cost)
                                        description="Total usage cost"
                                    />
                                </div>

                                <div class="home-tab__actions card">
                                    <h2>"Quick Actions"</h2>
                                    <div class="home-tab__action-grid">
                                        <ActionCard
                                            title="Analyze Website"
                                            description="Extract content from your website"
                                            button_text="Start"
                                            on_click=go_to(DashboardTab::Crawler)
                                        />
                                        <ActionCard
                                            title="Create Assistant"
                                            description="Create a new voice assistant"
                                            button_text="Create"
                                            on_click=go_to(DashboardTab::Assistant)
                                        />
                                        <ActionCard
                                            title="Generate Widget"
                                            description="Get code to add to your website"
                                            button_text="Generate"
                                            on_click=go_to(DashboardTab::Widget)
                                        />
                                    </div>
                                </div>

                                {(stats.assistants > 0)
                                    .then(|| {
                                        view! {
                                            <div class="home-tab__activity card">
                                                <h2>"Recent Activity"</h2>
                                                <table class="table">
                                                    <thead>
                                                        <tr>
                                                            <th>"Date"</th>
                                                            <th>"Website"</th>
                                                            <th>"Duration"</th>
                                                            <th>"Cost"</th>
                                                        </tr>
                                                    </thead>
                                                    <tbody>
                                                        {usage
                                                            .iter()
                                                            .map(|record| {
                                                                view! {
                                                                    <tr>
                                                                        <td>{record.date.clone()}</td>
                                                                        <td>{record.website.clone()}</td>
                                                                        <td>{format_duration(record.duration)}</td>
                                                                        <td>{format_usd(record.cost)}</td>
                                                                    </tr>
                                                                }
                                                            })
                                                            .collect::<Vec<_>>()}
                                                    </tbody>
                                                </table>
                                            </div>
                                        }
                                    })}
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
