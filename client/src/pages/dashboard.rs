//! Dashboard shell: sidebar tabs, header, and the active tab panel.
//! Redirects to `/login` when no session exists.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::assistant_tab::AssistantTab;
use crate::components::billing_tab::BillingTab;
use crate::components::crawler_tab::CrawlerTab;
use crate::components::home_tab::HomeTab;
use crate::components::nav_item::NavItem;
use crate::components::settings_tab::SettingsTab;
use crate::components::widget_tab::WidgetTab;
use crate::state::auth::AuthState;
use crate::state::toasts::{ToastKind, ToastState, show_toast};
use crate::state::ui::{DashboardTab, UiState};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::auth::sign_out().await;
            auth.set(AuthState { user: None, loading: false });
            show_toast(toasts, ToastKind::Success, "Logged out successfully");
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = toasts;
    };

    view! {
        <div class="dashboard">
            <aside class="sidebar">
                <div class="sidebar__brand">"Voicelet"</div>
                <nav class="sidebar__nav">
                    {DashboardTab::all()
                        .into_iter()
                        .map(|tab| view! { <NavItem tab=tab/> })
                        .collect::<Vec<_>>()}
                </nav>
            </aside>

            <div class="dashboard__main">
                <header class="dashboard__header">
                    <h1>{move || ui.get().active_tab.title()}</h1>
                    <div class="dashboard__account">
                        <span class="dashboard__email">
                            {move || auth.get().email().map(ToOwned::to_owned).unwrap_or_default()}
                        </span>
                        <button class="dashboard__logout" on:click=on_logout>
                            "Logout"
                        </button>
                    </div>
                </header>

                <main class="dashboard__content">
                    {move || match ui.get().active_tab {
                        DashboardTab::Home => view! { <HomeTab/> }.into_any(),
                        DashboardTab::Crawler => view! { <CrawlerTab/> }.into_any(),
                        DashboardTab::Assistant => view! { <AssistantTab/> }.into_any(),
                        DashboardTab::Widget => view! { <WidgetTab/> }.into_any(),
                        DashboardTab::Billing => view! { <BillingTab/> }.into_any(),
                        DashboardTab::Settings => view! { <SettingsTab/> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
