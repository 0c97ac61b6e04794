//! One sidebar navigation entry.

use leptos::prelude::*;

use crate::state::ui::{DashboardTab, UiState};

#[component]
pub fn NavItem(tab: DashboardTab) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let class = move || {
        if ui.get().active_tab == tab {
            "sidebar__item sidebar__item--active"
        } else {
            "sidebar__item"
        }
    };

    view! {
        <button class=class on:click=move |_| ui.update(|state| state.active_tab = tab)>
            {tab.label()}
        </button>
    }
}
