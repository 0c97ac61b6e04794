//! Small metric card for the dashboard home grid.

use leptos::prelude::*;

#[component]
pub fn StatCard(title: &'static str, value: String, description: &'static str) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__title">{title}</div>
            <div class="stat-card__value">{value}</div>
            <div class="stat-card__description">{description}</div>
        </div>
    }
}
