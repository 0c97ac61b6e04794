//! Quick-action card for the dashboard home grid.

use leptos::prelude::*;

#[component]
pub fn ActionCard(
    title: &'static str,
    description: &'static str,
    button_text: &'static str,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="action-card">
            <h3>{title}</h3>
            <p>{description}</p>
            <button class="btn btn--primary" on:click=move |_| on_click.run(())>
                {button_text}
            </button>
        </div>
    }
}
