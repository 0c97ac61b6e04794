//! Widget generator tab: launcher form, live preview, and embed output.

#[cfg(test)]
#[path = "widget_tab_test.rs"]
mod widget_tab_test;

use api::types::{Assistant, GeneratedWidget, Website};
use leptos::prelude::*;
use widget::{DEFAULT_COLOR, DEFAULT_CTA_TEXT, Position, PreviewPlan, WidgetConfig};

use crate::repo::Repositories;
use crate::state::toasts::{ToastKind, ToastState, show_toast};

/// Corner options offered by the form.
pub(crate) const POSITIONS: [(Position, &str); 4] = [
    (Position::BottomRight, "Bottom Right"),
    (Position::BottomLeft, "Bottom Left"),
    (Position::TopRight, "Top Right"),
    (Position::TopLeft, "Top Left"),
];

/// Option label for an assistant, including its website when known.
pub(crate) fn assistant_option_label(assistant: &Assistant, websites: &[Website]) -> String {
    websites
        .iter()
        .find(|site| site.id == assistant.website_id)
        .map_or_else(
            || assistant.config.name.clone(),
            |site| format!("{} ({})", assistant.config.name, site.url),
        )
}

/// Required-field check before submitting.
pub(crate) fn validate_widget_form(assistant_id: &str) -> Result<(), &'static str> {
    if assistant_id.trim().is_empty() {
        return Err("Select an assistant first.");
    }
    Ok(())
}

/// Inline style anchoring the mock button inside the preview pane.
pub(crate) fn preview_container_style(plan: &PreviewPlan) -> String {
    let [vertical, horizontal] = plan.anchor_offsets();
    format!(
        "position:absolute;{}:{};{}:{}",
        vertical.0, vertical.1, horizontal.0, horizontal.1
    )
}

/// Inline style for the mock button; the color is passed through
/// uninterpreted.
pub(crate) fn preview_button_style(plan: &PreviewPlan) -> String {
    format!("background-color:{}", plan.color)
}

#[component]
pub fn WidgetTab() -> impl IntoView {
    let repos = expect_context::<Repositories>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let listing = LocalResource::new(move || {
        let repos = repos.clone();
        async move {
            let assistants = repos.assistants.list_assistants().await.unwrap_or_default();
            let websites = repos.websites.list_websites().await.unwrap_or_default();
            (assistants, websites)
        }
    });

    let selected_assistant = RwSignal::new(String::new());
    let color = RwSignal::new(DEFAULT_COLOR.to_owned());
    let position = RwSignal::new(Position::default().as_str().to_owned());
    let cta_text = RwSignal::new(DEFAULT_CTA_TEXT.to_owned());
    let avatar_url = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let generated = RwSignal::new(None::<GeneratedWidget>);

    let form_config = move || {
        WidgetConfig::from_form(
            &color.get(),
            Position::parse_or_default(&position.get()),
            &cta_text.get(),
            &avatar_url.get(),
        )
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let assistant_id = selected_assistant.get();
        if let Err(message) = validate_widget_form(&assistant_id) {
            error.set(message.to_owned());
            return;
        }
        let config = form_config();
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::generate_widget(&assistant_id, &config).await {
                Ok(widget) => {
                    generated.set(Some(widget));
                    show_toast(toasts, ToastKind::Success, "Widget generated successfully!");
                }
                Err(message) => {
                    error.set(message);
                    show_toast(toasts, ToastKind::Error, "Widget generation failed");
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (assistant_id, config, toasts);
            busy.set(false);
        }
    };

    let on_copy = move |_| {
        let Some(widget) = generated.get() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.navigator().clipboard().write_text(&widget.iframe_code);
            }
            show_toast(toasts, ToastKind::Success, "Widget code copied to clipboard!");
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = widget;
    };

    view! {
        <div class="widget-tab card">
            <h2>"Widget Generator"</h2>
            <p class="card__lead">
                "Create and customize a widget to add your voice assistant to your website."
            </p>

            <Show
                when=move || generated.get().is_none()
                fallback=move || {
                    generated
                        .get()
                        .map(|widget| {
                            view! {
                                <div class="widget-tab__result">
                                    <h3>"Widget Generated Successfully!"</h3>
                                    <h4>"Add this code to your website:"</h4>
                                    <pre class="widget-tab__code">
                                        <code>{widget.iframe_code.clone()}</code>
                                    </pre>
                                    <h4>"Instructions:"</h4>
                                    <ol class="widget-tab__instructions">
                                        <li>"Copy the code above."</li>
                                        <li>"Paste it before the closing </body> tag on your website."</li>
                                        <li>"Save your changes and test the widget on your website."</li>
                                    </ol>
                                    <div class="widget-tab__result-actions">
                                        <button class="btn" on:click=move |_| generated.set(None)>
                                            "Create Another Widget"
                                        </button>
                                        <button class="btn btn--primary" on:click=on_copy>
                                            "Copy Code"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                }
            >
                <form class="widget-tab__form" on:submit=on_submit>
                    <label class="field">
                        "Select Assistant"
                        <select
                            class="field__input"
                            prop:value=move || selected_assistant.get()
                            on:change=move |ev| selected_assistant.set(event_target_value(&ev))
                        >
                            <option value="">"-- Select an assistant --"</option>
                            <Suspense fallback=|| ()>
                                {move || {
                                    listing
                                        .get()
                                        .map(|(assistants, websites)| {
                                            assistants
                                                .iter()
                                                .map(|assistant| {
                                                    view! {
                                                        <option value=assistant.id.clone()>
                                                            {assistant_option_label(assistant, &websites)}
                                                        </option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()
                                        })
                                }}
                            </Suspense>
                        </select>
                    </label>

                    <div class="field-row">
                        <label class="field">
                            "Button Color"
                            <div class="widget-tab__color-row">
                                <input
                                    type="color"
                                    class="widget-tab__swatch"
                                    prop:value=move || color.get()
                                    on:input=move |ev| color.set(event_target_value(&ev))
                                />
                                <input
                                    type="text"
                                    class="field__input"
                                    prop:value=move || color.get()
                                    on:input=move |ev| color.set(event_target_value(&ev))
                                />
                            </div>
                        </label>

                        <label class="field">
                            "Position"
                            <select
                                class="field__input"
                                prop:value=move || position.get()
                                on:change=move |ev| position.set(event_target_value(&ev))
                            >
                                {POSITIONS
                                    .into_iter()
                                    .map(|(value, label)| {
                                        view! { <option value=value.as_str()>{label}</option> }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                    </div>

                    <div class="field-row">
                        <label class="field">
                            "Button Text"
                            <input
                                type="text"
                                class="field__input"
                                placeholder="e.g., Chat with me"
                                prop:value=move || cta_text.get()
                                on:input=move |ev| cta_text.set(event_target_value(&ev))
                            />
                        </label>

                        <label class="field">
                            "Avatar URL (Optional)"
                            <input
                                type="text"
                                class="field__input"
                                placeholder="https://example.com/avatar.png"
                                prop:value=move || avatar_url.get()
                                on:input=move |ev| avatar_url.set(event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <div class="widget-tab__preview">
                        <h3>"Widget Preview"</h3>
                        <div class="widget-tab__preview-pane">
                            <span class="widget-tab__preview-hint">"Website Preview"</span>
                            {move || {
                                let plan = PreviewPlan::from_config(&form_config());
                                let avatar = plan.avatar_url.clone();
                                view! {
                                    <div style=preview_container_style(&plan)>
                                        <button
                                            type="button"
                                            class="widget-tab__mock-button"
                                            style=preview_button_style(&plan)
                                        >
                                            {match avatar {
                                                Some(src) => {
                                                    view! {
                                                        <img
                                                            class="widget-tab__mock-avatar"
                                                            src=src
                                                            alt="Avatar"
                                                        />
                                                    }
                                                        .into_any()
                                                }
                                                None => {
                                                    view! {
                                                        <svg
                                                            class="widget-tab__mock-mic"
                                                            viewBox="0 0 24 24"
                                                            aria-hidden="true"
                                                        >
                                                            <path d="M12 1a3 3 0 0 0-3 3v8a3 3 0 0 0 6 0V4a3 3 0 0 0-3-3z"></path>
                                                            <path d="M19 10v2a7 7 0 0 1-14 0v-2"></path>
                                                            <line x1="12" y1="19" x2="12" y2="23"></line>
                                                            <line x1="8" y1="23" x2="16" y2="23"></line>
                                                        </svg>
                                                    }
                                                        .into_any()
                                                }
                                            }}
                                            {plan.label.clone()}
                                        </button>
                                    </div>
                                }
                            }}
                        </div>
                    </div>

                    <Show when=move || !error.get().is_empty()>
                        <p class="widget-tab__error">{move || error.get()}</p>
                    </Show>

                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Generating..." } else { "Generate Widget" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
