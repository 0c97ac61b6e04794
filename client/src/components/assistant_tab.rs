//! Assistant creator tab: configuration form and success panel.

#[cfg(test)]
#[path = "assistant_tab_test.rs"]
mod assistant_tab_test;

use api::types::{Assistant, AssistantConfig, Website};
use leptos::prelude::*;

use crate::repo::Repositories;
use crate::state::toasts::{ToastKind, ToastState, show_toast};
use crate::state::ui::{DashboardTab, UiState};

/// Voice options offered by the creator form.
pub(crate) const VOICES: [(&str, &str); 4] = [
    ("nova", "Nova (Female)"),
    ("shimmer", "Shimmer (Female)"),
    ("echo", "Echo (Male)"),
    ("fable", "Fable (Male)"),
];

/// Language options offered by the creator form.
pub(crate) const LANGUAGES: [(&str, &str); 4] =
    [("en", "English"), ("fr", "French"), ("es", "Spanish"), ("de", "German")];

/// Model options offered by the creator form.
pub(crate) const MODELS: [(&str, &str); 3] = [
    ("gpt-4o", "GPT-4o (Recommended)"),
    ("gpt-4-turbo", "GPT-4 Turbo"),
    ("gpt-3.5-turbo", "GPT-3.5 Turbo (Faster)"),
];

/// Display name for a catalog id, falling back to the raw id.
pub(crate) fn catalog_label(catalog: &[(&str, &str)], id: &str) -> String {
    catalog
        .iter()
        .find(|(candidate, _)| *candidate == id)
        .map_or_else(|| id.to_owned(), |(_, label)| (*label).to_owned())
}

/// Required-field check before submitting.
pub(crate) fn validate_assistant_form(website_id: &str, name: &str) -> Result<(), &'static str> {
    if website_id.trim().is_empty() {
        return Err("Select a website first.");
    }
    if name.trim().is_empty() {
        return Err("Name your assistant first.");
    }
    Ok(())
}

/// Build the config submitted to the backend, mirroring the form's input
/// constraints (temperature 0..=1, duration 10..=300 seconds).
pub(crate) fn build_assistant_config(
    name: &str,
    system_prompt: &str,
    voice_id: &str,
    language: &str,
    llm_model: &str,
    temperature_raw: &str,
    duration_raw: &str,
) -> AssistantConfig {
    AssistantConfig {
        name: name.trim().to_owned(),
        system_prompt: system_prompt.trim().to_owned(),
        voice_id: voice_id.to_owned(),
        language: language.to_owned(),
        llm_model: llm_model.to_owned(),
        temperature: temperature_raw.parse::<f64>().unwrap_or(0.7).clamp(0.0, 1.0),
        max_response_duration: duration_raw.parse::<u32>().unwrap_or(120).clamp(10, 300),
    }
}

#[component]
pub fn AssistantTab() -> impl IntoView {
    let repos = expect_context::<Repositories>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let websites = LocalResource::new(move || {
        let repos = repos.clone();
        async move { repos.websites.list_websites().await.unwrap_or_default() }
    });

    let defaults = AssistantConfig::default();
    let selected_website = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let system_prompt = RwSignal::new(defaults.system_prompt.clone());
    let voice_id = RwSignal::new(defaults.voice_id.clone());
    let language = RwSignal::new(defaults.language.clone());
    let llm_model = RwSignal::new(defaults.llm_model.clone());
    let temperature = RwSignal::new(defaults.temperature.to_string());
    let max_duration = RwSignal::new(defaults.max_response_duration.to_string());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let created = RwSignal::new(None::<Assistant>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let website_id = selected_website.get();
        if let Err(message) = validate_assistant_form(&website_id, &name.get()) {
            error.set(message.to_owned());
            return;
        }
        let config = build_assistant_config(
            &name.get(),
            &system_prompt.get(),
            &voice_id.get(),
            &language.get(),
            &llm_model.get(),
            &temperature.get(),
            &max_duration.get(),
        );
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_assistant(&website_id, &config).await {
                Ok(assistant) => {
                    created.set(Some(assistant));
                    show_toast(toasts, ToastKind::Success, "Assistant created successfully!");
                }
                Err(message) => {
                    error.set(message);
                    show_toast(toasts, ToastKind::Error, "Assistant creation failed");
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (website_id, config, toasts);
            busy.set(false);
        }
    };

    view! {
        <div class="assistant-tab card">
            <h2>"Create Voice Assistant"</h2>
            <p class="card__lead">
                "Design your custom voice assistant using the content from your crawled website."
            </p>

            <Show
                when=move || created.get().is_none()
                fallback=move || {
                    created
                        .get()
                        .map(|assistant| {
                            view! {
                                <div class="assistant-tab__created">
                                    <h3>"Assistant Created Successfully!"</h3>
                                    <dl class="assistant-tab__summary">
                                        <dt>"Name"</dt>
                                        <dd>{assistant.config.name.clone()}</dd>
                                        <dt>"Voice"</dt>
                                        <dd>{catalog_label(&VOICES, &assistant.config.voice_id)}</dd>
                                        <dt>"Language"</dt>
                                        <dd>{catalog_label(&LANGUAGES, &assistant.config.language)}</dd>
                                        <dt>"Model"</dt>
                                        <dd>{catalog_label(&MODELS, &assistant.config.llm_model)}</dd>
                                        <dt>"Assistant ID"</dt>
                                        <dd class="assistant-tab__id">{assistant.id.clone()}</dd>
                                    </dl>
                                    <div class="assistant-tab__created-actions">
                                        <button
                                            class="btn btn--primary"
                                            on:click=move |_| {
                                                ui.update(|state| state.active_tab = DashboardTab::Widget)
                                            }
                                        >
                                            "Generate Widget"
                                        </button>
                                        <button class="btn" on:click=move |_| created.set(None)>
                                            "Create Another"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                }
            >
                <form class="assistant-tab__form" on:submit=on_submit>
                    <label class="field">
                        "Select Website"
                        <select
                            class="field__input"
                            prop:value=move || selected_website.get()
                            on:change=move |ev| selected_website.set(event_target_value(&ev))
                        >
                            <option value="">"-- Select a website --"</option>
                            <Suspense fallback=|| ()>
                                {move || {
                                    websites
                                        .get()
                                        .map(|list: Vec<Website>| {
                                            list.into_iter()
                                                .map(|site| {
                                                    view! {
                                                        <option value=site.id.clone()>
                                                            {format!("{} ({})", site.title, site.url)}
                                                        </option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()
                                        })
                                }}
                            </Suspense>
                        </select>
                    </label>

                    <label class="field">
                        "Assistant Name"
                        <input
                            class="field__input"
                            type="text"
                            placeholder="e.g., Company Support Assistant"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        "System Prompt"
                        <textarea
                            class="field__input field__input--tall"
                            placeholder="Instructions for your assistant..."
                            prop:value=move || system_prompt.get()
                            on:input=move |ev| system_prompt.set(event_target_value(&ev))
                        ></textarea>
                        <span class="field__hint">
                            "This defines how your assistant will behave and respond."
                        </span>
                    </label>

                    <div class="field-row">
                        <label class="field">
                            "Voice"
                            <select
                                class="field__input"
                                prop:value=move || voice_id.get()
                                on:change=move |ev| voice_id.set(event_target_value(&ev))
                            >
                                {VOICES
                                    .into_iter()
                                    .map(|(id, label)| view! { <option value=id>{label}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>

                        <label class="field">
                            "Language"
                            <select
                                class="field__input"
                                prop:value=move || language.get()
                                on:change=move |ev| language.set(event_target_value(&ev))
                            >
                                {LANGUAGES
                                    .into_iter()
                                    .map(|(code, label)| view! { <option value=code>{label}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                    </div>

                    <div class="field-row">
                        <label class="field">
                            "LLM Model"
                            <select
                                class="field__input"
                                prop:value=move || llm_model.get()
                                on:change=move |ev| llm_model.set(event_target_value(&ev))
                            >
                                {MODELS
                                    .into_iter()
                                    .map(|(id, label)| view! { <option value=id>{label}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>

                        <label class="field">
                            {move || format!("Temperature ({})", temperature.get())}
                            <input
                                class="field__input"
                                type="range"
                                min="0"
                                max="1"
                                step="0.1"
                                prop:value=move || temperature.get()
                                on:input=move |ev| temperature.set(event_target_value(&ev))
                            />
                            <div class="field__scale">
                                <span>"More Precise"</span>
                                <span>"More Creative"</span>
                            </div>
                        </label>
                    </div>

                    <label class="field">
                        "Max Response Duration (seconds)"
                        <input
                            class="field__input"
                            type="number"
                            min="10"
                            max="300"
                            prop:value=move || max_duration.get()
                            on:input=move |ev| max_duration.set(event_target_value(&ev))
                        />
                        <span class="field__hint">
                            "Maximum length of assistant's voice responses in seconds."
                        </span>
                    </label>

                    <div class="assistant-tab__test-mode">
                        <strong>"Test Mode"</strong>
                        <p>
                            "Your assistant will be created in Test Mode, which allows up to 5 minutes of testing before finalizing."
                        </p>
                    </div>

                    <Show when=move || !error.get().is_empty()>
                        <p class="assistant-tab__error">{move || error.get()}</p>
                    </Show>

                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Create Assistant" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
