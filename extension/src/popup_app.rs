//! Leptos popup component for the step-driven extension flow.
//!
//! The active-tab query is injected so the component runs against a fake
//! outside the extension sandbox (and silently degrades to a placeholder
//! URL, matching the development-mode behavior of the popup).

use std::rc::Rc;

use api::types::CrawlResult;
use leptos::prelude::*;

use crate::capabilities::TabQuery;
#[cfg(feature = "web")]
use crate::net;
use crate::popup::{PopupStep, content_summary, demo_assistant_summary, demo_widget_snippet};
#[cfg(feature = "web")]
use crate::popup::{CREATE_SPINNER_MS, resolve_start_url};

/// Extension popup root.
#[component]
pub fn PopupApp(tabs: Rc<dyn TabQuery>) -> impl IntoView {
    let current_url = RwSignal::new(String::new());
    let step = RwSignal::new(PopupStep::Initial);
    let error = RwSignal::new(String::new());
    let crawl = RwSignal::new(None::<CrawlResult>);

    #[cfg(feature = "web")]
    {
        let tabs = Rc::clone(&tabs);
        leptos::task::spawn_local(async move {
            current_url.set(resolve_start_url(tabs.as_ref()).await);
        });
    }
    #[cfg(not(feature = "web"))]
    let _ = tabs;

    let on_analyze = move |_| {
        let url_value = current_url.get();
        if url_value.is_empty() || step.get() == PopupStep::Analyzing {
            return;
        }
        step.set(PopupStep::Analyzing);
        error.set(String::new());

        #[cfg(feature = "web")]
        leptos::task::spawn_local(async move {
            match net::post_crawl(net::DEFAULT_BACKEND_URL, &url_value).await {
                Ok(result) => {
                    crawl.set(Some(result));
                    step.set(PopupStep::Results);
                }
                Err(message) => {
                    error.set(message);
                    step.set(PopupStep::Initial);
                }
            }
        });
    };

    let on_create = move |_| {
        step.set(PopupStep::Creating);
        // The popup only mocks assistant creation; the dashboard owns the
        // real form.
        #[cfg(feature = "web")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(CREATE_SPINNER_MS).await;
            step.set(PopupStep::AssistantReady);
        });
    };

    let on_widget = move |_| step.set(PopupStep::WidgetReady);

    let on_reset = move |_| {
        step.set(PopupStep::Initial);
        error.set(String::new());
        crawl.set(None);
    };

    let on_copy = move |_| {
        #[cfg(feature = "web")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.navigator().clipboard().write_text(&demo_widget_snippet());
            }
        }
    };

    let on_open_dashboard = move |_| {
        #[cfg(feature = "web")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(net::DEFAULT_BACKEND_URL, "_blank");
            }
        }
    };

    view! {
        <div class="popup">
            <header class="popup__header">
                <h1>"Voicelet"</h1>
            </header>

            {move || match step.get() {
                PopupStep::Initial => {
                    view! {
                        <div class="popup__content">
                            <div class="popup__url">
                                {move || {
                                    let url = current_url.get();
                                    if url.is_empty() { "No URL detected".to_owned() } else { url }
                                }}
                            </div>
                            <p>
                                "Analyze this website to create a voice assistant using its content."
                            </p>
                            <button
                                class="popup__btn"
                                on:click=on_analyze
                                disabled=move || current_url.get().is_empty()
                            >
                                "Analyze Website"
                            </button>
                            <button class="popup__btn popup__btn--secondary" on:click=on_open_dashboard>
                                "Open Full Dashboard"
                            </button>
                            <Show when=move || !error.get().is_empty()>
                                <div class="popup__message popup__message--error">
                                    {move || error.get()}
                                </div>
                            </Show>
                        </div>
                    }
                        .into_any()
                }
                PopupStep::Analyzing => {
                    view! {
                        <div class="popup__loading">
                            <div class="popup__spinner"></div>
                            <p>"Analyzing website content..."</p>
                            <p>"This may take a few moments"</p>
                        </div>
                    }
                        .into_any()
                }
                PopupStep::Results => {
                    view! {
                        <div class="popup__content">
                            <div class="popup__message popup__message--success">
                                "Website analyzed successfully!"
                            </div>
                            <div class="popup__panel">
                                <h2>"Content Summary"</h2>
                                {move || {
                                    crawl
                                        .get()
                                        .map(|result| {
                                            content_summary(&result)
                                                .into_iter()
                                                .map(|(label, value)| {
                                                    view! {
                                                        <p>
                                                            <strong>{format!("{label}: ")}</strong>
                                                            {value}
                                                        </p>
                                                    }
                                                })
                                                .collect::<Vec<_>>()
                                        })
                                }}
                            </div>
                            <button class="popup__btn" on:click=on_create>
                                "Create Voice Assistant"
                            </button>
                            <button class="popup__btn popup__btn--secondary" on:click=on_reset>
                                "Analyze Different URL"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                PopupStep::Creating => {
                    view! {
                        <div class="popup__loading">
                            <div class="popup__spinner"></div>
                            <p>"Creating your voice assistant..."</p>
                        </div>
                    }
                        .into_any()
                }
                PopupStep::AssistantReady => {
                    view! {
                        <div class="popup__content">
                            <div class="popup__message popup__message--success">
                                "Assistant created successfully!"
                            </div>
                            <div class="popup__panel">
                                <h2>"Assistant Details"</h2>
                                {demo_assistant_summary()
                                    .into_iter()
                                    .map(|(label, value)| {
                                        view! {
                                            <p>
                                                <strong>{format!("{label}: ")}</strong>
                                                {value}
                                            </p>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                            <button class="popup__btn" on:click=on_widget>
                                "Create Website Widget"
                            </button>
                            <button class="popup__btn popup__btn--secondary" on:click=on_open_dashboard>
                                "Open Full Dashboard"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                PopupStep::WidgetReady => {
                    view! {
                        <div class="popup__content">
                            <div class="popup__message popup__message--success">
                                "Widget code generated!"
                            </div>
                            <div class="popup__panel">
                                <h2>"Widget Code"</h2>
                                <pre class="popup__code">{demo_widget_snippet()}</pre>
                                <p class="popup__hint">
                                    "Copy this code and paste it before the closing </body> tag on your website."
                                </p>
                            </div>
                            <button class="popup__btn" on:click=on_copy>
                                "Copy Code"
                            </button>
                            <button class="popup__btn popup__btn--secondary" on:click=on_open_dashboard>
                                "Open Full Dashboard"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}

            <footer class="popup__footer">
                <Show
                    when=move || step.get() != PopupStep::Initial
                    fallback=|| view! { <span>"Powered by Vapi.ai & Firecrawl.ai"</span> }
                >
                    <button class="popup__link" on:click=on_reset>
                        "Start Over"
                    </button>
                </Show>
            </footer>
        </div>
    }
}
