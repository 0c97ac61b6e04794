//! Website crawler tab: URL form and crawl result rendering.

#[cfg(test)]
#[path = "crawler_tab_test.rs"]
mod crawler_tab_test;

use api::types::CrawlResult;
use leptos::prelude::*;

use crate::state::toasts::{ToastKind, ToastState, show_toast};
use crate::state::ui::{DashboardTab, UiState};
use crate::util::website_url::validate_website_url;

/// Whether the FAQ section renders at all. Zero entries means the section
/// is omitted entirely, not rendered empty.
pub(crate) fn has_faq(result: &CrawlResult) -> bool {
    !result.content.faq.is_empty()
}

#[component]
pub fn CrawlerTab() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let website_url = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let result = RwSignal::new(None::<CrawlResult>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let url_value = match validate_website_url(&website_url.get()) {
            Ok(url) => url,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::crawl_website(&url_value).await {
                Ok(crawled) => {
                    result.set(Some(crawled));
                    show_toast(toasts, ToastKind::Success, "Website crawled successfully!");
                }
                Err(message) => {
                    error.set(message);
                    show_toast(toasts, ToastKind::Error, "Website crawling failed");
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url_value, toasts);
            busy.set(false);
        }
    };

    view! {
        <div class="crawler-tab">
            <div class="card">
                <h2>"Website Crawler"</h2>
                <p class="card__lead">
                    "Enter your website URL to extract content and create a knowledge base for your voice assistant."
                </p>
                <form class="crawler-tab__form" on:submit=on_submit>
                    <input
                        class="crawler-tab__input"
                        type="text"
                        placeholder="https://example.com"
                        prop:value=move || website_url.get()
                        on:input=move |ev| website_url.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Analyzing..." } else { "Analyze Site" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="crawler-tab__error">{move || error.get()}</p>
                </Show>
            </div>

            {move || {
                result
                    .get()
                    .map(|crawled| {
                        let faq_section = has_faq(&crawled)
                            .then(|| {
                                view! {
                                    <div class="crawler-tab__faq">
                                        <h3>"FAQs"</h3>
                                        {crawled
                                            .content
                                            .faq
                                            .iter()
                                            .map(|entry| {
                                                view! {
                                                    <div class="crawler-tab__faq-entry">
                                                        <div class="crawler-tab__faq-question">
                                                            {entry.question.clone()}
                                                        </div>
                                                        <p>{entry.answer.clone()}</p>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            });

                        view! {
                            <div class="card">
                                <h2>"Crawl Results"</h2>
                                <h3>{format!("Website: {}", crawled.website_url)}</h3>
                                <p class="card__lead">{format!("Title: {}", crawled.content.title)}</p>

                                <div class="crawler-tab__pages">
                                    <h3>"Pages"</h3>
                                    {crawled
                                        .content
                                        .pages
                                        .iter()
                                        .map(|page| {
                                            view! {
                                                <div class="crawler-tab__page">
                                                    <div class="crawler-tab__page-title">{page.title.clone()}</div>
                                                    <div class="crawler-tab__page-url">{page.url.clone()}</div>
                                                    <p>{page.content.clone()}</p>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>

                                {faq_section}

                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| ui.update(|state| state.active_tab = DashboardTab::Assistant)
                                >
                                    "Create Assistant with This Content"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
