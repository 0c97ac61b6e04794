//! Marketing landing page: hero, how-it-works, and pricing.

use leptos::prelude::*;

use crate::util::billing::RATE_USD_PER_MINUTE;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <header class="landing__hero">
                <nav class="landing__nav">
                    <span class="landing__brand">"Voicelet"</span>
                    <div>
                        <a href="/login" class="landing__nav-link">
                            "Login"
                        </a>
                        <a href="/signup" class="landing__nav-link landing__nav-link--solid">
                            "Sign Up"
                        </a>
                    </div>
                </nav>

                <div class="landing__headline">
                    <h1>"Create Voice Chatbots in Minutes"</h1>
                    <p>
                        "Turn your website content into an intelligent voice assistant with just a few clicks"
                    </p>
                    <a href="/signup" class="btn btn--hero">
                        "Get Started Free"
                    </a>
                </div>
            </header>

            <section class="landing__steps">
                <h2>"How It Works"</h2>
                <div class="landing__step-grid">
                    <StepCard
                        title="1. Analyze Your Website"
                        body="Our extension automatically extracts content from your website to create knowledge for your assistant."
                    />
                    <StepCard
                        title="2. Customize Your Assistant"
                        body="Choose voice, language, and customize how your assistant responds to visitors."
                    />
                    <StepCard
                        title="3. Add to Your Website"
                        body="Get an easy-to-integrate widget code that you can add to your website in seconds."
                    />
                </div>
            </section>

            <section class="landing__pricing">
                <h2>"Simple Pricing"</h2>
                <p class="landing__pricing-sub">"Pay only for what you use"</p>
                <div class="landing__price-card">
                    <h3>"Usage-Based Pricing"</h3>
                    <div class="landing__price">
                        {format!("${RATE_USD_PER_MINUTE:.2}")}
                        <span>"/minute"</span>
                    </div>
                    <p>"Only pay for the time your visitors spend talking with your assistant"</p>
                    <ul>
                        <li>"No monthly subscription"</li>
                        <li>"Unlimited website visitors"</li>
                        <li>"Real-time usage dashboard"</li>
                        <li>"Pay-as-you-go billing"</li>
                    </ul>
                    <a href="/signup" class="btn btn--primary">
                        "Start Creating"
                    </a>
                </div>
            </section>

            <footer class="landing__footer">
                <span class="landing__brand">"Voicelet"</span>
                <span class="landing__copyright">"© Voicelet. All rights reserved."</span>
            </footer>
        </div>
    }
}

/// One "How It Works" card.
#[component]
fn StepCard(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="landing__step">
            <h3>{title}</h3>
            <p>{body}</p>
        </div>
    }
}
