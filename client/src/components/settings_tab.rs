//! Account settings: profile, payment methods, API keys, danger zone.
//!
//! Everything here is display plumbing; key rotation and account
//! deletion live behind backend endpoints this build does not call yet.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::toasts::{ToastKind, ToastState, show_toast};

#[component]
pub fn SettingsTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_copy_key = move |_| {
        show_toast(toasts, ToastKind::Info, "API key copied");
    };

    view! {
        <div class="settings-tab card">
            <h2>"Account Settings"</h2>

            <section class="settings-tab__section">
                <h3>"Profile Information"</h3>
                <label class="field">
                    "Email"
                    <input
                        class="field__input"
                        type="email"
                        disabled=true
                        prop:value=move || auth.get().email().map(ToOwned::to_owned).unwrap_or_default()
                    />
                </label>
            </section>

            <section class="settings-tab__section">
                <h3>"Payment Methods"</h3>
                <button class="btn btn--primary">"Add Payment Method"</button>
            </section>

            <section class="settings-tab__section">
                <h3>"API Keys"</h3>
                <div class="settings-tab__key-panel">
                    <div class="settings-tab__key-header">
                        <span>"Your API Key"</span>
                        <button class="btn" on:click=on_copy_key>
                            "Copy"
                        </button>
                    </div>
                    <p class="settings-tab__key-hint">
                        "Use this key to access the API programmatically."
                    </p>
                </div>
                <button class="btn">"Regenerate Key"</button>
            </section>

            <section class="settings-tab__section settings-tab__section--danger">
                <h3>"Danger Zone"</h3>
                <button class="btn btn--danger">"Delete Account"</button>
            </section>
        </div>
    }
}
