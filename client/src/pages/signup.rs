//! Signup page against the hosted auth provider.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::state::toasts::{ToastKind, ToastState, show_toast};

/// Minimum password length the provider enforces; checked locally so the
/// round trip is skipped for obviously short passwords.
pub(crate) const MIN_PASSWORD_LEN: usize = 6;

/// Check the required fields before calling the provider.
pub(crate) fn validate_signup(
    email: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_signup(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::auth::sign_up(&email_value, &password_value).await {
                Ok(()) => {
                    info.set("Check your email to confirm your account".to_owned());
                    show_toast(toasts, ToastKind::Success, "Account created");
                }
                Err(message) => error.set(message),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, toasts);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Create your Voicelet account"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            minlength="6"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-form__error">{move || error.get()}</p>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-form__info">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already have an account? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
