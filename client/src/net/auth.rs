//! Hosted-auth provider calls: sign in, sign up, sign out, session
//! restore.
//!
//! The provider is an opaque external collaborator; this module only
//! speaks its password-grant REST surface and keeps the access token in
//! `localStorage` so sessions survive reloads. Provider errors surface
//! their message verbatim with a fixed fallback per action.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Deserialize;

/// Signed-in account as reported by the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

/// Provider base path; the dashboard proxies the hosted provider under
/// its own origin so browser calls stay same-site.
#[cfg(any(test, feature = "hydrate"))]
const AUTH_BASE: &str = "/auth/v1";

#[cfg(feature = "hydrate")]
const TOKEN_STORAGE_KEY: &str = "voicelet_access_token";

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_endpoint() -> String {
    format!("{AUTH_BASE}/token?grant_type=password")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_up_endpoint() -> String {
    format!("{AUTH_BASE}/signup")
}

#[cfg(any(test, feature = "hydrate"))]
fn session_endpoint() -> String {
    format!("{AUTH_BASE}/user")
}

/// Extract the provider's error message, else `fallback`.
///
/// The provider reports `error_description` on token failures and `msg`
/// on signup failures.
#[cfg(any(test, feature = "hydrate"))]
fn provider_error(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error_description")
                .or_else(|| value.get("msg"))
                .and_then(|message| message.as_str())
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| fallback.to_owned())
}

#[cfg(feature = "hydrate")]
#[derive(Deserialize)]
struct SessionResponse {
    access_token: String,
    user: User,
}

/// Sign in with email + password.
///
/// # Errors
///
/// Provider message verbatim when present, else `"Login failed"`.
pub async fn sign_in(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let request = gloo_net::http::Request::post(&sign_in_endpoint())
            .json(&payload)
            .map_err(|_| "Login failed".to_owned())?;
        let response = request.send().await.map_err(|_| "Login failed".to_owned())?;
        let body = response.text().await.unwrap_or_default();
        if !response.ok() {
            return Err(provider_error(&body, "Login failed"));
        }
        let session: SessionResponse =
            serde_json::from_str(&body).map_err(|_| "Login failed".to_owned())?;
        store_token(&session.access_token);
        Ok(session.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Register a new account. The provider sends a confirmation email; no
/// session is established yet.
///
/// # Errors
///
/// Provider message verbatim when present, else `"Signup failed"`.
pub async fn sign_up(email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let request = gloo_net::http::Request::post(&sign_up_endpoint())
            .json(&payload)
            .map_err(|_| "Signup failed".to_owned())?;
        let response = request.send().await.map_err(|_| "Signup failed".to_owned())?;
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(provider_error(&body, "Signup failed"));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Drop the session locally and tell the provider.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = stored_token() {
            let _ = gloo_net::http::Request::post(&format!("{AUTH_BASE}/logout"))
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await;
        }
        clear_token();
    }
}

/// Restore the session from a stored token, if any.
/// Returns `None` when the token is absent or no longer valid.
pub async fn restore_session() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let token = stored_token()?;
        let response = gloo_net::http::Request::get(&session_endpoint())
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .ok()?;
        if !response.ok() {
            clear_token();
            return None;
        }
        response.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
fn store_token(token: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
    }
}

#[cfg(feature = "hydrate")]
fn stored_token() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(TOKEN_STORAGE_KEY).ok().flatten())
}

#[cfg(feature = "hydrate")]
fn clear_token() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}
