//! Transient top-right notifications.
//!
//! DESIGN
//! ======
//! Queue state is plain data; `show_toast` owns the auto-dismiss timer so
//! call sites stay one-liners.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;

/// How long a toast stays visible.
pub const TOAST_VISIBLE_MS: u32 = 3000;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// CSS modifier for the toast element.
    #[must_use]
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// One queued toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

/// Toast queue; ids are unique so dismissals are unambiguous.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast { id: id.clone(), kind, text: text.into() });
        id
    }

    /// Drop the toast with `id`; unknown ids are ignored.
    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Queue a toast and schedule its auto-dismiss.
pub fn show_toast(toasts: RwSignal<ToastState>, kind: ToastKind, text: impl Into<String>) {
    let text = text.into();
    let mut id = String::new();
    toasts.update(|state| id = state.push(kind, text));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_VISIBLE_MS).await;
        toasts.update(|state| state.dismiss(&id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
