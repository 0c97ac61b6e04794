//! Fixed-position stack rendering the queued toasts.

use leptos::prelude::*;

use crate::state::toasts::ToastState;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id.clone();
                        view! {
                            <div class=format!("toast toast--{}", toast.kind.as_class())>
                                <span>{toast.text.clone()}</span>
                                <button
                                    class="toast__close"
                                    on:click=move |_| {
                                        let id = id.clone();
                                        toasts.update(|state| state.dismiss(&id));
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
