//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{
    dashboard::DashboardPage, landing::LandingPage, login::LoginPage, not_found::NotFoundPage,
    signup::SignupPage,
};
use crate::repo::Repositories;
use crate::state::{auth::AuthState, toasts::ToastState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(toasts);
    provide_context(Repositories::demo());

    // Restore the hosted-auth session once on startup.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::auth::restore_session().await;
        auth.set(AuthState { user, loading: false });
    });
    #[cfg(not(feature = "hydrate"))]
    auth.update(|state| state.loading = false);

    view! {
        <Stylesheet id="leptos" href="/pkg/voicelet.css"/>
        <Title text="Voicelet"/>

        <Router>
            <ToastHost/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}

/// Landing for signed-out visitors, dashboard once a session exists.
/// Shows the loader until session restore settles.
#[component]
fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Show when=move || !auth.get().loading fallback=|| view! { <div class="loader"></div> }>
            <Show when=move || auth.get().signed_in() fallback=|| view! { <LandingPage/> }>
                <DashboardPage/>
            </Show>
        </Show>
    }
}
