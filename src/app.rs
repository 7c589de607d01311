//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Redirect, Router};
use leptos_router::hooks::use_location;

use crate::config::ClientConfig;
use crate::net::api::HttpAuthClient;
use crate::pages::{sign_in::SignInPage, sign_up::SignUpPage, welcome::WelcomePage};
use crate::state::session::{provide_session, use_session};
use crate::util::route_guard::{AppRoute, RouteDecision, replace_navigation, resolve};
use crate::util::storage::{BrowserTokenStore, MemoryTokenStore, TokenStore};

/// Pick the durable store, falling back to memory when `localStorage` is missing.
fn token_store(config: &ClientConfig) -> Arc<dyn TokenStore> {
    if BrowserTokenStore::is_available() {
        Arc::new(BrowserTokenStore::new(config.token_storage_key.clone()))
    } else {
        log::warn!("localStorage unavailable; session will not survive reloads");
        Arc::new(MemoryTokenStore::new())
    }
}

/// Root application component.
///
/// Provides the config, API client and session contexts, then routes every
/// navigation through the guard table. Paths are matched by `resolve` alone,
/// so casing and a trailing slash are handled the same way everywhere.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_env();
    provide_context(HttpAuthClient::from_config(&config));
    let session = provide_session(token_store(&config));

    // Another tab may have changed the token between load and first render.
    Effect::new(move || {
        session.sync();
    });

    view! {
        <Title text="Authgate"/>

        <Router>
            <main>
                <Gate/>
            </main>
        </Router>
    }
}

/// Render the current path or redirect, re-evaluated whenever the path or
/// the session changes. Redirects replace the history entry they leave.
#[component]
fn Gate() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    move || match resolve(&location.pathname.get(), session.is_authenticated()) {
        RouteDecision::Render(AppRoute::SignUp) => view! { <SignUpPage/> }.into_any(),
        RouteDecision::Render(AppRoute::SignIn) => view! { <SignInPage/> }.into_any(),
        RouteDecision::Render(AppRoute::Welcome) => view! { <WelcomePage/> }.into_any(),
        RouteDecision::Redirect(target) => {
            view! { <Redirect path=target.path() options=replace_navigation()/> }.into_any()
        }
    }
}
