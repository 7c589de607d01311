//! Welcome page shown to authenticated users.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session;
use crate::util::route_guard::{AppRoute, replace_navigation};

/// Greeting plus a logout button that returns to `/signin`.
#[component]
pub fn WelcomePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate(AppRoute::SignIn.path(), replace_navigation());
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome to the application"</h1>
                <button class="auth-button" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </div>
    }
}
