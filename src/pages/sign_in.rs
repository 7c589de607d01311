//! Sign-in page.
//!
//! Credentials go to the service without client-side checks; any failure
//! is shown as a single page-level message.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{PasswordField, TextField};
use crate::net::api::{AuthClient, HttpAuthClient};
use crate::net::types::SignInRequest;
use crate::state::session::{SessionManager, use_session};
use crate::util::route_guard::AppRoute;
#[cfg(feature = "csr")]
use crate::util::route_guard::replace_navigation;

/// Authenticate and start the session. Returns the route to navigate to.
///
/// # Errors
///
/// Returns the display message of the failed request.
pub async fn submit_sign_in<C: AuthClient>(
    client: &C,
    session: &SessionManager,
    email: &str,
    password: &str,
) -> Result<AppRoute, String> {
    let request = SignInRequest {
        email: email.to_lowercase(),
        password: password.to_owned(),
    };
    match client.sign_in(&request).await {
        Ok(resp) => {
            session.login(resp.access_token);
            Ok(AppRoute::Welcome)
        }
        Err(e) => {
            log::warn!("sign-in failed ({:?}): {e}", e.kind());
            Err(e.to_string())
        }
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = use_session();
    let client = expect_context::<HttpAuthClient>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        let address = email.get_untracked();
        let secret = password.get_untracked();
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            let manager = session.manager();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match submit_sign_in(&client, &manager, &address, &secret).await {
                    Ok(target) => navigate(target.path(), replace_navigation()),
                    Err(message) => {
                        let _ = error.try_set(Some(message));
                    }
                }
                let _ = busy.try_set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&client, &session, &navigate, address, secret);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign In"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <TextField
                        label="Email"
                        value=email
                        error=Signal::derive(|| None::<String>)
                    />
                    <PasswordField
                        label="Password"
                        value=password
                        error=Signal::derive(|| None::<String>)
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="auth-message auth-message--error">
                            {move || error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <A href=AppRoute::SignUp.path()>"Don't have an account? Sign Up"</A>
            </div>
        </div>
    }
}
