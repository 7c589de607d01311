//! Sign-up page: validate locally, register, then start the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! All four field checks run before any request. A server-side failure is
//! shown in the email slot, replacing any previous field errors.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{PasswordField, TextField};
use crate::net::api::{AuthClient, HttpAuthClient};
use crate::net::types::SignUpRequest;
use crate::state::session::{SessionManager, use_session};
use crate::util::route_guard::AppRoute;
#[cfg(feature = "csr")]
use crate::util::route_guard::replace_navigation;
use crate::util::validation::{SignUpErrors, SignUpForm, validate_sign_up};

/// Validate `form`, register it, and log the new account in.
///
/// Returns the route to navigate to on success.
///
/// # Errors
///
/// Returns the field error map when validation fails (no request is made)
/// or when the service call fails (message in the email slot).
pub async fn submit_sign_up<C: AuthClient>(
    client: &C,
    session: &SessionManager,
    form: &SignUpForm,
) -> Result<AppRoute, SignUpErrors> {
    let errors = validate_sign_up(form);
    if !errors.is_empty() {
        log::debug!("sign-up blocked by validation");
        return Err(errors);
    }

    let request = SignUpRequest {
        email: form.email.to_lowercase(),
        name: form.name.clone(),
        password: form.password.clone(),
    };
    match client.sign_up(&request).await {
        Ok(resp) => {
            session.login(resp.access_token);
            Ok(AppRoute::Welcome)
        }
        Err(e) => {
            log::warn!("sign-up failed ({:?}): {e}", e.kind());
            Err(SignUpErrors::email_only(e.to_string()))
        }
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = use_session();
    let client = expect_context::<HttpAuthClient>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(SignUpErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        errors.set(SignUpErrors::default());
        let form = SignUpForm {
            email: email.get_untracked(),
            name: name.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            let manager = session.manager();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match submit_sign_up(&client, &manager, &form).await {
                    Ok(target) => navigate(target.path(), replace_navigation()),
                    Err(field_errors) => {
                        let _ = errors.try_set(field_errors);
                    }
                }
                let _ = busy.try_set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&client, &session, &navigate, form);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign Up"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <TextField
                        label="Email"
                        value=email
                        error=Signal::derive(move || errors.get().email)
                    />
                    <TextField
                        label="Name"
                        value=name
                        error=Signal::derive(move || errors.get().name)
                    />
                    <PasswordField
                        label="Password"
                        value=password
                        error=Signal::derive(move || errors.get().password)
                    />
                    <PasswordField
                        label="Confirm Password"
                        value=confirm_password
                        error=Signal::derive(move || errors.get().confirm_password)
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <A href=AppRoute::SignIn.path()>"Already have an account? Sign In"</A>
            </div>
        </div>
    }
}
