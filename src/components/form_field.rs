//! Labeled inputs used by the auth forms.

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

use leptos::prelude::*;

/// `type` attribute for a password input in the given visibility state.
pub(crate) fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

/// Label of the visibility toggle in the given state.
pub(crate) fn visibility_toggle_label(visible: bool) -> &'static str {
    if visible { "Hide" } else { "Show" }
}

/// CSS classes of a field wrapper.
pub(crate) fn field_class(has_error: bool) -> &'static str {
    if has_error {
        "form-field form-field--error"
    } else {
        "form-field"
    }
}

/// Text input bound to `value`, with an optional helper error underneath.
#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <label class=move || field_class(error.get().is_some())>
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <span class="form-field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}

/// Password input with a show/hide toggle.
#[component]
pub fn PasswordField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <label class=move || field_class(error.get().is_some())>
            <span class="form-field__label">{label}</span>
            <span class="form-field__row">
                <input
                    class="form-field__input"
                    type=move || password_input_type(visible.get())
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    class="form-field__toggle"
                    type="button"
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || visibility_toggle_label(visible.get())}
                </button>
            </span>
            <Show when=move || error.get().is_some()>
                <span class="form-field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
