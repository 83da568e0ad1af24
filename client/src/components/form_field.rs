//! Labelled text input with validate-on-blur error display.

use leptos::prelude::*;

/// Text input bound to `value`. The error `message` appears once the field
/// has lost focus at least once and `valid` is false.
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    #[prop(into, default = "text".to_owned())] input_type: String,
    value: RwSignal<String>,
    #[prop(into)] valid: Signal<bool>,
    message: &'static str,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let touched = RwSignal::new(false);
    let show_error = move || touched.get() && !valid.get();

    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class=move || {
                    if show_error() { "form-field__input form-field__input--invalid" } else { "form-field__input" }
                }
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:blur=move |_| touched.set(true)
            />
            <Show when=show_error>
                <span class="form-field__error">{message}</span>
            </Show>
        </label>
    }
}
