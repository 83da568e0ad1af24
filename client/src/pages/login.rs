//! Login page: email + password sign-in and password recovery request.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful sign-in hands the returned session to the post-login
//! dispatcher, which persists it and picks the landing view by role. Failures
//! surface as toasts and leave the form editable.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::components::toast_stack::notify;
#[cfg(feature = "hydrate")]
use crate::components::toast_stack::report_api_error;
use crate::state::session::SessionHandle;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::{REGISTER_PATH, use_session};
use crate::util::validate::{
    EMAIL_MESSAGE, PASSWORD_MESSAGE, PHONE_MESSAGE, is_valid_email, is_valid_password, is_valid_phone,
    validate_login_input,
};

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const LOGIN_SUCCESS_MESSAGE: &str = "Signed in successfully.";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const RESET_SENT_MESSAGE: &str = "We sent password recovery instructions to your email.";

/// Validate the recovery form, returning trimmed email and phone.
pub(crate) fn validate_reset_input(email: &str, phone: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let phone = phone.trim();
    if !is_valid_email(email) {
        return Err(EMAIL_MESSAGE);
    }
    if !is_valid_phone(phone) {
        return Err(PHONE_MESSAGE);
    }
    Ok((email.to_owned(), phone.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let show_reset = RwSignal::new(false);

    let email_valid = Signal::derive(move || is_valid_email(&email.get()));
    let password_valid = Signal::derive(move || is_valid_password(&password.get()));
    let submit_disabled = move || busy.get() || !email_valid.get() || !password_valid.get();

    let login_session = session.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_login_input(&email.get(), &password.get()) {
            Ok((email_value, password_value)) => {
                busy.set(true);
                spawn_login(
                    login_session.clone(),
                    toasts,
                    busy,
                    navigate.clone(),
                    email_value,
                    password_value,
                );
            }
            Err(message) => notify(toasts, ToastKind::Error, message),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Sign In"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <FormField
                        label="Email"
                        input_type="email"
                        value=email
                        valid=email_valid
                        message=EMAIL_MESSAGE
                        placeholder="you@example.com"
                    />
                    <FormField
                        label="Password"
                        input_type="password"
                        value=password
                        valid=password_valid
                        message=PASSWORD_MESSAGE
                    />
                    <button
                        type="button"
                        class="auth-form__link"
                        on:click=move |_| show_reset.set(true)
                    >
                        "Forgot your password?"
                    </button>
                    <button class="auth-form__submit" type="submit" disabled=submit_disabled>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No account yet? "
                    <a href=REGISTER_PATH>"Register"</a>
                </p>
            </div>
            <Show when=move || show_reset.get()>
                <PasswordResetModal session=session.clone() on_close=Callback::new(move |()| show_reset.set(false))/>
            </Show>
        </div>
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn spawn_login<N>(
    session: SessionHandle,
    toasts: RwSignal<ToastState>,
    busy: RwSignal<bool>,
    navigate: N,
    email: String,
    password: String,
) where
    N: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::login(session.as_ref(), &email, &password).await;
        busy.set(false);
        match result {
            Ok(record) => {
                let target = crate::util::auth::complete_login(session.as_ref(), &record);
                notify(toasts, ToastKind::Success, LOGIN_SUCCESS_MESSAGE);
                navigate(target, NavigateOptions::default());
            }
            Err(e) => report_api_error(toasts, &navigate, &e),
        }
    });
}

/// Modal collecting email + phone for a password recovery email.
#[component]
fn PasswordResetModal(session: SessionHandle, on_close: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let email_valid = Signal::derive(move || is_valid_email(email.get().trim()));
    let phone_valid = Signal::derive(move || is_valid_phone(phone.get().trim()));

    let on_send = move |_| {
        if sending.get() {
            return;
        }
        match validate_reset_input(&email.get(), &phone.get()) {
            Ok((email_value, phone_value)) => {
                sending.set(true);
                spawn_reset(
                    session.clone(),
                    toasts,
                    sending,
                    on_close,
                    navigate.clone(),
                    email_value,
                    phone_value,
                );
            }
            Err(message) => notify(toasts, ToastKind::Error, message),
        }
    };

    view! {
        <div class="modal__backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <h2 class="modal__title">"Recover Password"</h2>
                <p class="modal__body">
                    "Enter your email and phone number. We will email you the steps to recover your password."
                </p>
                <FormField label="Email" input_type="email" value=email valid=email_valid message=EMAIL_MESSAGE/>
                <FormField label="Phone" input_type="tel" value=phone valid=phone_valid message=PHONE_MESSAGE/>
                <div class="modal__actions">
                    <button class="modal__cancel" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button class="modal__confirm" on:click=on_send disabled=move || sending.get()>
                        "Send"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn spawn_reset<N>(
    session: SessionHandle,
    toasts: RwSignal<ToastState>,
    sending: RwSignal<bool>,
    on_close: Callback<()>,
    navigate: N,
    email: String,
    phone: String,
) where
    N: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::request_password_reset(session.as_ref(), &email, &phone).await;
        sending.set(false);
        match result {
            Ok(()) => {
                notify(toasts, ToastKind::Success, RESET_SENT_MESSAGE);
                on_close.run(());
            }
            Err(e) => report_api_error(toasts, &navigate, &e),
        }
    });
}
