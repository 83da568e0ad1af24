//! Registration page.
//!
//! On success the returned session is stored and the user goes through the
//! dashboard redirect page, which dispatches by role.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::components::toast_stack::notify;
#[cfg(feature = "hydrate")]
use crate::components::toast_stack::report_api_error;
use crate::net::types::RegisterRequest;
use crate::state::session::SessionHandle;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::{LOGIN_PATH, use_session};
use crate::util::validate::{
    CONFIRM_PASSWORD_MESSAGE, EMAIL_MESSAGE, NAME_MESSAGE, PASSWORD_MESSAGE, PHONE_MESSAGE,
    USERNAME_MESSAGE, is_valid_email, is_valid_name, is_valid_password, is_valid_phone,
    is_valid_username, passwords_match,
};

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const REGISTER_SUCCESS_MESSAGE: &str = "Account created successfully.";

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RegisterInput {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterInput {
    /// Check every field in display order and build the request body.
    pub(crate) fn validate(&self) -> Result<RegisterRequest, &'static str> {
        let email = self.email.trim();
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let username = self.username.trim();
        let phone = self.phone.trim();

        if !is_valid_email(email) {
            return Err(EMAIL_MESSAGE);
        }
        if !is_valid_name(first_name) || !is_valid_name(last_name) {
            return Err(NAME_MESSAGE);
        }
        if !is_valid_username(username) {
            return Err(USERNAME_MESSAGE);
        }
        if !is_valid_phone(phone) {
            return Err(PHONE_MESSAGE);
        }
        if !is_valid_password(&self.password) {
            return Err(PASSWORD_MESSAGE);
        }
        if !passwords_match(&self.password, &self.confirm_password) {
            return Err(CONFIRM_PASSWORD_MESSAGE);
        }
        Ok(RegisterRequest {
            email: email.to_owned(),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            username: username.to_owned(),
            phone: phone.to_owned(),
            password: self.password.clone(),
        })
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let input = move || RegisterInput {
        email: email.get(),
        first_name: first_name.get(),
        last_name: last_name.get(),
        username: username.get(),
        phone: phone.get(),
        password: password.get(),
        confirm_password: confirm_password.get(),
    };
    let form_valid = move || input().validate().is_ok();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match input().validate() {
            Ok(request) => {
                busy.set(true);
                spawn_register(session.clone(), toasts, busy, navigate.clone(), request);
            }
            Err(message) => notify(toasts, ToastKind::Error, message),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1 class="auth-card__title">"Create Account"</h1>
                <form class="auth-form auth-form--grid" on:submit=on_submit>
                    <FormField
                        label="First name"
                        value=first_name
                        valid=Signal::derive(move || is_valid_name(&first_name.get()))
                        message=NAME_MESSAGE
                    />
                    <FormField
                        label="Last name"
                        value=last_name
                        valid=Signal::derive(move || is_valid_name(&last_name.get()))
                        message=NAME_MESSAGE
                    />
                    <FormField
                        label="Username"
                        value=username
                        valid=Signal::derive(move || is_valid_username(username.get().trim()))
                        message=USERNAME_MESSAGE
                    />
                    <FormField
                        label="Phone"
                        input_type="tel"
                        value=phone
                        valid=Signal::derive(move || is_valid_phone(phone.get().trim()))
                        message=PHONE_MESSAGE
                    />
                    <FormField
                        label="Email"
                        input_type="email"
                        value=email
                        valid=Signal::derive(move || is_valid_email(email.get().trim()))
                        message=EMAIL_MESSAGE
                    />
                    <FormField
                        label="Password"
                        input_type="password"
                        value=password
                        valid=Signal::derive(move || is_valid_password(&password.get()))
                        message=PASSWORD_MESSAGE
                    />
                    <FormField
                        label="Confirm password"
                        input_type="password"
                        value=confirm_password
                        valid=Signal::derive(move || passwords_match(&password.get(), &confirm_password.get()))
                        message=CONFIRM_PASSWORD_MESSAGE
                    />
                    <button
                        class="auth-form__submit"
                        type="submit"
                        disabled=move || busy.get() || !form_valid()
                    >
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href=LOGIN_PATH>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn spawn_register<N>(
    session: SessionHandle,
    toasts: RwSignal<ToastState>,
    busy: RwSignal<bool>,
    navigate: N,
    request: RegisterRequest,
) where
    N: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::register(session.as_ref(), &request).await;
        busy.set(false);
        match result {
            Ok(record) => {
                session.save(&record);
                notify(toasts, ToastKind::Success, REGISTER_SUCCESS_MESSAGE);
                navigate(crate::util::auth::DASHBOARD_PATH, NavigateOptions::default());
            }
            Err(e) => report_api_error(toasts, &navigate, &e),
        }
    });
}
