//! Shown when a session's role may not open the requested view.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::auth::{DASHBOARD_PATH, sign_out, use_session};

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let on_switch_account = move |_| {
        let target = sign_out(session.as_ref());
        navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <div class="unauthorized-page">
            <div class="unauthorized-card">
                <h1>"Access denied"</h1>
                <p>"Your account is not allowed to open this page."</p>
                <div class="unauthorized-card__actions">
                    <a class="unauthorized-card__link" href=DASHBOARD_PATH>"Go to my dashboard"</a>
                    <button class="unauthorized-card__button" on:click=on_switch_account>
                        "Sign in with another account"
                    </button>
                </div>
            </div>
        </div>
    }
}
