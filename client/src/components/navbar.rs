//! Top bar for the signed-in landing views.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::auth::{ADMIN_LANDING_PATH, EMPLOYEE_LANDING_PATH, sign_out, use_session};

/// Brand, section links, the current username and a logout button.
#[component]
pub fn Navbar(#[prop(optional)] show_admin_link: bool) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());

    // Read after hydration so the SSR markup does not depend on local storage.
    let session_for_name = session.clone();
    Effect::new(move || {
        if let Some(record) = session_for_name.load() {
            username.set(record.display_name().to_owned());
        }
    });

    let on_logout = move |_| {
        let target = sign_out(session.as_ref());
        navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <header class="navbar">
            <span class="navbar__brand">"DMM"</span>
            <nav class="navbar__links">
                <Show when=move || show_admin_link>
                    <a href=ADMIN_LANDING_PATH class="navbar__link">"Administration"</a>
                </Show>
                <a href=EMPLOYEE_LANDING_PATH class="navbar__link">"Registry"</a>
            </nav>
            <div class="navbar__user">
                <span class="navbar__username">{move || username.get()}</span>
                <button class="navbar__logout" on:click=on_logout>"Log out"</button>
            </div>
        </header>
    }
}
