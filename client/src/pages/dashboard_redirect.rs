//! Interstitial that greets the user and forwards to their landing view.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::auth::{PendingRedirect, dashboard_redirect, use_session};

#[component]
pub fn DashboardRedirectPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());

    Effect::new(move || {
        if let Some(record) = session.load() {
            username.set(record.display_name().to_owned());
        }
        schedule_redirect(dashboard_redirect(session.as_ref()), navigate.clone());
    });

    view! {
        <div class="redirect-page">
            <div class="spinner spinner--large"></div>
            <p class="redirect-page__welcome">{move || format!("Welcome {}", username.get())}</p>
            <p class="redirect-page__hint">"Redirecting to your dashboard..."</p>
        </div>
    }
}

/// Navigate after the redirect's delay unless the page unmounts first.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn schedule_redirect<N>(redirect: PendingRedirect, navigate: N)
where
    N: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            if !redirect.delay.is_zero() {
                gloo_timers::future::sleep(redirect.delay).await;
            }
            if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                navigate(redirect.path, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
}
