//! Role-gated parent route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps each protected section of the router. The guard runs inside an
//! effect, so it only decides in the browser where the session lives; SSR and
//! the first hydrated frame show a neutral placeholder. The effect tracks the
//! current pathname, so every navigation beneath this route re-runs the guard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::Role;
use crate::util::auth::{GuardDecision, evaluate_guard, use_session};

/// Render the nested route only for sessions whose role is in `allowed`.
#[component]
pub fn ProtectedRoute(allowed: Vec<Role>) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();
    let decision = RwSignal::new(None::<GuardDecision>);

    Effect::new(move || {
        location.pathname.track();
        let next = evaluate_guard(session.as_ref(), &allowed);
        decision.set(Some(next));
        if let Some(path) = next.redirect_path() {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || decision.get() == Some(GuardDecision::Render)
            fallback=|| view! { <div class="guard-pending"><div class="spinner"></div></div> }
        >
            <Outlet/>
        </Show>
    }
}
