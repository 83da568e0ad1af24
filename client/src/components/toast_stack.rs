//! Toast notifications overlay and the helpers pages use to raise them.

#[cfg(test)]
#[path = "toast_stack_test.rs"]
mod toast_stack_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::error::ApiError;
use crate::util::auth::redirect_for_error;

#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_LIFETIME;
use crate::state::toast::{ToastKind, ToastState};

/// Push a toast and schedule its dismissal.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let id = toasts.try_update(|s| s.push(kind, message)).unwrap_or_default();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_LIFETIME).await;
        toasts.update(|s| s.dismiss(id));
    });
}

/// Surface a failed API call: toast its message and, for a rejected token,
/// go back to login.
pub fn report_api_error<N>(toasts: RwSignal<ToastState>, navigate: &N, err: &ApiError)
where
    N: Fn(&str, NavigateOptions),
{
    notify(toasts, ToastKind::Error, err.to_string());
    if let Some(path) = redirect_for_error(err) {
        navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
}

/// Renders the current toasts; clicking one dismisses it early.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.kind.css_modifier())
                            on:click=move |_| toasts.update(|s| s.dismiss(id))
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
