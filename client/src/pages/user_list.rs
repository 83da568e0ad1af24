//! Registry list with DPI/name search (employees and administrators).
//!
//! SYSTEM CONTEXT
//! ==============
//! The list loads once the page hydrates; the session token rides along on
//! every request. A rejected token sends the user back to login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
#[cfg(feature = "hydrate")]
use crate::components::toast_stack::report_api_error;
use crate::net::types::RegistryUser;
use crate::state::registry::{NOT_SPECIFIED, display_or, search_query};
use crate::state::session::SessionHandle;
use crate::state::toast::ToastState;
use crate::util::auth::use_session;

#[component]
pub fn UserListPage() -> impl IntoView {
    let session = use_session();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let users = RwSignal::new(Vec::<RegistryUser>::new());
    let loading = RwSignal::new(false);
    let query = RwSignal::new(String::new());

    let load_session = session.clone();
    let load_navigate = navigate.clone();
    Effect::new(move || {
        spawn_fetch(load_session.clone(), toasts, users, loading, load_navigate.clone(), None);
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let search = search_query(&query.get_untracked());
        spawn_fetch(session.clone(), toasts, users, loading, navigate.clone(), search);
    };

    view! {
        <Navbar/>
        <main class="registry">
            <h1 class="registry__title">"Registry"</h1>
            <form class="registry__search" on:submit=on_search>
                <input
                    class="registry__search-input"
                    type="search"
                    placeholder="Search by DPI or name"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="registry__search-button" type="submit" disabled=move || loading.get()>
                    "Search"
                </button>
            </form>
            <Show when=move || loading.get()>
                <div class="spinner"></div>
            </Show>
            <table class="registry__table">
                <thead>
                    <tr>
                        <th>"No."</th>
                        <th>"Guardian"</th>
                        <th>"Child"</th>
                        <th>"DPI"</th>
                        <th>"Community"</th>
                        <th>"Address"</th>
                        <th>"Email"</th>
                        <th>"Phone"</th>
                        <th>"Gender"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || users.get().into_iter().enumerate()
                        key=|(index, user)| (*index, user.id.clone())
                        children=move |(index, user)| view! { <UserRow index=index user=user/> }
                    />
                </tbody>
            </table>
            <Show when=move || !loading.get() && users.with(Vec::is_empty)>
                <p class="registry__empty">"No users found."</p>
            </Show>
        </main>
    }
}

#[component]
fn UserRow(index: usize, user: RegistryUser) -> impl IntoView {
    let number = user.number.map_or_else(|| (index + 1).to_string(), |n| n.to_string());
    let cell = |value: &Option<String>| display_or(value.as_deref(), NOT_SPECIFIED).to_owned();

    view! {
        <tr>
            <td>{number}</td>
            <td>{cell(&user.guardian_name)}</td>
            <td>{cell(&user.child_name)}</td>
            <td>{cell(&user.dpi)}</td>
            <td>{cell(&user.community)}</td>
            <td>{cell(&user.address)}</td>
            <td>{cell(&user.email)}</td>
            <td>{cell(&user.phone)}</td>
            <td>{cell(&user.gender)}</td>
        </tr>
    }
}

/// Load the full list (`query` is `None`) or the search results.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn spawn_fetch<N>(
    session: SessionHandle,
    toasts: RwSignal<ToastState>,
    users: RwSignal<Vec<RegistryUser>>,
    loading: RwSignal<bool>,
    navigate: N,
    query: Option<String>,
) where
    N: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        loading.set(true);
        leptos::task::spawn_local(async move {
            let result = match &query {
                Some(q) => crate::net::api::search_users(session.as_ref(), q).await,
                None => crate::net::api::list_users(session.as_ref()).await,
            };
            loading.set(false);
            match result {
                Ok(found) => users.set(found),
                Err(e) => report_api_error(toasts, &navigate, &e),
            }
        });
    }
}
