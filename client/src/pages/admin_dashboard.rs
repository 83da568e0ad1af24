//! Staff overview for administrators: role counts and a filterable account
//! table.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
#[cfg(feature = "hydrate")]
use crate::components::toast_stack::report_api_error;
use crate::net::types::Employee;
use crate::state::registry::{
    NOT_REGISTERED, RoleCounts, display_or, filter_employees, role_label, status_label,
};
use crate::state::session::{Role, SessionHandle};
use crate::state::toast::ToastState;
use crate::util::auth::use_session;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = use_session();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let staff = RwSignal::new(Vec::<Employee>::new());
    let loading = RwSignal::new(false);
    let filter = RwSignal::new(String::new());

    Effect::new(move || {
        spawn_fetch(session.clone(), toasts, staff, loading, navigate.clone());
    });

    let counts = Memo::new(move |_| staff.with(|s| RoleCounts::tally(s)));
    let visible = move || staff.with(|s| filter_employees(s, &filter.get()));

    view! {
        <Navbar show_admin_link=true/>
        <main class="admin">
            <h1 class="admin__title">"Administration"</h1>
            <div class="admin__stats">
                <StatCard label="Total staff" value=Signal::derive(move || counts.get().total)/>
                <StatCard label="Employees" value=Signal::derive(move || counts.get().employees)/>
                <StatCard label="Administrators" value=Signal::derive(move || counts.get().admins)/>
            </div>
            <input
                class="admin__filter"
                type="search"
                placeholder="Filter by name, email or username"
                prop:value=move || filter.get()
                on:input=move |ev| filter.set(event_target_value(&ev))
            />
            <Show when=move || loading.get()>
                <div class="spinner"></div>
            </Show>
            <table class="admin__table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Username"</th>
                        <th>"Phone"</th>
                        <th>"Role"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || visible().into_iter().enumerate()
                        key=|(index, employee)| (*index, employee.id.clone())
                        children=move |(_, employee)| view! { <EmployeeRow employee=employee/> }
                    />
                </tbody>
            </table>
            <Show when=move || !loading.get() && visible().is_empty()>
                <p class="admin__empty">"No staff accounts match."</p>
            </Show>
        </main>
    }
}

#[component]
fn StatCard(label: &'static str, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{move || value.get()}</span>
        </div>
    }
}

#[component]
fn EmployeeRow(employee: Employee) -> impl IntoView {
    let role = employee.role();
    let badge = if role == Role::Admin { "badge badge--admin" } else { "badge badge--employee" };
    let status = if employee.status { "badge badge--active" } else { "badge badge--inactive" };

    view! {
        <tr>
            <td>{employee.full_name()}</td>
            <td>{employee.email.clone().unwrap_or_default()}</td>
            <td>{employee.username.clone().unwrap_or_default()}</td>
            <td>{display_or(employee.phone.as_deref(), NOT_REGISTERED).to_owned()}</td>
            <td><span class=badge>{role_label(&role)}</span></td>
            <td><span class=status>{status_label(employee.status)}</span></td>
        </tr>
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn spawn_fetch<N>(
    session: SessionHandle,
    toasts: RwSignal<ToastState>,
    staff: RwSignal<Vec<Employee>>,
    loading: RwSignal<bool>,
    navigate: N,
) where
    N: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        loading.set(true);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::list_employees(session.as_ref()).await;
            loading.set(false);
            match result {
                Ok(found) => staff.set(found),
                Err(e) => report_api_error(toasts, &navigate, &e),
            }
        });
    }
}
