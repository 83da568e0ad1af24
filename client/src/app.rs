//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::components::toast_stack::ToastStack;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, dashboard_redirect::DashboardRedirectPage,
    login::LoginPage, register::RegisterPage, unauthorized::UnauthorizedPage,
    user_list::UserListPage,
};
use crate::state::session::{Role, browser_session_store};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and toast state, and declares which roles may
/// open each protected section.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(browser_session_store());
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/dmm-admin.css"/>
        <Title text="DMM"/>

        <Router>
            <ToastStack/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardRedirectPage/>
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                <ParentRoute
                    path=StaticSegment("admin")
                    view=|| view! { <ProtectedRoute allowed=vec![Role::Admin]/> }
                >
                    <Route path=StaticSegment("") view=AdminDashboardPage/>
                </ParentRoute>
                <ParentRoute
                    path=StaticSegment("users")
                    view=|| view! { <ProtectedRoute allowed=vec![Role::Employee, Role::Admin]/> }
                >
                    <Route path=StaticSegment("") view=UserListPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
