//! Console route table. Everything except the login and registration pages
//! sits behind the session guard.

use pylon_http::flows::RedirectTarget;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::guard::RequireSession;
use crate::pages::{DashboardPage, LoginPage, RegisterPage, SecurityConfigPage};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/config/security")]
    SecurityConfig,
    #[at("/")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::SecurityConfig => html! {
            <RequireSession>
                <SecurityConfigPage />
            </RequireSession>
        },
        Route::Dashboard => html! {
            <RequireSession>
                <DashboardPage />
            </RequireSession>
        },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center">
                <p class="text-gray-600 dark:text-gray-400">{"Page not found"}</p>
            </div>
        },
    }
}

/// Route a guard redirect resolves to.
pub fn redirect_route(target: RedirectTarget) -> Route {
    match target {
        RedirectTarget::Root => Route::Dashboard,
        RedirectTarget::Login => Route::Login,
        RedirectTarget::Register => Route::Register,
    }
}
