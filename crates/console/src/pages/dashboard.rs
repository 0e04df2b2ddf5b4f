use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::services::session;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let navigator = use_navigator().expect("DashboardPage rendered outside a Router");

    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            session::logout();
            navigator.push(&Route::Login);
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900">
            <nav class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
                <div class="max-w-5xl mx-auto px-4 h-14 flex justify-between items-center">
                    <h1 class="text-lg font-semibold text-gray-900 dark:text-gray-100">{"Pylon Console"}</h1>
                    <div class="flex items-center gap-4">
                        <Link<Route> to={Route::SecurityConfig} classes="text-sm text-gray-600 dark:text-gray-400 hover:underline">
                            {"Security Config"}
                        </Link<Route>>
                        <button onclick={on_logout} class="text-sm text-gray-600 dark:text-gray-400 hover:underline">
                            {"Sign Out"}
                        </button>
                    </div>
                </div>
            </nav>
            <main class="max-w-5xl mx-auto px-4 py-8">
                if session::is_first_run() {
                    <div class="mb-6 p-4 rounded-md bg-orange-50 dark:bg-orange-900/30 text-orange-800 dark:text-orange-200 text-sm">
                        {"Welcome to Pylon. This deployment was just bootstrapped; head to Security Config to set up at-rest encryption."}
                    </div>
                }
                <h2 class="text-xl font-semibold text-gray-900 dark:text-gray-100 mb-2">{"Dashboard"}</h2>
                <p class="text-sm text-gray-600 dark:text-gray-400">
                    {"Cluster overview and universe management."}
                </p>
            </main>
        </div>
    }
}
