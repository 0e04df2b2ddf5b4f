use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::KmsConfiguration;
use crate::routes::Route;

#[function_component(SecurityConfigPage)]
pub fn security_config_page() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900">
            <nav class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
                <div class="max-w-5xl mx-auto px-4 h-14 flex items-center gap-4">
                    <Link<Route> to={Route::Dashboard} classes="text-sm text-gray-600 dark:text-gray-400 hover:underline">
                        {"← Dashboard"}
                    </Link<Route>>
                    <h1 class="text-lg font-semibold text-gray-900 dark:text-gray-100">{"Security Configuration"}</h1>
                </div>
            </nav>
            <main class="max-w-5xl mx-auto px-4 py-8">
                <KmsConfiguration />
            </main>
        </div>
    }
}
