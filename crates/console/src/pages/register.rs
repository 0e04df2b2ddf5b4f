use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::form::{FormRow, TextInput};
use crate::routes::Route;
use crate::services::session;

/// First-run registration: creates the initial customer on an empty
/// platform. The guard sends viewers here when the customer count is zero.
#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let navigator = use_navigator().expect("RegisterPage rendered outside a Router");
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |value| name.set(value))
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |value| email.set(value))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |value| password.set(value))
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = (*name).clone();
            let email = (*email).clone();
            let password = (*password).clone();
            let error = error.clone();
            let busy = busy.clone();
            let navigator = navigator.clone();
            busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match session::register(name, email, password).await {
                    Ok(()) => navigator.push(&Route::Dashboard),
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white dark:bg-gray-800 rounded-lg shadow p-8">
                <h1 class="text-xl font-semibold text-gray-900 dark:text-gray-100 mb-2">{"Set up Pylon"}</h1>
                <p class="text-sm text-gray-600 dark:text-gray-400 mb-6">
                    {"Create the administrator account for this deployment."}
                </p>
                if let Some(message) = (*error).clone() {
                    <div class="mb-4 p-3 rounded-md bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300 text-sm">
                        {message}
                    </div>
                }
                <form {onsubmit}>
                    <FormRow label="Name">
                        <TextInput value={(*name).clone()} on_change={on_name} />
                    </FormRow>
                    <FormRow label="Email">
                        <TextInput value={(*email).clone()} on_change={on_email} />
                    </FormRow>
                    <FormRow label="Password">
                        <TextInput value={(*password).clone()} on_change={on_password} input_type="password" />
                    </FormRow>
                    <button
                        type="submit"
                        disabled={*busy}
                        class="mt-4 w-full px-4 py-2 text-sm font-medium text-white bg-orange-600 hover:bg-orange-700 rounded-md disabled:opacity-50"
                    >
                        {"Register"}
                    </button>
                </form>
            </div>
        </div>
    }
}
