//! Configured-provider list view.

use pylon_core::KmsProvider;
use pylon_http::types::KmsConfigEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct KmsConfigListProps {
    pub configs: Vec<KmsConfigEntry>,
    pub on_create: Callback<()>,
    pub on_delete: Callback<KmsProvider>,
}

/// Settings column: the (server-redacted) credential keys of the entry.
fn credential_summary(credentials: &serde_json::Value) -> String {
    match credentials.as_object() {
        Some(map) if !map.is_empty() => {
            map.keys().cloned().collect::<Vec<_>>().join(", ")
        }
        _ => "—".to_owned(),
    }
}

#[function_component(KmsConfigList)]
pub fn kms_config_list(props: &KmsConfigListProps) -> Html {
    let rows = props
        .configs
        .iter()
        .map(|entry| {
            let provider = entry.provider;
            let on_delete = props.on_delete.clone();
            let onclick = Callback::from(move |_| on_delete.emit(provider));
            html! {
                <tr class="border-b border-gray-200 dark:border-gray-700">
                    <td class="py-2 pr-4 text-sm text-gray-900 dark:text-gray-100">
                        {provider.label()}
                    </td>
                    <td class="py-2 pr-4 text-sm text-gray-500 dark:text-gray-400">
                        {credential_summary(&entry.credentials)}
                    </td>
                    <td class="py-2 text-right">
                        <button
                            {onclick}
                            class="text-sm text-red-600 dark:text-red-400 hover:underline"
                        >
                            {"Delete Configuration"}
                        </button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    let on_create = {
        let on_create = props.on_create.clone();
        Callback::from(move |_| on_create.emit(()))
    };

    html! {
        <div>
            <div class="flex justify-between items-center mb-4">
                <h3 class="text-base font-medium text-gray-900 dark:text-gray-100">
                    {"Key Management Configurations"}
                </h3>
                <button
                    onclick={on_create}
                    class="px-3 py-1.5 text-sm font-medium text-white bg-orange-600 hover:bg-orange-700 rounded-md"
                >
                    {"Create New Config"}
                </button>
            </div>
            <table class="w-full text-left">
                <thead>
                    <tr class="border-b border-gray-300 dark:border-gray-600">
                        <th class="py-2 pr-4 text-xs font-semibold uppercase text-gray-500 dark:text-gray-400">{"Provider"}</th>
                        <th class="py-2 pr-4 text-xs font-semibold uppercase text-gray-500 dark:text-gray-400">{"Settings"}</th>
                        <th class="py-2"></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
