//! Key-management configuration screen.

mod form;
mod list;

use pylon_core::{KmsConfigForm, KmsProvider};
use pylon_http::flows::{DeleteStep, KmsScreenState, SubmitError, ViewMode};
use yew::prelude::*;

use crate::components::LoadingSpinner;
use crate::services::kms::kms_service;
use form::KmsProviderForm;
use list::KmsConfigList;

/// Container: owns the screen state and drives the load / submit / delete
/// flows. Shows the list as soon as any configuration exists, the creation
/// form otherwise.
#[function_component(KmsConfiguration)]
pub fn kms_configuration() -> Html {
    let state = use_state(KmsScreenState::new);
    let submitting = use_state(|| false);
    let submit_error = use_state(|| None::<String>);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let mut next = (*state).clone();
            next.begin_load();
            state.set(next.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let result = match kms_service() {
                    Ok(service) => service.fetch().await,
                    Err(err) => Err(err),
                };
                next.on_loaded(result);
                state.set(next);
            });
        });
    }

    let on_submit = {
        let state = state.clone();
        let submitting = submitting.clone();
        let submit_error = submit_error.clone();
        Callback::from(move |form: KmsConfigForm| {
            let state = state.clone();
            let submitting = submitting.clone();
            let submit_error = submit_error.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = match kms_service() {
                    Ok(service) => service.submit(&form).await,
                    Err(err) => Err(SubmitError::Client(err)),
                };
                match outcome {
                    Ok(list) => {
                        let mut next = (*state).clone();
                        next.on_submitted(list);
                        state.set(next);
                        submit_error.set(None);
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "KMS config submission failed");
                        submit_error.set(Some(err.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_delete = {
        let state = state.clone();
        Callback::from(move |provider: KmsProvider| {
            let state = state.clone();
            let step = state.delete_step();
            wasm_bindgen_futures::spawn_local(async move {
                let service = match kms_service() {
                    Ok(service) => service,
                    Err(err) => {
                        tracing::warn!(error = %err, "KMS service unavailable");
                        return;
                    }
                };
                if let Err(err) = service.delete(provider).await {
                    tracing::warn!(error = %err, %provider, "KMS config delete failed");
                    return;
                }
                match step {
                    DeleteStep::RevertToCreate => {
                        let mut next = (*state).clone();
                        next.revert_to_create();
                        state.set(next);
                    }
                    DeleteStep::Refetch => match service.fetch().await {
                        Ok(list) => {
                            let mut next = (*state).clone();
                            next.on_refetched(list);
                            state.set(next);
                        }
                        Err(err) => tracing::warn!(error = %err, "KMS config refetch failed"),
                    },
                }
            });
        })
    };

    let on_create = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut next = (*state).clone();
            next.open_create();
            state.set(next);
        })
    };

    if state.is_pending() {
        return html! { <LoadingSpinner text="Loading KMS configurations..." /> };
    }
    if let Some(error) = state.configs.error() {
        return html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300 text-sm">
                {format!("Failed to load KMS configurations: {error}")}
            </div>
        };
    }

    let configs = state.configs.success().cloned().unwrap_or_default();
    html! {
        <div class="max-w-3xl">
            if let Some(error) = (*submit_error).clone() {
                <div class="mb-4 p-3 rounded-md bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300 text-sm">
                    {error}
                </div>
            }
            {match state.view {
                ViewMode::List => html! {
                    <KmsConfigList {configs} {on_create} {on_delete} />
                },
                ViewMode::Create => html! {
                    <KmsProviderForm {on_submit} submitting={*submitting} />
                },
            }}
        </div>
    }
}
