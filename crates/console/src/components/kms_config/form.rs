//! Provider credential form, driven by the field descriptors.

use pylon_core::{
    AwsRegion, FieldError, FieldKey, FieldKind, KmsConfigForm, KmsProvider, display_fields,
};
use yew::prelude::*;

use crate::components::form::{CheckboxField, FormRow, SelectField, TextInput};

#[derive(Properties, PartialEq)]
pub struct KmsProviderFormProps {
    pub on_submit: Callback<KmsConfigForm>,
    #[prop_or(false)]
    pub submitting: bool,
}

#[function_component(KmsProviderForm)]
pub fn kms_provider_form(props: &KmsProviderFormProps) -> Html {
    let form = use_state(KmsConfigForm::default);
    let errors = use_state(Vec::<FieldError>::new);

    let update = |apply: fn(&mut KmsConfigForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let on_provider_change = update(|form, value| {
        form.provider = value.parse::<KmsProvider>().ok();
    });
    let on_api_url = update(|form, value| form.api_url = value);
    let on_api_key = update(|form, value| form.api_key = value);
    let on_access_key = update(|form, value| form.access_key_id = value);
    let on_secret_key = update(|form, value| form.secret_key_id = value);
    let on_region = update(|form, value| {
        form.region = value.parse::<AwsRegion>().ok();
    });
    let on_iam_toggle = {
        let form = form.clone();
        Callback::from(move |enabled: bool| {
            let mut next = (*form).clone();
            next.use_iam_profile = enabled;
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(()) => {
                    errors.set(Vec::new());
                    on_submit.emit((*form).clone());
                }
                Err(failures) => errors.set(failures),
            }
        })
    };

    let error_for = |key: FieldKey| -> Option<String> {
        errors
            .iter()
            .find(|e| e.field == key)
            .map(|e| e.message.to_owned())
    };

    let provider_options: Vec<(String, String)> = KmsProvider::ALL
        .iter()
        .map(|p| (p.as_str().to_owned(), p.label().to_owned()))
        .collect();
    let region_options: Vec<(String, String)> = AwsRegion::ALL
        .iter()
        .map(|r| (r.as_str().to_owned(), r.as_str().to_owned()))
        .collect();

    let fields = display_fields(form.provider)
        .iter()
        .map(|spec| {
            let input_type = match spec.kind {
                FieldKind::Password => "password".to_owned(),
                _ => "text".to_owned(),
            };
            let body = match spec.key {
                FieldKey::ApiUrl => html! {
                    <TextInput
                        value={form.api_url.clone()}
                        on_change={on_api_url.clone()}
                        placeholder={spec.placeholder.map(str::to_owned)}
                    />
                },
                FieldKey::ApiKey => html! {
                    <TextInput
                        value={form.api_key.clone()}
                        on_change={on_api_key.clone()}
                        {input_type}
                    />
                },
                FieldKey::UseIamProfile => html! {
                    <CheckboxField checked={form.use_iam_profile} on_change={on_iam_toggle.clone()} />
                },
                FieldKey::AccessKeyId => html! {
                    <TextInput
                        value={form.access_key_id.clone()}
                        on_change={on_access_key.clone()}
                        disabled={form.use_iam_profile}
                    />
                },
                FieldKey::SecretKeyId => html! {
                    <TextInput
                        value={form.secret_key_id.clone()}
                        on_change={on_secret_key.clone()}
                        disabled={form.use_iam_profile}
                        {input_type}
                    />
                },
                FieldKey::Region => html! {
                    <SelectField
                        value={form.region.map(|r| r.as_str().to_owned()).unwrap_or_default()}
                        options={region_options.clone()}
                        on_change={on_region.clone()}
                        placeholder={Some("Select region".to_owned())}
                    />
                },
            };
            html! {
                <FormRow label={spec.label.to_owned()} error={error_for(spec.key)}>
                    {body}
                </FormRow>
            }
        })
        .collect::<Html>();

    html! {
        <form {onsubmit}>
            <FormRow label="KMS Provider">
                <SelectField
                    value={form.provider.map(|p| p.as_str().to_owned()).unwrap_or_default()}
                    options={provider_options}
                    on_change={on_provider_change}
                    placeholder={Some("Provider name".to_owned())}
                />
            </FormRow>
            {fields}
            <div class="mt-5">
                <button
                    type="submit"
                    disabled={props.submitting}
                    class="px-4 py-2 text-sm font-medium text-white bg-orange-600 hover:bg-orange-700 rounded-md disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {if props.submitting { "Saving..." } else { "Save" }}
                </button>
            </div>
        </form>
    }
}
