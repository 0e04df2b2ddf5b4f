//! Shared form primitives for the config screens.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormRowProps {
    pub label: String,
    pub children: Html,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(FormRow)]
pub fn form_row(props: &FormRowProps) -> Html {
    html! {
        <div class="mb-3 sm:flex sm:items-start sm:gap-4">
            <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1 sm:mb-0 sm:w-1/3 sm:pt-2">
                {&props.label}
            </label>
            <div class="sm:flex-1">
                {props.children.clone()}
                if let Some(error) = &props.error {
                    <p class="mt-1 text-xs text-red-600 dark:text-red-400">{error}</p>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or("text".to_string())]
    pub input_type: String,
    #[prop_or_default]
    pub placeholder: Option<String>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(TextInput)]
pub fn text_input(props: &TextInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <input
            type={props.input_type.clone()}
            value={props.value.clone()}
            oninput={oninput}
            placeholder={props.placeholder.clone().unwrap_or_default()}
            disabled={props.disabled}
            class="w-full px-2.5 py-1.5 text-sm border border-gray-300 dark:border-gray-600 rounded-md shadow-sm
                   focus:outline-none focus:ring-2 focus:ring-orange-500 focus:border-orange-500
                   bg-white dark:bg-gray-800 text-gray-900 dark:text-gray-100
                   disabled:bg-gray-100 dark:disabled:bg-gray-900 disabled:cursor-not-allowed"
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub value: String,
    pub options: Vec<(String, String)>,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub placeholder: Option<String>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <select
            onchange={onchange}
            class="w-full px-2.5 py-1.5 text-sm border border-gray-300 dark:border-gray-600 rounded-md shadow-sm
                   focus:outline-none focus:ring-2 focus:ring-orange-500 focus:border-orange-500
                   bg-white dark:bg-gray-800 text-gray-900 dark:text-gray-100"
        >
            if let Some(placeholder) = &props.placeholder {
                <option value="" selected={props.value.is_empty()}>{placeholder}</option>
            }
            {props.options.iter().map(|(value, label)| {
                html! {
                    <option value={value.clone()} selected={value == &props.value}>
                        {label}
                    </option>
                }
            }).collect::<Html>()}
        </select>
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckboxFieldProps {
    pub checked: bool,
    pub on_change: Callback<bool>,
}

#[function_component(CheckboxField)]
pub fn checkbox_field(props: &CheckboxFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        let checked = props.checked;
        Callback::from(move |_: Event| on_change.emit(!checked))
    };

    html! {
        <input
            type="checkbox"
            checked={props.checked}
            onchange={onchange}
            class="h-4 w-4 mt-2 rounded border-gray-300 text-orange-600 focus:ring-orange-500"
        />
    }
}
