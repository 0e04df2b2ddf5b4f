use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub text: Option<String>,
}

/// Centered spinner shown while a fetch or the session check is in flight.
#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center p-12" role="status">
            <div class="w-8 h-8 border-2 border-gray-300 dark:border-gray-600 border-t-orange-500 rounded-full animate-spin"></div>
            if let Some(text) = &props.text {
                <p class="mt-4 text-sm text-gray-600 dark:text-gray-400">{text}</p>
            }
        </div>
    }
}
