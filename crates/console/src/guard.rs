//! Session guard wrapper for protected routes.

use pylon_http::flows::GuardOutcome;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::LoadingSpinner;
use crate::routes::{Route, redirect_route};
use crate::services::session::evaluate_guard;

#[derive(Properties, PartialEq)]
pub struct RequireSessionProps {
    pub children: Children,
}

/// Runs the session guard on every navigation into the protected subtree.
/// Children render only on a `Proceed` verdict; redirects are applied once
/// through the navigator. A superseded navigation's in-flight check is not
/// aborted, but its writes all land in the session service, so the worst
/// case is a redundant redirect to the same target.
#[function_component(RequireSession)]
pub fn require_session(props: &RequireSessionProps) -> Html {
    let verdict = use_state(|| None::<GuardOutcome>);
    let navigator = use_navigator().expect("RequireSession rendered outside a Router");
    let route = use_route::<Route>();

    {
        let verdict = verdict.clone();
        use_effect_with(route, move |_| {
            verdict.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = evaluate_guard().await;
                verdict.set(Some(outcome));
            });
        });
    }

    {
        let navigator = navigator.clone();
        use_effect_with(*verdict, move |outcome| {
            if let Some(GuardOutcome::Redirect(target)) = outcome {
                navigator.push(&redirect_route(*target));
            }
        });
    }

    match *verdict {
        Some(GuardOutcome::Proceed) => html! { <>{ props.children.clone() }</> },
        _ => html! { <LoadingSpinner text="Checking session..." /> },
    }
}
