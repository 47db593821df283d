//! Fallback for loading components.
use yew::prelude::*;

/// Properties for the [`Loading`] component.
#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<AttrValue>,

    #[prop_or_default]
    pub class: Classes,
}

/// Fallback loading component for suspense boundaries.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class={classes!("loading", props.class.clone())}>
            if let Some(text) = props.text.clone() {
                { text }
            } else {
                { "Loading" }
            }
        </div>
    }
}
