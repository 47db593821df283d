//! Display a message.
use crate::types::MessageType;
use yew::prelude::*;

// ***************
// *** Message ***
// ***************

#[derive(Properties, PartialEq)]
pub struct MessageProps {
    #[prop_or_default]
    pub class: Classes,

    pub message: AttrValue,
    pub kind: MessageType,

    /// Displayed after the message text, e.g. an action button.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Message)]
pub fn message(props: &MessageProps) -> Html {
    let class = classes!("lazy-tilt-ui-message", props.kind.class(), props.class.clone());

    html! {
        <div {class} role={"alert"}>
            <span class={classes!("message-text")}>{ &props.message }</span>
            { for props.children.iter() }
        </div>
    }
}
