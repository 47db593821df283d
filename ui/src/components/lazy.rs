//! Components whose resources load on first render.
use crate::components::Message;
use crate::deferred::{request_deferred, Deferred, LoadFuture};
use crate::hooks::use_deferred;
use crate::types;
use yew::prelude::*;

/// A unit of UI whose defining resources are loaded on first demand.
pub trait DeferredModule: Sized + 'static {
    /// Fetches the module's resources.
    fn load() -> LoadFuture<Self>;

    /// Renders the loaded module around `children`.
    fn render(&self, children: Html) -> Html;

    /// Shared cell for the module.
    fn deferred() -> Deferred<Self> {
        request_deferred(Self::load)
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyProps {
    #[prop_or_default]
    pub children: Children,
}

/// Renders `M` once its resources are ready.
///
/// Suspends while the resources load, so it must be rendered inside a
/// [`Suspense`] boundary. If loading failed an error message with a retry
/// button is rendered in place of the module.
#[function_component(Lazy)]
pub fn lazy<M>(props: &LazyProps) -> HtmlResult
where
    M: DeferredModule,
{
    let deferred = M::deferred();
    let update = use_force_update();
    let module = use_deferred(&deferred)?;

    let module = match module {
        Ok(module) => module,
        Err(err) => {
            let onretry = Callback::from(move |_: ()| {
                if deferred.reset() {
                    update.force_update();
                }
            });

            return Ok(html! {
                <LoadFailure message={types::Message::from(&*err)} {onretry} />
            });
        }
    };

    let children = html! { <>{ for props.children.iter() }</> };
    Ok(module.render(children))
}

// ********************
// *** Load Failure ***
// ********************

#[derive(Properties, PartialEq)]
pub struct LoadFailureProps {
    pub message: types::Message,
    pub onretry: Callback<()>,
}

#[function_component(LoadFailure)]
fn load_failure(props: &LoadFailureProps) -> Html {
    let onclick = {
        let onretry = props.onretry.clone();
        Callback::from(move |_: MouseEvent| {
            onretry.emit(());
        })
    };

    html! {
        <Message class={classes!("load-failure")}
            message={props.message.message.clone()}
            kind={props.message.kind}>

            <button type={"button"} {onclick}>{ "Retry" }</button>
        </Message>
    }
}
