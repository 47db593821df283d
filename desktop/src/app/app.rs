//! Main application.
use super::{ShowTiltAction, ShowTiltReducer, ShowTiltState};
use crate::components::tilt::TiltModule;
use crate::constants::{LOADING_TILT_TEXT, SHOW_TILT_LABEL, TILT_CONTENT_TEXT};
use lazy_tilt_ui::components::Lazy;
use lazy_tilt_ui::widgets::suspense::Loading;
use yew::prelude::*;

// *********************
// *** App Component ***
// *********************

/// Checkbox controlling a tilt that is loaded the first time it is shown.
#[function_component(App)]
pub fn app() -> Html {
    let show_tilt_state: ShowTiltReducer = use_reducer(ShowTiltState::default);

    let onchange = {
        let show_tilt_state = show_tilt_state.dispatcher();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<web_sys::HtmlInputElement>();
            show_tilt_state.dispatch(ShowTiltAction::Toggle(input.checked()));
        })
    };

    let fallback = html! { <Loading text={LOADING_TILT_TEXT} /> };
    html! {
        <div id={"content"}>
            <label>
                <input
                    type={"checkbox"}
                    checked={show_tilt_state.show_tilt}
                    {onchange} />
                { SHOW_TILT_LABEL }
            </label>
            <Suspense {fallback}>
                if show_tilt_state.show_tilt {
                    <Lazy<TiltModule>>{ TILT_CONTENT_TEXT }</Lazy<TiltModule>>
                }
            </Suspense>
        </div>
    }
}
