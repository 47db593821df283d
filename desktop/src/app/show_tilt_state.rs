//! Visibility of the tilt.
use std::rc::Rc;
use yew::prelude::*;

/// Actions available to modify the [`ShowTiltState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTiltAction {
    /// Sets whether the tilt is shown.
    Toggle(bool),
}

/// Whether the tilt is shown.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ShowTiltState {
    pub show_tilt: bool,
}

impl Reducible for ShowTiltState {
    type Action = ShowTiltAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ShowTiltAction::Toggle(show_tilt) => {
                // same `Rc` skips re-rendering
                if self.show_tilt == show_tilt {
                    return self;
                }

                tracing::debug!(show_tilt, "toggle tilt");
                Self { show_tilt }.into()
            }
        }
    }
}

pub type ShowTiltReducer = UseReducerHandle<ShowTiltState>;

#[cfg(test)]
#[path = "./show_tilt_state_test.rs"]
mod show_tilt_state_test;
