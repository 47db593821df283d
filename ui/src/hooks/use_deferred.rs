//! Suspend a component on a deferred resource.
use crate::deferred::{Deferred, Demand};
use crate::Error;
use std::rc::Rc;
use yew::prelude::*;
use yew::suspense::{Suspension, SuspensionResult};

/// Outcome of a settled deferred resource.
pub type DeferredResult<T> = Result<Rc<T>, Rc<Error>>;

/// Demands `deferred`, suspending the component until it settles.
///
/// The first call triggers the load. Once settled, the cached outcome is
/// returned without suspending.
#[hook]
pub fn use_deferred<T>(deferred: &Deferred<T>) -> SuspensionResult<DeferredResult<T>>
where
    T: 'static,
{
    match deferred.demand() {
        Demand::Ready(value) => Ok(Ok(value)),
        Demand::Failed(err) => Ok(Err(err)),
        Demand::Pending => {
            let (s, handle) = Suspension::new();
            deferred.on_settled(move || handle.resume());
            Err(s)
        }
    }
}
