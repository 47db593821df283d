//! Process-wide registry of deferred resources, keyed by loader.
use super::deferred::{Deferred, LoadFuture};
use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    static REGISTRY: RefCell<HashMap<TypeId, Box<dyn Any>>> = RefCell::new(HashMap::new());
}

/// Gets the [`Deferred`] for `loader`, creating it on first request.
///
/// Loaders are identified by their type, so each function item or closure
/// maps to exactly one cell for the life of the UI thread.
pub fn request_deferred<T, F>(loader: F) -> Deferred<T>
where
    T: 'static,
    F: Fn() -> LoadFuture<T> + 'static,
{
    let key = TypeId::of::<F>();
    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        if let Some(deferred) = registry
            .get(&key)
            .and_then(|deferred| deferred.downcast_ref::<Deferred<T>>())
        {
            return deferred.clone();
        }

        let deferred = Deferred::new(loader);
        registry.insert(key, Box::new(deferred.clone()));
        deferred
    })
}

#[cfg(test)]
#[path = "./registry_test.rs"]
mod registry_test;
