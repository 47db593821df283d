//! Memoized deferred cell.
use crate::{Error, Result};
use futures::future::LocalBoxFuture;
use std::cell::RefCell;
use std::fmt;
use std::mem;
use std::rc::Rc;

/// Future produced by a deferred loader.
pub type LoadFuture<T> = LocalBoxFuture<'static, Result<T>>;

type Loader<T> = Rc<dyn Fn() -> LoadFuture<T>>;
type Waiter = Box<dyn FnOnce()>;

/// Observable state of a [`Deferred`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredStatus {
    /// Loader has not been invoked.
    Unrequested,

    /// Loader has been invoked and its future has not resolved.
    Loading,

    /// Resource is available.
    Ready,

    /// Loader resolved with an error.
    Failed,
}

/// Result of demanding a [`Deferred`].
pub enum Demand<T> {
    Ready(Rc<T>),
    Pending,
    Failed(Rc<Error>),
}

enum State<T> {
    Unrequested,
    Loading,
    Ready(Rc<T>),
    Failed(Rc<Error>),
}

struct Inner<T> {
    state: State<T>,
    loader: Loader<T>,

    /// One entry per render suspended while loading.
    /// Drained when the load settles.
    waiters: Vec<Waiter>,
    requests: usize,
}

/// A resource whose loader runs only on first demand.
///
/// Clones share the same cell.
pub struct Deferred<T: 'static> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: 'static> Deferred<T> {
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> LoadFuture<T> + 'static,
    {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: State::Unrequested,
                loader: Rc::new(loader),
                waiters: Vec::new(),
                requests: 0,
            })),
        }
    }

    pub fn status(&self) -> DeferredStatus {
        match self.inner.borrow().state {
            State::Unrequested => DeferredStatus::Unrequested,
            State::Loading => DeferredStatus::Loading,
            State::Ready(_) => DeferredStatus::Ready,
            State::Failed(_) => DeferredStatus::Failed,
        }
    }

    /// Number of times the loader has been invoked.
    pub fn requests(&self) -> usize {
        self.inner.borrow().requests
    }

    /// Demands the resource, spawning the load on the UI event loop if needed.
    pub fn demand(&self) -> Demand<T> {
        self.demand_with(|load| yew::platform::spawn_local(load))
    }

    /// Demands the resource.
    /// If the cell is [`DeferredStatus::Unrequested`] the loader is invoked
    /// and its future handed to `spawn`.
    pub fn demand_with<S>(&self, spawn: S) -> Demand<T>
    where
        S: FnOnce(LocalBoxFuture<'static, ()>),
    {
        let loader = {
            let mut inner = self.inner.borrow_mut();
            match &inner.state {
                State::Ready(value) => return Demand::Ready(value.clone()),
                State::Failed(err) => return Demand::Failed(err.clone()),
                State::Loading => return Demand::Pending,
                State::Unrequested => {}
            }

            inner.state = State::Loading;
            inner.requests += 1;
            inner.loader.clone()
        };

        tracing::debug!(requests = self.requests(), "loading deferred resource");
        let load = loader();
        let cell = self.clone();
        spawn(Box::pin(async move {
            let result = load.await;
            cell.settle(result);
        }));

        Demand::Pending
    }

    /// Runs `f` once the cell is no longer loading.
    /// `f` runs immediately if the cell is not loading.
    pub fn on_settled<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        {
            let mut inner = self.inner.borrow_mut();
            if matches!(inner.state, State::Loading) {
                inner.waiters.push(Box::new(f));
                return;
            }
        }

        f();
    }

    /// Returns a failed cell to [`DeferredStatus::Unrequested`] so the next
    /// demand loads again.
    ///
    /// Returns whether the cell was reset.
    pub fn reset(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        if !matches!(inner.state, State::Failed(_)) {
            return false;
        }

        inner.state = State::Unrequested;
        true
    }

    fn settle(&self, result: Result<T>) {
        let waiters = {
            let mut inner = self.inner.borrow_mut();
            inner.state = match result {
                Ok(value) => {
                    tracing::debug!("deferred resource ready");
                    State::Ready(Rc::new(value))
                }

                Err(err) => {
                    tracing::error!(?err, "deferred resource failed to load");
                    State::Failed(Rc::new(err))
                }
            };

            mem::take(&mut inner.waiters)
        };

        for waiter in waiters {
            waiter();
        }
    }
}

impl<T: 'static> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: 'static> PartialEq for Deferred<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: 'static> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("status", &self.status())
            .field("requests", &self.requests())
            .finish()
    }
}

#[cfg(test)]
#[path = "./deferred_test.rs"]
mod deferred_test;
