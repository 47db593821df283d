//! Deferred tilt module.
use super::options::TiltOptions;
use super::tilt::Tilt;
use crate::constants::{TILT_LOAD_DELAY_MS, TILT_MANIFEST};
use futures::future::FutureExt;
use gloo_timers::future::TimeoutFuture;
use lazy_tilt_ui::components::DeferredModule;
use lazy_tilt_ui::deferred::LoadFuture;
use lazy_tilt_ui::Result;
use yew::prelude::*;

/// The [`Tilt`] component, loaded on first demand.
#[derive(Debug, Clone, PartialEq)]
pub struct TiltModule {
    options: TiltOptions,
}

impl TiltModule {
    /// Builds the module from its manifest.
    pub fn from_manifest(manifest: &str) -> Result<Self> {
        let options = serde_json::from_str(manifest)?;
        Ok(Self { options })
    }
}

impl DeferredModule for TiltModule {
    fn load() -> LoadFuture<Self> {
        async {
            TimeoutFuture::new(TILT_LOAD_DELAY_MS).await;
            Self::from_manifest(TILT_MANIFEST).inspect(|module| {
                tracing::debug!(options = ?module.options, "tilt module loaded");
            })
        }
        .boxed_local()
    }

    fn render(&self, children: Html) -> Html {
        html! {
            <Tilt options={self.options.clone()}>{ children }</Tilt>
        }
    }
}

#[cfg(test)]
#[path = "./tilt_module_test.rs"]
mod tilt_module_test;
