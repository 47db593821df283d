//! Tilt settings.
use serde::Deserialize;

/// Settings for a [`Tilt`](super::Tilt).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct TiltOptions {
    /// Maximum rotation, in degrees.
    pub max: f64,

    /// Perspective distance, in pixels.
    pub perspective: f64,

    /// Scale while hovered.
    pub scale: f64,

    /// Transition duration when settling, in milliseconds.
    pub speed: u32,

    /// Invert the tilt direction.
    pub reverse: bool,

    /// Render a glare overlay.
    pub glare: bool,

    /// Glare opacity at the bottom edge.
    pub max_glare: f64,
}

impl Default for TiltOptions {
    fn default() -> Self {
        Self {
            max: 25.0,
            perspective: 1000.0,
            scale: 1.0,
            speed: 400,
            reverse: false,
            glare: true,
            max_glare: 0.5,
        }
    }
}

#[cfg(test)]
#[path = "./options_test.rs"]
mod options_test;
