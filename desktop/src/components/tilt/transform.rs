//! Pointer to pose math for the tilt effect.
use super::options::TiltOptions;

/// Element bounds, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

impl From<web_sys::DomRect> for Bounds {
    fn from(rect: web_sys::DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Orientation of a tilted element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltPose {
    /// Rotation about the y axis, in degrees.
    pub tilt_x: f64,

    /// Rotation about the x axis, in degrees.
    pub tilt_y: f64,

    /// Glare rotation, in degrees.
    pub glare_angle: f64,

    /// Glare opacity in `[0, max_glare]`.
    pub glare_opacity: f64,

    /// Whether the pointer is over the element.
    pub hovered: bool,
}

impl TiltPose {
    /// Resting pose.
    pub fn rest() -> Self {
        Self::default()
    }

    /// CSS `transform` for the element.
    pub fn transform(&self, options: &TiltOptions) -> String {
        let scale = if self.hovered { options.scale } else { 1.0 };
        format!(
            "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d({scale}, {scale}, {scale})",
            options.perspective, self.tilt_y, self.tilt_x
        )
    }

    /// CSS `transform` for the glare overlay.
    pub fn glare_transform(&self) -> String {
        format!("rotate({:.2}deg) translate(-50%, -50%)", self.glare_angle)
    }
}

/// Computes the pose of an element with `bounds` for a pointer at `(x, y)`.
/// The pointer is clamped into the bounds.
pub fn tilt_at(options: &TiltOptions, bounds: Bounds, (x, y): (f64, f64)) -> TiltPose {
    let px = fraction(x - bounds.left, bounds.width);
    let py = fraction(y - bounds.top, bounds.height);
    let direction = if options.reverse { -1.0 } else { 1.0 };

    let (cx, cy) = bounds.center();
    let glare_angle = (x - cx).atan2(-(y - cy)).to_degrees();

    TiltPose {
        tilt_x: direction * (options.max - px * options.max * 2.0),
        tilt_y: direction * (py * options.max * 2.0 - options.max),
        glare_angle,
        glare_opacity: py * options.max_glare,
        hovered: true,
    }
}

fn fraction(offset: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.5;
    }

    (offset / extent).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "./transform_test.rs"]
mod transform_test;
