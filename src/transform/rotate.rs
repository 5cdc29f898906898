//! Tilt - rotation about an in-plane axis

use crate::geometry::Dimensions;
use crate::settings::Settings;
use crate::style::css_number;

/// Rotation of `degree` degrees about the axis `(tilt_x, tilt_y, 0)`.
///
/// The axis is the pointer offset (as a fraction of the viewport) turned a
/// quarter: moving right tilts about Y, moving down tilts about -X.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub tilt_x: f64,
    pub tilt_y: f64,
    pub radius: f64,
    pub degree: f64,
}

impl Tilt {
    pub fn compute(settings: &Settings, dims: &Dimensions, mouse_x: f64, mouse_y: f64) -> Self {
        let tilt_y = mouse_x / dims.client_width;
        let tilt_x = -(mouse_y / dims.client_height);
        let radius = (tilt_x * tilt_x + tilt_y * tilt_y).sqrt();
        Self {
            tilt_x,
            tilt_y,
            radius,
            degree: radius * settings.degrees(),
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "rotate3d({}, {}, 0, {}deg)",
            css_number(self.tilt_x),
            css_number(self.tilt_y),
            css_number(self.degree),
        )
    }
}
