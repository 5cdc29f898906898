//! Transform engine - pointer position to inline style
//!
//! Stateless: every pointer-move is computed from the cached `Dimensions`
//! and the resolved `Settings` alone. Flat mode produces a `Shift`, tilt
//! mode a `Tilt`; both render into a `StylePatch` with one transform
//! declaration per vendor prefix.

pub mod rotate;
pub mod translate;

pub use rotate::Tilt;
pub use translate::Shift;

use crate::geometry::Dimensions;
use crate::settings::{Mode, Settings};
use crate::style::StylePatch;

/// Pointer position in client (viewport) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub client_x: f64,
    pub client_y: f64,
}

impl Pointer {
    pub const fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }

    /// Offset from the viewport center: `(mouse_x, mouse_y)`
    pub fn offset_from_center(&self, dims: &Dimensions) -> (f64, f64) {
        (
            self.client_x - dims.half_client_width,
            self.client_y - dims.half_client_height,
        )
    }
}

/// Result of one pointer-move computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Shift(Shift),
    Tilt(Tilt),
}

impl Motion {
    pub fn compute(settings: &Settings, dims: &Dimensions, pointer: Pointer) -> Self {
        let (mouse_x, mouse_y) = pointer.offset_from_center(dims);
        match settings.mode() {
            Mode::Tilt => Self::Tilt(Tilt::compute(settings, dims, mouse_x, mouse_y)),
            Mode::Flat => Self::Shift(Shift::compute(settings, dims, mouse_x, mouse_y)),
        }
    }

    /// Full inline style for the target after this motion.
    ///
    /// Flat mode repeats the cached padding first, since the write replaces
    /// the whole attribute.
    pub fn to_patch(&self, settings: &Settings, dims: &Dimensions) -> StylePatch {
        let mut patch = dims.pad_patch();
        let value = match self {
            Self::Shift(shift) => shift.to_css(settings),
            Self::Tilt(tilt) => tilt.to_css(),
        };
        patch.set_prefixed(settings.vendors(), "transform", &value);
        patch
    }
}

/// Compute and render in one step
pub fn render(settings: &Settings, dims: &Dimensions, pointer: Pointer) -> StylePatch {
    Motion::compute(settings, dims, pointer).to_patch(settings, dims)
}
