//! Geometry - cached viewport extents used by every pointer-move
//!
//! Measured once on attach and again after each settled resize.

use crate::settings::{Mode, Settings};
use crate::style::StylePatch;

/// Raw viewport size as reported by the host, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Cached geometry for one effect instance
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub client_width: f64,
    pub client_height: f64,
    pub half_client_width: f64,
    pub half_client_height: f64,
    /// Flat mode only: `ceil(0.5 * speed)`
    pub pad: Option<f64>,
}

impl Dimensions {
    pub fn measure(viewport: Viewport, settings: &Settings) -> Self {
        let client_width = viewport.width.ceil();
        let client_height = viewport.height.ceil();
        let pad = match settings.mode() {
            Mode::Tilt => None,
            Mode::Flat => Some((0.5 * settings.speed()).ceil()),
        };

        Self {
            client_width,
            client_height,
            half_client_width: client_width / 2.0,
            half_client_height: client_height / 2.0,
            pad,
        }
    }

    /// Inline style written right after measuring. Empty in tilt mode.
    pub fn pad_patch(&self) -> StylePatch {
        let mut patch = StylePatch::new();
        if let Some(pad) = self.pad {
            patch.set_pad(pad);
        }
        patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ParallaxOptions;

    #[test]
    fn extents_round_up() {
        let dims = Dimensions::measure(Viewport::new(1023.2, 767.5), &Settings::default());
        assert_eq!(dims.client_width, 1024.0);
        assert_eq!(dims.client_height, 768.0);
        assert_eq!(dims.half_client_width, 512.0);
        assert_eq!(dims.half_client_height, 384.0);
    }

    #[test]
    fn flat_pad_is_half_speed_rounded_up() {
        let s = Settings::resolve(ParallaxOptions::new().with_speed(55.0));
        let dims = Dimensions::measure(Viewport::new(800.0, 600.0), &s);
        assert_eq!(dims.pad, Some(28.0));
        assert_eq!(dims.pad_patch().to_css(), "padding: 28px; margin: -28px 0 0 -28px;");
    }

    #[test]
    fn tilt_has_no_pad() {
        let s = Settings::resolve(ParallaxOptions::new().with_mode(Mode::Tilt));
        let dims = Dimensions::measure(Viewport::new(800.0, 600.0), &s);
        assert_eq!(dims.pad, None);
        assert!(dims.pad_patch().is_empty());
    }
}
