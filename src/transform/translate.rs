//! Shift - flat-mode translation

use crate::geometry::Dimensions;
use crate::settings::Settings;
use crate::style::css_number;

/// Translation in pixels. With `reverse` (the default) the element moves
/// away from the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Shift {
    pub move_x: f64,
    pub move_y: f64,
}

impl Shift {
    pub fn compute(settings: &Settings, dims: &Dimensions, mouse_x: f64, mouse_y: f64) -> Self {
        let speed = settings.speed();
        let mut move_x = -(mouse_x / dims.client_width * speed);
        let mut move_y = -(mouse_y / dims.client_height * speed);
        if !settings.reverse() {
            move_x = -move_x;
            move_y = -move_y;
        }
        Self { move_x, move_y }
    }

    /// `translate3d(Xpx, Ypx, 0)` or `translate(Xpx, Ypx)`; the third
    /// coordinate only appears with hardware acceleration on.
    pub fn to_css(&self, settings: &Settings) -> String {
        let x = css_number(self.move_x);
        let y = css_number(self.move_y);
        let func = settings.translate().name();
        if settings.hardware() {
            format!("{func}({x}px, {y}px, 0)")
        } else {
            format!("{func}({x}px, {y}px)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Viewport;
    use crate::settings::ParallaxOptions;

    fn dims(settings: &Settings) -> Dimensions {
        Dimensions::measure(Viewport::new(1000.0, 1000.0), settings)
    }

    #[test]
    fn reverse_moves_away_from_pointer() {
        let s = Settings::default();
        let shift = Shift::compute(&s, &dims(&s), 100.0, 0.0);
        assert_eq!(shift.move_x, -10.0);
    }

    #[test]
    fn no_reverse_moves_toward_pointer() {
        let s = Settings::resolve(ParallaxOptions::new().with_reverse(false));
        let shift = Shift::compute(&s, &dims(&s), 100.0, -250.0);
        assert_eq!(shift.move_x, 10.0);
        assert_eq!(shift.move_y, -25.0);
    }

    #[test]
    fn centered_pointer_rests() {
        let s = Settings::default();
        let shift = Shift::compute(&s, &dims(&s), 0.0, 0.0);
        assert_eq!(shift.to_css(&s), "translate3d(0px, 0px, 0)");
    }

    #[test]
    fn speed_scales_offset() {
        let s = Settings::resolve(ParallaxOptions::new().with_speed(300.0));
        let shift = Shift::compute(&s, &dims(&s), 0.0, 250.0);
        assert_eq!(shift.move_y, -75.0);
    }

    #[test]
    fn plain_translate_has_two_coordinates() {
        let s = Settings::resolve(ParallaxOptions::new().with_hardware(false));
        let shift = Shift { move_x: 1.5, move_y: -2.0 };
        assert_eq!(shift.to_css(&s), "translate(1.5px, -2px)");
    }
}
