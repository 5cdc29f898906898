//! Pointer parallax - move or tilt one element as the pointer crosses the page
//!
//! Pipeline for one effect:
//! - `settings` merges caller options over defaults
//! - `geometry` caches the viewport extents (and flat-mode padding)
//! - `dispatch` shares one debounced resize listener between effects
//! - `transform` turns each pointer position into an inline style
//!
//! The engine talks to the page through the `host::Host` trait; `web`
//! implements it for the browser and exports `parallax(selector, options)`
//! to JavaScript.

pub mod dispatch;
pub mod effect;
pub mod error;
pub mod geometry;
pub mod host;
pub mod settings;
pub mod style;
pub mod transform;
pub mod web;

pub use dispatch::{ResizeDispatcher, Subscription, DEBOUNCE_MILLIS};
pub use effect::Parallax;
pub use error::ParallaxError;
pub use geometry::{Dimensions, Viewport};
pub use host::{Host, Surface};
pub use settings::{Mode, ParallaxOptions, Settings, TranslateFn};
pub use style::StylePatch;
pub use transform::{Motion, Pointer};
