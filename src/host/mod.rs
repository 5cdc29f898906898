//! Host - the page primitives an effect consumes
//!
//! The engine never touches the DOM directly. It needs five things from its
//! host: element lookup, the viewport size, a resize event source, a
//! document-wide pointer-move source, and one-shot timers. `crate::web`
//! provides them through `web-sys`; tests use an in-memory host.
//!
//! Listener and timer handles detach or cancel when dropped.

#[cfg(test)]
pub(crate) mod testing;

use crate::error::ParallaxError;
use crate::geometry::Viewport;
use crate::transform::Pointer;

/// An element whose inline style can be replaced
pub trait Surface {
    /// Replace the whole `style` attribute with `css`
    fn set_style(&self, css: &str) -> Result<(), ParallaxError>;
}

pub trait Host: 'static {
    type Element: Surface + 'static;
    /// Registered event listener, removed on drop
    type Listener: 'static;
    /// Pending timeout, cancelled on drop
    type Timer: 'static;

    /// First element matching `selector`, in document order
    fn query_selector(&self, selector: &str) -> Result<Option<Self::Element>, ParallaxError>;

    fn viewport(&self) -> Viewport;

    fn on_resize(&self, callback: Box<dyn FnMut()>) -> Self::Listener;

    /// Pointer moves anywhere in the document, not just over one element
    fn on_pointer_move(&self, callback: Box<dyn FnMut(Pointer)>) -> Self::Listener;

    fn set_timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Self::Timer;
}
