//! Parallax - one effect bound to one element
//!
//! Attaching resolves the settings, measures the viewport (writing the
//! flat-mode padding right away), subscribes to the shared resize
//! dispatcher and starts following the pointer across the whole document.
//! Every pointer-move replaces the element's inline style.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::dispatch::{ResizeDispatcher, Subscription};
use crate::error::ParallaxError;
use crate::geometry::{Dimensions, Viewport};
use crate::host::{Host, Surface};
use crate::settings::{ParallaxOptions, Settings};
use crate::transform::{self, Pointer};

struct Binding<E> {
    element: E,
    settings: Settings,
    dims: Dimensions,
}

impl<E: Surface> Binding<E> {
    fn remeasure(&mut self, viewport: Viewport) -> Result<(), ParallaxError> {
        self.dims = Dimensions::measure(viewport, &self.settings);
        let patch = self.dims.pad_patch();
        if patch.is_empty() {
            return Ok(());
        }
        self.element.set_style(&patch.to_css())
    }

    fn follow(&self, pointer: Pointer) -> Result<(), ParallaxError> {
        let css = transform::render(&self.settings, &self.dims, pointer).to_css();
        trace!(x = pointer.client_x, y = pointer.client_y, %css, "pointer moved");
        self.element.set_style(&css)
    }
}

/// A running effect. Dropping it (or calling [`Parallax::dispose`]) stops
/// pointer tracking and releases its resize subscription; the element keeps
/// whatever style was written last.
pub struct Parallax<H: Host> {
    selector: String,
    binding: Rc<RefCell<Binding<H::Element>>>,
    _pointer: H::Listener,
    _resize: Subscription<H>,
}

impl<H: Host> Parallax<H> {
    /// Bind an effect to the first element matching `selector`.
    ///
    /// Fails with [`ParallaxError::TargetNotFound`] when nothing matches.
    pub fn attach(
        dispatcher: &ResizeDispatcher<H>,
        selector: &str,
        options: ParallaxOptions,
    ) -> Result<Self, ParallaxError> {
        let host = dispatcher.host();
        let element = host
            .query_selector(selector)?
            .ok_or_else(|| ParallaxError::target_not_found(selector))?;

        let mut binding = Binding {
            element,
            settings: Settings::resolve(options),
            dims: Dimensions::default(),
        };
        binding.remeasure(host.viewport())?;
        debug!(
            selector,
            mode = binding.settings.mode().name(),
            width = binding.dims.client_width,
            height = binding.dims.client_height,
            "attached parallax"
        );
        let binding = Rc::new(RefCell::new(binding));

        let resize = {
            let binding = Rc::clone(&binding);
            let selector = selector.to_string();
            dispatcher.subscribe(move |viewport| {
                if let Err(err) = binding.borrow_mut().remeasure(viewport) {
                    warn!(%err, selector = %selector, "failed to write padding after resize");
                }
            })
        };

        let pointer = {
            let binding = Rc::clone(&binding);
            let selector = selector.to_string();
            host.on_pointer_move(Box::new(move |pointer| {
                if let Err(err) = binding.borrow().follow(pointer) {
                    warn!(%err, selector = %selector, "failed to write transform");
                }
            }))
        };

        Ok(Self {
            selector: selector.to_string(),
            binding,
            _pointer: pointer,
            _resize: resize,
        })
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn settings(&self) -> Settings {
        self.binding.borrow().settings.clone()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.binding.borrow().dims
    }

    /// Stop following the pointer. When this was the last effect on the
    /// dispatcher, the shared resize listener goes too.
    pub fn dispose(self) {
        debug!(selector = %self.selector, "disposing parallax");
    }
}
