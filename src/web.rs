//! Browser host - `web-sys` DOM access, `gloo` listeners and timers
//!
//! Effects attached through [`attach`] share one [`ResizeDispatcher`] per
//! thread, which in a browser means one resize listener per page.

use std::cell::RefCell;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, Window};

use crate::dispatch::ResizeDispatcher;
use crate::effect::Parallax;
use crate::error::ParallaxError;
use crate::geometry::Viewport;
use crate::host::{Host, Surface};
use crate::settings::ParallaxOptions;
use crate::transform::Pointer;

pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    pub fn new() -> Result<Self, ParallaxError> {
        let window = web_sys::window().ok_or_else(|| ParallaxError::Host("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| ParallaxError::Host("no document".into()))?;
        Ok(Self { window, document })
    }
}

impl Surface for Element {
    fn set_style(&self, css: &str) -> Result<(), ParallaxError> {
        self.set_attribute("style", css)
            .map_err(|e| ParallaxError::Host(js_message(&e)))
    }
}

impl Host for WebHost {
    type Element = Element;
    type Listener = EventListener;
    type Timer = Timeout;

    fn query_selector(&self, selector: &str) -> Result<Option<Element>, ParallaxError> {
        self.document
            .query_selector(selector)
            .map_err(|e| ParallaxError::InvalidSelector {
                selector: selector.to_string(),
                reason: js_message(&e),
            })
    }

    fn viewport(&self) -> Viewport {
        let width = self.window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = self.window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Viewport::new(width, height)
    }

    fn on_resize(&self, mut callback: Box<dyn FnMut()>) -> EventListener {
        EventListener::new(&self.window, "resize", move |_event| callback())
    }

    fn on_pointer_move(&self, mut callback: Box<dyn FnMut(Pointer)>) -> EventListener {
        EventListener::new(&self.document, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                callback(Pointer::new(f64::from(event.client_x()), f64::from(event.client_y())));
            }
        })
    }

    fn set_timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(millis, callback)
    }
}

/// Best-effort text of a thrown JS value
fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

thread_local! {
    static DISPATCHER: RefCell<Option<ResizeDispatcher<WebHost>>> = const { RefCell::new(None) };
    static KEPT: RefCell<Vec<Parallax<WebHost>>> = const { RefCell::new(Vec::new()) };
}

/// The page-wide dispatcher, created on first use
pub fn shared_dispatcher() -> Result<ResizeDispatcher<WebHost>, ParallaxError> {
    DISPATCHER.with(|slot| {
        if let Some(dispatcher) = slot.borrow().as_ref() {
            return Ok(dispatcher.clone());
        }
        let dispatcher = ResizeDispatcher::new(WebHost::new()?);
        *slot.borrow_mut() = Some(dispatcher.clone());
        Ok(dispatcher)
    })
}

/// Attach an effect to the first element matching `selector`
pub fn attach(selector: &str, options: ParallaxOptions) -> Result<Parallax<WebHost>, ParallaxError> {
    Parallax::attach(&shared_dispatcher()?, selector, options)
}

/// Options from a JS value; `undefined` and `null` mean defaults
pub fn options_from_js(value: &JsValue) -> Result<ParallaxOptions, ParallaxError> {
    let json = if value.is_undefined() || value.is_null() {
        None
    } else {
        let text = js_sys::JSON::stringify(value)
            .map_err(|e| ParallaxError::Host(js_message(&e)))?;
        Some(String::from(text))
    };
    options_from_stringified(json.as_deref())
}

/// Second half of [`options_from_js`]: `None` stands for an omitted options
/// argument, otherwise the text is what `JSON.stringify` produced.
fn options_from_stringified(json: Option<&str>) -> Result<ParallaxOptions, ParallaxError> {
    match json {
        None => Ok(ParallaxOptions::default()),
        Some(text) => ParallaxOptions::from_json(text),
    }
}

/// JS entry point: `parallax(selector, options?)`.
///
/// The effect lives as long as the page; there is nothing to return.
#[wasm_bindgen(js_name = parallax)]
pub fn parallax_js(selector: &str, options: JsValue) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let effect = attach(selector, options_from_js(&options)?)?;
    KEPT.with(|kept| kept.borrow_mut().push(effect));
    Ok(())
}
