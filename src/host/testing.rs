//! In-memory host with a manual clock

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use super::{Host, Surface};
use crate::error::ParallaxError;
use crate::geometry::Viewport;
use crate::transform::Pointer;

type ResizeCallback = Rc<RefCell<Box<dyn FnMut()>>>;
type PointerCallback = Rc<RefCell<Box<dyn FnMut(Pointer)>>>;

#[derive(Default)]
struct FakeState {
    viewport: Viewport,
    elements: HashMap<String, FakeElement>,
    now: u64,
    next_id: u64,
    resize: Vec<(u64, ResizeCallback)>,
    pointer: Vec<(u64, PointerCallback)>,
    timers: Vec<(u64, u64, Box<dyn FnOnce()>)>,
}

impl FakeState {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Cloning shares the same page
#[derive(Clone, Default)]
pub struct FakeHost {
    state: Rc<RefCell<FakeState>>,
}

impl FakeHost {
    pub fn new(width: f64, height: f64) -> Self {
        let host = Self::default();
        host.state.borrow_mut().viewport = Viewport::new(width, height);
        host
    }

    pub fn add_element(&self, selector: &str) -> FakeElement {
        let element = FakeElement::default();
        self.state
            .borrow_mut()
            .elements
            .insert(selector.to_string(), element.clone());
        element
    }

    /// Change the viewport and fire every resize listener
    pub fn resize(&self, width: f64, height: f64) {
        let callbacks: Vec<ResizeCallback> = {
            let mut state = self.state.borrow_mut();
            state.viewport = Viewport::new(width, height);
            state.resize.iter().map(|(_, cb)| cb.clone()).collect()
        };
        for cb in callbacks {
            (&mut *cb.borrow_mut())();
        }
    }

    pub fn move_pointer(&self, client_x: f64, client_y: f64) {
        let callbacks: Vec<PointerCallback> = self
            .state
            .borrow()
            .pointer
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for cb in callbacks {
            (&mut *cb.borrow_mut())(Pointer::new(client_x, client_y));
        }
    }

    /// Move the clock forward, firing due timers in deadline order
    pub fn advance(&self, millis: u64) {
        let target = self.state.borrow().now + millis;
        loop {
            let due = {
                let mut state = self.state.borrow_mut();
                let next = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (_, at, _))| *at <= target)
                    .min_by_key(|(_, (_, at, _))| *at)
                    .map(|(i, _)| i);
                match next {
                    Some(i) => {
                        let (_, at, callback) = state.timers.remove(i);
                        state.now = at;
                        Some(callback)
                    }
                    None => None,
                }
            };
            match due {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }

    pub fn resize_listeners(&self) -> usize {
        self.state.borrow().resize.len()
    }

    pub fn pointer_listeners(&self) -> usize {
        self.state.borrow().pointer.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }
}

impl Host for FakeHost {
    type Element = FakeElement;
    type Listener = FakeListener;
    type Timer = FakeTimer;

    fn query_selector(&self, selector: &str) -> Result<Option<FakeElement>, ParallaxError> {
        if selector.trim().is_empty() || selector.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(ParallaxError::InvalidSelector {
                selector: selector.to_string(),
                reason: "not a valid selector".to_string(),
            });
        }
        Ok(self.state.borrow().elements.get(selector).cloned())
    }

    fn viewport(&self) -> Viewport {
        self.state.borrow().viewport
    }

    fn on_resize(&self, callback: Box<dyn FnMut()>) -> FakeListener {
        let mut state = self.state.borrow_mut();
        let id = state.next_id();
        state.resize.push((id, Rc::new(RefCell::new(callback))));
        FakeListener {
            id,
            state: Rc::downgrade(&self.state),
        }
    }

    fn on_pointer_move(&self, callback: Box<dyn FnMut(Pointer)>) -> FakeListener {
        let mut state = self.state.borrow_mut();
        let id = state.next_id();
        state.pointer.push((id, Rc::new(RefCell::new(callback))));
        FakeListener {
            id,
            state: Rc::downgrade(&self.state),
        }
    }

    fn set_timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> FakeTimer {
        let mut state = self.state.borrow_mut();
        let id = state.next_id();
        let at = state.now + u64::from(millis);
        state.timers.push((id, at, callback));
        FakeTimer {
            id,
            state: Rc::downgrade(&self.state),
        }
    }
}

/// Records every style write
#[derive(Clone, Default)]
pub struct FakeElement {
    style: Rc<RefCell<String>>,
    writes: Rc<Cell<usize>>,
}

impl FakeElement {
    pub fn style(&self) -> String {
        self.style.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl Surface for FakeElement {
    fn set_style(&self, css: &str) -> Result<(), ParallaxError> {
        *self.style.borrow_mut() = css.to_string();
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

pub struct FakeListener {
    id: u64,
    state: Weak<RefCell<FakeState>>,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            if let Ok(mut state) = state.try_borrow_mut() {
                let id = self.id;
                state.resize.retain(|(i, _)| *i != id);
                state.pointer.retain(|(i, _)| *i != id);
            }
        }
    }
}

pub struct FakeTimer {
    id: u64,
    state: Weak<RefCell<FakeState>>,
}

impl Drop for FakeTimer {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            if let Ok(mut state) = state.try_borrow_mut() {
                let id = self.id;
                state.timers.retain(|(i, _, _)| *i != id);
            }
        }
    }
}
