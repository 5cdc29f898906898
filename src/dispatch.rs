//! Resize dispatcher - one debounced resize listener shared by every effect
//!
//! Effects subscribe a remeasure callback. The first subscription installs
//! the host resize listener; later ones reuse it. Each resize event restarts
//! a `DEBOUNCE_MILLIS` timer, so a burst of events produces exactly one
//! remeasure pass once the viewport has been still for that long. Dropping
//! the last `Subscription` removes the listener and any pending timer.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, info};

use crate::geometry::Viewport;
use crate::host::Host;

/// Quiet period after the last resize event before remeasuring
pub const DEBOUNCE_MILLIS: u32 = 100;

type Remeasure = Rc<RefCell<dyn FnMut(Viewport)>>;

pub struct ResizeDispatcher<H: Host> {
    inner: Rc<Inner<H>>,
}

impl<H: Host> Clone for ResizeDispatcher<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

struct Inner<H: Host> {
    host: Rc<H>,
    delay_millis: u32,
    state: RefCell<State<H>>,
}

struct State<H: Host> {
    listener: Option<H::Listener>,
    pending: Option<H::Timer>,
    next_id: u64,
    subscribers: Vec<(u64, Remeasure)>,
}

impl<H: Host> ResizeDispatcher<H> {
    pub fn new(host: H) -> Self {
        Self {
            inner: Rc::new(Inner {
                host: Rc::new(host),
                delay_millis: DEBOUNCE_MILLIS,
                state: RefCell::new(State {
                    listener: None,
                    pending: None,
                    next_id: 0,
                    subscribers: Vec::new(),
                }),
            }),
        }
    }

    pub fn host(&self) -> &H {
        &self.inner.host
    }

    pub fn is_installed(&self) -> bool {
        self.inner.state.borrow().listener.is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.state.borrow().subscribers.len()
    }

    /// Install the shared resize listener unless it already is.
    /// Returns `true` only for the call that installed it.
    pub fn ensure_installed(&self) -> bool {
        if self.is_installed() {
            return false;
        }
        let weak = Rc::downgrade(&self.inner);
        let listener = self.inner.host.on_resize(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                Inner::restart_timer(&inner);
            }
        }));
        self.inner.state.borrow_mut().listener = Some(listener);
        info!(delay_ms = self.inner.delay_millis, "installed shared resize listener");
        true
    }

    /// Register `remeasure` to run after every settled resize
    pub fn subscribe(&self, remeasure: impl FnMut(Viewport) + 'static) -> Subscription<H> {
        self.ensure_installed();
        let callback: Remeasure = Rc::new(RefCell::new(remeasure));
        let mut state = self.inner.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        state.subscribers.push((id, callback));
        debug!(id, subscribers = state.subscribers.len(), "resize subscription added");
        Subscription {
            id,
            dispatcher: Rc::downgrade(&self.inner),
        }
    }
}

impl<H: Host> Inner<H> {
    fn restart_timer(this: &Rc<Self>) {
        let weak = Rc::downgrade(this);
        let timer = this.host.set_timeout(
            this.delay_millis,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.settle();
                }
            }),
        );
        // Replacing the handle cancels the earlier timeout. Drop it only
        // after the borrow is released.
        let previous = this.state.borrow_mut().pending.replace(timer);
        drop(previous);
    }

    fn settle(&self) {
        let callbacks: Vec<(u64, Remeasure)> = self
            .state
            .borrow()
            .subscribers
            .iter()
            .map(|(id, cb)| (*id, Rc::clone(cb)))
            .collect();
        let viewport = self.host.viewport();
        debug!(
            width = viewport.width,
            height = viewport.height,
            subscribers = callbacks.len(),
            "viewport settled"
        );
        for (id, callback) in callbacks {
            // An earlier callback in this pass may have unsubscribed this one.
            if !self.is_subscribed(id) {
                continue;
            }
            (&mut *callback.borrow_mut())(viewport);
        }
    }

    fn is_subscribed(&self, id: u64) -> bool {
        self.state.borrow().subscribers.iter().any(|(i, _)| *i == id)
    }

    fn unsubscribe(&self, id: u64) {
        let (listener, pending) = {
            let mut state = self.state.borrow_mut();
            state.subscribers.retain(|(i, _)| *i != id);
            if state.subscribers.is_empty() {
                (state.listener.take(), state.pending.take())
            } else {
                (None, None)
            }
        };
        debug!(id, "resize subscription removed");
        if listener.is_some() {
            info!("removed shared resize listener");
        }
        drop(pending);
        drop(listener);
    }
}

/// Keeps a remeasure callback registered; unsubscribes on drop
pub struct Subscription<H: Host> {
    id: u64,
    dispatcher: Weak<Inner<H>>,
}

impl<H: Host> Drop for Subscription<H> {
    fn drop(&mut self) {
        if let Some(inner) = self.dispatcher.upgrade() {
            inner.unsubscribe(self.id);
        }
    }
}
