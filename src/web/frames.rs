use crate::player::{FrameScheduler, FrameTicket};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// `requestAnimationFrame` scheduling.
///
/// The callback has to reach the controller that owns this scheduler, so it is
/// installed afterwards through [`AnimationFrameScheduler::install`] on a clone
/// of the shared slots (see [`AnimationFrameScheduler::hook`]).
pub struct AnimationFrameScheduler {
    callback: Rc<RefCell<Option<FrameCallback>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl AnimationFrameScheduler {
    pub fn new() -> Self {
        Self {
            callback: Rc::new(RefCell::new(None)),
            pending: Rc::new(Cell::new(None)),
        }
    }

    /// A second handle on the same callback slot, kept by the adapter after the
    /// scheduler moves into the controller.
    pub fn hook(&self) -> Self {
        Self {
            callback: self.callback.clone(),
            pending: self.pending.clone(),
        }
    }

    /// `on_frame` receives the ticket of the refresh that fired.
    pub fn install<T>(&self, mut on_frame: T)
    where
        T: FnMut(FrameTicket) + 'static,
    {
        let pending = self.pending.clone();
        let closure = Closure::wrap(Box::new(move |_timestamp: f64| {
            if let Some(id) = pending.take() {
                on_frame(FrameTicket(id));
            }
        }) as Box<dyn FnMut(f64)>);
        *self.callback.borrow_mut() = Some(closure);
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&mut self) -> Option<FrameTicket> {
        let window = window()?;
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            warn!("frame requested before the frame callback was installed");
            return None;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => {
                self.pending.set(Some(id));
                Some(FrameTicket(id))
            }
            Err(err) => {
                warn!(?err, "requestAnimationFrame failed");
                None
            }
        }
    }

    fn cancel_frame(&mut self, ticket: FrameTicket) {
        if self.pending.get() == Some(ticket.0) {
            self.pending.set(None);
        }
        if let Some(window) = window() {
            if let Err(err) = window.cancel_animation_frame(ticket.0) {
                warn!(?err, "cancelAnimationFrame failed");
            }
        }
    }
}
