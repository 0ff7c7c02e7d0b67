use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::error::{self, DomError};

pub type FrameStep = Box<dyn FnMut(f64) -> ControlFlow<()>>;

/// Runs a step once per display frame until it breaks. Dropping the handle
/// returned by `schedule` stops the loop.
pub trait FrameScheduler {
    type Handle;

    /// Current time on the same clock the frame timestamps use.
    fn now(&self) -> f64;

    fn schedule(&self, step: FrameStep) -> Result<Self::Handle, DomError>;
}

/// `requestAnimationFrame` driven scheduler.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    type Handle = FrameLoop;

    fn now(&self) -> f64 {
        error::window()
            .ok()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    fn schedule(&self, step: FrameStep) -> Result<FrameLoop, DomError> {
        FrameLoop::start(step)
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

pub struct FrameLoop {
    cancelled: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    pub fn start(mut step: FrameStep) -> Result<Self, DomError> {
        let cancelled = Rc::new(Cell::new(false));
        let pending = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let closure = {
            let cancelled = cancelled.clone();
            let pending = pending.clone();
            let callback = callback.clone();
            Closure::wrap(Box::new(move |now: f64| {
                pending.set(None);
                if cancelled.get() {
                    return;
                }
                if step(now).is_break() {
                    return;
                }
                if let Some(cb) = callback.borrow().as_ref() {
                    match request_frame(cb) {
                        Ok(id) => pending.set(Some(id)),
                        Err(e) => warn!("Animation stopped, could not request frame: {}", e),
                    }
                }
            }) as Box<dyn FnMut(f64)>)
        };

        let first = request_frame(&closure)?;
        pending.set(Some(first));
        *callback.borrow_mut() = Some(closure);

        Ok(Self { cancelled, pending, callback })
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let Some(id) = self.pending.take() {
            if let Ok(window) = error::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
        // The closure holds a reference to its own slot; release it.
        self.callback.borrow_mut().take();
    }
}

fn request_frame(callback: &FrameCallback) -> Result<i32, DomError> {
    Ok(error::window()?.request_animation_frame(callback.as_ref().unchecked_ref())?)
}
