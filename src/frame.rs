use crate::app::App;
use crate::sim::{FrameScheduler, FrameTicket};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Monotonic session clock; model timestamps are offsets from `origin`.
#[derive(Clone, Copy)]
pub struct SessionClock {
    origin: Instant,
}

impl SessionClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// `requestAnimationFrame` behind the model's `FrameScheduler` seam.
pub struct RafScheduler {
    callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    pending: Rc<Cell<Option<FrameTicket>>>,
    handle: Option<i32>,
}

impl RafScheduler {
    pub fn new() -> Self {
        Self {
            callback: Rc::new(RefCell::new(None)),
            pending: Rc::new(Cell::new(None)),
            handle: None,
        }
    }

    fn install(&self, closure: Closure<dyn FnMut(f64)>) {
        *self.callback.borrow_mut() = Some(closure);
    }

    /// Ticket of the callback now firing; `None` if it was cancelled.
    pub fn take_pending(&mut self) -> Option<FrameTicket> {
        self.handle = None;
        self.pending.take()
    }
}

impl FrameScheduler for RafScheduler {
    fn request(&mut self, ticket: FrameTicket) {
        self.pending.set(Some(ticket));
        if self.handle.is_some() {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        if let Some(cb) = self.callback.borrow().as_ref() {
            match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(h) => self.handle = Some(h),
                Err(e) => log::error!("requestAnimationFrame error: {:?}", e),
            }
        }
    }

    fn cancel(&mut self) {
        self.pending.set(None);
        if let Some(h) = self.handle.take() {
            if let Some(window) = web::window() {
                _ = window.cancel_animation_frame(h);
            }
        }
    }
}

pub fn start_loop(app: &App) {
    let app_tick = app.clone();
    let closure = Closure::wrap(Box::new(move |_ts: f64| {
        app_tick.frame();
    }) as Box<dyn FnMut(f64)>);
    app.scheduler.borrow().install(closure);

    let mut scheduler = app.scheduler.borrow_mut();
    if app.sim.borrow_mut().start(&mut *scheduler).is_some() {
        log::info!("[frame] loop started");
    }
}
