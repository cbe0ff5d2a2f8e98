use crate::render::DomRenderer;
use cursor_core::CursorController;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub controller: Rc<RefCell<CursorController>>,
    pub renderer: DomRenderer,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let view = {
            let mut controller = self.controller.borrow_mut();
            controller.tick(dt);
            controller.view()
        };
        self.renderer.draw(&view);
    }
}

#[derive(Default)]
struct LoopState {
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
    request_id: Cell<Option<i32>>,
    running: Cell<bool>,
}

impl LoopState {
    fn request(&self) {
        if !self.running.get() {
            return;
        }
        let tick = self.tick.borrow();
        let (Some(tick), Some(w)) = (tick.as_ref(), web::window()) else {
            return;
        };
        match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
            Ok(id) => self.request_id.set(Some(id)),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                self.running.set(false);
            }
        }
    }
}

/// A running `requestAnimationFrame` loop. Dropping it cancels the pending
/// frame and releases the frame context.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn stop(&self) {
        self.state.running.set(false);
        if let (Some(id), Some(w)) = (self.state.request_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Releases the closure and with it the frame context and renderer.
        self.state.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn start_loop(mut frame_ctx: FrameContext) -> FrameLoop {
    let state = Rc::new(LoopState::default());
    let weak = Rc::downgrade(&state);
    *state.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let Some(state) = weak.upgrade() else {
            return;
        };
        state.request_id.set(None);
        frame_ctx.frame();
        state.request();
    }) as Box<dyn FnMut()>));
    state.running.set(true);
    state.request();
    FrameLoop { state }
}
