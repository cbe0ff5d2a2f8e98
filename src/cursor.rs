use crate::dom::Subscription;
use crate::events;
use crate::frame::{self, FrameContext, FrameLoop};
use crate::render::DomRenderer;
use cursor_core::{CursorController, CursorParams};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// A mounted cursor. Dropping it unsubscribes the pointer listeners, stops
/// the frame loop and removes the overlay from the page.
pub struct CursorHandle {
    subscriptions: Vec<Subscription>,
    frame: FrameLoop,
}

impl CursorHandle {
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for CursorHandle {
    fn drop(&mut self) {
        self.subscriptions.clear();
        self.frame.stop();
        log::info!("cursor unmounted");
    }
}

pub fn mount_cursor(
    document: &web::Document,
    params: CursorParams,
) -> anyhow::Result<CursorHandle> {
    let controller = Rc::new(RefCell::new(CursorController::new(params)));
    let renderer = DomRenderer::new(document)?;
    let subscriptions = events::wire_pointer_handlers(document, &controller)?;
    let frame = frame::start_loop(FrameContext {
        controller,
        renderer,
        last_instant: Instant::now(),
    });
    log::info!(
        "cursor mounted (burst={} max_distance={}px lifetime={}ms)",
        params.burst_size,
        params.max_distance_px,
        params.lifetime_ms
    );
    Ok(CursorHandle {
        subscriptions,
        frame,
    })
}
