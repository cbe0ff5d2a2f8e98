use crate::dom::Subscription;
use cursor_core::{CursorController, PointerInput};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Wire pointer move/enter/leave into the controller. Listeners stay active
/// for as long as the returned subscriptions are alive.
pub fn wire_pointer_handlers(
    document: &web::Document,
    controller: &Rc<RefCell<CursorController>>,
) -> anyhow::Result<Vec<Subscription>> {
    let root = document
        .document_element()
        .ok_or_else(|| anyhow::anyhow!("document has no root element"))?;
    Ok(vec![
        wire_pointer(document, "pointermove", controller, |ev| {
            PointerInput::moved(ev.client_x() as f32, ev.client_y() as f32)
        })?,
        wire_pointer(&root, "pointerenter", controller, |_| PointerInput::Entered)?,
        wire_pointer(&root, "pointerleave", controller, |_| PointerInput::Left)?,
    ])
}

fn wire_pointer(
    target: &web::EventTarget,
    event: &'static str,
    controller: &Rc<RefCell<CursorController>>,
    to_input: impl Fn(&web::PointerEvent) -> PointerInput + 'static,
) -> anyhow::Result<Subscription> {
    let controller = controller.clone();
    Subscription::listen(target, event, move |ev: web::PointerEvent| {
        let input = to_input(&ev);
        let applied = controller
            .borrow_mut()
            .handle_pointer(&ev.pointer_type(), input);
        if applied && !matches!(input, PointerInput::Moved(_)) {
            log::debug!("[pointer] {}", event);
        }
    })
}
