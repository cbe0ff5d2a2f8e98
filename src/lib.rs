#![cfg(target_arch = "wasm32")]
use cursor_core::CursorParams;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod cursor;
mod dom;
mod events;
mod frame;
mod render;
mod theme;

thread_local! {
    // Page-lifetime handles; dropping either tears down its listeners.
    static CURSOR: RefCell<Option<cursor::CursorHandle>> = RefCell::new(None);
    static THEME_TOGGLE: RefCell<Option<dom::Subscription>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Theme first so the page does not flash the wrong palette.
    let toggle = theme::init_theme(&window, &document)?;
    THEME_TOGGLE.with(|t| *t.borrow_mut() = toggle);

    mount(&document)
}

fn mount(document: &web::Document) -> anyhow::Result<()> {
    unmount_cursor();
    let handle = cursor::mount_cursor(document, CursorParams::default())?;
    CURSOR.with(|c| *c.borrow_mut() = Some(handle));
    Ok(())
}

/// Mount the custom cursor, replacing any cursor already mounted.
#[wasm_bindgen]
pub fn mount_cursor() -> Result<(), JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    mount(&document).map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

/// Remove the custom cursor and restore the native one.
#[wasm_bindgen]
pub fn unmount_cursor() {
    if let Some(handle) = CURSOR.with(|c| c.borrow_mut().take()) {
        handle.unmount();
    }
}
