use crate::constants::{DARK_CLASS, DARK_MEDIA_QUERY, THEME_TOGGLE_ID};
use crate::dom::Subscription;
use cursor_core::{PreferenceStore, Theme, ThemePreference};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// `localStorage`-backed preference store. Storage can be unavailable
/// (private browsing, sandboxed iframes); the toggle still works in-page.
pub struct LocalStore {
    storage: Option<web::Storage>,
}

impl LocalStore {
    pub fn open(window: &web::Window) -> Self {
        let storage = match window.local_storage() {
            Ok(s) => s,
            Err(e) => {
                log::warn!("[theme] localStorage unavailable: {:?}", e);
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) -> bool {
        match &self.storage {
            Some(s) => s.set_item(key, value).is_ok(),
            None => false,
        }
    }
}

pub fn system_prefers_dark(window: &web::Window) -> bool {
    matches!(window.match_media(DARK_MEDIA_QUERY), Ok(Some(mq)) if mq.matches())
}

/// Reflect `theme` on the document element class and the toggle's
/// `aria-checked`.
pub fn apply(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        _ = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
    }
    if let Some(button) = document.get_element_by_id(THEME_TOGGLE_ID) {
        let checked = if theme.is_dark() { "true" } else { "false" };
        _ = button.set_attribute("aria-checked", checked);
    }
}

/// Load the stored theme, apply it and wire the toggle button. Returns the
/// click subscription, or `None` when the page has no toggle.
pub fn init_theme(
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<Option<Subscription>> {
    let pref = ThemePreference::load(LocalStore::open(window), system_prefers_dark(window));
    apply(document, pref.theme());
    log::info!("[theme] initial {}", pref.theme());

    let Some(button) = document.get_element_by_id(THEME_TOGGLE_ID) else {
        return Ok(None);
    };
    let pref = Rc::new(RefCell::new(pref));
    let doc = document.clone();
    let sub = Subscription::listen(&button, "click", move |_ev: web::MouseEvent| {
        let theme = pref.borrow_mut().toggle();
        apply(&doc, theme);
    })?;
    Ok(Some(sub))
}
