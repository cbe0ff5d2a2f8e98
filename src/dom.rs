use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// An event listener that is removed from its target when dropped.
pub struct Subscription {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Subscription {
    /// Listen for `event` on `target`, handing the handler events already cast
    /// to `E`. Events of another type are ignored.
    pub fn listen<E>(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) -> anyhow::Result<Self>
    where
        E: JsCast + 'static,
    {
        let callback = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

pub fn create_html_element(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("<{}> is not an HtmlElement: {:?}", tag, e))
}

/// Add a `<style>` element with `css` to the document head, replacing any
/// previous one with the same id.
pub fn inject_style(
    document: &web::Document,
    id: &str,
    css: &str,
) -> anyhow::Result<web::Element> {
    if let Some(old) = document.get_element_by_id(id) {
        old.remove();
    }
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("document has no <head>"))?;
    let style = document
        .create_element("style")
        .map_err(|e| anyhow::anyhow!("create <style>: {:?}", e))?;
    style.set_id(id);
    style.set_text_content(Some(css));
    head.append_child(&style)
        .map_err(|e| anyhow::anyhow!("append <style>: {:?}", e))?;
    Ok(style)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}
