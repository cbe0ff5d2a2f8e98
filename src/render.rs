use crate::constants::{
    CURSOR_CSS, CURSOR_LAYER_ID, CURSOR_STYLE_ID, GLYPH_CLASS, GLYPH_MARKUP, PARTICLE_CLASS,
    PARTICLE_POOL_INITIAL,
};
use crate::dom;
use cursor_core::{centered_transform, CursorView, GlyphView, ParticleView};
use web_sys as web;

/// Draws a `CursorView` as absolutely positioned nodes in a fixed overlay.
///
/// Particle nodes are pooled: the pool only grows, and nodes beyond the live
/// particle count are hidden rather than removed.
pub struct DomRenderer {
    document: web::Document,
    layer: web::HtmlElement,
    glyph: web::HtmlElement,
    pool: Vec<web::HtmlElement>,
    shown: usize,
    style: web::Element,
}

impl DomRenderer {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("document has no <body>"))?;
        if let Some(stale) = document.get_element_by_id(CURSOR_LAYER_ID) {
            stale.remove();
        }
        let style = dom::inject_style(document, CURSOR_STYLE_ID, CURSOR_CSS)?;

        let layer = dom::create_html_element(document, "div", "")?;
        layer.set_id(CURSOR_LAYER_ID);
        _ = layer.set_attribute("aria-hidden", "true");

        let glyph = dom::create_html_element(document, "div", GLYPH_CLASS)?;
        glyph.set_inner_html(GLYPH_MARKUP);
        dom::set_style(&glyph, "opacity", "0");
        dom::set_style(&glyph, "display", "none");

        body.append_child(&layer)
            .map_err(|e| anyhow::anyhow!("append cursor layer: {:?}", e))?;

        let mut renderer = Self {
            document: document.clone(),
            layer,
            glyph,
            pool: Vec::with_capacity(PARTICLE_POOL_INITIAL),
            shown: 0,
            style,
        };
        renderer.grow_pool(PARTICLE_POOL_INITIAL)?;
        // Glyph after the particles so it paints on top of the trail.
        renderer
            .layer
            .append_child(&renderer.glyph)
            .map_err(|e| anyhow::anyhow!("append glyph: {:?}", e))?;
        Ok(renderer)
    }

    pub fn draw(&mut self, view: &CursorView) {
        if view.particles.len() > self.pool.len() {
            if let Err(e) = self.grow_pool(view.particles.len()) {
                log::error!("[render] particle pool: {:?}", e);
            }
        }
        let drawn = view.particles.len().min(self.pool.len());
        for (el, p) in self.pool.iter().zip(&view.particles) {
            draw_particle(el, p);
        }
        for el in &self.pool[drawn..self.shown.max(drawn)] {
            dom::set_style(el, "display", "none");
        }
        self.shown = drawn;
        draw_glyph(&self.glyph, &view.glyph);
    }

    fn grow_pool(&mut self, target: usize) -> anyhow::Result<()> {
        while self.pool.len() < target {
            let el = dom::create_html_element(&self.document, "div", PARTICLE_CLASS)?;
            dom::set_style(&el, "display", "none");
            let inserted = match self.pool.last() {
                Some(prev) => prev.after_with_node_1(&el),
                None => self.layer.prepend_with_node_1(&el),
            };
            inserted.map_err(|e| anyhow::anyhow!("insert particle node: {:?}", e))?;
            self.pool.push(el);
        }
        log::debug!("[render] particle pool size={}", self.pool.len());
        Ok(())
    }
}

impl Drop for DomRenderer {
    fn drop(&mut self) {
        self.layer.remove();
        self.style.remove();
    }
}

fn draw_particle(el: &web::HtmlElement, p: &ParticleView) {
    let size = format!("{:.2}px", p.size);
    dom::set_style(el, "display", "block");
    dom::set_style(el, "width", &size);
    dom::set_style(el, "height", &size);
    dom::set_style(el, "opacity", &format!("{:.3}", p.opacity));
    dom::set_style(el, "transform", &centered_transform(p.position, 0.0));
}

fn draw_glyph(el: &web::HtmlElement, g: &GlyphView) {
    if !g.visible {
        dom::set_style(el, "display", "none");
        return;
    }
    dom::set_style(el, "display", "block");
    dom::set_style(el, "opacity", &format!("{:.3}", g.opacity));
    dom::set_style(
        el,
        "transform",
        &centered_transform(g.position, g.rotation_degrees),
    );
}
