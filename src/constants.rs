/// DOM wiring constants for the web frontend.
///
/// Element ids, class names and the injected stylesheet live here so the
/// markup in `index.html` and the renderer agree on a single set of names.
// Element ids
pub const CURSOR_LAYER_ID: &str = "cursor-layer";
pub const CURSOR_STYLE_ID: &str = "cursor-style";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

// Class names
pub const GLYPH_CLASS: &str = "cursor-glyph";
pub const PARTICLE_CLASS: &str = "cursor-particle";
pub const DARK_CLASS: &str = "dark";

// Media query used when no theme has been stored yet
pub const DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

// Particle nodes created up front; the pool grows on demand
pub const PARTICLE_POOL_INITIAL: usize = 32;

pub const GLYPH_MARKUP: &str = concat!(
    "<span class=\"cursor-glyph-head\"></span>",
    "<span class=\"cursor-glyph-body\">",
    "<span class=\"cursor-glyph-window\"></span>",
    "</span>",
    "<span class=\"cursor-glyph-flame\"></span>",
);

pub const CURSOR_CSS: &str = r#"
body, a, button, [role="button"] { cursor: none; }
#cursor-layer {
  position: fixed; inset: 0; pointer-events: none; z-index: 50; overflow: hidden;
}
.cursor-particle {
  position: absolute; left: 0; top: 0; border-radius: 9999px; filter: blur(1px);
  background: linear-gradient(to bottom, rgba(96,165,250,0.3), rgba(168,85,247,0.3));
  transition: opacity 0.1s ease-out; will-change: transform, opacity;
}
.dark .cursor-particle {
  background: linear-gradient(to bottom, rgba(147,197,253,0.3), rgba(192,132,252,0.3));
}
.cursor-glyph {
  position: absolute; left: 0; top: 0; width: 8px; height: 12px;
  will-change: transform, opacity;
}
.cursor-glyph-head {
  position: absolute; top: 0; left: 50%; transform: translateX(-50%); width: 0; height: 0;
  border-left: 4px solid transparent; border-right: 4px solid transparent;
  border-bottom: 6px solid #d1d5db;
}
.cursor-glyph-body {
  position: absolute; top: 4px; left: 0; right: 0; bottom: 0; border-radius: 0 0 9999px 9999px;
  background: linear-gradient(to bottom right, #f3f4f6, #d1d5db, #9ca3af);
}
.cursor-glyph-window {
  position: absolute; top: 4px; left: 50%; width: 2px; height: 2px; transform: translateX(-50%);
  border-radius: 9999px; background: linear-gradient(to bottom right, #bfdbfe, #60a5fa);
}
.cursor-glyph-flame {
  position: absolute; bottom: -2px; left: 50%; width: 4px; height: 4px; transform: translateX(-50%);
  border-radius: 0 0 9999px 9999px; opacity: 0.75;
  background: linear-gradient(to top, #3b82f6, #60a5fa, transparent);
  animation: cursor-flame 2s ease-in-out infinite;
}
@keyframes cursor-flame { 0%, 100% { opacity: 0.6; } 50% { opacity: 0.8; } }
"#;

