//! Render snapshot of the cursor.
//!
//! These types avoid referencing platform-specific APIs. The web frontend
//! maps them one-to-one onto positioned DOM nodes each frame.

use crate::particles::{Particle, ParticleId};
use glam::Vec2;

/// The pointer glyph. `visible` is false once the fade-out has completed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlyphView {
    pub position: Vec2,
    pub rotation_degrees: f32,
    pub opacity: f32,
    pub visible: bool,
}

/// A trail particle drawn as a circle of diameter `size` centred on `position`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleView {
    pub id: ParticleId,
    pub position: Vec2,
    pub size: f32,
    pub opacity: f32,
}

impl From<&Particle> for ParticleView {
    fn from(p: &Particle) -> Self {
        Self {
            id: p.id,
            position: p.position,
            size: p.scale.max(0.0),
            opacity: p.alpha.clamp(0.0, 1.0),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CursorView {
    pub glyph: GlyphView,
    pub particles: Vec<ParticleView>,
}

/// CSS transform placing an element's centre on `position` and rotating it.
#[inline]
pub fn centered_transform(position: Vec2, rotation_degrees: f32) -> String {
    format!(
        "translate({:.2}px, {:.2}px) translate(-50%, -50%) rotate({:.2}deg)",
        position.x, position.y, rotation_degrees
    )
}
