use crate::params::CursorParams;
use crate::particles::ParticleSystem;
use crate::pointer::{drives_cursor, PointerInput, PointerTracker};
use crate::view::{CursorView, GlyphView, ParticleView};
use glam::Vec2;
use std::time::Duration;

/// Linear opacity ramp toward 1 while the pointer is inside the viewport and
/// toward 0 after it leaves.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlyphFade {
    pub opacity: f32,
}

impl GlyphFade {
    pub fn advance(&mut self, visible: bool, elapsed: Duration, fade_ms: f32) {
        let target = if visible { 1.0 } else { 0.0 };
        if fade_ms <= 0.0 {
            self.opacity = target;
            return;
        }
        let step = elapsed.as_secs_f32() * 1000.0 / fade_ms;
        self.opacity = if self.opacity < target {
            (self.opacity + step).min(target)
        } else {
            (self.opacity - step).max(target)
        };
    }
}

/// Owns all cursor state: pointer, trail particles and glyph fade.
pub struct CursorController {
    params: CursorParams,
    pointer: PointerTracker,
    particles: ParticleSystem,
    glyph: GlyphFade,
}

impl Default for CursorController {
    fn default() -> Self {
        Self::new(CursorParams::default())
    }
}

impl CursorController {
    pub fn new(params: CursorParams) -> Self {
        Self {
            params,
            pointer: PointerTracker::new(params.heading_noise_px, params.heading_offset_deg),
            particles: ParticleSystem::new(params),
            glyph: GlyphFade::default(),
        }
    }

    /// Route a host pointer event, ignoring pointer types that do not drive
    /// the cursor. Returns whether the event was applied.
    pub fn handle_pointer(&mut self, pointer_type: &str, input: PointerInput) -> bool {
        if !drives_cursor(pointer_type) {
            return false;
        }
        match input {
            PointerInput::Moved(p) => self.pointer.on_move(p),
            PointerInput::Entered => self.pointer_entered(),
            PointerInput::Left => self.pointer_left(),
        }
        true
    }

    #[inline]
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.on_move(Vec2::new(x, y));
    }

    #[inline]
    pub fn pointer_entered(&mut self) {
        self.pointer.on_enter();
    }

    #[inline]
    pub fn pointer_left(&mut self) {
        self.pointer.on_leave();
    }

    /// One simulation step. Runs whether or not the glyph is visible so the
    /// trail finishes fading after the pointer leaves.
    pub fn tick(&mut self, elapsed: Duration) {
        self.particles.step(elapsed);
        self.particles
            .emit(self.pointer.position(), self.pointer.displacement());
        self.pointer.commit_tick();
        self.glyph
            .advance(self.pointer.is_visible(), elapsed, self.params.glyph_fade_ms);
    }

    pub fn view(&self) -> CursorView {
        let state = self.pointer.state();
        CursorView {
            glyph: GlyphView {
                position: state.current,
                rotation_degrees: state.heading_degrees,
                opacity: self.glyph.opacity,
                visible: self.glyph.opacity > 0.0,
            },
            particles: self
                .particles
                .particles()
                .iter()
                .map(ParticleView::from)
                .collect(),
        }
    }

    #[inline]
    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    #[inline]
    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    #[inline]
    pub fn glyph_opacity(&self) -> f32 {
        self.glyph.opacity
    }

    #[inline]
    pub fn params(&self) -> &CursorParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_is_linear_and_clamped() {
        let mut f = GlyphFade::default();
        f.advance(true, Duration::from_millis(150), 300.0);
        assert!((f.opacity - 0.5).abs() < 1e-4);
        f.advance(true, Duration::from_millis(400), 300.0);
        assert_eq!(f.opacity, 1.0);
        f.advance(false, Duration::from_millis(1000), 300.0);
        assert_eq!(f.opacity, 0.0);
    }

    #[test]
    fn zero_fade_duration_snaps() {
        let mut f = GlyphFade::default();
        f.advance(true, Duration::ZERO, 0.0);
        assert_eq!(f.opacity, 1.0);
    }
}
