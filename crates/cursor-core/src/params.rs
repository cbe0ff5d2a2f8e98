use crate::constants::*;
use std::time::Duration;

/// Tuning for the cursor trail. `Default` reproduces the site's look.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorParams {
    pub burst_size: usize,
    pub spawn_threshold_px: f32,
    pub emission_speed: f32,
    pub step_multiplier: f32,
    pub initial_alpha: f32,
    pub initial_scale_px: f32,
    pub max_distance_px: f32,
    pub lifetime_ms: f32,
    pub heading_noise_px: f32,
    pub heading_offset_deg: f32,
    pub glyph_fade_ms: f32,
}

impl Default for CursorParams {
    fn default() -> Self {
        Self {
            burst_size: BURST_SIZE,
            spawn_threshold_px: SPAWN_THRESHOLD_PX,
            emission_speed: EMISSION_SPEED,
            step_multiplier: STEP_MULTIPLIER,
            initial_alpha: INITIAL_ALPHA,
            initial_scale_px: INITIAL_SCALE_PX,
            max_distance_px: MAX_DISTANCE_PX,
            lifetime_ms: PARTICLE_LIFETIME_MS,
            heading_noise_px: HEADING_NOISE_PX,
            heading_offset_deg: HEADING_OFFSET_DEG,
            glyph_fade_ms: GLYPH_FADE_MS,
        }
    }
}

impl CursorParams {
    /// Alpha lost over `elapsed`; a full `lifetime_ms` removes 1.0.
    #[inline]
    pub fn alpha_decay(&self, elapsed: Duration) -> f32 {
        if self.lifetime_ms <= 0.0 {
            return f32::INFINITY;
        }
        elapsed.as_secs_f32() * 1000.0 / self.lifetime_ms
    }

    /// Upper bound on live particles when a burst is emitted every tick.
    pub fn steady_state_bound(&self, tick: Duration) -> usize {
        let tick_ms = tick.as_secs_f32() * 1000.0;
        if tick_ms <= 0.0 {
            return usize::MAX;
        }
        let by_alpha = (self.initial_alpha * self.lifetime_ms / tick_ms).ceil() as usize;
        let step = self.emission_speed * self.step_multiplier;
        let by_distance = if step > 0.0 {
            (self.max_distance_px / step).ceil() as usize
        } else {
            usize::MAX
        };
        by_alpha.min(by_distance).saturating_add(1) * self.burst_size
    }
}
