// Cursor trail tuning shared by the simulator and the web renderer.

// Emission
pub const BURST_SIZE: usize = 5; // particles spawned per moving tick
pub const SPAWN_THRESHOLD_PX: f32 = 0.5; // min pointer displacement between ticks to emit
pub const EMISSION_SPEED: f32 = 0.5; // velocity magnitude, px per step unit
pub const STEP_MULTIPLIER: f32 = 2.0; // velocity multiples applied per tick

// Particle appearance
pub const INITIAL_ALPHA: f32 = 0.6;
pub const INITIAL_SCALE_PX: f32 = 2.0; // starting diameter

// Lifetime
pub const MAX_DISTANCE_PX: f32 = 20.0; // trail length before forced removal
pub const PARTICLE_LIFETIME_MS: f32 = 300.0; // alpha decays by 1.0 over this span

// Pointer glyph
pub const HEADING_NOISE_PX: f32 = 0.1; // per-axis jitter ignored for heading
pub const HEADING_OFFSET_DEG: f32 = 90.0; // glyph art points up, travel angle is from +x
pub const GLYPH_FADE_MS: f32 = 300.0;

// Theme persistence
pub const THEME_STORAGE_KEY: &str = "theme";

