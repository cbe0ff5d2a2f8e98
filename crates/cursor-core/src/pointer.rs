use glam::Vec2;

/// Latest pointer sample plus the position recorded at the previous tick.
///
/// `current` follows every move event; `previous` only advances when the
/// simulator commits a tick, so `displacement()` measures travel between
/// frames rather than between events.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub current: Vec2,
    pub previous: Vec2,
    pub heading_degrees: f32,
    pub visible: bool,
}

/// A pointer event as delivered by the host, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Moved(Vec2),
    Entered,
    Left,
}

impl PointerInput {
    #[inline]
    pub fn moved(x: f32, y: f32) -> Self {
        PointerInput::Moved(Vec2::new(x, y))
    }
}

/// Whether events from a pointer of this type drive the cursor. Touch has no
/// hover pointer; some engines report an empty type for synthetic mouse events.
#[inline]
pub fn drives_cursor(pointer_type: &str) -> bool {
    matches!(pointer_type, "" | "mouse" | "pen")
}

#[derive(Clone, Debug)]
pub struct PointerTracker {
    state: PointerState,
    noise_px: f32,
    heading_offset_deg: f32,
}

impl PointerTracker {
    pub fn new(noise_px: f32, heading_offset_deg: f32) -> Self {
        Self {
            state: PointerState::default(),
            noise_px,
            heading_offset_deg,
        }
    }

    pub fn on_move(&mut self, to: Vec2) {
        let d = to - self.state.current;
        if d.x.abs() > self.noise_px || d.y.abs() > self.noise_px {
            self.state.heading_degrees = heading_for(d, self.heading_offset_deg);
        }
        self.state.current = to;
    }

    #[inline]
    pub fn on_enter(&mut self) {
        self.state.visible = true;
    }

    #[inline]
    pub fn on_leave(&mut self) {
        self.state.visible = false;
    }

    /// Pointer travel since the last committed tick.
    #[inline]
    pub fn displacement(&self) -> Vec2 {
        self.state.current - self.state.previous
    }

    #[inline]
    pub fn commit_tick(&mut self) {
        self.state.previous = self.state.current;
    }

    #[inline]
    pub fn state(&self) -> &PointerState {
        &self.state
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.state.current
    }

    #[inline]
    pub fn heading_degrees(&self) -> f32 {
        self.state.heading_degrees
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.state.visible
    }
}

/// Angle of travel in degrees, rotated so a glyph drawn pointing up faces `d`.
#[inline]
pub fn heading_for(d: Vec2, offset_deg: f32) -> f32 {
    d.y.atan2(d.x).to_degrees() + offset_deg
}
