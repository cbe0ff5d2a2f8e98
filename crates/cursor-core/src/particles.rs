//! Trail particles: spawned in bursts behind a moving pointer, drifting away
//! from their spawn point while fading and shrinking.
//!
//! The live set is a single `Vec` mutated in place each tick. Identifiers come
//! from a monotonically increasing counter and removal preserves order, so the
//! vector stays sorted by id and lookups are a binary search.

use crate::params::CursorParams;
use glam::Vec2;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticleId(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    pub position: Vec2,
    pub origin: Vec2,
    pub velocity: Vec2,
    pub alpha: f32,
    pub scale: f32,
    pub initial_scale: f32,
    pub distance_traveled: f32,
}

impl Particle {
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.alpha <= 0.0
    }
}

/// Ids spawned by one `emit` call, in ascending order.
pub type Burst = SmallVec<[ParticleId; crate::constants::BURST_SIZE]>;

pub struct ParticleSystem {
    params: CursorParams,
    particles: Vec<Particle>,
    next_id: u64,
}

impl ParticleSystem {
    pub fn new(params: CursorParams) -> Self {
        Self {
            params,
            particles: Vec::new(),
            next_id: 0,
        }
    }

    /// Advance every live particle by one tick and drop the expired ones.
    pub fn step(&mut self, elapsed: Duration) {
        let decay = self.params.alpha_decay(elapsed);
        let max_distance = self.params.max_distance_px;
        let step_multiplier = self.params.step_multiplier;

        for p in self.particles.iter_mut() {
            let candidate = p.position + p.velocity * step_multiplier;
            let distance = candidate.distance(p.origin);
            if distance >= max_distance {
                p.alpha = 0.0;
                p.distance_traveled = max_distance;
                continue;
            }
            p.position = candidate;
            p.scale = (p.initial_scale * (1.0 - distance / max_distance)).max(0.0);
            p.alpha = (p.alpha - decay).max(0.0);
            p.distance_traveled = distance;
        }

        let before = self.particles.len();
        self.particles.retain(|p| !p.is_expired());
        let removed = before - self.particles.len();
        if removed > 0 {
            log::trace!("[particles] removed {} live={}", removed, self.particles.len());
        }
    }

    /// Spawn a burst at `at` trailing opposite to `displacement` when the
    /// pointer moved far enough. Returns the ids of the spawned particles.
    pub fn emit(&mut self, at: Vec2, displacement: Vec2) -> Burst {
        if displacement.length() <= self.params.spawn_threshold_px {
            return Burst::new();
        }
        let velocity = -displacement.normalize_or_zero() * self.params.emission_speed;
        let first = self.next_id;
        self.next_id += self.params.burst_size as u64;
        let (alpha, scale) = (self.params.initial_alpha, self.params.initial_scale_px);
        self.particles.extend((first..self.next_id).map(|id| Particle {
            id: ParticleId(id),
            position: at,
            origin: at,
            velocity,
            alpha,
            scale,
            initial_scale: scale,
            distance_traveled: 0.0,
        }));
        log::trace!("[particles] burst at ({:.1},{:.1})", at.x, at.y);
        (first..self.next_id).map(ParticleId).collect()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles
            .binary_search_by_key(&id, |p| p.id)
            .ok()
            .map(|i| &self.particles[i])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    #[inline]
    pub fn params(&self) -> &CursorParams {
        &self.params
    }
}
