//! Ship-vs-asteroid collision
//!
//! Both bodies are approximated as circles: the ship by a fixed radius, each
//! asteroid by its collision radius. At most one hit is resolved per frame.

use glam::Vec2;

use super::asteroid::AsteroidField;
use super::ship::Ship;
use super::state::FieldBounds;
use crate::consts::{FLASH_DURATION, SHIP_RADIUS};

/// What happened when the ship hit something
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEvent {
    /// How long the screen flash should last (seconds)
    pub flash_duration: f32,
    /// Index the asteroid had before it was removed
    pub asteroid_index: usize,
    /// Where the asteroid was when it was hit
    pub position: Vec2,
    /// Collision radius of the destroyed asteroid
    pub radius: f32,
    /// Fragments appended to the field (0 or 2)
    pub fragments: usize,
}

/// Overlap test without a square root
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a.distance_squared(b) <= reach * reach
}

/// Test the ship against every asteroid, newest first, and resolve the first hit.
///
/// On a hit the asteroid is removed (and split if large enough) and the ship
/// goes back to the center. With no hit neither argument is touched.
pub fn resolve(
    ship: &mut Ship,
    field: &mut AsteroidField,
    bounds: &FieldBounds,
) -> Option<CollisionEvent> {
    let hit = (0..field.len()).rev().find(|&i| {
        field
            .get(i)
            .is_some_and(|a| circles_overlap(ship.pos, SHIP_RADIUS, a.pos, a.collision_radius()))
    })?;

    // find() only yields valid indices
    let (position, radius) = field
        .get(hit)
        .map(|a| (a.pos, a.collision_radius()))
        .unwrap_or_default();

    let fragments = field.remove_and_split(hit, bounds);
    ship.reset_to_center(bounds);

    log::info!(
        "Ship hit asteroid {} (r={:.1}) at ({:.0}, {:.0}), {} fragments",
        hit,
        radius,
        position.x,
        position.y,
        fragments
    );

    Some(CollisionEvent {
        flash_duration: FLASH_DURATION,
        asteroid_index: hit,
        position,
        radius,
        fragments,
    })
}

/// Countdown driving the post-collision screen tint
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlashTimer {
    remaining: f32,
    duration: f32,
}

impl FlashTimer {
    pub fn trigger(&mut self, event: &CollisionEvent) {
        self.remaining = event.flash_duration;
        self.duration = event.flash_duration;
    }

    /// Count down, flooring at zero
    pub fn advance(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    pub fn clear(&mut self) {
        self.remaining = 0.0;
    }

    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// 1.0 right after a hit, fading linearly to 0.0
    pub fn intensity(&self) -> f32 {
        if self.duration > 0.0 {
            (self.remaining / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
