//! Starboy - asteroid field arcade core
//!
//! Core modules:
//! - `sim`: Per-frame simulation (ship, asteroids, collisions, stars, transient effects)
//! - `renderer`: Read-only render snapshots and line-list vertex buffers
//! - `settings`: The two persisted player options
//! - `menu`: Pause/options menu navigation

pub mod error;
pub mod menu;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Result, SimError};
pub use menu::{Menu, MenuCommand, MenuItem};
pub use settings::{Settings, TwinklePreset};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Default field dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Largest frame delta handed to any integrator or spawner
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Ship handling
    pub const SHIP_TURN_RATE: f32 = 3.0; // rad/s
    pub const SHIP_THRUST_ACCEL: f32 = 200.0; // px/s²
    /// Velocity multiplier applied once per frame (not scaled by dt)
    pub const SHIP_DRAG: f32 = 0.995;
    /// Circle used for ship-vs-asteroid tests
    pub const SHIP_RADIUS: f32 = 12.0;
    /// Size of the drawn ship triangle
    pub const SHIP_DRAW_RADIUS: f32 = 14.0;

    /// Collision flash overlay duration (seconds)
    pub const FLASH_DURATION: f32 = 0.6;

    /// Asteroid generation
    pub const INITIAL_ASTEROIDS: usize = 6;
    pub const ASTEROID_VERTEX_BASE: u32 = 6;
    pub const ASTEROID_RADIUS_BASE: f32 = 30.0;
    pub const ASTEROID_RADIUS_STEP: f32 = 10.0;
    pub const ASTEROID_GRID_SPACING_X: f32 = 110.0;
    pub const ASTEROID_GRID_TOP: f32 = 80.0;
    pub const ASTEROID_GRID_SPACING_Y: f32 = 160.0;
    /// Initial drift for even / odd asteroid indices
    pub const ASTEROID_DRIFT_EVEN: Vec2 = Vec2::new(18.0, -12.0);
    pub const ASTEROID_DRIFT_ODD: Vec2 = Vec2::new(-14.0, 10.0);

    /// Smallest collision radius that still splits into two children
    pub const SPLIT_THRESHOLD: f32 = 18.0;
    /// Per-slot child shape scale
    pub const SPLIT_SCALES: [f32; 2] = [0.6, 0.5];
    /// Per-slot child offset from the parent position
    pub const SPLIT_OFFSETS: [Vec2; 2] = [Vec2::new(-8.0, -6.0), Vec2::new(8.0, 6.0)];
    /// Per-slot child velocity
    pub const SPLIT_VELOCITIES: [Vec2; 2] = [Vec2::new(-40.0, -24.0), Vec2::new(40.0, 24.0)];

    /// Background stars
    pub const STAR_COUNT: usize = 140;
    pub const STAR_SEED: u64 = 1_234_567;

    /// Transient effect spawn rates (events per second)
    pub const SPARK_RATE: f32 = 0.8;
    pub const SHOOTING_STAR_RATE: f32 = 0.035;
}

/// Wrap `value` into `[low, high)`, preserving it modulo `high - low`.
///
/// Works for inputs any number of periods outside the range.
#[inline]
pub fn wrap(value: f32, low: f32, high: f32) -> f32 {
    let span = high - low;
    if span <= 0.0 || !value.is_finite() {
        return low;
    }
    let wrapped = (value - low).rem_euclid(span) + low;
    // rem_euclid can round up to exactly `span` for tiny negative inputs
    if wrapped >= high { low } else { wrapped }
}

/// Wrap both axes of a point into `[0, size.x) x [0, size.y)`
#[inline]
pub fn wrap_point(point: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(wrap(point.x, 0.0, size.x), wrap(point.y, 0.0, size.y))
}

/// Clamp a raw frame delta into `[0, MAX_FRAME_DT]`
#[inline]
pub fn clamp_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, consts::MAX_FRAME_DT)
    } else {
        0.0
    }
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::PI;
    if (-PI..PI).contains(&angle) {
        angle
    } else {
        wrap(angle, -PI, PI)
    }
}

/// Unit vector for a heading where 0 points up (-Y) and positive turns clockwise
#[inline]
pub fn heading_to_forward(heading: f32) -> Vec2 {
    Vec2::new(heading.sin(), -heading.cos())
}
