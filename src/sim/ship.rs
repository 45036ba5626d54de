//! Player ship integration

use glam::Vec2;

use super::state::FieldBounds;
use crate::consts::{SHIP_DRAG, SHIP_THRUST_ACCEL, SHIP_TURN_RATE};
use crate::{heading_to_forward, normalize_angle};

/// Per-frame control state for the ship
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShipControls {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
}

/// The player's ship
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub pos: Vec2,
    /// Radians in [-π, π); 0 points up, positive turns clockwise
    pub heading: f32,
    pub vel: Vec2,
}

impl Ship {
    /// Ship at rest in the middle of the field, nose up
    pub fn centered(bounds: &FieldBounds) -> Self {
        Self {
            pos: bounds.center(),
            heading: 0.0,
            vel: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn forward(&self) -> Vec2 {
        heading_to_forward(self.heading)
    }

    /// Turn, thrust, drag, integrate and wrap.
    ///
    /// Drag is a flat per-frame multiplier, so deceleration depends on frame
    /// rate.
    pub fn advance(&mut self, dt: f32, controls: ShipControls, bounds: &FieldBounds) {
        if controls.turn_left {
            self.heading -= SHIP_TURN_RATE * dt;
        }
        if controls.turn_right {
            self.heading += SHIP_TURN_RATE * dt;
        }
        self.heading = normalize_angle(self.heading);

        if controls.thrust {
            self.vel += self.forward() * SHIP_THRUST_ACCEL * dt;
        }

        self.vel *= SHIP_DRAG;

        self.pos = bounds.wrap(self.pos + self.vel * dt);
    }

    /// Back to the field center with no velocity. Heading is kept.
    pub fn reset_to_center(&mut self, bounds: &FieldBounds) {
        self.pos = bounds.center();
        self.vel = Vec2::ZERO;
    }
}
