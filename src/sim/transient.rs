//! Short-lived visual events: sparks and shooting stars
//!
//! Spawning is a per-frame Bernoulli draw with probability `rate * dt`, an
//! approximation of a Poisson process that only holds for small `dt`. Callers
//! clamp `dt` before it gets here. The generator is time-seeded so the effects
//! differ from run to run.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::FieldBounds;
use crate::consts::{SHOOTING_STAR_RATE, SPARK_RATE};

pub const TRAIL_SAMPLE_COUNT: usize = 5;
/// Backward trail sample positions, as fractions of the trail length
pub const TRAIL_SAMPLES: [f32; TRAIL_SAMPLE_COUNT] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Chance a shooting star enters from the upper left rather than the upper right
const LEFT_ENTRY_BIAS: f64 = 0.65;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spark {
    pub pos: Vec2,
    pub age: f32,
    pub lifetime: f32,
    pub size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShootingStar {
    pub pos: Vec2,
    pub vel: Vec2,
    pub age: f32,
    pub lifetime: f32,
    pub trail_length: f32,
}

/// Linear fade: 1.0 at birth, 0.0 at end of life
#[inline]
pub fn fade(age: f32, lifetime: f32) -> f32 {
    if lifetime <= 0.0 {
        return 0.0;
    }
    (1.0 - age / lifetime).clamp(0.0, 1.0)
}

impl Spark {
    #[inline]
    pub fn alpha(&self) -> f32 {
        fade(self.age, self.lifetime)
    }
}

impl ShootingStar {
    #[inline]
    pub fn alpha(&self) -> f32 {
        fade(self.age, self.lifetime)
    }

    /// Trail points from the head backward along the velocity direction
    pub fn trail_points(&self) -> [Vec2; TRAIL_SAMPLE_COUNT] {
        let back = -self.vel.normalize_or_zero() * self.trail_length;
        TRAIL_SAMPLES.map(|t| self.pos + back * t)
    }
}

/// Owns and ages every live spark and shooting star
#[derive(Debug, Clone)]
pub struct TransientEvents {
    rng: Pcg32,
    sparks: Vec<Spark>,
    shooting_stars: Vec<ShootingStar>,
}

impl TransientEvents {
    /// Scheduler with a clock-seeded generator
    pub fn from_time() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        log::debug!("Transient events seeded with {}", seed);
        Self::with_rng(Pcg32::seed_from_u64(seed))
    }

    pub fn with_rng(rng: Pcg32) -> Self {
        Self {
            rng,
            sparks: Vec::new(),
            shooting_stars: Vec::new(),
        }
    }

    /// Roll this frame's spawns
    pub fn spawn(&mut self, dt: f32, bounds: &FieldBounds, shooting_stars_enabled: bool) {
        if self.rng.random::<f32>() < SPARK_RATE * dt {
            self.spawn_spark(bounds);
        }
        if shooting_stars_enabled && self.rng.random::<f32>() < SHOOTING_STAR_RATE * dt {
            self.spawn_shooting_star(bounds);
        }
    }

    /// Age everything, move shooting stars, drop the expired
    pub fn advance(&mut self, dt: f32) {
        for spark in &mut self.sparks {
            spark.age += dt;
        }
        for star in &mut self.shooting_stars {
            star.age += dt;
            star.pos += star.vel * dt;
        }
        self.sparks.retain(|s| s.age < s.lifetime);
        self.shooting_stars.retain(|s| s.age < s.lifetime);
    }

    pub fn spawn_spark(&mut self, bounds: &FieldBounds) -> Spark {
        let size = bounds.size();
        let spark = Spark {
            pos: Vec2::new(
                self.rng.random_range(0.0..size.x),
                self.rng.random_range(0.0..size.y),
            ),
            age: 0.0,
            lifetime: self.rng.random_range(0.15..=0.27),
            size: self.rng.random_range(2.0..=5.0),
        };
        log::trace!("Spark at ({:.0}, {:.0})", spark.pos.x, spark.pos.y);
        self.sparks.push(spark);
        spark
    }

    /// Launch a shooting star from above the top edge, heading diagonally down
    pub fn spawn_shooting_star(&mut self, bounds: &FieldBounds) -> ShootingStar {
        let size = bounds.size();
        let from_left = self.rng.random_bool(LEFT_ENTRY_BIAS);

        let x = if from_left {
            self.rng.random_range(-0.1 * size.x..0.5 * size.x)
        } else {
            self.rng.random_range(0.5 * size.x..1.1 * size.x)
        };
        let y = self.rng.random_range(-0.1 * size.y..0.25 * size.y);

        // 20-40 degrees below horizontal
        let angle = self.rng.random_range(20.0_f32..40.0).to_radians();
        let speed = self.rng.random_range(0.6_f32..1.1) * size.x;
        let dir_x = if from_left { 1.0 } else { -1.0 };
        let vel = Vec2::new(angle.cos() * dir_x, angle.sin()) * speed;

        let star = ShootingStar {
            pos: Vec2::new(x, y),
            vel,
            age: 0.0,
            lifetime: self.rng.random_range(0.9..=1.7),
            trail_length: self.rng.random_range(30.0..=90.0),
        };
        log::debug!(
            "Shooting star from the {} at ({:.0}, {:.0})",
            if from_left { "left" } else { "right" },
            star.pos.x,
            star.pos.y
        );
        self.shooting_stars.push(star);
        star
    }

    pub fn clear(&mut self) {
        self.sparks.clear();
        self.shooting_stars.clear();
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn shooting_stars(&self) -> &[ShootingStar] {
        &self.shooting_stars
    }
}
