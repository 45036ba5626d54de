//! Parallax background stars
//!
//! The star set is generated once from a fixed seed and never mutated, so the
//! sky looks the same on every run. Twinkle and parallax are derived at
//! projection time from the star's stored attributes.

use glam::{DVec2, Vec2};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use super::state::FieldBounds;
use crate::wrap_point;

/// Number of distinct star sizes
pub const STAR_SIZE_CLASSES: u8 = 3;

/// A background star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// World-fixed position
    pub pos: Vec2,
    pub size_class: u8,
    /// 0 = far, 1 = near
    pub depth: f32,
    pub twinkle_freq: f32,
    pub twinkle_phase: f32,
    pub twinkle_amp: f32,
}

/// Where and how brightly to draw a star this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedStar {
    pub pos: Vec2,
    pub alpha: f32,
    pub size: f32,
}

impl Star {
    /// Parallax factor: far stars barely move with the camera
    #[inline]
    pub fn parallax(&self) -> f32 {
        1.0 - self.depth
    }

    /// 0..1 twinkle wave at `time`
    #[inline]
    pub fn twinkle(&self, time: f64) -> f32 {
        let angle = (time * self.twinkle_freq as f64 + self.twinkle_phase as f64)
            .rem_euclid(std::f64::consts::TAU);
        0.5 + 0.5 * (angle as f32).sin()
    }

    /// Project onto the screen for a camera offset and time.
    ///
    /// `boost` scales the twinkle amplitude (presets, debug) without touching
    /// the stored star. Offset and time are f64 so long sessions stay smooth.
    pub fn project(
        &self,
        camera_offset: DVec2,
        time: f64,
        boost: f32,
        bounds: &FieldBounds,
    ) -> ProjectedStar {
        let shifted = self.pos.as_dvec2() - camera_offset * self.parallax() as f64;
        let field = bounds.size().as_dvec2();
        let reduced = Vec2::new(
            shifted.x.rem_euclid(field.x) as f32,
            shifted.y.rem_euclid(field.y) as f32,
        );
        // The f32 cast can land exactly on the far edge
        let pos = wrap_point(reduced, bounds.size());

        let amp = (self.twinkle_amp * boost).clamp(0.0, 1.0);
        let base = 0.3 + 0.6 * self.depth;
        let alpha = (base * (1.0 - amp + amp * self.twinkle(time))).clamp(0.0, 1.0);

        let size = (1.0 + self.size_class as f32) * (0.6 + 0.4 * self.depth);

        ProjectedStar { pos, alpha, size }
    }
}

/// Immutable background star set
#[derive(Debug, Clone, PartialEq)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    /// Draw `count` stars from a generator seeded with `seed`
    pub fn generate(count: usize, seed: u64, bounds: &FieldBounds) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let size = bounds.size();

        let stars = (0..count)
            .map(|_| {
                let pos = Vec2::new(
                    rng.random_range(0.0..size.x),
                    rng.random_range(0.0..size.y),
                );
                let size_class = rng.random_range(0..STAR_SIZE_CLASSES);
                // Squared so most stars sit far away
                let depth = rng.random::<f32>().powi(2);
                let twinkle_freq = rng.random_range(0.6..=3.2);
                let twinkle_phase = rng.random_range(0.0..=TAU);
                let twinkle_amp = rng.random_range(0.12_f32..=0.68) * (0.4 + 0.6 * depth);
                Star {
                    pos,
                    size_class,
                    depth,
                    twinkle_freq,
                    twinkle_phase,
                    twinkle_amp,
                }
            })
            .collect();

        log::debug!("Generated {} stars (seed {})", count, seed);
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Project every star for this frame
    pub fn project_all(
        &self,
        camera_offset: DVec2,
        time: f64,
        boost: f32,
        bounds: &FieldBounds,
    ) -> Vec<ProjectedStar> {
        self.stars
            .iter()
            .map(|s| s.project(camera_offset, time, boost, bounds))
            .collect()
    }
}
