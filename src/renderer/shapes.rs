//! Geometry generation for the external rasterizer
//!
//! Outlines (ship, asteroids) become line lists; stars, sparks, trails and
//! the flash overlay become triangle lists.

use glam::Vec2;
use std::f32::consts::TAU;

use super::snapshot::{RenderSnapshot, ShootingStarView};
use super::vertex::{Vertex, colors, with_alpha};

/// Segments used for star and spark discs
const DISC_SEGMENTS: usize = 6;
/// Half-width of a shooting star trail at its head
const TRAIL_HEAD_WIDTH: f32 = 1.5;

/// Vertex buffers for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameGeometry {
    /// Color to clear the target with before drawing
    pub clear_color: [f32; 4],
    /// Pairs of vertices, one segment each
    pub lines: Vec<Vertex>,
    /// Triples of vertices, one triangle each
    pub triangles: Vec<Vertex>,
}

/// Closed outline as a line list. Fewer than two points draws nothing.
pub fn polygon_outline(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity(points.len() * 2);
    for (i, p1) in points.iter().enumerate() {
        let p2 = points[(i + 1) % points.len()];
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }
    vertices
}

/// Filled hexagonal disc for a star or spark; `size` is the diameter
pub fn disc(center: Vec2, size: f32, color: [f32; 4]) -> Vec<Vertex> {
    let radius = size * 0.5;
    let rim: [Vec2; DISC_SEGMENTS] = std::array::from_fn(|i| {
        let angle = i as f32 / DISC_SEGMENTS as f32 * TAU;
        center + Vec2::new(angle.cos(), angle.sin()) * radius
    });

    let mut vertices = Vec::with_capacity(DISC_SEGMENTS * 3);
    for (i, &p1) in rim.iter().enumerate() {
        let p2 = rim[(i + 1) % DISC_SEGMENTS];
        vertices.extend([center, p1, p2].map(|p| Vertex::new(p.x, p.y, color)));
    }
    vertices
}

/// Tapered, fading quad strip along a shooting star's trail samples
pub fn shooting_star_trail(star: &ShootingStarView) -> Vec<Vertex> {
    let trail = &star.trail;
    if trail.len() < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((trail.len() - 1) * 6);
    let last = (trail.len() - 1) as f32;

    for i in 0..trail.len() - 1 {
        let p1 = trail[i];
        let p2 = trail[i + 1];

        // Fade alpha and width toward the tail
        let t1 = i as f32 / last;
        let t2 = (i + 1) as f32 / last;

        let color1 = with_alpha(colors::SHOOTING_STAR, star.alpha * (1.0 - t1));
        let color2 = with_alpha(colors::SHOOTING_STAR, star.alpha * (1.0 - t2));

        let width1 = TRAIL_HEAD_WIDTH * (1.0 - t1 * 0.8);
        let width2 = TRAIL_HEAD_WIDTH * (1.0 - t2 * 0.8);

        let dir = (p2 - p1).normalize_or_zero();
        let perp = Vec2::new(-dir.y, dir.x);

        let v1a = p1 + perp * width1;
        let v1b = p1 - perp * width1;
        let v2a = p2 + perp * width2;
        let v2b = p2 - perp * width2;

        // Two triangles
        vertices.push(Vertex::new(v1a.x, v1a.y, color1));
        vertices.push(Vertex::new(v1b.x, v1b.y, color1));
        vertices.push(Vertex::new(v2a.x, v2a.y, color2));

        vertices.push(Vertex::new(v2a.x, v2a.y, color2));
        vertices.push(Vertex::new(v1b.x, v1b.y, color1));
        vertices.push(Vertex::new(v2b.x, v2b.y, color2));
    }

    vertices
}

/// Full-field quad tinted by the collision flash
pub fn flash_overlay(size: Vec2, intensity: f32) -> Vec<Vertex> {
    if intensity <= 0.0 {
        return Vec::new();
    }
    let color = with_alpha(colors::FLASH, intensity);
    let (w, h) = (size.x, size.y);
    vec![
        Vertex::new(0.0, 0.0, color),
        Vertex::new(w, 0.0, color),
        Vertex::new(0.0, h, color),
        Vertex::new(0.0, h, color),
        Vertex::new(w, 0.0, color),
        Vertex::new(w, h, color),
    ]
}

impl FrameGeometry {
    /// Build back-to-front: stars, effects, asteroids, ship, flash
    pub fn build(snapshot: &RenderSnapshot) -> Self {
        let mut geometry = Self {
            clear_color: colors::BACKGROUND,
            ..Self::default()
        };

        for star in &snapshot.stars {
            geometry.triangles.extend(disc(
                star.pos,
                star.size,
                with_alpha(colors::STAR, star.alpha),
            ));
        }

        for spark in &snapshot.sparks {
            geometry.triangles.extend(disc(
                spark.pos,
                spark.size,
                with_alpha(colors::SPARK, spark.alpha),
            ));
        }

        for star in &snapshot.shooting_stars {
            geometry.triangles.extend(shooting_star_trail(star));
        }

        for poly in &snapshot.asteroids {
            geometry
                .lines
                .extend(polygon_outline(poly, colors::ASTEROID));
        }

        geometry
            .lines
            .extend(polygon_outline(&snapshot.ship, colors::SHIP));

        geometry
            .triangles
            .extend(flash_overlay(snapshot.field_size, snapshot.flash));

        geometry
    }
}
