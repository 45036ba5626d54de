//! Procedural asteroid outlines
//!
//! Shapes are pure functions of their index so the initial field is identical
//! on every run. Splitting rescales the parent outline rather than generating
//! a new one, which keeps fragments recognisably part of their parent.

use glam::Vec2;
use std::f32::consts::TAU;

use super::asteroid::Asteroid;
use crate::consts::{SPLIT_OFFSETS, SPLIT_SCALES, SPLIT_THRESHOLD};
use crate::error::{Result, SimError};

/// Polygon outline relative to its owner's position, plus its bounding radius
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub vertices: Vec<Vec2>,
    pub collision_radius: f32,
}

impl Shape {
    /// Build from raw vertices, deriving the collision radius
    pub fn from_vertices(vertices: Vec<Vec2>) -> Self {
        let collision_radius = collision_radius(&vertices);
        Self {
            vertices,
            collision_radius,
        }
    }

    /// Uniformly scaled copy (radius recomputed, not multiplied)
    pub fn scaled(&self, factor: f32) -> Self {
        Self::from_vertices(self.vertices.iter().map(|&v| v * factor).collect())
    }

    /// Fewer than two vertices: nothing to draw, nothing to hit
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 2
    }
}

/// Largest vertex distance from the origin; zero for degenerate outlines
pub fn collision_radius(vertices: &[Vec2]) -> f32 {
    if vertices.len() < 2 {
        return 0.0;
    }
    vertices
        .iter()
        .map(|v| v.length())
        .fold(0.0_f32, f32::max)
}

/// Generate the outline for asteroid `index`.
///
/// Vertex count is `vertex_base + index % 3`; vertex `v` sits at angle
/// `TAU * v / n` and radius `radius_base * (0.8 + 0.4 * sin(1.3 v + index))`.
pub fn generate_shape(index: u32, vertex_base: u32, radius_base: f32) -> Result<Shape> {
    if !radius_base.is_finite() || radius_base < 0.0 {
        return Err(SimError::InvalidShape {
            radius: radius_base,
        });
    }

    let n = vertex_base + index % 3;
    let vertices = (0..n)
        .map(|v| {
            let angle = v as f32 / n as f32 * TAU;
            let r = radius_base * (0.8 + 0.4 * (v as f32 * 1.3 + index as f32).sin());
            Vec2::new(angle.cos() * r, angle.sin() * r)
        })
        .collect();

    Ok(Shape::from_vertices(vertices))
}

/// Split a destroyed asteroid into two smaller fragments.
///
/// Returns `None` when the parent is below [`SPLIT_THRESHOLD`]; the caller
/// just drops it. Fragments come back with zero velocity and unwrapped
/// positions; the field assigns both.
pub fn split(parent: &Asteroid) -> Option<[Asteroid; 2]> {
    if parent.shape.collision_radius < SPLIT_THRESHOLD {
        return None;
    }

    let child = |slot: usize| Asteroid {
        pos: parent.pos + SPLIT_OFFSETS[slot],
        vel: Vec2::ZERO,
        shape: parent.shape.scaled(SPLIT_SCALES[slot]),
    };

    Some([child(0), child(1)])
}
