//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Bytes between consecutive vertices in an upload buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
    /// Byte offset of `color` within a vertex
    pub const COLOR_OFFSET: usize = std::mem::size_of::<[f32; 2]>();

    /// Raw bytes for a GPU/rasterizer upload
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Scale a color's alpha channel
#[inline]
pub fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], color[3] * alpha.clamp(0.0, 1.0)]
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [8.0 / 255.0, 8.0 / 255.0, 20.0 / 255.0, 1.0];
    pub const ASTEROID: [f32; 4] = [180.0 / 255.0, 180.0 / 255.0, 160.0 / 255.0, 1.0];
    pub const SHIP: [f32; 4] = [220.0 / 255.0, 220.0 / 255.0, 1.0, 1.0];
    pub const STAR: [f32; 4] = [0.9, 0.92, 1.0, 1.0];
    pub const SPARK: [f32; 4] = [1.0, 0.85, 0.5, 1.0];
    pub const SHOOTING_STAR: [f32; 4] = [0.85, 0.95, 1.0, 1.0];
    pub const FLASH: [f32; 4] = [1.0, 0.35, 0.25, 0.5];
}
