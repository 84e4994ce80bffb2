//! CPU tessellation of frame geometry.
//!
//! [`FrameMesh`] implements [`Surface`] by turning circles and lines into
//! a flat triangle batch; [`super::GpuState`] uploads the batch and draws
//! it in a single call.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::render::{Rgba, Surface};

/// Segments per circle. Plenty for the small shapes the backdrop draws.
const CIRCLE_SEGMENTS: u32 = 24;

/// One vertex of the per-frame triangle batch.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// Position in canvas pixels; the shader maps it to clip space.
    pub position: [f32; 2],
    /// Straight-alpha color with 0-1 channels.
    pub color: [f32; 4],
}

/// Per-frame triangle batch in canvas-pixel coordinates.
#[derive(Debug, Default)]
pub struct FrameMesh {
    vertices: Vec<Vertex>,
}

impl FrameMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices accumulated since the last clear.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    fn push_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
        self.vertices.push(Vertex {
            position: a.to_array(),
            color,
        });
        self.vertices.push(Vertex {
            position: b.to_array(),
            color,
        });
        self.vertices.push(Vertex {
            position: c.to_array(),
            color,
        });
    }
}

fn unit_dir(segment: u32) -> Vec2 {
    let angle = segment as f32 / CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
    Vec2::new(angle.cos(), angle.sin())
}

impl Surface for FrameMesh {
    fn clear(&mut self) {
        self.vertices.clear();
    }

    fn fill_circle(&mut self, center: Vec2, diameter: f32, color: Rgba) {
        let radius = diameter * 0.5;
        let color = color.to_linear();
        if radius <= 0.0 || color[3] <= 0.0 {
            return;
        }
        for seg in 0..CIRCLE_SEGMENTS {
            let a = center + unit_dir(seg) * radius;
            let b = center + unit_dir(seg + 1) * radius;
            self.push_triangle(center, a, b, color);
        }
    }

    fn stroke_circle(&mut self, center: Vec2, diameter: f32, color: Rgba, weight: f32) {
        let radius = diameter * 0.5;
        let color = color.to_linear();
        if radius <= 0.0 || weight <= 0.0 || color[3] <= 0.0 {
            return;
        }
        // Annulus centered on the radius.
        let inner = (radius - weight * 0.5).max(0.0);
        let outer = radius + weight * 0.5;
        for seg in 0..CIRCLE_SEGMENTS {
            let d0 = unit_dir(seg);
            let d1 = unit_dir(seg + 1);
            let i0 = center + d0 * inner;
            let i1 = center + d1 * inner;
            let o0 = center + d0 * outer;
            let o1 = center + d1 * outer;
            self.push_triangle(i0, o0, o1, color);
            self.push_triangle(i0, o1, i1, color);
        }
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba, weight: f32) {
        let color = color.to_linear();
        let along = to - from;
        if weight <= 0.0 || color[3] <= 0.0 || along.length_squared() < f32::EPSILON {
            return;
        }
        let normal = along.normalize().perp() * (weight * 0.5);
        self.push_triangle(from - normal, from + normal, to - normal, color);
        self.push_triangle(from + normal, to + normal, to - normal, color);
    }
}
