//! Viewport-derived simulation parameters.
//!
//! Density and interaction ranges scale with the hosting viewport so the
//! backdrop stays sparse on phone-sized windows and fills out on desktop
//! displays. The derivation is pure: one [`Viewport`] in, one [`SimConfig`]
//! out, recomputed from scratch whenever the viewport changes.

use glam::Vec2;

/// Viewports narrower than this are treated as "narrow" (phone-sized):
/// fewer connections per neuron, smaller cores, slower drift.
pub const NARROW_BREAKPOINT: f32 = 768.0;

/// Neurons per square pixel of viewport area.
const BASE_DENSITY: f32 = 0.00004;

/// A drawing area measured in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Total area in square pixels.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Whether this viewport is phone-sized.
    #[inline]
    pub fn is_narrow(&self) -> bool {
        self.width < NARROW_BREAKPOINT
    }

    /// Whether a point lies inside `[0, width] x [0, height]`.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    /// Clamp a point into the viewport bounds.
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(0.0, self.width),
            point.y.clamp(0.0, self.height),
        )
    }
}

/// Simulation parameters derived from the viewport.
///
/// Immutable for the lifetime of one simulation generation;
/// [`crate::simulation::Simulation::resize`] recomputes a fresh config and
/// respawns the whole neuron batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConfig {
    /// Number of neurons, floored at 10 so tiny viewports keep a graph.
    pub neuron_count: usize,
    /// Radius around the pointer within which neurons activate. Doubles as
    /// the base length scale for edge rendering.
    pub activation_distance: f32,
    /// Per-neuron cap on rendered connections.
    pub max_connections: usize,
}

impl SimConfig {
    /// Derive parameters from viewport dimensions.
    pub fn recompute(viewport: Viewport) -> Self {
        Self {
            neuron_count: (viewport.area() * BASE_DENSITY).floor().max(10.0) as usize,
            activation_distance: (viewport.width / 10.0).clamp(80.0, 150.0),
            max_connections: if viewport.is_narrow() { 3 } else { 5 },
        }
    }

    /// Maximum distance at which an edge is still rendered.
    #[inline]
    pub fn reach(&self) -> f32 {
        self.activation_distance * 1.8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neuron_count_scales_with_area() {
        let config = SimConfig::recompute(Viewport::new(1920.0, 1080.0));
        assert_eq!(config.neuron_count, 82);
    }

    #[test]
    fn test_neuron_count_floored_on_tiny_viewports() {
        // 320x480 would yield 6 by density alone.
        let config = SimConfig::recompute(Viewport::new(320.0, 480.0));
        assert_eq!(config.neuron_count, 10);

        let config = SimConfig::recompute(Viewport::new(1.0, 1.0));
        assert_eq!(config.neuron_count, 10);
    }

    #[test]
    fn test_activation_distance_clamped() {
        assert_eq!(
            SimConfig::recompute(Viewport::new(400.0, 600.0)).activation_distance,
            80.0
        );
        assert_eq!(
            SimConfig::recompute(Viewport::new(1000.0, 600.0)).activation_distance,
            100.0
        );
        assert_eq!(
            SimConfig::recompute(Viewport::new(2000.0, 600.0)).activation_distance,
            150.0
        );
    }

    #[test]
    fn test_max_connections_by_breakpoint() {
        assert_eq!(
            SimConfig::recompute(Viewport::new(767.0, 600.0)).max_connections,
            3
        );
        assert_eq!(
            SimConfig::recompute(Viewport::new(768.0, 600.0)).max_connections,
            5
        );
    }

    #[test]
    fn test_reach_is_activation_distance_scaled() {
        let config = SimConfig::recompute(Viewport::new(1000.0, 600.0));
        assert!((config.reach() - 180.0).abs() < 0.001);
    }

    #[test]
    fn test_viewport_clamp_and_contains() {
        let viewport = Viewport::new(800.0, 600.0);
        assert!(viewport.contains(Vec2::new(0.0, 0.0)));
        assert!(viewport.contains(Vec2::new(800.0, 600.0)));
        assert!(!viewport.contains(Vec2::new(-0.1, 10.0)));

        let clamped = viewport.clamp(Vec2::new(-5.0, 700.0));
        assert_eq!(clamped, Vec2::new(0.0, 600.0));
    }
}
