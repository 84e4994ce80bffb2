//! Drawing surface abstraction and the frame renderer.
//!
//! The simulation core never touches a window or GPU directly: everything
//! is painted through the [`Surface`] trait. The shipped implementor is
//! [`crate::gpu::FrameMesh`]; tests drive the same code with recording
//! doubles.

use glam::Vec2;

use crate::config::{Viewport, NARROW_BREAKPOINT};
use crate::graph::Edge;
use crate::neuron::Neuron;
use crate::time::RING_PERIOD;
use crate::visuals::Theme;

/// An RGBA color with 0-255 channels.
///
/// Channels are floats because the oscillation math produces fractional
/// alphas; [`Rgba::to_linear`] clamps on the way out, which also absorbs
/// shimmer pushing an alpha past 255.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Clamped 0-1 channels for the GPU layer.
    pub fn to_linear(self) -> [f32; 4] {
        [
            (self.r / 255.0).clamp(0.0, 1.0),
            (self.g / 255.0).clamp(0.0, 1.0),
            (self.b / 255.0).clamp(0.0, 1.0),
            (self.a / 255.0).clamp(0.0, 1.0),
        ]
    }
}

/// Minimal drawing surface the renderer needs.
///
/// Circle sizes are diameters, matching how neuron sizes are specified.
/// Implementors are free to drop primitives with non-positive size,
/// weight, or alpha.
pub trait Surface {
    /// Discard everything drawn so far this frame.
    fn clear(&mut self);
    /// Filled circle.
    fn fill_circle(&mut self, center: Vec2, diameter: f32, color: Rgba);
    /// Circle outline of the given stroke weight.
    fn stroke_circle(&mut self, center: Vec2, diameter: f32, color: Rgba, weight: f32);
    /// Line segment of the given stroke weight.
    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba, weight: f32);
}

/// Paints one frame of the backdrop.
///
/// Draw order matters: edges first, neurons on top so cores occlude edge
/// endpoints, the pointer ring last as the topmost decorative layer.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    pub theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Draw every edge as a single line segment.
    pub fn draw_edges<S: Surface>(&self, surface: &mut S, neurons: &[Neuron], edges: &[Edge]) {
        for edge in edges {
            surface.line(
                neurons[edge.source].position,
                neurons[edge.target].position,
                self.theme.edge.with_alpha(edge.alpha),
                edge.width,
            );
        }
    }

    /// Draw every neuron in batch order.
    pub fn draw_neurons<S: Surface>(
        &self,
        surface: &mut S,
        neurons: &[Neuron],
        frame: u64,
        viewport: Viewport,
    ) {
        for neuron in neurons {
            neuron.render(surface, &self.theme, frame, viewport);
        }
    }

    /// Expanding ring around the pointer; desktop viewports only.
    pub fn draw_pointer_pulse<S: Surface>(
        &self,
        surface: &mut S,
        pointer: Vec2,
        frame: u64,
        viewport: Viewport,
    ) {
        if viewport.width <= NARROW_BREAKPOINT {
            return;
        }
        let narrow = viewport.is_narrow();
        let radius = (frame % RING_PERIOD) as f32 * if narrow { 3.0 } else { 4.0 };
        let alpha = if narrow { 40.0 } else { 70.0 };
        let weight = if narrow { 1.0 } else { 1.5 };
        surface.stroke_circle(
            pointer,
            radius * 2.0,
            self.theme.ring.with_alpha(alpha),
            weight,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::graph::build_edges;

    /// Records draw calls in order for asserting on sequencing.
    #[derive(Default)]
    struct Recording {
        calls: Vec<String>,
    }

    impl Surface for Recording {
        fn clear(&mut self) {
            self.calls.clear();
        }
        fn fill_circle(&mut self, _: Vec2, _: f32, _: Rgba) {
            self.calls.push("fill".into());
        }
        fn stroke_circle(&mut self, _: Vec2, _: f32, _: Rgba, _: f32) {
            self.calls.push("stroke".into());
        }
        fn line(&mut self, _: Vec2, _: Vec2, _: Rgba, _: f32) {
            self.calls.push("line".into());
        }
    }

    fn two_close_neurons() -> Vec<Neuron> {
        vec![
            Neuron {
                position: Vec2::new(100.0, 100.0),
                pulse: 0.0,
                hue: 35,
                target_size: 8.0,
            },
            Neuron {
                position: Vec2::new(120.0, 100.0),
                pulse: 0.0,
                hue: 35,
                target_size: 8.0,
            },
        ]
    }

    #[test]
    fn test_rgba_to_linear_clamps() {
        let hot = Rgba::new(255.0, 140.0, 0.0, 300.0);
        let linear = hot.to_linear();
        assert_eq!(linear[3], 1.0);
        assert!((linear[1] - 140.0 / 255.0).abs() < 1e-6);

        let negative = Rgba::new(-5.0, 0.0, 0.0, 0.0);
        assert_eq!(negative.to_linear()[0], 0.0);
    }

    #[test]
    fn test_edges_drawn_before_neurons() {
        let viewport = Viewport::new(1000.0, 800.0);
        let config = SimConfig::recompute(viewport);
        let neurons = two_close_neurons();
        let edges = build_edges(&neurons, &config, viewport, 0);
        assert_eq!(edges.len(), 1);

        let renderer = Renderer::default();
        let mut surface = Recording::default();
        renderer.draw_edges(&mut surface, &neurons, &edges);
        renderer.draw_neurons(&mut surface, &neurons, 0, viewport);

        assert_eq!(surface.calls[0], "line");
        // Each neuron paints glow fill, core fill, core stroke.
        assert_eq!(
            &surface.calls[1..],
            &["fill", "fill", "stroke", "fill", "fill", "stroke"]
        );
    }

    #[test]
    fn test_pointer_pulse_skipped_on_narrow_viewports() {
        let renderer = Renderer::default();
        let mut surface = Recording::default();

        renderer.draw_pointer_pulse(&mut surface, Vec2::ZERO, 60, Viewport::new(480.0, 800.0));
        assert!(surface.calls.is_empty());

        // Exactly at the breakpoint still counts as not-wide-enough.
        renderer.draw_pointer_pulse(&mut surface, Vec2::ZERO, 60, Viewport::new(768.0, 800.0));
        assert!(surface.calls.is_empty());

        renderer.draw_pointer_pulse(&mut surface, Vec2::ZERO, 60, Viewport::new(1024.0, 800.0));
        assert_eq!(surface.calls, vec!["stroke"]);
    }

    #[test]
    fn test_ring_radius_wraps() {
        /// Captures the ring diameter.
        #[derive(Default)]
        struct RingProbe {
            diameter: Option<f32>,
        }
        impl Surface for RingProbe {
            fn clear(&mut self) {}
            fn fill_circle(&mut self, _: Vec2, _: f32, _: Rgba) {}
            fn stroke_circle(&mut self, _: Vec2, diameter: f32, _: Rgba, _: f32) {
                self.diameter = Some(diameter);
            }
            fn line(&mut self, _: Vec2, _: Vec2, _: Rgba, _: f32) {}
        }

        let renderer = Renderer::default();
        let viewport = Viewport::new(1024.0, 800.0);

        let mut probe = RingProbe::default();
        renderer.draw_pointer_pulse(&mut probe, Vec2::ZERO, 30, viewport);
        assert_eq!(probe.diameter, Some(30.0 * 4.0 * 2.0));

        // Frame 120 wraps back to a zero-radius ring.
        let mut probe = RingProbe::default();
        renderer.draw_pointer_pulse(&mut probe, Vec2::ZERO, 120, viewport);
        assert_eq!(probe.diameter, Some(0.0));
    }
}
