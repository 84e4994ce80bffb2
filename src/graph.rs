//! Per-frame proximity graph construction.
//!
//! Every neuron searches only forward through the batch (higher indices)
//! for its nearest peers, capped at `max_connections`. That bounds the
//! rendered edge set to O(n * max_connections) per frame without a
//! visited set, while keeping the graph locally dense where neurons
//! cluster.

use crate::config::{SimConfig, Viewport};
use crate::neuron::Neuron;
use crate::time::sin_deg;

/// A rendered connection between two neurons.
///
/// Recomputed every frame, never stored across frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    /// Lower-indexed endpoint.
    pub source: usize,
    /// Higher-indexed endpoint.
    pub target: usize,
    /// Euclidean distance between the endpoints at build time.
    pub distance: f32,
    /// Stroke alpha (0-255 scale) after distance mapping and shimmer.
    pub alpha: f32,
    /// Stroke width in pixels.
    pub width: f32,
}

/// Linear remap of `value` from `[in_start, in_end]` to `[out_start, out_end]`.
///
/// A zero-width input span yields `out_start` instead of dividing by zero.
pub fn map_range(value: f32, in_start: f32, in_end: f32, out_start: f32, out_end: f32) -> f32 {
    let span = in_end - in_start;
    if span.abs() < f32::EPSILON {
        return out_start;
    }
    out_start + (value - in_start) / span * (out_end - out_start)
}

/// Build the edge set for the current frame.
///
/// For each neuron, the `max_connections` nearest higher-indexed neurons
/// are considered, and a pair is kept only when closer than
/// [`SimConfig::reach`]. Alpha fades and width thins with distance, then
/// both shimmer with a frame- and distance-phased pulse.
pub fn build_edges(
    neurons: &[Neuron],
    config: &SimConfig,
    viewport: Viewport,
    frame: u64,
) -> Vec<Edge> {
    let reach = config.reach();
    let narrow = viewport.is_narrow();
    let (width_near, width_far) = if narrow { (0.8, 0.1) } else { (1.0, 0.15) };
    let pulse_speed = if narrow { 0.02 } else { 0.03 };

    let mut edges = Vec::with_capacity(neurons.len() * config.max_connections);
    let mut candidates: Vec<(usize, f32)> = Vec::with_capacity(neurons.len());

    for (i, neuron) in neurons.iter().enumerate() {
        candidates.clear();
        candidates.extend(
            neurons[i + 1..].iter().enumerate().map(|(offset, other)| {
                (i + 1 + offset, neuron.position.distance(other.position))
            }),
        );
        // Stable sort: equidistant candidates keep index order.
        candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

        for &(j, distance) in candidates.iter().take(config.max_connections) {
            if distance >= reach {
                continue;
            }
            let alpha = map_range(distance, 0.0, reach, 255.0, 50.0);
            let width = map_range(distance, 0.0, reach, width_near, width_far);
            let shimmer =
                0.7 + 0.3 * (sin_deg(frame as f32 * pulse_speed + distance * 0.01) + 1.0);
            edges.push(Edge {
                source: i,
                target: j,
                distance,
                alpha: alpha * shimmer,
                width,
            });
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn neuron_at(x: f32, y: f32) -> Neuron {
        Neuron {
            position: Vec2::new(x, y),
            pulse: 0.0,
            hue: 35,
            target_size: 8.0,
        }
    }

    fn config() -> SimConfig {
        // Wide 1000px viewport: activation 100, reach 180, cap 5.
        SimConfig::recompute(Viewport::new(1000.0, 800.0))
    }

    #[test]
    fn test_map_range_basics() {
        assert_eq!(map_range(0.0, 0.0, 10.0, 255.0, 50.0), 255.0);
        assert_eq!(map_range(10.0, 0.0, 10.0, 255.0, 50.0), 50.0);
        assert!((map_range(5.0, 0.0, 10.0, 1.0, 0.15) - 0.575).abs() < 1e-6);
    }

    #[test]
    fn test_map_range_zero_span_guard() {
        assert_eq!(map_range(3.0, 2.0, 2.0, 255.0, 50.0), 255.0);
    }

    #[test]
    fn test_edges_only_point_forward() {
        let neurons: Vec<Neuron> = (0..20).map(|i| neuron_at(i as f32 * 10.0, 0.0)).collect();
        let edges = build_edges(&neurons, &config(), Viewport::new(1000.0, 800.0), 0);
        assert!(!edges.is_empty());
        for edge in &edges {
            assert!(edge.source < edge.target);
        }
    }

    #[test]
    fn test_lower_endpoint_capped_at_max_connections() {
        // A dense clump: everyone is within reach of everyone.
        let neurons: Vec<Neuron> = (0..30)
            .map(|i| neuron_at(500.0 + i as f32, 400.0 + i as f32))
            .collect();
        let cfg = config();
        let edges = build_edges(&neurons, &cfg, Viewport::new(1000.0, 800.0), 0);
        for i in 0..neurons.len() {
            let outgoing = edges.iter().filter(|e| e.source == i).count();
            assert!(outgoing <= cfg.max_connections);
        }
    }

    #[test]
    fn test_no_edge_at_or_beyond_reach() {
        let cfg = config();
        let neurons = vec![
            neuron_at(0.0, 0.0),
            neuron_at(cfg.reach(), 0.0),       // exactly at reach: excluded
            neuron_at(cfg.reach() - 1.0, 0.0), // just inside: included
        ];
        let edges = build_edges(&neurons, &cfg, Viewport::new(1000.0, 800.0), 0);
        assert!(edges
            .iter()
            .all(|e| e.distance < cfg.reach()));
        assert!(edges.iter().any(|e| e.source == 0 && e.target == 2));
        assert!(!edges.iter().any(|e| e.source == 0 && e.target == 1));
    }

    #[test]
    fn test_ties_keep_index_order() {
        // Neurons 1..=4 all at distance 50 from neuron 0; cap is 3 on a
        // narrow viewport, so the three lowest indices win.
        let viewport = Viewport::new(500.0, 800.0);
        let cfg = SimConfig::recompute(viewport);
        assert_eq!(cfg.max_connections, 3);
        let neurons = vec![
            neuron_at(100.0, 100.0),
            neuron_at(150.0, 100.0),
            neuron_at(50.0, 100.0),
            neuron_at(100.0, 150.0),
            neuron_at(100.0, 50.0),
        ];
        let edges = build_edges(&neurons, &cfg, viewport, 0);
        let from_first: Vec<usize> = edges
            .iter()
            .filter(|e| e.source == 0)
            .map(|e| e.target)
            .collect();
        assert_eq!(from_first, vec![1, 2, 3]);
    }

    #[test]
    fn test_alpha_and_width_fade_with_distance() {
        let cfg = config();
        let neurons = vec![
            neuron_at(100.0, 100.0),
            neuron_at(110.0, 100.0),
            neuron_at(260.0, 100.0),
        ];
        let edges = build_edges(&neurons, &cfg, Viewport::new(1000.0, 800.0), 0);
        let near = edges.iter().find(|e| e.target == 1).unwrap();
        let far = edges.iter().find(|e| e.source == 0 && e.target == 2).unwrap();
        assert!(near.alpha > far.alpha);
        assert!(near.width > far.width);
        // Shimmer scales alpha by at most 1.3x of the 255 ceiling.
        assert!(near.alpha <= 255.0 * 1.3);
        assert!(far.width >= 0.15);
    }
}
