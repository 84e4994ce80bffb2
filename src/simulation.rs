//! Simulation state and the per-frame tick.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::{SimConfig, Viewport};
use crate::graph;
use crate::neuron::Neuron;
use crate::render::{Renderer, Surface};
use crate::spawn::SpawnContext;
use crate::time::FrameClock;
use crate::visuals::Theme;

/// Stream selector separating per-frame jitter from spawn randomness.
const JITTER_STREAM: u64 = 0x5DEE_CE66_D1CE_5EED;

fn entropy_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}

fn batch_seed(seed: u64, generation: u64) -> u64 {
    seed ^ generation
        .wrapping_add(1)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

fn spawn_batch(count: usize, viewport: Viewport, seed: u64) -> Vec<Neuron> {
    (0..count as u32)
        .map(|i| Neuron::spawn(&mut SpawnContext::new(i, count as u32, viewport, seed)))
        .collect()
}

/// The backdrop simulation: config, the neuron batch, and the frame clock.
///
/// Owned by the caller and driven externally - it performs no scheduling
/// of its own. Call [`Simulation::tick`] once per display frame and
/// [`Simulation::resize`] when the viewport changes; the winit-backed
/// [`crate::window::Background`] does exactly that.
///
/// ```ignore
/// use nbe::prelude::*;
///
/// let mut sim = Simulation::seeded(Viewport::new(1280.0, 720.0), 42);
/// let mut mesh = FrameMesh::new();
/// sim.tick(Vec2::new(640.0, 360.0), &mut mesh);
/// ```
pub struct Simulation {
    viewport: Viewport,
    config: SimConfig,
    neurons: Vec<Neuron>,
    renderer: Renderer,
    clock: FrameClock,
    rng: SmallRng,
    seed: u64,
    generation: u64,
}

impl Simulation {
    /// New simulation with a time-derived seed.
    pub fn new(viewport: Viewport) -> Self {
        Self::seeded(viewport, entropy_seed())
    }

    /// New simulation with a fixed seed: spawn positions and per-frame
    /// jitter are reproducible run to run.
    pub fn seeded(viewport: Viewport, seed: u64) -> Self {
        let config = SimConfig::recompute(viewport);
        let neurons = spawn_batch(config.neuron_count, viewport, batch_seed(seed, 0));
        log::info!(
            "spawned {} neurons for {}x{} viewport",
            neurons.len(),
            viewport.width,
            viewport.height
        );
        Self {
            viewport,
            config,
            neurons,
            renderer: Renderer::default(),
            clock: FrameClock::new(),
            rng: SmallRng::seed_from_u64(seed ^ JITTER_STREAM),
            seed,
            generation: 0,
        }
    }

    /// Advance one frame and draw it.
    ///
    /// Order per frame: clear, update every neuron against the pointer,
    /// rebuild the proximity graph, then paint edges, neurons, and the
    /// pointer ring.
    pub fn tick<S: Surface>(&mut self, pointer: Vec2, surface: &mut S) {
        surface.clear();

        for neuron in &mut self.neurons {
            neuron.update(pointer, &self.config, self.viewport, &mut self.rng);
        }

        let frame = self.clock.frame();
        let edges = graph::build_edges(&self.neurons, &self.config, self.viewport, frame);

        self.renderer.draw_edges(surface, &self.neurons, &edges);
        self.renderer
            .draw_neurons(surface, &self.neurons, frame, self.viewport);
        self.renderer
            .draw_pointer_pulse(surface, pointer, frame, self.viewport);

        self.clock.advance();
    }

    /// Recompute the config for a new viewport and respawn every neuron.
    ///
    /// The old batch is discarded wholesale and replaced in one swap: the
    /// backdrop jumps rather than morphs, and a tick sees either the old
    /// batch or the new one, never a mix.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.config = SimConfig::recompute(viewport);
        self.generation += 1;
        self.neurons = spawn_batch(
            self.config.neuron_count,
            viewport,
            batch_seed(self.seed, self.generation),
        );
        log::debug!(
            "viewport resized to {}x{}, respawned {} neurons",
            viewport.width,
            viewport.height,
            self.neurons.len()
        );
    }

    /// Swap the color theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.renderer.theme = theme;
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The current neuron batch.
    #[inline]
    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Frames ticked so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.clock.frame()
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
