//! # NBE - Neural Background Engine
//!
//! An ambient "neural network" backdrop: drifting neurons, proximity
//! edges, and a pointer-chasing pulse ring, meant to sit behind a UI and
//! look alive without demanding attention.
//!
//! ## Quick Start
//!
//! ```ignore
//! use nbe::prelude::*;
//!
//! fn main() -> Result<(), RunError> {
//!     Background::new()
//!         .with_size(1280.0, 720.0)
//!         .with_title("Ambient")
//!         .with_theme(Theme::amber())
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Neurons
//!
//! Each [`Neuron`] is a point that drifts with uniform jitter, clamped to
//! the viewport. Moving the pointer within the activation distance lights
//! a neuron up: its pulse jumps to 1 and then decays exponentially, which
//! drives the glow halo around its core.
//!
//! ### The proximity graph
//!
//! Every frame, [`build_edges`] connects each neuron to at most
//! `max_connections` of its nearest higher-indexed peers, and only within
//! 1.8x the activation distance. Edge opacity and width fade with
//! distance and shimmer over time.
//!
//! ### Responsive density
//!
//! [`SimConfig`] derives everything from the viewport: neuron count from
//! area, activation distance from width (clamped to 80-150), and the
//! per-neuron connection cap from a 768px breakpoint. Resizing recomputes
//! the config and respawns the whole batch.
//!
//! ## Headless Use
//!
//! The simulation core is plain CPU math behind the [`Surface`] trait, so
//! it runs - and is tested - without a window or GPU:
//!
//! ```ignore
//! let mut sim = Simulation::seeded(Viewport::new(1024.0, 768.0), 42);
//! let mut mesh = FrameMesh::new();
//! for _ in 0..120 {
//!     sim.tick(Vec2::new(512.0, 384.0), &mut mesh);
//! }
//! assert_eq!(sim.neurons().len(), 31);
//! ```

pub mod config;
pub mod error;
pub mod gpu;
pub mod graph;
pub mod input;
pub mod neuron;
pub mod render;
pub mod simulation;
pub mod spawn;
pub mod time;
pub mod visuals;
pub mod window;

pub use config::{SimConfig, Viewport, NARROW_BREAKPOINT};
pub use error::{GpuError, RunError};
pub use glam::Vec2;
pub use graph::{build_edges, Edge};
pub use neuron::Neuron;
pub use render::{Renderer, Rgba, Surface};
pub use simulation::Simulation;
pub use visuals::Theme;
pub use window::Background;

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use nbe::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{SimConfig, Viewport};
    pub use crate::error::RunError;
    pub use crate::gpu::FrameMesh;
    pub use crate::graph::{build_edges, Edge};
    pub use crate::input::Pointer;
    pub use crate::neuron::Neuron;
    pub use crate::render::{Renderer, Rgba, Surface};
    pub use crate::simulation::Simulation;
    pub use crate::spawn::SpawnContext;
    pub use crate::time::FrameClock;
    pub use crate::visuals::Theme;
    pub use crate::window::Background;
    pub use crate::Vec2;
}
