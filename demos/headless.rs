//! # Headless Tick Driver
//!
//! Runs the simulation math without a window or GPU: a counting surface
//! tallies draw calls while a scripted pointer sweeps each viewport.
//! Handy as a smoke check of density and edge statistics across viewport
//! classes.
//!
//! Run with: `cargo run --example headless`

use anyhow::Result;
use nbe::prelude::*;

#[derive(Default)]
struct CountingSurface {
    fills: usize,
    strokes: usize,
    lines: usize,
}

impl Surface for CountingSurface {
    fn clear(&mut self) {
        self.fills = 0;
        self.strokes = 0;
        self.lines = 0;
    }
    fn fill_circle(&mut self, _: Vec2, _: f32, _: Rgba) {
        self.fills += 1;
    }
    fn stroke_circle(&mut self, _: Vec2, _: f32, _: Rgba, _: f32) {
        self.strokes += 1;
    }
    fn line(&mut self, _: Vec2, _: Vec2, _: Rgba, _: f32) {
        self.lines += 1;
    }
}

fn main() -> Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")?.start()?;

    for (width, height) in [(320.0, 480.0), (1024.0, 768.0), (1920.0, 1080.0)] {
        let viewport = Viewport::new(width, height);
        let mut sim = Simulation::seeded(viewport, 7);
        let mut surface = CountingSurface::default();

        for frame in 0..240u64 {
            // Sweep the pointer along the diagonal to exercise activation.
            let t = frame as f32 / 240.0;
            sim.tick(Vec2::new(width * t, height * t), &mut surface);
        }

        log::info!(
            "{}x{}: activation {}, {} neurons, last frame drew {} edges, {} fills, {} strokes",
            width,
            height,
            sim.config().activation_distance,
            sim.neurons().len(),
            surface.lines,
            surface.fills,
            surface.strokes,
        );
    }

    Ok(())
}
