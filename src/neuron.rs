//! A single neuron of the backdrop graph.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::config::{SimConfig, Viewport};
use crate::render::Surface;
use crate::spawn::SpawnContext;
use crate::time::sin_deg;
use crate::visuals::Theme;

fn base_size(viewport: Viewport) -> f32 {
    if viewport.is_narrow() {
        6.0
    } else {
        8.0
    }
}

fn move_speed(viewport: Viewport) -> f32 {
    if viewport.is_narrow() {
        0.2
    } else {
        0.3
    }
}

/// One animated point of the decorative graph.
///
/// Plain data: all behavior takes its context (pointer, config, viewport,
/// RNG) as explicit arguments, and the collection is owned by
/// [`crate::simulation::Simulation`].
#[derive(Clone, Debug, PartialEq)]
pub struct Neuron {
    /// Position in canvas space; inside the viewport after every update.
    pub position: Vec2,
    /// Excitement in `[0, 1]`: jumps to 1 on activation, decays toward 0.
    pub pulse: f32,
    /// Hue in `[0, 360)`; nudged by one degree per activation.
    pub hue: u16,
    /// Rendered core diameter, fixed at spawn.
    pub target_size: f32,
}

impl Neuron {
    /// Spawn a neuron at a random position in the viewport.
    ///
    /// Core diameter is drawn from `[base, 1.8 * base]`, where the base is
    /// 6 on narrow viewports and 8 otherwise.
    pub fn spawn(ctx: &mut SpawnContext) -> Self {
        let base = base_size(ctx.viewport);
        Self {
            position: ctx.random_position(),
            pulse: 0.0,
            hue: 35,
            target_size: ctx.random_range(base, base * 1.8),
        }
    }

    /// Advance one frame: drift, clamp, react to the pointer, decay.
    pub fn update(
        &mut self,
        pointer: Vec2,
        config: &SimConfig,
        viewport: Viewport,
        rng: &mut SmallRng,
    ) {
        let speed = move_speed(viewport);
        self.position += Vec2::new(
            rng.gen_range(-speed..=speed),
            rng.gen_range(-speed..=speed),
        );
        self.position = viewport.clamp(self.position);

        if self.position.distance(pointer) < config.activation_distance {
            self.activate();
        }

        // Exponential decay, not a hard reset: a neuron that stays in
        // range holds its pulse near 1.
        self.pulse += 0.1 * (0.0 - self.pulse);
    }

    /// Light up: full pulse, hue nudged one degree.
    pub fn activate(&mut self) {
        self.pulse = 1.0;
        self.hue = (self.hue + 1) % 360;
    }

    /// Draw the glow halo and the bordered core.
    pub fn render<S: Surface>(
        &self,
        surface: &mut S,
        theme: &Theme,
        frame: u64,
        viewport: Viewport,
    ) {
        let alpha = 150.0 + 105.0 * sin_deg(frame as f32 * 0.1);
        let glow_size = self.target_size * (1.0 + 2.0 * self.pulse);

        surface.fill_circle(self.position, glow_size, theme.glow.with_alpha(alpha * 0.5));

        surface.fill_circle(self.position, self.target_size, theme.core_fill);
        let border = if viewport.is_narrow() { 1.5 } else { 2.0 };
        surface.stroke_circle(
            self.position,
            self.target_size,
            theme.core_stroke.with_alpha(alpha),
            border,
        );
    }
}
