//! Color themes for the backdrop.
//!
//! How the graph looks is kept separate from how it moves: the renderer
//! reads every color from a [`Theme`], so swapping the palette never
//! touches simulation code.

use crate::render::Rgba;

/// Colors for the five painted elements.
///
/// The alpha channels of `glow`, `core_stroke`, `edge` and `ring` are
/// replaced per frame by the oscillation math; `core_fill` is used as-is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Halo behind an activated neuron.
    pub glow: Rgba,
    /// Neuron core fill.
    pub core_fill: Rgba,
    /// Neuron core border.
    pub core_stroke: Rgba,
    /// Connection lines.
    pub edge: Rgba,
    /// Pointer pulse ring.
    pub ring: Rgba,
}

impl Theme {
    /// Warm amber glow over deep blue cores - the classic look.
    pub const fn amber() -> Self {
        Self {
            glow: Rgba::new(255.0, 140.0, 0.0, 255.0),
            core_fill: Rgba::new(25.0, 118.0, 210.0, 150.0),
            core_stroke: Rgba::new(255.0, 255.0, 255.0, 255.0),
            edge: Rgba::new(255.0, 255.0, 255.0, 255.0),
            ring: Rgba::new(255.0, 140.0, 0.0, 255.0),
        }
    }

    /// Cold variant: cyan glow over slate cores.
    pub const fn ice() -> Self {
        Self {
            glow: Rgba::new(0.0, 200.0, 255.0, 255.0),
            core_fill: Rgba::new(40.0, 70.0, 120.0, 150.0),
            core_stroke: Rgba::new(220.0, 240.0, 255.0, 255.0),
            edge: Rgba::new(200.0, 225.0, 255.0, 255.0),
            ring: Rgba::new(0.0, 200.0, 255.0, 255.0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::amber()
    }
}
