//! Pointer tracking over window events.
//!
//! The simulation core takes plain coordinates; this type is the window
//! layer's bookkeeping between winit cursor events and the per-frame tick.

use glam::Vec2;
use winit::event::WindowEvent;

/// Pointer state fed into the simulation each frame.
///
/// Starts at the origin until the first cursor event arrives.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Pointer {
    position: Vec2,
    last_position: Vec2,
}

impl Pointer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position in canvas pixels.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Movement between the two most recent cursor events.
    #[inline]
    pub fn delta(&self) -> Vec2 {
        self.position - self.last_position
    }

    /// Track a winit window event.
    pub(crate) fn handle_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::CursorMoved { position, .. } = event {
            self.last_position = self.position;
            self.position = Vec2::new(position.x as f32, position.y as f32);
        }
    }
}
