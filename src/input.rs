//! Pointer tracking for the simulation driver.
//!
//! The field only ever reads the most recent pointer position, so there is
//! no event queue here: window events overwrite a single `Option<Vec2>`
//! and the driver reads it synchronously once per frame. A cursor that has
//! left the window reads as absent, which disables the repulsion term.

use glam::Vec2;
use winit::event::WindowEvent;

/// Latest-known pointer position in surface pixels.
#[derive(Debug, Default)]
pub struct PointerState {
    position: Option<Vec2>,
}

impl PointerState {
    /// Create a pointer tracker with no known position.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent pointer position, or `None` if the cursor is
    /// outside the window (or has never entered it).
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Process a winit window event. Most recent position wins.
    pub(crate) fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.position = Some(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => {
                self.position = None;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    #[test]
    fn test_pointer_starts_absent() {
        let pointer = PointerState::new();
        assert_eq!(pointer.position(), None);
    }

    #[test]
    fn test_latest_position_wins() {
        let mut pointer = PointerState::new();
        pointer.position = Some(Vec2::new(10.0, 20.0));
        pointer.position = Some(Vec2::new(30.0, 40.0));
        assert_eq!(pointer.position(), Some(Vec2::new(30.0, 40.0)));
    }

    #[test]
    fn test_irrelevant_events_keep_position() {
        let mut pointer = PointerState::new();
        pointer.position = Some(Vec2::new(10.0, 20.0));
        pointer.handle_event(&WindowEvent::Resized(PhysicalSize::new(1024, 768)));
        assert_eq!(pointer.position(), Some(Vec2::new(10.0, 20.0)));
    }
}
