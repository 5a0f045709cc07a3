//! Input mapping from queued events to game actions
//!
//! The demo has no controls: any key closes it, like the close button.

use super::event_queue::GameEvent;

/// Actions the game loop performs in response to events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (close button or any key)
    Exit,
    /// Resize the surface and the view to the new window size
    Resize { width: u32, height: u32 },
}

/// Maps queued events to actions
pub struct InputMapper;

impl InputMapper {
    /// Map one event to an action
    pub fn map_event(event: GameEvent) -> InputAction {
        match event {
            GameEvent::Closed => InputAction::Exit,
            GameEvent::KeyPressed(_) => InputAction::Exit,
            GameEvent::Resized { width, height } => InputAction::Resize { width, height },
        }
    }
}
