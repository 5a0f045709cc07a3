//! Per-frame event queue
//!
//! winit delivers events through callbacks; the game only cares about three
//! of them. They are translated into [`GameEvent`] as they arrive and handled
//! in order once the event loop runs out of pending events.

use std::collections::VecDeque;

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::PhysicalKey;

/// Window events the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The window's close button was pressed
    Closed,
    /// The window's inner size changed (physical pixels)
    Resized { width: u32, height: u32 },
    /// A key went down (repeats excluded)
    KeyPressed(PhysicalKey),
}

impl GameEvent {
    /// Translate a winit window event, or `None` if the game ignores it
    pub fn from_window_event(event: &WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::CloseRequested => Some(GameEvent::Closed),
            WindowEvent::Resized(size) => Some(GameEvent::Resized {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return None;
                }
                Some(GameEvent::KeyPressed(event.physical_key))
            }
            _ => None,
        }
    }
}

/// FIFO of events waiting for the next frame
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event
    pub fn push(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    /// Queue a winit event if the game cares about it
    pub fn push_window_event(&mut self, event: &WindowEvent) {
        if let Some(game_event) = GameEvent::from_window_event(event) {
            self.push(game_event);
        }
    }

    /// Take every queued event, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
