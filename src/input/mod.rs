//! Input handling module
//!
//! Window events are translated into [`GameEvent`]s, queued, and drained once
//! per frame. [`InputMapper`] turns each event into the action the game takes.

mod event_queue;
mod input_mapper;

pub use event_queue::{EventQueue, GameEvent};
pub use input_mapper::{InputMapper, InputAction};
