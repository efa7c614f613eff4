//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::SceneAction`]. Independent
//! of the render loop, so the mapping can be unit-tested.

pub mod map;

pub use tui_orrery_types as types;

pub use map::{handle_key_event, should_quit};
