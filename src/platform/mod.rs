//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (wall clock for cosmetic animation)
//! - Input events (key codes and clicks to game actions)

pub mod input;
pub mod time;

pub use input::{InputAction, action_for_key};
pub use time::now_ms;
