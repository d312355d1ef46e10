//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick increments only
//! - No randomness
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, overlaps};
pub use state::{Figure, GamePhase, Obstacle, World};
pub use tick::{TickInput, TickOutcome, tick};
