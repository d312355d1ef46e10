//! Canvas 2D rendering module
//!
//! Painting goes through the `Surface` trait so the same scene code drives
//! the browser canvas and the recording buffer used natively and in tests.

pub mod commands;
pub mod scene;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use commands::{CommandBuffer, DrawCommand};
pub use scene::{Scene, paint};
pub use shapes::LegPose;

use glam::Vec2;

/// Ink colour for every primitive
pub const INK: &str = "#535353";

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// A 2D drawing target of fixed size
pub trait Surface {
    /// Erase the whole surface
    fn clear(&mut self);

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str);

    /// Stroke a dashed segment (`dash` = [on, off] lengths)
    fn dashed_line(&mut self, from: Vec2, to: Vec2, width: f32, dash: [f32; 2], color: &str);

    fn fill_text(&mut self, text: &str, at: Vec2, font: &str, align: TextAlign, color: &str);
}
