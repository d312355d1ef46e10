//! Recording surface
//!
//! Captures draw calls as data instead of pixels. The native runner and the
//! renderer tests paint into this.

use glam::Vec2;

use super::{Surface, TextAlign};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillRect {
        pos: Vec2,
        size: Vec2,
        color: String,
    },
    DashedLine {
        from: Vec2,
        to: Vec2,
        width: f32,
        dash: [f32; 2],
        color: String,
    },
    Text {
        text: String,
        at: Vec2,
        font: String,
        align: TextAlign,
        color: String,
    },
}

/// Surface that appends every call to a list
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// All text strings in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Drop recorded commands, keeping the allocation
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Surface for CommandBuffer {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.commands.push(DrawCommand::FillRect {
            pos,
            size,
            color: color.to_string(),
        });
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, width: f32, dash: [f32; 2], color: &str) {
        self.commands.push(DrawCommand::DashedLine {
            from,
            to,
            width,
            dash,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font: &str, align: TextAlign, color: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            font: font.to_string(),
            align,
            color: color.to_string(),
        });
    }
}
