//! In-memory surface that records draw calls
//!
//! Used by the native headless host and by tests. Like a real canvas, a clear
//! erases everything drawn before it, so the recording holds one frame.

use glam::Vec2;

use super::surface::{Rgba, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Circle { center: Vec2, radius: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, color: Rgba },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    /// Clears seen over the surface's lifetime (one per rendered frame)
    frames: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands since the last clear (inclusive)
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn circles(&self) -> Vec<(Vec2, f32, Rgba)> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => Some((center, radius, color)),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(Vec2, Vec2, Rgba)> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::Line { from, to, color } => Some((from, to, color)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
        self.frames += 1;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }
}
