//! Draw-list primitives.
//!
//! The view's only output is a [`Scene`]: an ordered list of screen-space
//! draw commands. The embedder replays them with whatever graphics backend
//! it has; nothing here touches a GPU or a window. Text measurement and
//! glyph layout are the embedder's problem, so text commands carry an
//! anchor point rather than a bounding box.

use crate::color::Color;
use crate::geometry::Vec2;
use serde::Serialize;

/// One screen-space drawing operation. Coordinates are in pixels, origin
/// top-left, y down.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    /// Straight line segment
    Line { from: Vec2, to: Vec2, color: Color },
    /// Filled circle
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Filled regular polygon, one vertex pointing up
    Ngon {
        center: Vec2,
        radius: f32,
        sides: u32,
        color: Color,
    },
    /// Text centered on `pos`, both axes
    Text {
        pos: Vec2,
        text: String,
        color: Color,
    },
}

/// An ordered draw list for one frame. Order is paint order: later
/// commands draw over earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.push(DrawCommand::Line { from, to, color });
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    pub fn ngon(&mut self, center: Vec2, radius: f32, sides: u32, color: Color) {
        self.push(DrawCommand::Ngon {
            center,
            radius,
            sides,
            color,
        });
    }

    pub fn text(&mut self, pos: Vec2, text: impl Into<String>, color: Color) {
        self.push(DrawCommand::Text {
            pos,
            text: text.into(),
            color,
        });
    }

    /// Debug cross marker: two axis-aligned lines through `center` with
    /// the given half-extent.
    pub fn cross(&mut self, center: Vec2, half: f32, color: Color) {
        self.line(
            Vec2::new(center.x - half, center.y),
            Vec2::new(center.x + half, center.y),
            color,
        );
        self.line(
            Vec2::new(center.x, center.y - half),
            Vec2::new(center.x, center.y + half),
            color,
        );
    }
}
