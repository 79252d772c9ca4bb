//! Presentation boundary
//!
//! Scenes describe a frame as a [`DrawList`]; glyph layout, image blits
//! and shader invocation happen in the host renderer.

pub mod text;
pub mod uniforms;

pub use uniforms::BackgroundUniforms;

use glam::Vec2;

use crate::resources::{FontFace, ImageHandle, ShaderHandle};

/// Colors for HUD elements (premultiplied RGBA)
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PROMPT: [f32; 4] = [0.627, 0.627, 0.627, 1.0];

    /// White faded by `alpha`
    pub fn white(alpha: f64) -> [f32; 4] {
        let a = alpha.clamp(0.0, 1.0) as f32;
        [a, a, a, a]
    }
}

/// Where a text run is placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Centered horizontally on the screen, baseline at `y`
    CenterX { y: f32 },
    /// Baseline origin at a fixed point
    At(Vec2),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Full-screen image
    Image { image: ImageHandle, alpha: f32 },
    /// Full-screen shader pass
    Background {
        shader: ShaderHandle,
        uniforms: BackgroundUniforms,
    },
    Text {
        text: String,
        face: FontFace,
        anchor: Anchor,
        color: [f32; 4],
    },
    /// Right-aligned fixed-width digits with a narrow decimal point
    Number {
        text: String,
        origin: Vec2,
        alpha: f32,
    },
}

/// Draw commands for one frame, in painter's order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn text(
        &mut self,
        text: impl Into<String>,
        face: FontFace,
        anchor: Anchor,
        color: [f32; 4],
    ) {
        self.push(DrawCommand::Text {
            text: text.into(),
            face,
            anchor,
            color,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text runs, in order (for tests and debug dumps)
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } | DrawCommand::Number { text, .. } => {
                Some(text.as_str())
            }
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_list_texts() {
        let mut list = DrawList::new();
        list.push(DrawCommand::Image {
            image: ImageHandle("a.png"),
            alpha: 1.0,
        });
        list.text("Record", FontFace::Small, Anchor::CenterX { y: 144.0 }, colors::WHITE);
        list.push(DrawCommand::Number {
            text: "1.500".into(),
            origin: Vec2::new(10.0, 20.0),
            alpha: 1.0,
        });
        assert_eq!(list.texts().collect::<Vec<_>>(), ["Record", "1.500"]);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_white_is_premultiplied() {
        assert_eq!(colors::white(0.5), [0.5, 0.5, 0.5, 0.5]);
        assert_eq!(colors::white(2.0), colors::WHITE);
    }
}
