//! Frame description: what to draw on each screen, in console pixels.
//!
//! Renderers only append commands; presenting them is the display's job.

use anyhow::Result;
use ratatui::style::Color;

use super::assets::Icon;

/// One of the two console screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Text {
        x: f32,
        y: f32,
        size: f32,
        color: Color,
        text: String,
    },
    Image {
        icon: Icon,
        x: f32,
        y: f32,
        scale: f32,
        /// Tint blended over the icon, if any.
        tint: Option<Color>,
    },
}

/// Commands for one screen, drawn over a cleared background.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenTarget {
    pub clear: Color,
    pub commands: Vec<DrawCommand>,
}

/// A complete frame for both screens.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub top: ScreenTarget,
    pub bottom: ScreenTarget,
}

impl Frame {
    pub fn new(top_clear: Color, bottom_clear: Color) -> Self {
        Self {
            top: ScreenTarget {
                clear: top_clear,
                commands: Vec::new(),
            },
            bottom: ScreenTarget {
                clear: bottom_clear,
                commands: Vec::new(),
            },
        }
    }

    pub fn target(&self, screen: Screen) -> &ScreenTarget {
        match screen {
            Screen::Top => &self.top,
            Screen::Bottom => &self.bottom,
        }
    }

    pub fn target_mut(&mut self, screen: Screen) -> &mut ScreenTarget {
        match screen {
            Screen::Top => &mut self.top,
            Screen::Bottom => &mut self.bottom,
        }
    }

    /// All text drawn on `screen`, in draw order.
    #[cfg(test)]
    pub fn texts(&self, screen: Screen) -> Vec<&str> {
        self.target(screen)
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Output surface for finished frames.
pub trait Display {
    fn present(&mut self, frame: &Frame) -> Result<()>;
}
