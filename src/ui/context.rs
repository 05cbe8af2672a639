use ratatui::style::Color;

use super::assets::{Font, Icon, Texture, Textures};
use super::draw::{DrawCommand, Frame, Screen};

/// Drawing state for one frame at a time.
///
/// `begin` clears both targets, `scene_begin` picks the screen the next
/// commands go to, and `end` hands the finished frame over.
pub struct RenderContext {
    font: Font,
    textures: Textures,
    frame: Frame,
    scene: Screen,
}

impl RenderContext {
    pub fn new(font: Font, textures: Textures) -> Self {
        Self {
            font,
            textures,
            frame: Frame::default(),
            scene: Screen::Top,
        }
    }

    pub fn begin(&mut self, top: Color, bottom: Color) {
        self.frame = Frame::new(top, bottom);
        self.scene = Screen::Top;
    }

    pub fn scene_begin(&mut self, screen: Screen) {
        self.scene = screen;
    }

    pub fn end(&mut self) -> Frame {
        std::mem::take(&mut self.frame)
    }

    pub fn texture(&self, icon: Icon) -> &Texture {
        self.textures.get(icon)
    }

    pub fn text_width(&self, size: f32, text: &str) -> f32 {
        self.font.text_width(size, text)
    }

    pub fn text_height(&self, size: f32) -> f32 {
        self.font.text_height(size)
    }

    fn push(&mut self, command: DrawCommand) {
        self.frame.target_mut(self.scene).commands.push(command);
    }

    /// Empty rectangles are skipped.
    pub fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        self.push(DrawCommand::Rect { x, y, w, h, color });
    }

    pub fn draw_text(&mut self, x: f32, y: f32, size: f32, color: Color, text: impl Into<String>) {
        self.push(DrawCommand::Text {
            x,
            y,
            size,
            color,
            text: text.into(),
        });
    }

    pub fn draw_image(&mut self, icon: Icon, x: f32, y: f32) {
        self.draw_image_scaled(icon, x, y, 1.0);
    }

    pub fn draw_image_scaled(&mut self, icon: Icon, x: f32, y: f32, scale: f32) {
        self.push(DrawCommand::Image {
            icon,
            x,
            y,
            scale,
            tint: None,
        });
    }

    /// Draw an icon half-blended with `tint`.
    pub fn draw_image_blend(&mut self, icon: Icon, x: f32, y: f32, tint: Color) {
        self.push(DrawCommand::Image {
            icon,
            x,
            y,
            scale: 1.0,
            tint: Some(tint),
        });
    }
}

#[cfg(test)]
pub(crate) fn test_context() -> RenderContext {
    RenderContext::new(Font::packaged().unwrap(), Textures::load().unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_go_to_the_current_scene() {
        let mut ctx = test_context();
        ctx.begin(Color::Black, Color::Blue);
        ctx.draw_text(0.0, 0.0, 0.5, Color::White, "top");
        ctx.scene_begin(Screen::Bottom);
        ctx.draw_text(0.0, 0.0, 0.5, Color::White, "bottom");
        let frame = ctx.end();

        assert_eq!(frame.texts(Screen::Top), vec!["top"]);
        assert_eq!(frame.texts(Screen::Bottom), vec!["bottom"]);
        assert_eq!(frame.bottom.clear, Color::Blue);
    }

    #[test]
    fn begin_resets_the_frame() {
        let mut ctx = test_context();
        ctx.begin(Color::Black, Color::Black);
        ctx.draw_text(0.0, 0.0, 0.5, Color::White, "old");
        ctx.scene_begin(Screen::Bottom);
        ctx.begin(Color::Black, Color::Black);
        ctx.draw_text(0.0, 0.0, 0.5, Color::White, "new");
        let frame = ctx.end();
        assert_eq!(frame.texts(Screen::Top), vec!["new"]);
    }

    #[test]
    fn empty_rects_are_skipped() {
        let mut ctx = test_context();
        ctx.begin(Color::Black, Color::Black);
        ctx.draw_rect(0.0, 0.0, 0.0, 8.0, Color::Red);
        ctx.draw_rect(0.0, 0.0, 4.0, 8.0, Color::Red);
        assert_eq!(ctx.end().top.commands.len(), 1);
    }
}
