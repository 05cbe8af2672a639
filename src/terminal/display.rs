use std::io::{self, Stdout};

use anyhow::Result;
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
    Terminal,
};

use crate::constants::{
    BOTTOM_SCREEN_WIDTH, CELL_HEIGHT_PX, CELL_WIDTH_PX, SCREEN_HEIGHT, TOP_SCREEN_WIDTH,
};
use crate::platform::TouchPosition;
use crate::ui::draw::{DrawCommand, Screen, ScreenTarget};
use crate::ui::{Display, Frame, Textures};

fn cols(px: f32) -> u16 {
    (px / CELL_WIDTH_PX).round() as u16
}

fn rows(px: f32) -> u16 {
    (px / CELL_HEIGHT_PX).round() as u16
}

/// Where the two screens sit in the terminal: top screen above, bottom
/// screen below it and centred, like the console held open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    origin_x: u16,
    origin_y: u16,
}

impl ScreenLayout {
    pub fn total_cols() -> u16 {
        cols(TOP_SCREEN_WIDTH)
    }

    pub fn total_rows() -> u16 {
        rows(SCREEN_HEIGHT) * 2
    }

    /// Centre both screens in `area`; pinned to the corner if it is too small.
    pub fn centered(area: Rect) -> Self {
        Self {
            origin_x: area.x + area.width.saturating_sub(Self::total_cols()) / 2,
            origin_y: area.y + area.height.saturating_sub(Self::total_rows()) / 2,
        }
    }

    /// Cell rectangle covered by `screen`.
    pub fn screen_rect(&self, screen: Screen) -> Rect {
        match screen {
            Screen::Top => Rect::new(
                self.origin_x,
                self.origin_y,
                cols(TOP_SCREEN_WIDTH),
                rows(SCREEN_HEIGHT),
            ),
            Screen::Bottom => Rect::new(
                self.origin_x + cols((TOP_SCREEN_WIDTH - BOTTOM_SCREEN_WIDTH) / 2.0),
                self.origin_y + rows(SCREEN_HEIGHT),
                cols(BOTTOM_SCREEN_WIDTH),
                rows(SCREEN_HEIGHT),
            ),
        }
    }

    /// Bottom-screen pixel under a terminal cell, if the cell is on it.
    pub fn touch_at(&self, column: u16, row: u16) -> Option<TouchPosition> {
        let rect = self.screen_rect(Screen::Bottom);
        if column < rect.x || column >= rect.right() || row < rect.y || row >= rect.bottom() {
            return None;
        }
        Some(TouchPosition {
            px: ((column - rect.x) as f32 * CELL_WIDTH_PX) as u16,
            py: ((row - rect.y) as f32 * CELL_HEIGHT_PX) as u16,
        })
    }
}

/// Paints a frame into a ratatui buffer.
pub struct FrameWidget<'a> {
    frame: &'a Frame,
    textures: &'a Textures,
}

impl<'a> FrameWidget<'a> {
    pub fn new(frame: &'a Frame, textures: &'a Textures) -> Self {
        Self { frame, textures }
    }

    fn paint(&self, target: &ScreenTarget, screen_rect: Rect, clip: Rect, buf: &mut Buffer) {
        let screen_rect = screen_rect.intersection(clip);
        if screen_rect.is_empty() {
            return;
        }
        fill(buf, screen_rect, target.clear);

        for command in &target.commands {
            match command {
                DrawCommand::Rect { x, y, w, h, color } => {
                    let left = cols(*x);
                    let top = rows(*y);
                    let width = cols(x + w).saturating_sub(left).max(1);
                    let height = rows(y + h).saturating_sub(top).max(1);
                    let cells = Rect::new(
                        screen_rect.x.saturating_add(left),
                        screen_rect.y.saturating_add(top),
                        width,
                        height,
                    );
                    fill(buf, cells.intersection(screen_rect), *color);
                }
                DrawCommand::Text {
                    x, y, color, text, ..
                } => {
                    put(buf, screen_rect, (*x, *y), text, Style::default().fg(*color));
                }
                DrawCommand::Image { icon, x, y, tint, .. } => {
                    let glyph = &self.textures.get(*icon).glyph;
                    let style = Style::default().fg(tint.unwrap_or(Color::White));
                    put(buf, screen_rect, (*x, *y), glyph, style);
                }
            }
        }
    }
}

fn fill(buf: &mut Buffer, rect: Rect, color: Color) {
    for y in rect.top()..rect.bottom() {
        for x in rect.left()..rect.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(" ").set_bg(color);
            }
        }
    }
}

/// Write `text` at pixel position `(x, y)` of the screen, clipped to it.
fn put(buf: &mut Buffer, screen_rect: Rect, (x, y): (f32, f32), text: &str, style: Style) {
    let col = screen_rect.x.saturating_add(cols(x.max(0.0)));
    let row = screen_rect.y.saturating_add(rows(y.max(0.0)));
    if col >= screen_rect.right() || row >= screen_rect.bottom() {
        return;
    }
    let max_width = (screen_rect.right() - col) as usize;
    buf.set_stringn(col, row, text, max_width, style);
}

impl Widget for FrameWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = ScreenLayout::centered(area);
        for screen in [Screen::Top, Screen::Bottom] {
            self.paint(self.frame.target(screen), layout.screen_rect(screen), area, buf);
        }
    }
}

/// Presents frames on the terminal.
pub struct TerminalDisplay {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    textures: Textures,
}

impl TerminalDisplay {
    /// Expects a `TerminalSession` to be active.
    pub fn new(textures: Textures) -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        terminal.hide_cursor()?;
        Ok(Self { terminal, textures })
    }
}

impl Display for TerminalDisplay {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        let widget = FrameWidget::new(frame, &self.textures);
        self.terminal.draw(|f| f.render_widget(widget, f.area()))?;
        Ok(())
    }
}
