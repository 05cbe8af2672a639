//! Shared rendering helpers: label/value rows and gauges.

use ratatui::style::Color;

use crate::constants::{
    ITEM_DISTANCE, ITEM_HEIGHT, ITEM_START_X, ITEM_START_Y, LABEL_GAP, MAX_VALUE_CHARS, TEXT_SIZE,
};
use crate::ui::context::RenderContext;
use crate::ui::theme::Theme;
use crate::utils::truncate_str;

/// Top edge of list row `index`.
pub fn item_y(index: usize) -> f32 {
    ITEM_START_Y + (ITEM_DISTANCE - ITEM_HEIGHT) / 2.0 + ITEM_HEIGHT * index as f32
}

/// Draw a list row: the label, then the value just after it.
pub fn draw_item(ctx: &mut RenderContext, theme: &Theme, index: usize, title: &str, value: &str) {
    draw_item_at(ctx, theme, ITEM_START_X, item_y(index), title, value);
}

pub fn draw_item_at(
    ctx: &mut RenderContext,
    theme: &Theme,
    x: f32,
    y: f32,
    title: &str,
    value: &str,
) {
    let title_width = ctx.text_width(TEXT_SIZE, title);
    ctx.draw_text(x, y, TEXT_SIZE, theme.title, title);
    ctx.draw_text(
        x + title_width + LABEL_GAP,
        y,
        TEXT_SIZE,
        theme.description,
        truncate_str(value, MAX_VALUE_CHARS),
    );
}

/// Horizontal bar: a full-width track with `ratio` of it filled.
pub fn draw_bar(
    ctx: &mut RenderContext,
    (x, y, w, h): (f32, f32, f32, f32),
    ratio: f32,
    track: Color,
    fill: Color,
) {
    ctx.draw_rect(x, y, w, h, track);
    ctx.draw_rect(x, y, w * ratio.clamp(0.0, 1.0), h, fill);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::context::test_context;
    use crate::ui::draw::{DrawCommand, Screen};

    #[test]
    fn rows_are_eighteen_pixels_apart() {
        assert_eq!(item_y(0), 85.0);
        assert_eq!(item_y(1), 103.0);
        assert_eq!(item_y(7), 211.0);
    }

    #[test]
    fn value_follows_label() {
        let mut ctx = test_context();
        ctx.begin(Color::Black, Color::Black);
        draw_item(&mut ctx, &Theme::default(), 1, "ab:", "value");
        let label_width = ctx.text_width(TEXT_SIZE, "ab:");
        let frame = ctx.end();

        match &frame.top.commands[1] {
            DrawCommand::Text { x, y, text, .. } => {
                assert_eq!(*x, ITEM_START_X + label_width + LABEL_GAP);
                assert_eq!(*y, item_y(1));
                assert_eq!(text, "value");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn long_values_are_capped() {
        let mut ctx = test_context();
        ctx.begin(Color::Black, Color::Black);
        draw_item(&mut ctx, &Theme::default(), 1, "t:", &"é".repeat(400));
        let frame = ctx.end();
        let value = frame.texts(Screen::Top)[1];
        assert_eq!(value.chars().count(), MAX_VALUE_CHARS);
        assert!(value.ends_with("..."));
    }

    #[test]
    fn bar_fill_is_clamped() {
        let mut ctx = test_context();
        ctx.begin(Color::Black, Color::Black);
        draw_bar(&mut ctx, (0.0, 0.0, 190.0, 5.0), 3.0, Color::Gray, Color::Red);
        let frame = ctx.end();
        match frame.top.commands[1] {
            DrawCommand::Rect { w, .. } => assert_eq!(w, 190.0),
            ref other => panic!("unexpected {:?}", other),
        }
    }
}
