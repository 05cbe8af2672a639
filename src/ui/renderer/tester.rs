//! Button tester screen.

use ratatui::style::Color;

use super::helpers::draw_bar;
use crate::constants::{ANALOG_ICON_SHIFT, MAX_VOLUME, TESTER_SLIDER_WIDTH, TESTER_TEXT_SIZE};
use crate::platform::{InputFrame, Keys, TouchPosition};
use crate::ui::assets::Icon;
use crate::ui::context::RenderContext;
use crate::ui::draw::{Frame, Screen};
use crate::ui::theme::Theme;

/// Face and shoulder buttons with their icon positions.
const BUTTONS: [(Keys, Icon, f32, f32); 10] = [
    (Keys::L, Icon::BtnL, 0.0, 0.0),
    (Keys::R, Icon::BtnR, 345.0, 0.0),
    (Keys::ZL, Icon::BtnZl, 60.0, 0.0),
    (Keys::ZR, Icon::BtnZr, 300.0, 0.0),
    (Keys::A, Icon::BtnA, 370.0, 80.0),
    (Keys::B, Icon::BtnB, 350.0, 100.0),
    (Keys::X, Icon::BtnX, 350.0, 60.0),
    (Keys::Y, Icon::BtnY, 330.0, 80.0),
    (Keys::START, Icon::BtnStartSelect, 330.0, 140.0),
    (Keys::SELECT, Icon::BtnStartSelect, 330.0, 165.0),
];

/// Directional key sets, in left/right/up/down order.
struct Directions([Keys; 4]);

const CPAD: Directions = Directions([
    Keys::CPAD_LEFT,
    Keys::CPAD_RIGHT,
    Keys::CPAD_UP,
    Keys::CPAD_DOWN,
]);
const DPAD: Directions = Directions([Keys::DLEFT, Keys::DRIGHT, Keys::DUP, Keys::DDOWN]);
const CSTICK: Directions = Directions([
    Keys::CSTICK_LEFT,
    Keys::CSTICK_RIGHT,
    Keys::CSTICK_UP,
    Keys::CSTICK_DOWN,
]);

/// Slider fill for the raw volume, as a fraction of the bar.
pub fn volume_ratio(volume: u8) -> f32 {
    f32::from(volume.min(MAX_VOLUME)) / f32::from(MAX_VOLUME)
}

/// Draw one tester frame. `last_touch` is the most recent touch point and
/// `home_pressed` the HOME state read by the caller.
pub fn render(
    ctx: &mut RenderContext,
    theme: &Theme,
    input: &InputFrame,
    last_touch: TouchPosition,
    home_pressed: bool,
) -> Frame {
    ctx.begin(theme.tester_top_bg, theme.tester_bottom_bg);

    ctx.draw_rect(75.0, 30.0, 250.0, 210.0, theme.tester_frame);
    ctx.draw_rect(85.0, 40.0, 230.0, 175.0, theme.tester_panel);
    ctx.draw_rect(85.0, 40.0, 230.0, 15.0, theme.tester_header);

    let size = TESTER_TEXT_SIZE;
    let ink = theme.tester_text;
    ctx.draw_text(90.0, 40.0, size, theme.title, t!("tester.title"));
    ctx.draw_text(
        90.0,
        56.0,
        size,
        ink,
        t!(
            "tester.circle_pad",
            x = format!("{:04}", input.circle_pad.dx),
            y = format!("{:04}", input.circle_pad.dy)
        ),
    );
    ctx.draw_text(
        90.0,
        70.0,
        size,
        ink,
        t!(
            "tester.c_stick",
            x = format!("{:04}", input.c_stick.dx),
            y = format!("{:04}", input.c_stick.dy)
        ),
    );
    ctx.draw_text(
        90.0,
        84.0,
        size,
        ink,
        t!(
            "tester.touch",
            x = format!("{:03}", last_touch.px),
            y = format!("{:03}", last_touch.py)
        ),
    );

    ctx.draw_image(Icon::Volume, 90.0, 98.0);
    draw_bar(
        ctx,
        (115.0, 104.0, TESTER_SLIDER_WIDTH, 5.0),
        volume_ratio(input.volume),
        theme.slider_border,
        theme.slider_fill,
    );

    ctx.draw_text(90.0, 118.0, size, ink, t!("tester.slider_3d"));
    draw_bar(
        ctx,
        (115.0, 122.0, TESTER_SLIDER_WIDTH, 5.0),
        input.slider_3d,
        theme.slider_border,
        theme.slider_fill,
    );

    ctx.draw_text(90.0, 138.0, size, ink, t!("tester.back_hint"));

    draw_button(ctx, Icon::BtnHome, 180.0, 215.0, home_pressed, theme.selector);
    for (key, icon, x, y) in BUTTONS {
        draw_button(ctx, icon, x, y, input.held.intersects(key), theme.selector);
    }

    draw_directional(ctx, Icon::BtnCpad, (8.0, 55.0), &CPAD, input.held, theme.selector);
    draw_directional(ctx, Icon::BtnDpad, (5.0, 110.0), &DPAD, input.held, theme.selector);
    draw_directional(ctx, Icon::BtnCstick, (330.0, 35.0), &CSTICK, input.held, theme.selector);

    ctx.scene_begin(Screen::Bottom);
    ctx.draw_image(
        Icon::Cursor,
        f32::from(last_touch.px),
        f32::from(last_touch.py),
    );

    ctx.end()
}

fn draw_button(ctx: &mut RenderContext, icon: Icon, x: f32, y: f32, held: bool, tint: Color) {
    if held {
        ctx.draw_image_blend(icon, x, y, tint);
    } else {
        ctx.draw_image(icon, x, y);
    }
}

/// Shift the icon toward the first held direction and tint it.
fn draw_directional(
    ctx: &mut RenderContext,
    icon: Icon,
    (x, y): (f32, f32),
    dirs: &Directions,
    held: Keys,
    tint: Color,
) {
    let [left, right, up, down] = dirs.0;
    let shift = ANALOG_ICON_SHIFT;
    let (x, y) = if held.intersects(left) {
        (x - shift, y)
    } else if held.intersects(right) {
        (x + shift, y)
    } else if held.intersects(up) {
        (x, y - shift)
    } else if held.intersects(down) {
        (x, y + shift)
    } else {
        (x, y)
    };
    let any = held.intersects(left | right | up | down);
    draw_button(ctx, icon, x, y, any, tint);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::StickPosition;
    use crate::ui::context::test_context;
    use crate::ui::draw::DrawCommand;

    fn image(frame: &Frame, icon: Icon) -> Option<(f32, f32, Option<Color>)> {
        frame.top.commands.iter().find_map(|c| match c {
            DrawCommand::Image {
                icon: i, x, y, tint, ..
            } if *i == icon => Some((*x, *y, *tint)),
            _ => None,
        })
    }

    #[test]
    fn held_buttons_are_tinted() {
        let theme = Theme::default();
        let input = InputFrame {
            held: Keys::A | Keys::L,
            ..Default::default()
        };
        let frame = render(&mut test_context(), &theme, &input, TouchPosition::default(), false);
        assert_eq!(image(&frame, Icon::BtnA), Some((370.0, 80.0, Some(theme.selector))));
        assert_eq!(image(&frame, Icon::BtnB), Some((350.0, 100.0, None)));
        assert_eq!(image(&frame, Icon::BtnL).and_then(|i| i.2), Some(theme.selector));
    }

    #[test]
    fn home_tint_follows_caller() {
        let theme = Theme::default();
        let input = InputFrame {
            home: true,
            ..Default::default()
        };
        let frame = render(&mut test_context(), &theme, &input, TouchPosition::default(), false);
        assert_eq!(image(&frame, Icon::BtnHome), Some((180.0, 215.0, None)));

        let frame = render(
            &mut test_context(),
            &theme,
            &InputFrame::default(),
            TouchPosition::default(),
            true,
        );
        assert_eq!(image(&frame, Icon::BtnHome), Some((180.0, 215.0, Some(theme.selector))));
    }

    #[test]
    fn directional_icons_shift_toward_held_direction() {
        let input = InputFrame {
            held: Keys::CPAD_LEFT | Keys::DDOWN,
            ..Default::default()
        };
        let frame = render(&mut test_context(), &Theme::default(), &input, TouchPosition::default(), false);
        let (cx, cy, _) = image(&frame, Icon::BtnCpad).unwrap();
        assert_eq!((cx, cy), (3.0, 55.0));
        let (dx, dy, _) = image(&frame, Icon::BtnDpad).unwrap();
        assert_eq!((dx, dy), (5.0, 115.0));
        assert_eq!(image(&frame, Icon::BtnCstick), Some((330.0, 35.0, None)));
    }

    #[test]
    fn coordinates_are_zero_padded() {
        let input = InputFrame {
            circle_pad: StickPosition { dx: 12, dy: -3 },
            ..Default::default()
        };
        let touch = TouchPosition { px: 7, py: 120 };
        let frame = render(&mut test_context(), &Theme::default(), &input, touch, false);
        let texts = frame.texts(Screen::Top);
        assert!(texts[1].contains("0012, -003"));
        assert!(texts[3].contains("007, 120"));
    }

    #[test]
    fn cursor_follows_last_touch_on_bottom_screen() {
        let touch = TouchPosition { px: 160, py: 80 };
        let frame = render(&mut test_context(), &Theme::default(), &InputFrame::default(), touch, false);
        assert_eq!(
            frame.bottom.commands,
            vec![DrawCommand::Image {
                icon: Icon::Cursor,
                x: 160.0,
                y: 80.0,
                scale: 1.0,
                tint: None,
            }]
        );
    }

    #[test]
    fn volume_fills_bar_at_max() {
        assert_eq!(volume_ratio(63), 1.0);
        assert_eq!(volume_ratio(0), 0.0);
        assert_eq!(volume_ratio(200), 1.0);
    }
}
