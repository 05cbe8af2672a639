use super::helpers::draw_item_at;
use crate::constants::{GAUGE_INNER_WIDTH, SCREEN_HEIGHT, STATUS_BAR_HEIGHT, TOP_SCREEN_WIDTH};
use crate::models::{MediaUsage, StorageInfo};
use crate::platform::MediaType;
use crate::ui::assets::Icon;
use crate::ui::context::RenderContext;
use crate::ui::format::{self, known};
use crate::ui::theme::Theme;

/// Drive icon origin for each widget.
fn origin(media: MediaType) -> (f32, f32) {
    match media {
        MediaType::Sd => (20.0, 40.0),
        MediaType::CtrNand => (220.0, 40.0),
        MediaType::TwlNand => (20.0, 135.0),
        MediaType::TwlPhoto => (220.0, 135.0),
    }
}

/// Width of the gauge fill for `usage`, within `0..=58`.
pub fn gauge_fill(usage: &MediaUsage) -> f32 {
    match (usage.used(), usage.total) {
        (Some(used), Some(total)) => GAUGE_INNER_WIDTH * format::usage_ratio(used, total),
        _ => 0.0,
    }
}

pub fn render(ctx: &mut RenderContext, theme: &Theme, info: &StorageInfo) {
    ctx.draw_rect(
        0.0,
        STATUS_BAR_HEIGHT,
        TOP_SCREEN_WIDTH,
        SCREEN_HEIGHT - STATUS_BAR_HEIGHT,
        theme.background,
    );

    for media in [
        MediaType::Sd,
        MediaType::CtrNand,
        MediaType::TwlNand,
        MediaType::TwlPhoto,
    ] {
        draw_media(ctx, theme, media, info.get(media));
    }
}

fn draw_media(ctx: &mut RenderContext, theme: &Theme, media: MediaType, usage: &MediaUsage) {
    let (x, y) = origin(media);

    ctx.draw_rect(x, y + 65.0, 60.0, 10.0, theme.title);
    ctx.draw_rect(x + 1.0, y + 66.0, GAUGE_INNER_WIDTH, 8.0, theme.background);
    ctx.draw_rect(x + 1.0, y + 66.0, gauge_fill(usage), 8.0, theme.selector);

    let text_x = x + 65.0;
    draw_item_at(ctx, theme, text_x, y + 10.0, media.label(), "");
    draw_item_at(
        ctx,
        theme,
        text_x,
        y + 31.0,
        &t!("storage.free"),
        &known(usage.free, format::size),
    );
    draw_item_at(
        ctx,
        theme,
        text_x,
        y + 47.0,
        &t!("storage.used"),
        &known(usage.used(), format::size),
    );
    draw_item_at(
        ctx,
        theme,
        text_x,
        y + 63.0,
        &t!("storage.total"),
        &known(usage.total, format::size),
    );
    ctx.draw_image(Icon::Drive, x, y);
}
