//! Renderer module: split into focused submodules.
//!
//! - `info`: label/value list pages
//! - `wifi`: saved network boxes
//! - `storage`: drive widgets with capacity gauges
//! - `tester`: button tester screen
//! - `helpers`: shared row and bar drawing

mod helpers;
pub mod info;
pub mod storage;
pub mod tester;
pub mod wifi;

use crate::constants::{
    BANNER_AREA_HEIGHT, ITEM_DISTANCE, ITEM_HEIGHT, MENU_ICON_SCALE, STATUS_BAR_HEIGHT,
    TEXT_SIZE, TOP_SCREEN_WIDTH,
};
use crate::models::{LiveState, Snapshot};

use super::assets::Icon;
use super::context::RenderContext;
use super::draw::{Frame, Screen};
use super::page::Page;
use super::state::MenuState;
use super::theme::Theme;

/// Render one main menu frame: chrome, the selected page and the menu.
pub fn main_menu(
    ctx: &mut RenderContext,
    theme: &Theme,
    menu: &MenuState,
    snapshot: &Snapshot,
    live: &LiveState,
) -> Frame {
    ctx.begin(theme.background, theme.background);

    render_status_bar(ctx, theme);
    menu.page()
        .render(ctx, theme, snapshot, live, menu.show_private());

    ctx.scene_begin(Screen::Bottom);
    render_menu(ctx, theme, menu.selection());

    ctx.end()
}

fn render_status_bar(ctx: &mut RenderContext, theme: &Theme) {
    ctx.draw_rect(0.0, 0.0, TOP_SCREEN_WIDTH, STATUS_BAR_HEIGHT, theme.status_bar);
    let title_height = ctx.text_height(TEXT_SIZE);
    ctx.draw_text(
        5.0,
        (STATUS_BAR_HEIGHT - title_height) / 2.0,
        TEXT_SIZE,
        theme.title,
        t!("app.title", version = env!("CARGO_PKG_VERSION")),
    );

    let banner = ctx.texture(Icon::Banner);
    let (w, h) = (banner.width, banner.height);
    ctx.draw_image(
        Icon::Banner,
        (TOP_SCREEN_WIDTH - w) / 2.0,
        (BANNER_AREA_HEIGHT - h) / 2.0 + STATUS_BAR_HEIGHT,
    );
}

fn render_menu(ctx: &mut RenderContext, theme: &Theme, selection: usize) {
    ctx.draw_rect(15.0, 15.0, 290.0, 210.0, theme.title);
    ctx.draw_rect(16.0, 16.0, 288.0, 208.0, theme.menu_bar);
    ctx.draw_rect(
        16.0,
        16.0 + ITEM_DISTANCE * selection as f32,
        288.0,
        ITEM_HEIGHT,
        theme.selector,
    );

    for (i, page) in Page::ALL.iter().enumerate() {
        let y = 17.0 + (ITEM_DISTANCE - ITEM_HEIGHT) / 2.0 + ITEM_DISTANCE * i as f32;
        ctx.draw_image_scaled(page.icon(), 20.0, y, MENU_ICON_SCALE);
        ctx.draw_text(40.0, y, TEXT_SIZE, theme.title, page.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::InfoAggregator;
    use crate::platform::{startup_services, DeviceProfile, EmulatedPlatform, Keys, Platform};
    use crate::platform::InputFrame;
    use crate::ui::context::test_context;
    use crate::ui::draw::DrawCommand;

    fn collected() -> (Snapshot, LiveState) {
        let mut p = EmulatedPlatform::new(DeviceProfile {
            ip_address: "10.0.0.9".to_string(),
            ..Default::default()
        });
        for s in startup_services(false) {
            p.init_service(s).unwrap();
        }
        let snap = InfoAggregator::collect_all(&mut p);
        let live = InfoAggregator::sample_live(&p, snap.is_new_model());
        (snap, live)
    }

    fn menu_on(page: Page) -> MenuState {
        let mut menu = MenuState::default();
        let step = InputFrame {
            down: Keys::DDOWN,
            held: Keys::DDOWN,
            ..Default::default()
        };
        while menu.page() != page {
            menu.handle(&step);
        }
        menu
    }

    #[test]
    fn rendering_is_pure() {
        let (snap, live) = collected();
        let theme = Theme::default();
        let mut ctx = test_context();
        for page in Page::ALL {
            let menu = menu_on(page);
            let first = main_menu(&mut ctx, &theme, &menu, &snap, &live);
            let second = main_menu(&mut ctx, &theme, &menu, &snap, &live);
            assert_eq!(first, second, "{:?}", page);
        }
    }

    #[test]
    fn menu_lists_every_page() {
        let (snap, live) = collected();
        let frame = main_menu(
            &mut test_context(),
            &Theme::default(),
            &MenuState::default(),
            &snap,
            &live,
        );
        assert_eq!(frame.texts(Screen::Bottom).len(), Page::ALL.len());
    }

    #[test]
    fn selector_bar_tracks_selection() {
        let (snap, live) = collected();
        let theme = Theme::default();
        let menu = menu_on(Page::Storage);
        let frame = main_menu(&mut test_context(), &theme, &menu, &snap, &live);
        let bar = frame.bottom.commands.iter().find_map(|c| match c {
            DrawCommand::Rect { y, color, .. } if *color == theme.selector => Some(*y),
            _ => None,
        });
        assert_eq!(bar, Some(16.0 + 20.0 * 7.0));
    }

    #[test]
    fn status_bar_shows_version() {
        let (snap, live) = collected();
        let frame = main_menu(
            &mut test_context(),
            &Theme::default(),
            &MenuState::default(),
            &snap,
            &live,
        );
        assert!(frame.texts(Screen::Top)[0].contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn banner_is_centred() {
        let (snap, live) = collected();
        let mut ctx = test_context();
        let banner_width = ctx.texture(Icon::Banner).width;
        let frame = main_menu(&mut ctx, &Theme::default(), &MenuState::default(), &snap, &live);
        let x = frame.top.commands.iter().find_map(|c| match c {
            DrawCommand::Image {
                icon: Icon::Banner,
                x,
                ..
            } => Some(*x),
            _ => None,
        });
        assert_eq!(x, Some((400.0 - banner_width) / 2.0));
    }
}
