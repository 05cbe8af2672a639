use crate::constants::{
    MAX_VALUE_CHARS, SCREEN_HEIGHT, STATUS_BAR_HEIGHT, TEXT_SIZE, TOP_SCREEN_WIDTH,
    WIFI_SLOT_DISTANCE,
};
use crate::models::WifiInfo;
use crate::ui::context::RenderContext;
use crate::ui::format::{known, private, unknown};
use crate::ui::theme::Theme;
use crate::utils::truncate_str;

/// One box per configured slot; empty slots leave a gap.
pub fn render(ctx: &mut RenderContext, theme: &Theme, info: &WifiInfo, show: bool) {
    ctx.draw_rect(
        0.0,
        STATUS_BAR_HEIGHT,
        TOP_SCREEN_WIDTH,
        SCREEN_HEIGHT - STATUS_BAR_HEIGHT,
        theme.background,
    );

    for (i, slot) in info.slots.iter().enumerate() {
        let Some(slot) = slot else { continue };
        let offset = i as f32 * WIFI_SLOT_DISTANCE;

        ctx.draw_rect(15.0, 27.0 + offset, 370.0, 70.0, theme.title);
        ctx.draw_rect(16.0, 28.0 + offset, 368.0, 68.0, theme.status_bar);

        let ssid = slot.ssid.clone().unwrap_or_else(unknown);
        let password = private(show, || slot.passphrase.clone().unwrap_or_else(unknown));
        let security = known(slot.security, |s| s.label());

        ctx.draw_text(
            20.0,
            30.0 + offset,
            TEXT_SIZE,
            theme.title,
            t!("wifi.slot", index = i + 1),
        );
        let ssid_line = t!("wifi.ssid", ssid = ssid);
        let password_line = t!("wifi.password", password = password, security = security);
        ctx.draw_text(
            20.0,
            46.0 + offset,
            TEXT_SIZE,
            theme.title,
            truncate_str(&ssid_line, MAX_VALUE_CHARS),
        );
        ctx.draw_text(
            20.0,
            62.0 + offset,
            TEXT_SIZE,
            theme.title,
            truncate_str(&password_line, MAX_VALUE_CHARS),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WifiSlot;
    use crate::platform::SecurityMode;
    use crate::ui::context::test_context;
    use crate::ui::draw::{DrawCommand, Screen};
    use ratatui::style::Color;

    fn info() -> WifiInfo {
        WifiInfo {
            slots: [
                None,
                Some(WifiSlot {
                    ssid: Some("Cafe".to_string()),
                    passphrase: Some("latte-art".to_string()),
                    security: Some(SecurityMode::WpaAes),
                }),
                None,
            ],
        }
    }

    fn draw(show: bool) -> crate::ui::draw::Frame {
        let mut ctx = test_context();
        ctx.begin(Color::Black, Color::Black);
        render(&mut ctx, &Theme::default(), &info(), show);
        ctx.end()
    }

    #[test]
    fn only_configured_slots_are_drawn() {
        let frame = draw(true);
        let texts = frame.texts(Screen::Top);
        assert_eq!(texts.len(), 3);
        assert!(texts[1].contains("Cafe"));
        // second slot sits one slot distance down
        let boxed = frame.top.commands.iter().any(|c| {
            matches!(c, DrawCommand::Rect { y, w, .. } if *y == 27.0 + WIFI_SLOT_DISTANCE && *w == 370.0)
        });
        assert!(boxed);
    }

    #[test]
    fn passphrase_hidden_on_request() {
        assert!(draw(true).texts(Screen::Top)[2].contains("latte-art"));
        let hidden = draw(false);
        let line = hidden.texts(Screen::Top)[2];
        assert!(!line.contains("latte-art"));
        assert!(line.contains("WPA AES"));
    }

    #[test]
    fn long_ssid_and_passphrase_are_capped() {
        let mut info = info();
        info.slots[0] = Some(WifiSlot {
            ssid: Some("S".repeat(500)),
            passphrase: Some("p".repeat(500)),
            security: Some(SecurityMode::Wpa2Aes),
        });
        let mut ctx = test_context();
        ctx.begin(Color::Black, Color::Black);
        render(&mut ctx, &Theme::default(), &info, true);
        let frame = ctx.end();

        let texts = frame.texts(Screen::Top);
        assert_eq!(texts.len(), 6);
        for text in &texts {
            assert!(text.chars().count() <= MAX_VALUE_CHARS, "{} chars", text.chars().count());
        }
        assert!(texts[1].ends_with("..."));
        assert!(texts[2].ends_with("..."));
    }
}
