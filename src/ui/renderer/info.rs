//! Label/value list pages.
//!
//! Rows start at index 1, leaving the first row under the banner empty.

use super::helpers::draw_item;
use crate::models::{
    BatteryState, ConfigInfo, HardwareInfo, KernelInfo, LiveState, MiscInfo, NnidInfo,
    SystemInfo, SystemStateInfo,
};
use crate::ui::context::RenderContext;
use crate::ui::format::{self, known, private};
use crate::ui::theme::Theme;

fn text(value: &Option<String>) -> String {
    known(value.clone(), |v| v)
}

fn number<T: ToString>(value: Option<T>) -> String {
    known(value, |v| v.to_string())
}

fn flag(value: Option<bool>, on: &str, off: &str) -> String {
    known(value, |v| {
        if v {
            t!(on).to_string()
        } else {
            t!(off).to_string()
        }
    })
}

pub fn kernel(ctx: &mut RenderContext, theme: &Theme, info: &KernelInfo, show: bool) {
    let rows = [
        (t!("kernel.kernel_version"), text(&info.kernel_version)),
        (t!("kernel.firm_version"), text(&info.firm_version)),
        (t!("kernel.system_version"), text(&info.system_version)),
        (t!("kernel.initial_version"), text(&info.initial_version)),
        (t!("kernel.sdmc_cid"), private(show, || text(&info.sdmc_cid))),
        (t!("kernel.nand_cid"), private(show, || text(&info.nand_cid))),
        (t!("kernel.device_id"), private(show, || number(info.device_id))),
    ];
    for (i, (label, value)) in rows.iter().enumerate() {
        draw_item(ctx, theme, i + 1, label, value);
    }
}

pub fn system(ctx: &mut RenderContext, theme: &Theme, info: &SystemInfo, show: bool) {
    let model = format!(
        "{} ({} - {})",
        known(info.model, |m| m.label().to_string()),
        text(&info.running_hardware),
        text(&info.region),
    );
    let serial = private(show, || {
        known(info.serial_number.clone(), |s| {
            format!("{} {}", s.serial, s.check_digit)
        })
    });
    let rows = [
        (t!("system.model"), model),
        (t!("system.language"), text(&info.language)),
        (
            t!("system.lfc_seed"),
            private(show, || known(info.local_friend_code_seed, format::lfc_seed)),
        ),
        (
            t!("system.nand_lfc_seed"),
            private(show, || text(&info.nand_local_friend_code_seed)),
        ),
        (t!("system.mac_address"), private(show, || text(&info.mac_address))),
        (t!("system.serial"), serial),
        (t!("system.soap_id"), private(show, || number(info.soap_id))),
    ];
    for (i, (label, value)) in rows.iter().enumerate() {
        draw_item(ctx, theme, i + 1, label, value);
    }
}

pub fn battery(
    ctx: &mut RenderContext,
    theme: &Theme,
    battery: &BatteryState,
    state: &SystemStateInfo,
) {
    let level = format!(
        "{} ({})",
        known(battery.level, |l| format::percent(f64::from(l))),
        flag(battery.charging, "common.charging", "common.not_charging"),
    );
    let rows = [
        (t!("battery.level"), level),
        (t!("battery.voltage"), known(battery.voltage, format::voltage)),
        (
            t!("battery.temperature"),
            known(battery.temperature_c, format::temperature),
        ),
        (
            t!("battery.adapter"),
            flag(
                battery.adapter_connected,
                "common.connected",
                "common.disconnected",
            ),
        ),
        (
            t!("battery.mcu_firmware"),
            known(battery.mcu_firmware, |(high, low)| {
                format::mcu_firmware(high, low)
            }),
        ),
        (
            t!("battery.pmic_vendor"),
            known(state.pmic_vendor_code, format::vendor_code),
        ),
        (
            t!("battery.battery_vendor"),
            known(state.battery_vendor_code, format::vendor_code),
        ),
    ];
    for (i, (label, value)) in rows.iter().enumerate() {
        draw_item(ctx, theme, i + 1, label, value);
    }
}

pub fn nnid(ctx: &mut RenderContext, theme: &Theme, info: &NnidInfo, show: bool) {
    draw_item(
        ctx,
        theme,
        1,
        &t!("nnid.persistent_id"),
        &private(show, || number(info.persistent_id)),
    );
    draw_item(
        ctx,
        theme,
        2,
        &t!("nnid.transferable_id"),
        &private(show, || number(info.transferable_id_base)),
    );
    draw_item(
        ctx,
        theme,
        3,
        &t!("nnid.principal_id"),
        &private(show, || number(info.principal_id)),
    );
}

pub fn config(
    ctx: &mut RenderContext,
    theme: &Theme,
    info: &ConfigInfo,
    live: &LiveState,
    show: bool,
) {
    let rows = [
        (t!("config.username"), text(&info.username)),
        (t!("config.birthday"), private(show, || text(&info.birthday))),
        (t!("config.eula"), text(&info.eula_version)),
        (t!("config.parental_pin"), private(show, || text(&info.parental_pin))),
        (
            t!("config.parental_email"),
            private(show, || text(&info.parental_email)),
        ),
        (
            t!("config.parental_answer"),
            private(show, || text(&info.parental_secret_answer)),
        ),
        (t!("config.power_saving"), known(live.power_saving, format::enabled)),
    ];
    for (i, (label, value)) in rows.iter().enumerate() {
        draw_item(ctx, theme, i + 1, label, value);
    }
}

pub fn hardware(
    ctx: &mut RenderContext,
    theme: &Theme,
    info: &HardwareInfo,
    live: &LiveState,
    is_new_model: bool,
) {
    let brightness = if is_new_model {
        t!(
            "hardware.brightness_auto",
            level = number(live.brightness),
            auto = known(live.auto_brightness, format::enabled)
        )
        .to_string()
    } else {
        number(live.brightness)
    };
    let rows = [
        (
            t!("hardware.screen_upper"),
            known(info.screen_upper, |s| s.label()),
        ),
        (
            t!("hardware.screen_lower"),
            known(info.screen_lower, |s| s.label()),
        ),
        (
            t!("hardware.audio_jack"),
            flag(live.audio_jack, "common.jack_inserted", "common.jack_empty"),
        ),
        (
            t!("hardware.card_slot"),
            flag(live.card_inserted, "common.card_inserted", "common.card_empty"),
        ),
        (
            t!("hardware.sd_slot"),
            flag(live.sd_inserted, "common.card_inserted", "common.card_empty"),
        ),
        (
            t!("hardware.sound_output"),
            known(info.sound_output, |s| s.label()),
        ),
        (t!("hardware.brightness"), brightness),
    ];
    for (i, (label, value)) in rows.iter().enumerate() {
        draw_item(ctx, theme, i + 1, label, value);
    }
}

pub fn misc(ctx: &mut RenderContext, theme: &Theme, info: &MiscInfo, live: &LiveState, show: bool) {
    let titles = t!(
        "misc.titles_value",
        sd = number(info.sd_title_count),
        nand = number(info.nand_title_count)
    );
    draw_item(ctx, theme, 1, &t!("misc.titles"), &titles);
    draw_item(ctx, theme, 2, &t!("misc.tickets"), &number(info.ticket_count));
    draw_item(
        ctx,
        theme,
        3,
        &t!("misc.wifi_strength"),
        &format::wifi_strength(live.wifi_strength),
    );
    draw_item(
        ctx,
        theme,
        4,
        &t!("misc.ip"),
        &private(show, || text(&live.ip_address)),
    );
}

pub fn exit(ctx: &mut RenderContext, theme: &Theme) {
    draw_item(ctx, theme, 1, &t!("exit.toggle_hint"), "");
    draw_item(ctx, theme, 2, &t!("exit.tester_hint"), "");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Snapshot;
    use crate::monitor::InfoAggregator;
    use crate::platform::{startup_services, DeviceProfile, EmulatedPlatform, Platform};
    use crate::ui::context::test_context;
    use crate::ui::draw::Screen;
    use ratatui::style::Color;

    fn collected() -> (Snapshot, LiveState) {
        let mut p = EmulatedPlatform::new(DeviceProfile {
            ip_address: "192.168.1.20".to_string(),
            ..Default::default()
        });
        for s in startup_services(false) {
            p.init_service(s).unwrap();
        }
        let snap = InfoAggregator::collect_all(&mut p);
        let live = InfoAggregator::sample_live(&p, snap.is_new_model());
        (snap, live)
    }

    fn top_texts(draw: impl FnOnce(&mut RenderContext)) -> Vec<String> {
        let mut ctx = test_context();
        ctx.begin(Color::Black, Color::Black);
        draw(&mut ctx);
        ctx.end()
            .texts(Screen::Top)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    const SECRETS: &[&str] = &[
        "1b534d3030303030104a8a3c7d00e401",
        "150100344d4d4c3034108bd3f3b8a100",
        "2385184031",
        "001C2B3A49",
        "40:D2:8A:9C:11:E4",
        "CJF10453210",
        "12884987203",
        "2147483650",
        "9581047223511112",
        "1733410288",
        "3/14",
        "0000",
        "parent@example.com",
        "blue",
        "192.168.1.20",
    ];

    fn all_pages(show: bool) -> Vec<String> {
        let (snap, live) = collected();
        let theme = Theme::default();
        top_texts(|ctx| {
            kernel(ctx, &theme, &snap.kernel, show);
            system(ctx, &theme, &snap.system, show);
            nnid(ctx, &theme, &snap.nnid, show);
            config(ctx, &theme, &snap.config, &live, show);
            misc(ctx, &theme, &snap.misc, &live, show);
        })
    }

    #[test]
    fn hidden_private_values_render_empty() {
        let texts = all_pages(false);
        for secret in SECRETS {
            assert!(
                !texts.iter().any(|t| t.contains(secret)),
                "{} leaked",
                secret
            );
        }
    }

    #[test]
    fn shown_private_values_render() {
        let texts = all_pages(true);
        for secret in SECRETS {
            assert!(
                texts.iter().any(|t| t.contains(secret)),
                "{} missing",
                secret
            );
        }
    }

    #[test]
    fn failed_field_renders_unknown() {
        let info = KernelInfo {
            kernel_version: Some("2.58-0".to_string()),
            ..Default::default()
        };
        let texts = top_texts(|ctx| kernel(ctx, &Theme::default(), &info, true));
        assert_eq!(texts[1], "2.58-0");
        assert_eq!(texts[3], format::unknown());
    }

    #[test]
    fn hidden_failed_field_is_still_empty() {
        let texts = top_texts(|ctx| kernel(ctx, &Theme::default(), &KernelInfo::default(), false));
        // SDMC CID value
        assert_eq!(texts[9], "");
    }

    #[test]
    fn battery_page_formats_readings() {
        let (snap, mut live) = collected();
        live.battery.temperature_c = Some(20);
        let texts = top_texts(|ctx| {
            battery(ctx, &Theme::default(), &live.battery, &snap.system_state)
        });
        assert!(texts.contains(&"20 °C (68 °F)".to_string()));
        assert!(texts.contains(&"214 (4.2 V)".to_string()));
        assert!(texts.contains(&"3.56".to_string()));
        assert!(texts.iter().any(|t| t.starts_with("87% (")));
    }

    #[test]
    fn old_models_show_plain_brightness() {
        let (snap, live) = collected();
        let texts = top_texts(|ctx| hardware(ctx, &Theme::default(), &snap.hardware, &live, false));
        assert_eq!(texts.last().map(String::as_str), Some("3"));
    }

    #[test]
    fn exit_page_has_two_hints() {
        let texts = top_texts(|ctx| exit(ctx, &Theme::default()));
        assert_eq!(texts.len(), 4);
        assert!(texts[1].is_empty());
    }
}
