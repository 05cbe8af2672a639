//! Typed value formatting for the info pages.
//!
//! Every function returns an owned string; the row drawer caps its length.
//! `None` inputs become the localized "unknown" text.

use crate::constants::{MCU_FW_MAJOR_BIAS, WIFI_STRENGTH_PERCENT_PER_BAR};

const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;
const GIB: f64 = MIB * 1024.0;

pub fn unknown() -> String {
    t!("common.unknown").to_string()
}

/// Format a value, or the unknown text when the query failed.
pub fn known<T>(value: Option<T>, f: impl FnOnce(T) -> String) -> String {
    value.map(f).unwrap_or_else(unknown)
}

/// Private values render empty while hidden.
pub fn private(show: bool, text: impl FnOnce() -> String) -> String {
    if show {
        text()
    } else {
        String::new()
    }
}

pub fn percent(value: f64) -> String {
    format!("{:.0}%", value.round())
}

pub fn celsius_to_fahrenheit(celsius: u8) -> u16 {
    u16::from(celsius) * 9 / 5 + 32
}

pub fn temperature(celsius: u8) -> String {
    format!("{} °C ({} °F)", celsius, celsius_to_fahrenheit(celsius))
}

/// Raw gauge reading and the voltage it stands for.
pub fn voltage(raw: u8) -> String {
    format!("{} ({:.1} V)", raw, 5.0 * f32::from(raw) / 256.0)
}

pub fn mcu_firmware(high: u8, low: u8) -> String {
    format!("{}.{}", high.saturating_sub(MCU_FW_MAJOR_BIAS), low)
}

/// Signal bars (0..=3) with the matching percentage.
pub fn wifi_strength(bars: u8) -> String {
    format!(
        "{} ({:.0}%)",
        bars,
        f64::from(bars) * WIFI_STRENGTH_PERCENT_PER_BAR
    )
}

pub fn lfc_seed(seed: u64) -> String {
    format!("{:010X}", seed)
}

pub fn vendor_code(code: u8) -> String {
    format!("{:x}", code)
}

pub fn size(bytes: u64) -> String {
    let b = bytes as f64;
    if b >= GIB {
        format!("{:.2} GB", b / GIB)
    } else if b >= MIB {
        format!("{:.2} MB", b / MIB)
    } else if b >= KIB {
        format!("{:.2} KB", b / KIB)
    } else {
        format!("{:.2} B", b)
    }
}

pub fn enabled(on: bool) -> String {
    if on {
        t!("common.enabled").to_string()
    } else {
        t!("common.disabled").to_string()
    }
}

/// Share of the capacity in use, within `0.0..=1.0`. Zero capacity is empty.
pub fn usage_ratio(used: u64, total: u64) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (used as f64 / total as f64).clamp(0.0, 1.0) as f32
}
