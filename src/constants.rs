//! Application-wide constants.
//!
//! Centralizes screen geometry, layout metrics, input tuning and
//! configuration defaults.

use std::path::PathBuf;

// ── Timing ────────────────────────────────────────────────────────
/// Default frame interval (ms), roughly one vblank at 60 Hz.
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;
/// Minimum allowed frame interval (ms).
pub const MIN_FRAME_INTERVAL_MS: u64 = 5;
/// Default window (ms) a key stays "held" after its last press or repeat
/// on terminals that do not report key releases.
pub const DEFAULT_HOLD_WINDOW_MS: u64 = 600;
/// Minimum hold window (ms).
pub const MIN_HOLD_WINDOW_MS: u64 = 50;

// ── Screens ───────────────────────────────────────────────────────
/// Top screen width in pixels.
pub const TOP_SCREEN_WIDTH: f32 = 400.0;
/// Bottom screen width in pixels.
pub const BOTTOM_SCREEN_WIDTH: f32 = 320.0;
/// Height of both screens in pixels.
pub const SCREEN_HEIGHT: f32 = 240.0;
/// Pixels per terminal column.
pub const CELL_WIDTH_PX: f32 = 5.0;
/// Pixels per terminal row.
pub const CELL_HEIGHT_PX: f32 = 16.0;

// ── Layout ────────────────────────────────────────────────────────
/// Standard text scale.
pub const TEXT_SIZE: f32 = 0.5;
/// Text scale used inside the button tester.
pub const TESTER_TEXT_SIZE: f32 = 0.45;
/// Vertical pitch of bottom-screen menu entries.
pub const ITEM_DISTANCE: f32 = 20.0;
/// Height of one row (menu selector bar and info rows).
pub const ITEM_HEIGHT: f32 = 18.0;
/// Left edge of info rows.
pub const ITEM_START_X: f32 = 15.0;
/// Top edge of the info row stack.
pub const ITEM_START_Y: f32 = 84.0;
/// Gap between a row's label and its value.
pub const LABEL_GAP: f32 = 5.0;
/// Status bar height on the top screen.
pub const STATUS_BAR_HEIGHT: f32 = 20.0;
/// Height reserved for the banner below the status bar.
pub const BANNER_AREA_HEIGHT: f32 = 82.0;
/// Vertical distance between Wi-Fi slot boxes.
pub const WIFI_SLOT_DISTANCE: f32 = 68.0;
/// Width of a storage gauge's fillable interior.
pub const GAUGE_INNER_WIDTH: f32 = 58.0;
/// Width of the button tester's slider bars.
pub const TESTER_SLIDER_WIDTH: f32 = 190.0;
/// Pixels an analog icon shifts toward its held direction.
pub const ANALOG_ICON_SHIFT: f32 = 5.0;
/// Scale applied to menu icons.
pub const MENU_ICON_SCALE: f32 = 0.7;

// ── Formatting ────────────────────────────────────────────────────
/// Maximum characters of a single formatted value.
pub const MAX_VALUE_CHARS: usize = 127;
/// Bias subtracted from the MCU firmware's high byte.
pub const MCU_FW_MAJOR_BIAS: u8 = 0x10;
/// Percent per Wi-Fi strength bar (three bars total).
pub const WIFI_STRENGTH_PERCENT_PER_BAR: f64 = 33.33;
/// Maximum raw volume slider value.
pub const MAX_VOLUME: u8 = 63;
/// Number of Wi-Fi connection slots.
pub const WIFI_SLOT_COUNT: usize = 3;

// ── Emulated input ────────────────────────────────────────────────
/// Full deflection of the emulated circle pad / C-stick.
pub const ANALOG_MAX: i16 = 156;
/// 3D slider step per key press.
pub const SLIDER_STEP: f32 = 0.1;
/// Presses of the same key closer than this are treated as auto-repeat.
pub const KEY_REPEAT_GAP_MS: u64 = 100;
/// Raw volume step per key press.
pub const VOLUME_STEP: u8 = 4;
/// Raw MCU button-state bit for HOME; reads 0 while the button is down.
pub const RAW_HOME_RELEASED: u32 = 1 << 1;

// ── Supported Languages ───────────────────────────────────────────
/// Available UI languages.
pub const LANGUAGES: &[&str] = &["zh", "en"];
/// Default UI language.
pub const DEFAULT_LANG: &str = "zh";

// ── Paths ─────────────────────────────────────────────────────────

/// Returns the user's home directory, falling back to /tmp.
pub fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string()))
}

/// Returns `~/.config/ctrident/`.
pub fn config_dir() -> PathBuf {
    home_dir().join(".config").join("ctrident")
}

/// Returns `~/.config/ctrident/config.toml`.
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns `~/.config/ctrident/themes/<name>.toml`.
pub fn custom_theme_path(name: &str) -> PathBuf {
    config_dir().join("themes").join(format!("{}.toml", name))
}

/// Returns `~/.local/share/ctrident/`.
pub fn data_dir() -> PathBuf {
    home_dir().join(".local").join("share").join("ctrident")
}

/// Returns the default debug log path.
pub fn default_log_path() -> PathBuf {
    data_dir().join("ctrident.log")
}
