//! Device information records.
//!
//! Collected once at startup and read-only afterwards. A `None` field
//! means the platform query behind it failed.

use crate::platform::{
    ConsoleModel, MediaType, ScreenType, SecurityMode, SerialNumber, SoundOutput,
};
use crate::constants::WIFI_SLOT_COUNT;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KernelInfo {
    pub kernel_version: Option<String>,
    pub firm_version: Option<String>,
    pub system_version: Option<String>,
    pub initial_version: Option<String>,
    pub sdmc_cid: Option<String>,
    pub nand_cid: Option<String>,
    pub device_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemInfo {
    pub model: Option<ConsoleModel>,
    pub running_hardware: Option<String>,
    pub region: Option<String>,
    pub language: Option<String>,
    pub local_friend_code_seed: Option<u64>,
    pub nand_local_friend_code_seed: Option<String>,
    pub mac_address: Option<String>,
    pub serial_number: Option<SerialNumber>,
    pub soap_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NnidInfo {
    pub persistent_id: Option<u32>,
    pub transferable_id_base: Option<u64>,
    pub principal_id: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigInfo {
    pub username: Option<String>,
    pub birthday: Option<String>,
    pub eula_version: Option<String>,
    pub parental_pin: Option<String>,
    pub parental_email: Option<String>,
    pub parental_secret_answer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HardwareInfo {
    pub screen_upper: Option<ScreenType>,
    pub screen_lower: Option<ScreenType>,
    pub sound_output: Option<SoundOutput>,
}

/// One saved network. Fields fail independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WifiSlot {
    pub ssid: Option<String>,
    pub passphrase: Option<String>,
    pub security: Option<SecurityMode>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WifiInfo {
    /// `None` for an empty (or unreadable) slot.
    pub slots: [Option<WifiSlot>; WIFI_SLOT_COUNT],
}

/// Capacity of one medium, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MediaUsage {
    pub total: Option<u64>,
    pub free: Option<u64>,
}

impl MediaUsage {
    /// Used bytes; unknown if either side is unknown.
    pub fn used(&self) -> Option<u64> {
        Some(self.total?.saturating_sub(self.free?))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorageInfo {
    /// Indexed by `MediaType::index`.
    pub media: [MediaUsage; 4],
}

impl StorageInfo {
    pub fn get(&self, media: MediaType) -> &MediaUsage {
        &self.media[media.index()]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MiscInfo {
    pub sd_title_count: Option<u32>,
    pub nand_title_count: Option<u32>,
    pub ticket_count: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemStateInfo {
    pub pmic_vendor_code: Option<u8>,
    pub battery_vendor_code: Option<u8>,
    /// MCU button register; see `RAW_HOME_RELEASED`.
    pub raw_button_state: Option<u32>,
}

/// Everything collected at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub kernel: KernelInfo,
    pub system: SystemInfo,
    pub nnid: NnidInfo,
    pub config: ConfigInfo,
    pub hardware: HardwareInfo,
    pub wifi: WifiInfo,
    pub storage: StorageInfo,
    pub misc: MiscInfo,
    pub system_state: SystemStateInfo,
}

impl Snapshot {
    /// New-model features are shown only when the model is known to be new.
    pub fn is_new_model(&self) -> bool {
        self.system.model.map(|m| m.is_new()).unwrap_or(false)
    }
}

/// Battery gauge values, re-read every frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatteryState {
    pub level: Option<u8>,
    pub charging: Option<bool>,
    pub voltage: Option<u8>,
    pub temperature_c: Option<u8>,
    pub adapter_connected: Option<bool>,
    /// (high, low) with the high byte still biased.
    pub mcu_firmware: Option<(u8, u8)>,
}

/// Values that change while the viewer runs, re-read every frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveState {
    pub battery: BatteryState,
    pub audio_jack: Option<bool>,
    pub card_inserted: Option<bool>,
    pub sd_inserted: Option<bool>,
    pub brightness: Option<u32>,
    /// Only sampled on New models.
    pub auto_brightness: Option<bool>,
    pub power_saving: Option<bool>,
    pub wifi_strength: u8,
    pub ip_address: Option<String>,
}
