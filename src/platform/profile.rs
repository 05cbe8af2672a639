//! Device profile: every value the emulated console reports.
//!
//! Loaded from the `[device]` table of the config file. All fields are
//! optional; missing ones keep the defaults below (a retail New 3DS XL).

use serde::Deserialize;

use super::{ConsoleModel, Query, ScreenType, SecurityMode, SerialNumber, Service, SoundOutput};

/// A saved Wi-Fi network in a given slot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileWifiSlot {
    /// Slot index, 0..3.
    pub slot: usize,
    pub ssid: String,
    #[serde(default)]
    pub passphrase: String,
    #[serde(default = "default_security")]
    pub security: SecurityMode,
}

fn default_security() -> SecurityMode {
    SecurityMode::Wpa2Aes
}

/// Capacities in bytes for the four system media.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageProfile {
    pub sd_total: u64,
    pub sd_free: u64,
    pub ctr_nand_total: u64,
    pub ctr_nand_free: u64,
    pub twl_nand_total: u64,
    pub twl_nand_free: u64,
    pub twl_photo_total: u64,
    pub twl_photo_free: u64,
}

impl Default for StorageProfile {
    fn default() -> Self {
        Self {
            sd_total: 31_902_400_512,
            sd_free: 12_488_540_160,
            ctr_nand_total: 1_300_234_240,
            ctr_nand_free: 842_432_512,
            twl_nand_total: 160_694_272,
            twl_nand_free: 130_416_640,
            twl_photo_total: 33_554_432,
            twl_photo_free: 33_030_144,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeviceProfile {
    /// Emulate Citra: no MCU service, so the button tester reads HOME from
    /// the terminal's HOME key instead of the raw button state.
    pub citra: bool,
    /// Queries that fail with an error result.
    pub fail: Vec<Query>,
    /// Services whose initialisation fails.
    pub broken_services: Vec<Service>,

    // kernel
    pub kernel_version: String,
    pub firm_version: String,
    pub system_version: String,
    pub initial_version: String,
    pub sdmc_cid: String,
    pub nand_cid: String,
    pub device_id: u64,

    // system
    pub model: ConsoleModel,
    pub running_hardware: String,
    pub region: String,
    pub language: String,
    pub local_friend_code_seed: u64,
    pub nand_local_friend_code_seed: String,
    pub mac_address: String,
    pub serial_number: SerialNumber,
    pub soap_id: u64,

    // nnid
    pub persistent_id: u32,
    pub transferable_id_base: u64,
    pub principal_id: u32,

    // config
    pub username: String,
    pub birthday: String,
    pub eula_version: String,
    pub parental_pin: String,
    pub parental_email: String,
    pub parental_secret_answer: String,
    pub power_saving: bool,

    // hardware
    pub screen_upper: ScreenType,
    pub screen_lower: ScreenType,
    pub sound_output: SoundOutput,
    pub audio_jack: bool,
    pub card_inserted: bool,
    pub sd_inserted: bool,
    pub brightness: u32,
    pub auto_brightness: bool,

    // wifi
    pub wifi: Vec<ProfileWifiSlot>,
    pub wifi_strength: u8,

    // storage
    pub storage: StorageProfile,

    // misc
    pub sd_titles: u32,
    pub nand_titles: u32,
    pub tickets: u32,
    /// Empty means "use the host's first IPv4 address".
    pub ip_address: String,

    // system state / battery
    pub pmic_vendor_code: u8,
    pub battery_vendor_code: u8,
    /// MCU button register; HOME is down while bit 1 is clear.
    pub raw_button_state: u32,
    pub battery_level: u8,
    pub charging: bool,
    pub battery_voltage: u8,
    pub battery_temperature: u8,
    pub adapter_connected: bool,
    pub mcu_firmware_high: u8,
    pub mcu_firmware_low: u8,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self {
            citra: false,
            fail: Vec::new(),
            broken_services: Vec::new(),
            kernel_version: "2.58-0".to_string(),
            firm_version: "2.58-0".to_string(),
            system_version: "11.17.0-50C".to_string(),
            initial_version: "9.2.0-20C".to_string(),
            sdmc_cid: "1b534d3030303030104a8a3c7d00e401".to_string(),
            nand_cid: "150100344d4d4c3034108bd3f3b8a100".to_string(),
            device_id: 2_385_184_031,
            model: ConsoleModel::New3dsXl,
            running_hardware: "Retail".to_string(),
            region: "CHN".to_string(),
            language: "简体中文".to_string(),
            local_friend_code_seed: 0x00_1C2B_3A49,
            nand_local_friend_code_seed: "001C2B3A49".to_string(),
            mac_address: "40:D2:8A:9C:11:E4".to_string(),
            serial_number: SerialNumber {
                serial: "CJF10453210".to_string(),
                check_digit: 7,
            },
            soap_id: 12_884_987_203,
            persistent_id: 2_147_483_650,
            transferable_id_base: 9_581_047_223_511_112,
            principal_id: 1_733_410_288,
            username: "ctrident".to_string(),
            birthday: "3/14".to_string(),
            eula_version: "1.1".to_string(),
            parental_pin: "0000".to_string(),
            parental_email: "parent@example.com".to_string(),
            parental_secret_answer: "blue".to_string(),
            power_saving: false,
            screen_upper: ScreenType::Ips,
            screen_lower: ScreenType::Tn,
            sound_output: SoundOutput::Stereo,
            audio_jack: false,
            card_inserted: true,
            sd_inserted: true,
            brightness: 3,
            auto_brightness: false,
            wifi: vec![ProfileWifiSlot {
                slot: 0,
                ssid: "HomeNetwork".to_string(),
                passphrase: "correct horse".to_string(),
                security: SecurityMode::Wpa2Aes,
            }],
            wifi_strength: 3,
            storage: StorageProfile::default(),
            sd_titles: 42,
            nand_titles: 108,
            tickets: 156,
            ip_address: String::new(),
            pmic_vendor_code: 0x2,
            battery_vendor_code: 0x1,
            raw_button_state: 0x2,
            battery_level: 87,
            charging: false,
            battery_voltage: 214,
            battery_temperature: 25,
            adapter_connected: false,
            mcu_firmware_high: 0x13,
            mcu_firmware_low: 56,
        }
    }
}

impl DeviceProfile {
    /// The configured network in `index`, if any.
    pub fn wifi_slot(&self, index: usize) -> Option<&ProfileWifiSlot> {
        self.wifi.iter().find(|w| w.slot == index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_is_default() {
        let profile: DeviceProfile = toml::from_str("").unwrap();
        assert_eq!(profile, DeviceProfile::default());
    }

    #[test]
    fn partial_table_overrides_fields() {
        let profile: DeviceProfile = toml::from_str(
            r#"
            model = "old2ds"
            battery_temperature = 40
            fail = ["wifi_ssid"]

            [[wifi]]
            slot = 2
            ssid = "Cafe"
            security = "open"
            "#,
        )
        .unwrap();
        assert_eq!(profile.model, ConsoleModel::Old2ds);
        assert_eq!(profile.battery_temperature, 40);
        assert_eq!(profile.fail, vec![Query::WifiSsid]);
        assert!(profile.wifi_slot(0).is_none());
        let cafe = profile.wifi_slot(2).unwrap();
        assert_eq!(cafe.security, SecurityMode::Open);
        assert!(cafe.passphrase.is_empty());
        // untouched fields keep defaults
        assert_eq!(profile.username, "ctrident");
    }

    #[test]
    fn serial_number_table() {
        let profile: DeviceProfile = toml::from_str(
            r#"
            [serial_number]
            serial = "QW123"
            check_digit = 3
            "#,
        )
        .unwrap();
        assert_eq!(profile.serial_number.serial, "QW123");
        assert_eq!(profile.serial_number.check_digit, 3);
    }
}
