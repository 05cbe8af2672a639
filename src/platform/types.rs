//! Value types shared between the platform seam and the snapshot records.

use std::fmt;

use serde::Deserialize;

/// A platform service whose handle must be initialised before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Service {
    Romfs,
    Gfx,
    Mcu,
    Ptm,
    Cfg,
    Dsp,
    Soc,
    Am,
    Ac,
    Act,
}

impl Service {
    pub fn name(&self) -> &'static str {
        match self {
            Service::Romfs => "romfs",
            Service::Gfx => "gfx",
            Service::Mcu => "mcu::HWC",
            Service::Ptm => "ptm:u",
            Service::Cfg => "cfg:u",
            Service::Dsp => "dsp::DSP",
            Service::Soc => "soc:U",
            Service::Am => "am:u",
            Service::Ac => "ac:u",
            Service::Act => "act:u",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every individual platform query, used for logging and failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    // kernel
    KernelVersion,
    FirmVersion,
    SystemVersion,
    InitialVersion,
    SdmcCid,
    NandCid,
    DeviceId,
    // system
    Model,
    RunningHardware,
    Region,
    Language,
    LocalFriendCodeSeed,
    NandLocalFriendCodeSeed,
    MacAddress,
    SerialNumber,
    SoapId,
    // nnid
    PersistentId,
    TransferableIdBase,
    PrincipalId,
    // config
    Username,
    Birthday,
    EulaVersion,
    ParentalPin,
    ParentalEmail,
    ParentalSecretAnswer,
    PowerSaving,
    // hardware
    ScreenType,
    SoundOutputMode,
    AudioJack,
    CardSlot,
    SdInserted,
    Brightness,
    AutoBrightness,
    // wifi
    WifiSlot,
    WifiSsid,
    WifiPassphrase,
    WifiSecurity,
    // storage
    StorageTotal,
    StorageFree,
    // misc
    TitleCount,
    TicketCount,
    IpAddress,
    // system state
    PmicVendor,
    BatteryVendor,
    RawButtonState,
    // battery
    BatteryLevel,
    ChargeState,
    BatteryVoltage,
    BatteryTemperature,
    AdapterState,
    McuFirmware,
}

impl Query {
    pub fn name(&self) -> &'static str {
        match self {
            Query::KernelVersion => "kernel_version",
            Query::FirmVersion => "firm_version",
            Query::SystemVersion => "system_version",
            Query::InitialVersion => "initial_version",
            Query::SdmcCid => "sdmc_cid",
            Query::NandCid => "nand_cid",
            Query::DeviceId => "device_id",
            Query::Model => "model",
            Query::RunningHardware => "running_hardware",
            Query::Region => "region",
            Query::Language => "language",
            Query::LocalFriendCodeSeed => "local_friend_code_seed",
            Query::NandLocalFriendCodeSeed => "nand_local_friend_code_seed",
            Query::MacAddress => "mac_address",
            Query::SerialNumber => "serial_number",
            Query::SoapId => "soap_id",
            Query::PersistentId => "persistent_id",
            Query::TransferableIdBase => "transferable_id_base",
            Query::PrincipalId => "principal_id",
            Query::Username => "username",
            Query::Birthday => "birthday",
            Query::EulaVersion => "eula_version",
            Query::ParentalPin => "parental_pin",
            Query::ParentalEmail => "parental_email",
            Query::ParentalSecretAnswer => "parental_secret_answer",
            Query::PowerSaving => "power_saving",
            Query::ScreenType => "screen_type",
            Query::SoundOutputMode => "sound_output_mode",
            Query::AudioJack => "audio_jack",
            Query::CardSlot => "card_slot",
            Query::SdInserted => "sd_inserted",
            Query::Brightness => "brightness",
            Query::AutoBrightness => "auto_brightness",
            Query::WifiSlot => "wifi_slot",
            Query::WifiSsid => "wifi_ssid",
            Query::WifiPassphrase => "wifi_passphrase",
            Query::WifiSecurity => "wifi_security",
            Query::StorageTotal => "storage_total",
            Query::StorageFree => "storage_free",
            Query::TitleCount => "title_count",
            Query::TicketCount => "ticket_count",
            Query::IpAddress => "ip_address",
            Query::PmicVendor => "pmic_vendor",
            Query::BatteryVendor => "battery_vendor",
            Query::RawButtonState => "raw_button_state",
            Query::BatteryLevel => "battery_level",
            Query::ChargeState => "charge_state",
            Query::BatteryVoltage => "battery_voltage",
            Query::BatteryTemperature => "battery_temperature",
            Query::AdapterState => "adapter_state",
            Query::McuFirmware => "mcu_firmware",
        }
    }

    /// The service handle this query goes through, if any.
    ///
    /// Kernel calls and filesystem archives are always reachable.
    pub fn service(&self) -> Option<Service> {
        match self {
            Query::KernelVersion
            | Query::FirmVersion
            | Query::SystemVersion
            | Query::RunningHardware
            | Query::SdmcCid
            | Query::NandCid
            | Query::NandLocalFriendCodeSeed
            | Query::CardSlot
            | Query::SdInserted
            | Query::StorageTotal
            | Query::StorageFree => None,
            Query::InitialVersion
            | Query::DeviceId
            | Query::SoapId
            | Query::TitleCount
            | Query::TicketCount => Some(Service::Am),
            Query::Model
            | Query::Region
            | Query::Language
            | Query::LocalFriendCodeSeed
            | Query::MacAddress
            | Query::SerialNumber
            | Query::Username
            | Query::Birthday
            | Query::EulaVersion
            | Query::ParentalPin
            | Query::ParentalEmail
            | Query::ParentalSecretAnswer
            | Query::SoundOutputMode
            | Query::AutoBrightness => Some(Service::Cfg),
            Query::PersistentId | Query::TransferableIdBase | Query::PrincipalId => {
                Some(Service::Act)
            }
            Query::PowerSaving | Query::ChargeState | Query::AdapterState => Some(Service::Ptm),
            Query::ScreenType | Query::Brightness => Some(Service::Gfx),
            Query::AudioJack => Some(Service::Dsp),
            Query::WifiSlot | Query::WifiSsid | Query::WifiPassphrase | Query::WifiSecurity => {
                Some(Service::Ac)
            }
            Query::IpAddress => Some(Service::Soc),
            Query::PmicVendor
            | Query::BatteryVendor
            | Query::RawButtonState
            | Query::BatteryLevel
            | Query::BatteryVoltage
            | Query::BatteryTemperature
            | Query::McuFirmware => Some(Service::Mcu),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which version number to read from the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionKind {
    Kernel,
    Firm,
    System,
}

impl VersionKind {
    pub fn query(&self) -> Query {
        match self {
            VersionKind::Kernel => Query::KernelVersion,
            VersionKind::Firm => Query::FirmVersion,
            VersionKind::System => Query::SystemVersion,
        }
    }
}

/// Console model as reported by the config service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsoleModel {
    Old3ds,
    Old3dsXl,
    New3ds,
    Old2ds,
    New3dsXl,
    New2dsXl,
}

impl ConsoleModel {
    pub fn label(&self) -> &'static str {
        match self {
            ConsoleModel::Old3ds => "OLD 3DS",
            ConsoleModel::Old3dsXl => "OLD 3DS XL",
            ConsoleModel::New3ds => "NEW 3DS",
            ConsoleModel::Old2ds => "OLD 2DS",
            ConsoleModel::New3dsXl => "NEW 3DS XL",
            ConsoleModel::New2dsXl => "NEW 2DS XL",
        }
    }

    /// New models expose extra hardware (C-stick, ZL/ZR, auto-brightness).
    pub fn is_new(&self) -> bool {
        matches!(
            self,
            ConsoleModel::New3ds | ConsoleModel::New3dsXl | ConsoleModel::New2dsXl
        )
    }
}

/// LCD panel technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenType {
    Tn,
    Ips,
    Unknown,
}

impl ScreenType {
    pub fn label(&self) -> String {
        match self {
            ScreenType::Tn => "TN".to_string(),
            ScreenType::Ips => "IPS".to_string(),
            ScreenType::Unknown => t!("common.unknown").to_string(),
        }
    }
}

/// Configured sound output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundOutput {
    Mono,
    Stereo,
    Surround,
}

impl SoundOutput {
    pub fn label(&self) -> String {
        match self {
            SoundOutput::Mono => t!("sound.mono").to_string(),
            SoundOutput::Stereo => t!("sound.stereo").to_string(),
            SoundOutput::Surround => t!("sound.surround").to_string(),
        }
    }
}

/// Wi-Fi slot encryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityMode {
    Open,
    Wep40,
    Wep104,
    Wep128,
    WpaTkip,
    Wpa2Tkip,
    WpaAes,
    Wpa2Aes,
}

impl SecurityMode {
    pub fn label(&self) -> String {
        match self {
            SecurityMode::Open => t!("wifi.open").to_string(),
            SecurityMode::Wep40 => "WEP 40-bit".to_string(),
            SecurityMode::Wep104 => "WEP 104-bit".to_string(),
            SecurityMode::Wep128 => "WEP 128-bit".to_string(),
            SecurityMode::WpaTkip => "WPA TKIP".to_string(),
            SecurityMode::Wpa2Tkip => "WPA2 TKIP".to_string(),
            SecurityMode::WpaAes => "WPA AES".to_string(),
            SecurityMode::Wpa2Aes => "WPA2 AES".to_string(),
        }
    }
}

/// Storage media with a capacity gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    CtrNand,
    TwlNand,
    TwlPhoto,
    Sd,
}

impl MediaType {
    /// All media in system media-type order.
    pub const ALL: [MediaType; 4] = [
        MediaType::CtrNand,
        MediaType::TwlNand,
        MediaType::TwlPhoto,
        MediaType::Sd,
    ];

    pub fn index(&self) -> usize {
        match self {
            MediaType::CtrNand => 0,
            MediaType::TwlNand => 1,
            MediaType::TwlPhoto => 2,
            MediaType::Sd => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MediaType::CtrNand => "CTR Nand:",
            MediaType::TwlNand => "TWL Nand:",
            MediaType::TwlPhoto => "TWL Photo:",
            MediaType::Sd => "SD:",
        }
    }
}

/// Where installed titles live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleMedia {
    Sd,
    Nand,
}

/// A console serial number and its check digit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SerialNumber {
    pub serial: String,
    pub check_digit: u8,
}

/// A configured Wi-Fi connection slot as read from the AC service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WifiSlotConfig {
    pub ssid: String,
    pub passphrase: String,
    pub security: SecurityMode,
}
