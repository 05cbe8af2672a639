//! Platform seam: the console's service calls and input hardware.
//!
//! - `types`: value types shared with the snapshot records
//! - `input`: button bitset, per-frame input sample, `Hid` trait
//! - `scope`: scoped service acquisition with LIFO release
//! - `profile`: TOML-described device values for emulation
//! - `emulated`: `Platform` implementation backed by a profile

pub mod emulated;
pub mod input;
pub mod profile;
pub mod scope;
mod types;

pub use emulated::EmulatedPlatform;
pub use input::{Hid, InputFrame, Keys, StickPosition, TouchPosition};
pub use profile::DeviceProfile;
pub use scope::ServiceScope;
pub use types::*;

use crate::error::ServiceResult;

/// Services initialised at startup, in acquisition order.
///
/// The MCU is skipped under Citra, which does not emulate it.
pub fn startup_services(citra: bool) -> Vec<Service> {
    let mut services = vec![Service::Romfs, Service::Gfx];
    if !citra {
        services.push(Service::Mcu);
    }
    services.extend([Service::Ptm, Service::Cfg, Service::Dsp, Service::Soc]);
    services
}

/// Services held open while the startup snapshot is collected.
pub const AGGREGATION_SERVICES: &[Service] = &[Service::Am, Service::Ac, Service::Cfg, Service::Act];

/// The console's query surface.
///
/// Every query is read-only and may fail independently. Handles are
/// reference counted: initialising a service twice requires two exits.
pub trait Platform {
    // ── Lifecycle ────────────────────────────────────────────
    fn init_service(&mut self, service: Service) -> ServiceResult<()>;
    fn exit_service(&mut self, service: Service);
    /// Allow or block the HOME menu (blocked while the button tester runs).
    fn set_home_allowed(&mut self, allowed: bool);

    // ── Kernel ───────────────────────────────────────────────
    fn version(&self, kind: VersionKind) -> ServiceResult<String>;
    fn initial_version(&self) -> ServiceResult<String>;
    fn sdmc_cid(&self) -> ServiceResult<String>;
    fn nand_cid(&self) -> ServiceResult<String>;
    fn device_id(&self) -> ServiceResult<u64>;

    // ── System ───────────────────────────────────────────────
    fn model(&self) -> ServiceResult<ConsoleModel>;
    fn running_hardware(&self) -> ServiceResult<String>;
    fn region(&self) -> ServiceResult<String>;
    fn language(&self) -> ServiceResult<String>;
    fn local_friend_code_seed(&self) -> ServiceResult<u64>;
    fn nand_local_friend_code_seed(&self) -> ServiceResult<String>;
    fn mac_address(&self) -> ServiceResult<String>;
    fn serial_number(&self) -> ServiceResult<SerialNumber>;
    fn soap_id(&self) -> ServiceResult<u64>;

    // ── NNID ─────────────────────────────────────────────────
    fn persistent_id(&self) -> ServiceResult<u32>;
    fn transferable_id_base(&self) -> ServiceResult<u64>;
    fn principal_id(&self) -> ServiceResult<u32>;

    // ── Config ───────────────────────────────────────────────
    fn username(&self) -> ServiceResult<String>;
    fn birthday(&self) -> ServiceResult<String>;
    fn eula_version(&self) -> ServiceResult<String>;
    fn parental_pin(&self) -> ServiceResult<String>;
    fn parental_email(&self) -> ServiceResult<String>;
    fn parental_secret_answer(&self) -> ServiceResult<String>;
    fn power_saving(&self) -> ServiceResult<bool>;

    // ── Hardware ─────────────────────────────────────────────
    /// Upper and lower panel types.
    fn screen_types(&self) -> ServiceResult<(ScreenType, ScreenType)>;
    fn sound_output_mode(&self) -> ServiceResult<SoundOutput>;
    fn audio_jack_inserted(&self) -> ServiceResult<bool>;
    fn card_inserted(&self) -> ServiceResult<bool>;
    fn sd_inserted(&self) -> ServiceResult<bool>;
    /// Top screen backlight level.
    fn brightness(&self) -> ServiceResult<u32>;
    fn auto_brightness(&self) -> ServiceResult<bool>;

    // ── Wi-Fi ────────────────────────────────────────────────
    /// Whether connection slot `index` (0..3) holds a saved network.
    fn wifi_slot_configured(&self, index: usize) -> ServiceResult<bool>;
    fn wifi_ssid(&self, index: usize) -> ServiceResult<String>;
    fn wifi_passphrase(&self, index: usize) -> ServiceResult<String>;
    fn wifi_security(&self, index: usize) -> ServiceResult<SecurityMode>;
    /// Signal strength in bars (0..=3). Reading it cannot fail.
    fn wifi_strength(&self) -> u8;

    // ── Storage ──────────────────────────────────────────────
    fn total_storage(&self, media: MediaType) -> ServiceResult<u64>;
    fn free_storage(&self, media: MediaType) -> ServiceResult<u64>;

    // ── Misc ─────────────────────────────────────────────────
    fn title_count(&self, media: TitleMedia) -> ServiceResult<u32>;
    fn ticket_count(&self) -> ServiceResult<u32>;
    fn ip_address(&self) -> ServiceResult<String>;

    // ── System state / battery ───────────────────────────────
    fn pmic_vendor_code(&self) -> ServiceResult<u8>;
    fn battery_vendor_code(&self) -> ServiceResult<u8>;
    fn raw_button_state(&self) -> ServiceResult<u32>;
    fn battery_level(&self) -> ServiceResult<u8>;
    fn charging(&self) -> ServiceResult<bool>;
    fn battery_voltage(&self) -> ServiceResult<u8>;
    /// Battery temperature in whole degrees Celsius.
    fn battery_temperature(&self) -> ServiceResult<u8>;
    fn adapter_connected(&self) -> ServiceResult<bool>;
    /// MCU firmware (high, low) bytes, high still carrying its bias.
    fn mcu_firmware(&self) -> ServiceResult<(u8, u8)>;
}
