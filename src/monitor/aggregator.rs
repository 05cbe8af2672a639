use tracing::{debug, warn};

use crate::constants::WIFI_SLOT_COUNT;
use crate::error::ServiceResult;
use crate::models::{
    BatteryState, ConfigInfo, HardwareInfo, KernelInfo, LiveState, MediaUsage, MiscInfo,
    NnidInfo, Snapshot, StorageInfo, SystemInfo, SystemStateInfo, WifiInfo, WifiSlot,
};
use crate::platform::{
    MediaType, Platform, ServiceScope, TitleMedia, VersionKind, AGGREGATION_SERVICES,
};

/// Gathers device information from the platform.
/// Only queries and converts; rendering happens elsewhere.
///
/// A failing query never stops the collection: its field stays `None` and
/// the failure goes to the debug log.
pub struct InfoAggregator;

impl InfoAggregator {
    /// Collect the startup snapshot.
    ///
    /// Opens the AM, AC, CFG and ACT handles for the duration of the call
    /// and releases them in reverse order before returning.
    pub fn collect_all<P: Platform + ?Sized>(platform: &mut P) -> Snapshot {
        let scope = ServiceScope::acquire_available(platform, AGGREGATION_SERVICES);
        let p: &P = &scope;

        let snapshot = Snapshot {
            kernel: Self::kernel_info(p),
            system: Self::system_info(p),
            nnid: Self::nnid_info(p),
            config: Self::config_info(p),
            hardware: Self::hardware_info(p),
            wifi: Self::wifi_info(p),
            storage: Self::storage_info(p),
            misc: Self::misc_info(p),
            system_state: Self::system_state_info(p),
        };
        debug!(held = ?scope.held(), "startup snapshot collected");
        snapshot
    }

    /// Sample the values that change while the viewer runs.
    pub fn sample_live<P: Platform + ?Sized>(p: &P, is_new_model: bool) -> LiveState {
        LiveState {
            battery: BatteryState {
                level: ok_or_log(p.battery_level()),
                charging: ok_or_log(p.charging()),
                voltage: ok_or_log(p.battery_voltage()),
                temperature_c: ok_or_log(p.battery_temperature()),
                adapter_connected: ok_or_log(p.adapter_connected()),
                mcu_firmware: ok_or_log(p.mcu_firmware()),
            },
            audio_jack: ok_or_log(p.audio_jack_inserted()),
            card_inserted: ok_or_log(p.card_inserted()),
            sd_inserted: ok_or_log(p.sd_inserted()),
            brightness: ok_or_log(p.brightness()),
            auto_brightness: if is_new_model {
                ok_or_log(p.auto_brightness())
            } else {
                None
            },
            power_saving: ok_or_log(p.power_saving()),
            wifi_strength: p.wifi_strength(),
            ip_address: ok_or_log(p.ip_address()),
        }
    }

    pub fn kernel_info<P: Platform + ?Sized>(p: &P) -> KernelInfo {
        KernelInfo {
            kernel_version: ok_or_log(p.version(VersionKind::Kernel)),
            firm_version: ok_or_log(p.version(VersionKind::Firm)),
            system_version: ok_or_log(p.version(VersionKind::System)),
            initial_version: ok_or_log(p.initial_version()),
            sdmc_cid: ok_or_log(p.sdmc_cid()),
            nand_cid: ok_or_log(p.nand_cid()),
            device_id: ok_or_log(p.device_id()),
        }
    }

    pub fn system_info<P: Platform + ?Sized>(p: &P) -> SystemInfo {
        SystemInfo {
            model: ok_or_log(p.model()),
            running_hardware: ok_or_log(p.running_hardware()),
            region: ok_or_log(p.region()),
            language: ok_or_log(p.language()),
            local_friend_code_seed: ok_or_log(p.local_friend_code_seed()),
            nand_local_friend_code_seed: ok_or_log(p.nand_local_friend_code_seed()),
            mac_address: ok_or_log(p.mac_address()),
            serial_number: ok_or_log(p.serial_number()),
            soap_id: ok_or_log(p.soap_id()),
        }
    }

    pub fn nnid_info<P: Platform + ?Sized>(p: &P) -> NnidInfo {
        NnidInfo {
            persistent_id: ok_or_log(p.persistent_id()),
            transferable_id_base: ok_or_log(p.transferable_id_base()),
            principal_id: ok_or_log(p.principal_id()),
        }
    }

    pub fn config_info<P: Platform + ?Sized>(p: &P) -> ConfigInfo {
        ConfigInfo {
            username: ok_or_log(p.username()),
            birthday: ok_or_log(p.birthday()),
            eula_version: ok_or_log(p.eula_version()),
            parental_pin: ok_or_log(p.parental_pin()),
            parental_email: ok_or_log(p.parental_email()),
            parental_secret_answer: ok_or_log(p.parental_secret_answer()),
        }
    }

    pub fn hardware_info<P: Platform + ?Sized>(p: &P) -> HardwareInfo {
        let screens = ok_or_log(p.screen_types());
        HardwareInfo {
            screen_upper: screens.map(|(upper, _)| upper),
            screen_lower: screens.map(|(_, lower)| lower),
            sound_output: ok_or_log(p.sound_output_mode()),
        }
    }

    pub fn wifi_info<P: Platform + ?Sized>(p: &P) -> WifiInfo {
        let mut info = WifiInfo::default();
        for (index, slot) in info.slots.iter_mut().enumerate().take(WIFI_SLOT_COUNT) {
            *slot = match ok_or_log(p.wifi_slot_configured(index)) {
                Some(true) => Some(WifiSlot {
                    ssid: ok_or_log(p.wifi_ssid(index)),
                    passphrase: ok_or_log(p.wifi_passphrase(index)),
                    security: ok_or_log(p.wifi_security(index)),
                }),
                _ => None,
            };
        }
        info
    }

    pub fn storage_info<P: Platform + ?Sized>(p: &P) -> StorageInfo {
        let mut info = StorageInfo::default();
        for media in MediaType::ALL {
            info.media[media.index()] = MediaUsage {
                total: ok_or_log(p.total_storage(media)),
                free: ok_or_log(p.free_storage(media)),
            };
        }
        info
    }

    pub fn misc_info<P: Platform + ?Sized>(p: &P) -> MiscInfo {
        MiscInfo {
            sd_title_count: ok_or_log(p.title_count(TitleMedia::Sd)),
            nand_title_count: ok_or_log(p.title_count(TitleMedia::Nand)),
            ticket_count: ok_or_log(p.ticket_count()),
        }
    }

    pub fn system_state_info<P: Platform + ?Sized>(p: &P) -> SystemStateInfo {
        SystemStateInfo {
            pmic_vendor_code: ok_or_log(p.pmic_vendor_code()),
            battery_vendor_code: ok_or_log(p.battery_vendor_code()),
            raw_button_state: ok_or_log(p.raw_button_state()),
        }
    }
}

/// Keep the value, or log the failure and leave the field unknown.
fn ok_or_log<T>(result: ServiceResult<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(error = %e, "query failed");
            None
        }
    }
}
