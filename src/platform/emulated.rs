//! Emulated console backed by a `DeviceProfile`.
//!
//! Behaves like the real service layer where it matters to the viewer:
//! handles are reference counted, queries against a closed service fail,
//! and any query or service listed in the profile can be made to fail.

use std::cell::OnceCell;
use std::collections::HashMap;

use super::{
    ConsoleModel, DeviceProfile, MediaType, Platform, Query, ScreenType, SecurityMode,
    SerialNumber, Service, SoundOutput, TitleMedia, VersionKind,
};
use crate::constants::WIFI_SLOT_COUNT;
use crate::error::{ServiceError, ServiceResult, RESULT_NOT_FOUND};

/// Service lifecycle event, recorded in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceEvent {
    Init(Service),
    Exit(Service),
}

pub struct EmulatedPlatform {
    profile: DeviceProfile,
    refcounts: HashMap<Service, u32>,
    log: Vec<ServiceEvent>,
    home_allowed: bool,
    host_ip: OnceCell<Option<String>>,
}

impl EmulatedPlatform {
    pub fn new(profile: DeviceProfile) -> Self {
        Self {
            profile,
            refcounts: HashMap::new(),
            log: Vec::new(),
            home_allowed: true,
            host_ip: OnceCell::new(),
        }
    }

    /// Every init/exit so far, oldest first.
    pub fn service_log(&self) -> &[ServiceEvent] {
        &self.log
    }

    /// Services with a live handle.
    pub fn open_services(&self) -> Vec<Service> {
        self.refcounts
            .iter()
            .filter(|(_, &count)| count > 0)
            .map(|(&service, _)| service)
            .collect()
    }

    pub fn home_allowed(&self) -> bool {
        self.home_allowed
    }

    fn is_open(&self, service: Service) -> bool {
        self.refcounts.get(&service).copied().unwrap_or(0) > 0
    }

    /// Gate a query on its service handle and the profile's failure list.
    fn check(&self, query: Query) -> ServiceResult<()> {
        if let Some(service) = query.service() {
            if !self.is_open(service) {
                return Err(ServiceError::NotInitialised { query, service });
            }
        }
        if self.profile.fail.contains(&query) {
            return Err(ServiceError::Failed {
                query,
                code: RESULT_NOT_FOUND,
            });
        }
        Ok(())
    }

    fn wifi_slot(&self, index: usize, query: Query) -> ServiceResult<&super::profile::ProfileWifiSlot> {
        self.check(query)?;
        if index >= WIFI_SLOT_COUNT {
            return Err(ServiceError::Failed {
                query,
                code: RESULT_NOT_FOUND,
            });
        }
        self.profile.wifi_slot(index).ok_or(ServiceError::Failed {
            query,
            code: RESULT_NOT_FOUND,
        })
    }

    fn media_sizes(&self, media: MediaType) -> (u64, u64) {
        let s = &self.profile.storage;
        match media {
            MediaType::CtrNand => (s.ctr_nand_total, s.ctr_nand_free),
            MediaType::TwlNand => (s.twl_nand_total, s.twl_nand_free),
            MediaType::TwlPhoto => (s.twl_photo_total, s.twl_photo_free),
            MediaType::Sd => (s.sd_total, s.sd_free),
        }
    }
}

impl Platform for EmulatedPlatform {
    fn init_service(&mut self, service: Service) -> ServiceResult<()> {
        if self.profile.broken_services.contains(&service)
            || (service == Service::Mcu && self.profile.citra)
        {
            return Err(ServiceError::Init {
                service,
                code: RESULT_NOT_FOUND,
            });
        }
        *self.refcounts.entry(service).or_insert(0) += 1;
        self.log.push(ServiceEvent::Init(service));
        Ok(())
    }

    fn exit_service(&mut self, service: Service) {
        if let Some(count) = self.refcounts.get_mut(&service) {
            *count = count.saturating_sub(1);
        }
        self.log.push(ServiceEvent::Exit(service));
    }

    fn set_home_allowed(&mut self, allowed: bool) {
        self.home_allowed = allowed;
    }

    // ── Kernel ───────────────────────────────────────────────

    fn version(&self, kind: VersionKind) -> ServiceResult<String> {
        self.check(kind.query())?;
        Ok(match kind {
            VersionKind::Kernel => self.profile.kernel_version.clone(),
            VersionKind::Firm => self.profile.firm_version.clone(),
            VersionKind::System => self.profile.system_version.clone(),
        })
    }

    fn initial_version(&self) -> ServiceResult<String> {
        self.check(Query::InitialVersion)?;
        Ok(self.profile.initial_version.clone())
    }

    fn sdmc_cid(&self) -> ServiceResult<String> {
        self.check(Query::SdmcCid)?;
        Ok(self.profile.sdmc_cid.clone())
    }

    fn nand_cid(&self) -> ServiceResult<String> {
        self.check(Query::NandCid)?;
        Ok(self.profile.nand_cid.clone())
    }

    fn device_id(&self) -> ServiceResult<u64> {
        self.check(Query::DeviceId)?;
        Ok(self.profile.device_id)
    }

    // ── System ───────────────────────────────────────────────

    fn model(&self) -> ServiceResult<ConsoleModel> {
        self.check(Query::Model)?;
        Ok(self.profile.model)
    }

    fn running_hardware(&self) -> ServiceResult<String> {
        self.check(Query::RunningHardware)?;
        Ok(self.profile.running_hardware.clone())
    }

    fn region(&self) -> ServiceResult<String> {
        self.check(Query::Region)?;
        Ok(self.profile.region.clone())
    }

    fn language(&self) -> ServiceResult<String> {
        self.check(Query::Language)?;
        Ok(self.profile.language.clone())
    }

    fn local_friend_code_seed(&self) -> ServiceResult<u64> {
        self.check(Query::LocalFriendCodeSeed)?;
        Ok(self.profile.local_friend_code_seed)
    }

    fn nand_local_friend_code_seed(&self) -> ServiceResult<String> {
        self.check(Query::NandLocalFriendCodeSeed)?;
        Ok(self.profile.nand_local_friend_code_seed.clone())
    }

    fn mac_address(&self) -> ServiceResult<String> {
        self.check(Query::MacAddress)?;
        Ok(self.profile.mac_address.clone())
    }

    fn serial_number(&self) -> ServiceResult<SerialNumber> {
        self.check(Query::SerialNumber)?;
        Ok(self.profile.serial_number.clone())
    }

    fn soap_id(&self) -> ServiceResult<u64> {
        self.check(Query::SoapId)?;
        Ok(self.profile.soap_id)
    }

    // ── NNID ─────────────────────────────────────────────────

    fn persistent_id(&self) -> ServiceResult<u32> {
        self.check(Query::PersistentId)?;
        Ok(self.profile.persistent_id)
    }

    fn transferable_id_base(&self) -> ServiceResult<u64> {
        self.check(Query::TransferableIdBase)?;
        Ok(self.profile.transferable_id_base)
    }

    fn principal_id(&self) -> ServiceResult<u32> {
        self.check(Query::PrincipalId)?;
        Ok(self.profile.principal_id)
    }

    // ── Config ───────────────────────────────────────────────

    fn username(&self) -> ServiceResult<String> {
        self.check(Query::Username)?;
        Ok(self.profile.username.clone())
    }

    fn birthday(&self) -> ServiceResult<String> {
        self.check(Query::Birthday)?;
        Ok(self.profile.birthday.clone())
    }

    fn eula_version(&self) -> ServiceResult<String> {
        self.check(Query::EulaVersion)?;
        Ok(self.profile.eula_version.clone())
    }

    fn parental_pin(&self) -> ServiceResult<String> {
        self.check(Query::ParentalPin)?;
        Ok(self.profile.parental_pin.clone())
    }

    fn parental_email(&self) -> ServiceResult<String> {
        self.check(Query::ParentalEmail)?;
        Ok(self.profile.parental_email.clone())
    }

    fn parental_secret_answer(&self) -> ServiceResult<String> {
        self.check(Query::ParentalSecretAnswer)?;
        Ok(self.profile.parental_secret_answer.clone())
    }

    fn power_saving(&self) -> ServiceResult<bool> {
        self.check(Query::PowerSaving)?;
        Ok(self.profile.power_saving)
    }

    // ── Hardware ─────────────────────────────────────────────

    fn screen_types(&self) -> ServiceResult<(ScreenType, ScreenType)> {
        self.check(Query::ScreenType)?;
        Ok((self.profile.screen_upper, self.profile.screen_lower))
    }

    fn sound_output_mode(&self) -> ServiceResult<SoundOutput> {
        self.check(Query::SoundOutputMode)?;
        Ok(self.profile.sound_output)
    }

    fn audio_jack_inserted(&self) -> ServiceResult<bool> {
        self.check(Query::AudioJack)?;
        Ok(self.profile.audio_jack)
    }

    fn card_inserted(&self) -> ServiceResult<bool> {
        self.check(Query::CardSlot)?;
        Ok(self.profile.card_inserted)
    }

    fn sd_inserted(&self) -> ServiceResult<bool> {
        self.check(Query::SdInserted)?;
        Ok(self.profile.sd_inserted)
    }

    fn brightness(&self) -> ServiceResult<u32> {
        self.check(Query::Brightness)?;
        Ok(self.profile.brightness)
    }

    fn auto_brightness(&self) -> ServiceResult<bool> {
        self.check(Query::AutoBrightness)?;
        Ok(self.profile.auto_brightness)
    }

    // ── Wi-Fi ────────────────────────────────────────────────

    fn wifi_slot_configured(&self, index: usize) -> ServiceResult<bool> {
        self.check(Query::WifiSlot)?;
        Ok(index < WIFI_SLOT_COUNT && self.profile.wifi_slot(index).is_some())
    }

    fn wifi_ssid(&self, index: usize) -> ServiceResult<String> {
        Ok(self.wifi_slot(index, Query::WifiSsid)?.ssid.clone())
    }

    fn wifi_passphrase(&self, index: usize) -> ServiceResult<String> {
        Ok(self.wifi_slot(index, Query::WifiPassphrase)?.passphrase.clone())
    }

    fn wifi_security(&self, index: usize) -> ServiceResult<SecurityMode> {
        Ok(self.wifi_slot(index, Query::WifiSecurity)?.security)
    }

    fn wifi_strength(&self) -> u8 {
        self.profile.wifi_strength.min(3)
    }

    // ── Storage ──────────────────────────────────────────────

    fn total_storage(&self, media: MediaType) -> ServiceResult<u64> {
        self.check(Query::StorageTotal)?;
        Ok(self.media_sizes(media).0)
    }

    fn free_storage(&self, media: MediaType) -> ServiceResult<u64> {
        self.check(Query::StorageFree)?;
        Ok(self.media_sizes(media).1)
    }

    // ── Misc ─────────────────────────────────────────────────

    fn title_count(&self, media: TitleMedia) -> ServiceResult<u32> {
        self.check(Query::TitleCount)?;
        Ok(match media {
            TitleMedia::Sd => self.profile.sd_titles,
            TitleMedia::Nand => self.profile.nand_titles,
        })
    }

    fn ticket_count(&self) -> ServiceResult<u32> {
        self.check(Query::TicketCount)?;
        Ok(self.profile.tickets)
    }

    fn ip_address(&self) -> ServiceResult<String> {
        self.check(Query::IpAddress)?;
        if !self.profile.ip_address.is_empty() {
            return Ok(self.profile.ip_address.clone());
        }
        self.host_ip.get_or_init(host_ipv4).clone().ok_or(ServiceError::Failed {
            query: Query::IpAddress,
            code: RESULT_NOT_FOUND,
        })
    }

    // ── System state / battery ───────────────────────────────

    fn pmic_vendor_code(&self) -> ServiceResult<u8> {
        self.check(Query::PmicVendor)?;
        Ok(self.profile.pmic_vendor_code)
    }

    fn battery_vendor_code(&self) -> ServiceResult<u8> {
        self.check(Query::BatteryVendor)?;
        Ok(self.profile.battery_vendor_code)
    }

    fn raw_button_state(&self) -> ServiceResult<u32> {
        self.check(Query::RawButtonState)?;
        Ok(self.profile.raw_button_state)
    }

    fn battery_level(&self) -> ServiceResult<u8> {
        self.check(Query::BatteryLevel)?;
        Ok(self.profile.battery_level.min(100))
    }

    fn charging(&self) -> ServiceResult<bool> {
        self.check(Query::ChargeState)?;
        Ok(self.profile.charging)
    }

    fn battery_voltage(&self) -> ServiceResult<u8> {
        self.check(Query::BatteryVoltage)?;
        Ok(self.profile.battery_voltage)
    }

    fn battery_temperature(&self) -> ServiceResult<u8> {
        self.check(Query::BatteryTemperature)?;
        Ok(self.profile.battery_temperature)
    }

    fn adapter_connected(&self) -> ServiceResult<bool> {
        self.check(Query::AdapterState)?;
        Ok(self.profile.adapter_connected)
    }

    fn mcu_firmware(&self) -> ServiceResult<(u8, u8)> {
        self.check(Query::McuFirmware)?;
        Ok((self.profile.mcu_firmware_high, self.profile.mcu_firmware_low))
    }
}

/// First non-loopback IPv4 address of the host, standing in for the
/// console's own address when the profile leaves it blank.
fn host_ipv4() -> Option<String> {
    let networks = sysinfo::Networks::new_with_refreshed_list();
    networks
        .iter()
        .flat_map(|(_, data)| data.ip_networks())
        .map(|net| net.addr)
        .find(|addr| addr.is_ipv4() && !addr.is_loopback())
        .map(|addr| addr.to_string())
}
