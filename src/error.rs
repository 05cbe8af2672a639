//! Typed errors returned by platform service queries.

use thiserror::Error;

use crate::platform::{Query, Service};

/// Result code the emulated platform reports for an injected failure.
/// Mirrors the "not found" summary the real services return.
pub const RESULT_NOT_FOUND: u32 = 0xC8A0_4410;

/// Error from a single platform query.
///
/// Never shown to the user directly: the aggregator turns it into an
/// unknown value and logs it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The service call returned a failure result code.
    #[error("{query} failed: 0x{code:08x}")]
    Failed { query: Query, code: u32 },
    /// The query needs a service handle that is not currently open.
    #[error("{query} requires {service}, which is not initialised")]
    NotInitialised { query: Query, service: Service },
    /// The service refused to start.
    #[error("failed to initialise {service}: 0x{code:08x}")]
    Init { service: Service, code: u32 },
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_display_includes_query_and_code() {
        let err = ServiceError::Failed {
            query: Query::WifiSsid,
            code: 0xD8E0_6406,
        };
        assert_eq!(err.to_string(), "wifi_ssid failed: 0xd8e06406");
    }

    #[test]
    fn not_initialised_display_names_service() {
        let err = ServiceError::NotInitialised {
            query: Query::BatteryTemperature,
            service: Service::Mcu,
        };
        assert_eq!(
            err.to_string(),
            "battery_temperature requires mcu::HWC, which is not initialised"
        );
    }
}
