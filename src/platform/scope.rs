//! Scoped service acquisition.
//!
//! A `ServiceScope` initialises a list of services and releases the ones it
//! actually acquired in reverse order when dropped, including on early return.

use std::ops::{Deref, DerefMut};

use tracing::{debug, warn};

use super::{Platform, Service};
use crate::error::ServiceResult;

pub struct ServiceScope<'a, P: Platform + ?Sized> {
    platform: &'a mut P,
    held: Vec<Service>,
}

impl<'a, P: Platform + ?Sized> ServiceScope<'a, P> {
    /// Initialise every service in order, failing on the first error.
    ///
    /// Services acquired before the failure are released before returning.
    pub fn acquire(platform: &'a mut P, services: &[Service]) -> ServiceResult<Self> {
        let mut scope = Self {
            platform,
            held: Vec::with_capacity(services.len()),
        };
        for &service in services {
            scope.platform.init_service(service)?;
            debug!(%service, "service initialised");
            scope.held.push(service);
        }
        Ok(scope)
    }

    /// Initialise whatever services start; failures are logged and skipped.
    ///
    /// Queries against a skipped service then fail on their own.
    pub fn acquire_available(platform: &'a mut P, services: &[Service]) -> Self {
        let mut scope = Self {
            platform,
            held: Vec::with_capacity(services.len()),
        };
        for &service in services {
            match scope.platform.init_service(service) {
                Ok(()) => scope.held.push(service),
                Err(e) => warn!(%service, error = %e, "service unavailable"),
            }
        }
        scope
    }

    /// Services held by this scope, in acquisition order.
    pub fn held(&self) -> &[Service] {
        &self.held
    }
}

impl<P: Platform + ?Sized> Deref for ServiceScope<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.platform
    }
}

impl<P: Platform + ?Sized> DerefMut for ServiceScope<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.platform
    }
}

impl<P: Platform + ?Sized> Drop for ServiceScope<'_, P> {
    fn drop(&mut self) {
        while let Some(service) = self.held.pop() {
            self.platform.exit_service(service);
            debug!(%service, "service released");
        }
    }
}
