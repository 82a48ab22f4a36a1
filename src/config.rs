//! Manager configuration.
//!
//! Defaults match the behavior boards expect out of the box: thirty DHCP
//! polls one second apart and a one second budget for reading a line.
//! A configuration can also be loaded from a JSON blob kept in flash:
//!
//! ```rust
//! use ethernet_manager::config::Config;
//!
//! let config = Config::from_json(br#"{"debug":true,"connect_attempts":10}"#).unwrap();
//! assert!(config.debug);
//! assert_eq!(config.connect_attempts, 10);
//! assert_eq!(config.retry_interval_ms, 1000);
//! ```

#![deny(unsafe_code)]

use crate::network::error::Error;
use core::time::Duration;
use serde::Deserialize;

/// Default number of DHCP polls before [`connect`](crate::manager::EthernetManager::connect) gives up.
pub const DEFAULT_CONNECT_ATTEMPTS: u32 = 30;

/// Tunables of an [`EthernetManager`](crate::manager::EthernetManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Emit progress logs (requires the `defmt` feature).
    pub debug: bool,
    /// DHCP polls before giving up.
    pub connect_attempts: u32,
    /// Pause between DHCP polls.
    pub retry_interval_ms: u32,
    /// Budget for reading one line; `0` waits forever.
    pub read_timeout_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            connect_attempts: DEFAULT_CONNECT_ATTEMPTS,
            retry_interval_ms: 1000,
            read_timeout_ms: 1000,
        }
    }
}

impl Config {
    /// Parses a configuration, filling missing fields with their defaults.
    pub fn from_json(bytes: &[u8]) -> Result<Self, Error> {
        let (config, _) =
            serde_json_core::from_slice::<Self>(bytes).map_err(|_| Error::InvalidConfig)?;
        Ok(config)
    }

    /// Turns progress logging on or off.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// The line read budget as a [`Duration`].
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.read_timeout_ms))
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Config {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Config {{ debug: {}, connect_attempts: {}, retry_interval_ms: {}, read_timeout_ms: {} }}",
            self.debug,
            self.connect_attempts,
            self.retry_interval_ms,
            self.read_timeout_ms
        );
    }
}
