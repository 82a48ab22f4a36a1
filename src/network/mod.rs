//! Collaborator traits for the Ethernet controller, its sockets and the HTTP client
//!
//! The manager never talks to hardware directly. Everything it needs from the
//! W5500 driver, the socket layer and the HTTP library is expressed here as a
//! small trait, so any driver crate (or a test double) can be plugged in.
//!

#![allow(missing_docs)]
#![deny(unsafe_code)]

use core::net::Ipv4Addr;

/// Common error types for network operations
pub mod error;

/// HTTP verb vocabulary and the request client seam
pub mod http;

/// CR-LF line reading on top of a byte socket
pub mod readline;

/// Re-exports of common traits
pub mod prelude {
    pub use super::http::Requests;
    pub use super::readline::Monotonic;
    pub use super::{Close, DriverInit, EthernetInterface, Read, Socket};
}

/// Address configuration of the interface.
///
/// Mirrors the `(ip, mask, gateway, dns)` tuple exposed by WIZnet drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpConfig {
    /// Interface address
    pub address: Ipv4Addr,
    /// Subnet mask
    pub subnet_mask: Ipv4Addr,
    /// Default gateway
    pub gateway: Ipv4Addr,
    /// DNS server
    pub dns_server: Ipv4Addr,
}

impl IpConfig {
    /// A configuration with every field set to `0.0.0.0`.
    ///
    /// This is what the controller reports until DHCP hands out a lease.
    pub const UNSET: Self = Self {
        address: Ipv4Addr::UNSPECIFIED,
        subnet_mask: Ipv4Addr::UNSPECIFIED,
        gateway: Ipv4Addr::UNSPECIFIED,
        dns_server: Ipv4Addr::UNSPECIFIED,
    };

    /// Creates a configuration from its four addresses.
    pub const fn new(
        address: Ipv4Addr,
        subnet_mask: Ipv4Addr,
        gateway: Ipv4Addr,
        dns_server: Ipv4Addr,
    ) -> Self {
        Self {
            address,
            subnet_mask,
            gateway,
            dns_server,
        }
    }

    /// Returns `true` once the interface address is something other than `0.0.0.0`.
    pub fn is_assigned(&self) -> bool {
        !self.address.is_unspecified()
    }
}

impl Default for IpConfig {
    fn default() -> Self {
        Self::UNSET
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for IpConfig {
    fn format(&self, f: defmt::Formatter) {
        let [a, b, c, d] = self.address.octets();
        let [ma, mb, mc, md] = self.subnet_mask.octets();
        let [ga, gb, gc, gd] = self.gateway.octets();
        let [da, db, dc, dd] = self.dns_server.octets();
        defmt::write!(
            f,
            "IpConfig {{ address: {}.{}.{}.{}, mask: {}.{}.{}.{}, gateway: {}.{}.{}.{}, dns: {}.{}.{}.{} }}",
            a, b, c, d, ma, mb, mc, md, ga, gb, gc, gd, da, db, dc, dd
        );
    }
}

/// The Ethernet controller as seen by the manager.
///
/// Implemented by a W5500-family driver. All addressing, DHCP and TCP/IP work
/// happens behind this trait.
pub trait EthernetInterface {
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Whether a cable is plugged in and the PHY reports link.
    fn link_up(&mut self) -> Result<bool, Self::Error>;

    /// Whether the driver is running its DHCP client.
    fn dhcp_enabled(&mut self) -> Result<bool, Self::Error>;

    /// Starts or stops the driver's DHCP client.
    fn set_dhcp_enabled(&mut self, enabled: bool) -> Result<(), Self::Error>;

    /// Current address configuration.
    fn ip_config(&mut self) -> Result<IpConfig, Self::Error>;

    /// Applies a static address configuration.
    fn set_ip_config(&mut self, config: &IpConfig) -> Result<(), Self::Error>;

    /// Pulses the hardware reset line.
    fn reset(&mut self) -> Result<(), Self::Error>;
}

/// Construction of a driver from its bus and pins.
///
/// The reset line is optional on most breakout boards, so drivers are
/// constructible with or without it.
pub trait DriverInit: EthernetInterface + Sized {
    /// Bus the controller is attached to (usually SPI)
    type Bus;
    /// Chip-select line
    type ChipSelect;
    /// Hardware reset line
    type ResetPin;

    /// Brings up the controller without a reset line.
    fn init(bus: Self::Bus, cs: Self::ChipSelect) -> Result<Self, Self::Error>;

    /// Brings up the controller, resetting it through `reset` first.
    fn init_with_reset(
        bus: Self::Bus,
        cs: Self::ChipSelect,
        reset: Self::ResetPin,
    ) -> Result<Self, Self::Error>;
}

// Socket traits
pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Read data from the socket. `Ok(0)` means no data was available.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

pub trait Close {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Close the socket
    fn close(&mut self) -> Result<(), Self::Error>;
}

/// A socket that can be read from and closed.
pub trait Socket: Read + Close {}

impl<T: Read + Close> Socket for T {}
