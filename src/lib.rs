//! # ethernet-manager - WIZnet Ethernet helper
//!
//! A small convenience layer for boards with a WIZnet W5500-family Ethernet
//! controller. It owns the controller driver and takes care of the chores
//! every networked sketch repeats: waiting for a DHCP lease, making HTTP
//! requests, reading CR-LF terminated lines from a socket and showing what is
//! going on with a status LED. This library is designed for embedded systems
//! and supports `no_std` environments.
//!
//! The driver, its sockets, the HTTP client and the LED are all supplied by
//! the application through the traits in [`network`] and [`indicator`]; this
//! crate implements no protocol of its own.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ethernet-manager = "0.1.0"
//! ```
//!
//! ### Connecting and fetching a page
//!
//! ```rust,no_run
//! use ethernet_manager::config::Config;
//! use ethernet_manager::indicator::NoIndicator;
//! use ethernet_manager::manager::EthernetManager;
//! use ethernet_manager::network::http::{Method, Options, Requests};
//! use ethernet_manager::network::readline::Monotonic;
//! use ethernet_manager::network::{EthernetInterface, IpConfig};
//! # use core::net::Ipv4Addr;
//! # struct W5500;
//! # impl EthernetInterface for W5500 {
//! #     type Error = ();
//! #     fn link_up(&mut self) -> Result<bool, ()> { Ok(true) }
//! #     fn dhcp_enabled(&mut self) -> Result<bool, ()> { Ok(true) }
//! #     fn set_dhcp_enabled(&mut self, _: bool) -> Result<(), ()> { Ok(()) }
//! #     fn ip_config(&mut self) -> Result<IpConfig, ()> {
//! #         let a = Ipv4Addr::new(192, 168, 1, 20);
//! #         Ok(IpConfig::new(a, a, a, a))
//! #     }
//! #     fn set_ip_config(&mut self, _: &IpConfig) -> Result<(), ()> { Ok(()) }
//! #     fn reset(&mut self) -> Result<(), ()> { Ok(()) }
//! # }
//! # struct Client;
//! # impl Requests for Client {
//! #     type Response = u16;
//! #     type Error = ();
//! #     fn request(&mut self, _: Method, _: &str, _: &Options<'_>) -> Result<u16, ()> { Ok(200) }
//! # }
//! # struct Timer;
//! # impl embedded_hal::delay::DelayNs for Timer { fn delay_ns(&mut self, _: u32) {} }
//! # impl Monotonic for Timer { fn now_ms(&self) -> u64 { 0 } }
//!
//! let mut eth = EthernetManager::from_driver(
//!     W5500,
//!     None::<NoIndicator>,
//!     Client,
//!     Timer,
//!     Config::default().with_debug(true),
//! );
//!
//! if eth.connect().unwrap() {
//!     let status = eth
//!         .get("http://wifitest.adafruit.com/testwifi/index.html", &Options::new())
//!         .unwrap();
//!     assert_eq!(status, 200);
//! }
//! ```
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod log;

/// Collaborator traits for the Ethernet controller, sockets and HTTP client,
/// plus the line reader and the crate error type.
pub mod network;

/// Status LED colors and the adapters driving a pixel.
pub mod indicator;

/// Manager tunables and JSON loading.
pub mod config;

/// The [`EthernetManager`](manager::EthernetManager) itself.
pub mod manager;

pub use config::Config;
pub use indicator::{Color, StatusIndicator};
pub use manager::EthernetManager;
pub use network::error::{Error, RequestError};
