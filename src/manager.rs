//! # Ethernet manager
//!
//! [`EthernetManager`] owns a WIZnet W5500-family driver and wraps the few
//! things application code does with it: wait for DHCP, make HTTP requests
//! and read CR-LF terminated lines off a socket, while mirroring progress on
//! an optional status pixel.
//!
//! ```rust,ignore
//! let mut eth = EthernetManager::new(spi, cs, None, Some(ColorIndicator(pixel)), client, timer, Config::default())?;
//!
//! if eth.connect()? {
//!     let response = eth.get("http://wifitest.adafruit.com/testwifi/index.html", &Options::new())?;
//! }
//! ```

#![allow(missing_docs)]
#![deny(unsafe_code)]

use crate::config::Config;
use crate::indicator::{Color, StatusIndicator};
use crate::network::error::{Error, RequestError};
use crate::network::http::{Method, Options, Requests};
use crate::network::readline::{Monotonic, read_line};
use crate::network::{DriverInit, EthernetInterface, IpConfig, Socket};
use core::net::Ipv4Addr;
use core::time::Duration;
use embedded_hal::delay::DelayNs;
use heapless::Vec;

/// Manages an Ethernet controller, its status pixel and an HTTP client.
///
/// * `D` - the controller driver
/// * `I` - the status indicator ([`NoIndicator`](crate::indicator::NoIndicator) when there is none)
/// * `H` - the HTTP client, already bound to the controller's sockets
/// * `T` - a timer providing both blocking delays and a monotonic clock
#[derive(Debug)]
pub struct EthernetManager<D, I, H, T> {
    eth: Option<D>,
    indicator: Option<I>,
    http: H,
    timer: T,
    config: Config,
    has_reset_pin: bool,
}

impl<D, I, H, T> EthernetManager<D, I, H, T>
where
    D: EthernetInterface,
    I: StatusIndicator,
    H: Requests,
    T: DelayNs + Monotonic,
{
    /// Brings up the controller on `bus`/`cs` and wraps it.
    ///
    /// When `reset` is given the driver is initialized through its reset line
    /// and [`reset`](Self::reset) becomes available. The indicator is switched
    /// off once the driver is up.
    pub fn new(
        bus: D::Bus,
        cs: D::ChipSelect,
        reset: Option<D::ResetPin>,
        indicator: Option<I>,
        http: H,
        timer: T,
        config: Config,
    ) -> Result<Self, Error>
    where
        D: DriverInit,
    {
        let has_reset_pin = reset.is_some();
        let eth = match reset {
            Some(pin) => D::init_with_reset(bus, cs, pin),
            None => D::init(bus, cs),
        }
        .map_err(|_| Error::Driver)?;

        let mut manager = Self::from_driver(eth, indicator, http, timer, config);
        manager.has_reset_pin = has_reset_pin;
        Ok(manager)
    }

    /// Wraps an already initialized driver that has no reset line.
    pub fn from_driver(eth: D, indicator: Option<I>, http: H, timer: T, config: Config) -> Self {
        let mut manager = Self {
            eth: Some(eth),
            indicator,
            http,
            timer,
            config,
            has_reset_pin: false,
        };
        manager.pixel_status(Color::OFF);
        manager
    }

    /// Releases the driver.
    ///
    /// Every later operation that needs the controller fails with
    /// [`Error::Deinitialized`]. Dropping the manager releases it as well.
    pub fn deinit(&mut self) -> Option<D> {
        debug!(self.config.debug, "Releasing ethernet interface");
        self.eth.take()
    }

    fn eth(&mut self) -> Result<&mut D, Error> {
        self.eth.as_mut().ok_or(Error::Deinitialized)
    }

    /// Whether an Ethernet cable is physically connected.
    pub fn is_connected(&mut self) -> Result<bool, Error> {
        self.eth()?.link_up().map_err(|_| Error::Driver)
    }

    /// Whether the driver's DHCP client is running.
    pub fn dhcp_enabled(&mut self) -> Result<bool, Error> {
        self.eth()?.dhcp_enabled().map_err(|_| Error::Driver)
    }

    /// Starts or stops the driver's DHCP client.
    pub fn set_dhcp_enabled(&mut self, enabled: bool) -> Result<(), Error> {
        self.eth()?
            .set_dhcp_enabled(enabled)
            .map_err(|_| Error::Driver)
    }

    /// Address, subnet mask, gateway and DNS server currently in use.
    pub fn ip_config(&mut self) -> Result<IpConfig, Error> {
        self.eth()?.ip_config().map_err(|_| Error::Driver)
    }

    /// Applies a static configuration. DHCP is turned off first so it does not
    /// overwrite the addresses.
    pub fn set_ip_config(&mut self, config: &IpConfig) -> Result<(), Error> {
        let eth = self.eth()?;
        eth.set_dhcp_enabled(false).map_err(|_| Error::Driver)?;
        eth.set_ip_config(config).map_err(|_| Error::Driver)
    }

    /// The interface address, `0.0.0.0` until one is assigned.
    pub fn ip_address(&mut self) -> Result<Ipv4Addr, Error> {
        Ok(self.ip_config()?.address)
    }

    /// Hardware-resets the controller.
    ///
    /// Fails with [`Error::ResetUnavailable`] unless a reset pin was handed
    /// to [`new`](Self::new).
    pub fn reset(&mut self) -> Result<(), Error> {
        if !self.has_reset_pin {
            return Err(Error::ResetUnavailable);
        }
        self.eth()?.reset().map_err(|_| Error::Driver)
    }

    /// Waits for the configured number of DHCP polls.
    ///
    /// See [`connect_with_attempts`](Self::connect_with_attempts).
    pub fn connect(&mut self) -> Result<bool, Error> {
        self.connect_with_attempts(self.config.connect_attempts)
    }

    /// Polls the interface address until DHCP assigns one.
    ///
    /// Returns `Ok(true)` once the address is not `0.0.0.0`, or `Ok(false)`
    /// after `attempts` unsuccessful polls, pausing for the retry interval
    /// between them. Fails with [`Error::Disconnected`] without polling when
    /// no cable is plugged in.
    pub fn connect_with_attempts(&mut self, attempts: u32) -> Result<bool, Error> {
        if !self.is_connected()? {
            return Err(Error::Disconnected);
        }

        let debug = self.config.debug;
        debug!(debug, "Checking for DHCP server...");
        self.pixel_status(Color::CONNECTING);

        let mut failure_count: u32 = 0;
        loop {
            let config = match self.ip_config() {
                Ok(config) => config,
                Err(err) => {
                    self.pixel_status(Color::OFF);
                    return Err(err);
                }
            };
            if config.is_assigned() {
                let [a, b, c, d] = config.address.octets();
                info!(debug, "IP: {}.{}.{}.{}", a, b, c, d);
                break;
            }

            failure_count += 1;
            debug!(debug, "No address yet ({}/{})", failure_count, attempts);
            if failure_count >= attempts {
                warn!(debug, "No DHCP lease after {} attempts", failure_count);
                return Ok(false);
            }
            self.timer.delay_ms(self.config.retry_interval_ms);
        }

        self.pixel_status(Color::CONNECTED);
        Ok(true)
    }

    /// Reads one CR-LF terminated line within the configured read timeout.
    ///
    /// See [`read_line`] for the failure modes. The socket is closed on
    /// every failure.
    pub fn readline<S: Socket, const N: usize>(&mut self, sock: &mut S) -> Result<Vec<u8, N>, Error> {
        let timeout = self.config.read_timeout();
        self.readline_with_timeout(sock, timeout)
    }

    /// Like [`readline`](Self::readline) with an explicit timeout; zero waits forever.
    pub fn readline_with_timeout<S: Socket, const N: usize>(
        &mut self,
        sock: &mut S,
        timeout: Duration,
    ) -> Result<Vec<u8, N>, Error> {
        let line = read_line(sock, &self.timer, timeout);
        if let Err(err) = &line {
            warn!(self.config.debug, "readline failed: {}", err);
        }
        line
    }

    /// `GET` through [`request`](Self::request).
    pub fn get(
        &mut self,
        url: &str,
        options: &Options<'_>,
    ) -> Result<H::Response, RequestError<H::Error>> {
        self.request(Method::Get, url, options)
    }

    /// `POST` through [`request`](Self::request).
    pub fn post(
        &mut self,
        url: &str,
        options: &Options<'_>,
    ) -> Result<H::Response, RequestError<H::Error>> {
        self.request(Method::Post, url, options)
    }

    /// `PUT` through [`request`](Self::request).
    pub fn put(
        &mut self,
        url: &str,
        options: &Options<'_>,
    ) -> Result<H::Response, RequestError<H::Error>> {
        self.request(Method::Put, url, options)
    }

    /// `PATCH` through [`request`](Self::request).
    pub fn patch(
        &mut self,
        url: &str,
        options: &Options<'_>,
    ) -> Result<H::Response, RequestError<H::Error>> {
        self.request(Method::Patch, url, options)
    }

    /// `DELETE` through [`request`](Self::request).
    pub fn delete(
        &mut self,
        url: &str,
        options: &Options<'_>,
    ) -> Result<H::Response, RequestError<H::Error>> {
        self.request(Method::Delete, url, options)
    }

    /// Hands a request to the HTTP client, connecting first if the link is down.
    ///
    /// The indicator shows [`Color::REQUESTING`] while the client works and is
    /// switched off afterwards, whether or not the request succeeded.
    pub fn request(
        &mut self,
        method: Method,
        url: &str,
        options: &Options<'_>,
    ) -> Result<H::Response, RequestError<H::Error>> {
        if !self.is_connected()? {
            // A lease timeout is not fatal here; the client reports the failure.
            self.connect()?;
        }

        debug!(self.config.debug, "{} {}", method, url);
        self.pixel_status(Color::REQUESTING);
        let response = self.http.request(method, url, options);
        self.pixel_status(Color::OFF);

        response.map_err(RequestError::Http)
    }

    /// Sets the status pixel, if there is one.
    pub fn pixel_status(&mut self, value: impl Into<Color>) {
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.show(value.into());
        }
    }

    /// The tunables this manager was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The driver, or `None` after [`deinit`](Self::deinit).
    pub fn driver(&self) -> Option<&D> {
        self.eth.as_ref()
    }

    /// The status indicator, if one was supplied.
    pub fn indicator(&self) -> Option<&I> {
        self.indicator.as_ref()
    }

    /// The HTTP client requests are handed to.
    pub fn client(&self) -> &H {
        &self.http
    }

    /// The timer used for retry pauses and read timeouts.
    pub fn timer(&self) -> &T {
        &self.timer
    }
}
