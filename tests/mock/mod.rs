#![allow(dead_code)]

use ethernet_manager::indicator::{Color, StatusIndicator};
use ethernet_manager::network::http::{Method, Options, Requests};
use ethernet_manager::network::readline::Monotonic;
use ethernet_manager::network::{Close, DriverInit, EthernetInterface, IpConfig, Read};
use ethernet_manager::{Config, EthernetManager};
use std::cell::Cell;
use std::collections::VecDeque;
use std::net::Ipv4Addr;

pub const LEASE: IpConfig = IpConfig::new(
    Ipv4Addr::new(192, 168, 1, 42),
    Ipv4Addr::new(255, 255, 255, 0),
    Ipv4Addr::new(192, 168, 1, 1),
    Ipv4Addr::new(8, 8, 8, 8),
);

/// Chip select that makes driver initialization fail.
pub const BAD_CS: u8 = 0xFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockDriverError;

// -------------------------
// Scripted W5500 driver
// -------------------------

#[derive(Debug)]
pub struct MockDriver {
    /// Link states returned by successive `link_up` calls.
    pub link_script: VecDeque<bool>,
    /// Link state once the script runs out.
    pub link: bool,
    /// 1-based poll on which the DHCP lease shows up.
    pub lease_on_poll: Option<usize>,
    /// 1-based poll on which reading the address fails.
    pub fail_on_poll: Option<usize>,
    pub current: IpConfig,
    pub dhcp: bool,
    pub link_checks: usize,
    pub polls: usize,
    pub resets: usize,
    pub reset_line: Option<u8>,
    pub log: Vec<&'static str>,
}

impl MockDriver {
    pub fn new(link: bool) -> Self {
        Self {
            link_script: VecDeque::new(),
            link,
            lease_on_poll: None,
            fail_on_poll: None,
            current: IpConfig::UNSET,
            dhcp: true,
            link_checks: 0,
            polls: 0,
            resets: 0,
            reset_line: None,
            log: Vec::new(),
        }
    }

    /// A driver with link and an address already leased.
    pub fn leased() -> Self {
        let mut driver = Self::new(true);
        driver.current = LEASE;
        driver
    }

    pub fn lease_on(mut self, poll: usize) -> Self {
        self.lease_on_poll = Some(poll);
        self
    }

    pub fn fail_on(mut self, poll: usize) -> Self {
        self.fail_on_poll = Some(poll);
        self
    }

    pub fn with_link_script(mut self, script: &[bool]) -> Self {
        self.link_script = script.iter().copied().collect();
        self
    }
}

impl EthernetInterface for MockDriver {
    type Error = MockDriverError;

    fn link_up(&mut self) -> Result<bool, Self::Error> {
        self.link_checks += 1;
        Ok(self.link_script.pop_front().unwrap_or(self.link))
    }

    fn dhcp_enabled(&mut self) -> Result<bool, Self::Error> {
        Ok(self.dhcp)
    }

    fn set_dhcp_enabled(&mut self, enabled: bool) -> Result<(), Self::Error> {
        self.log.push(if enabled { "dhcp on" } else { "dhcp off" });
        self.dhcp = enabled;
        Ok(())
    }

    fn ip_config(&mut self) -> Result<IpConfig, Self::Error> {
        self.polls += 1;
        if self.fail_on_poll == Some(self.polls) {
            return Err(MockDriverError);
        }
        if let Some(poll) = self.lease_on_poll {
            if self.polls >= poll {
                self.current = LEASE;
            }
        }
        Ok(self.current)
    }

    fn set_ip_config(&mut self, config: &IpConfig) -> Result<(), Self::Error> {
        self.log.push("ip config");
        self.current = *config;
        Ok(())
    }

    fn reset(&mut self) -> Result<(), Self::Error> {
        self.resets += 1;
        Ok(())
    }
}

#[derive(Debug)]
pub struct MockBus;

impl DriverInit for MockDriver {
    type Bus = MockBus;
    type ChipSelect = u8;
    type ResetPin = u8;

    fn init(_bus: MockBus, cs: u8) -> Result<Self, Self::Error> {
        if cs == BAD_CS {
            return Err(MockDriverError);
        }
        Ok(Self::leased())
    }

    fn init_with_reset(_bus: MockBus, cs: u8, reset: u8) -> Result<Self, Self::Error> {
        let mut driver = Self::init(MockBus, cs)?;
        driver.reset_line = Some(reset);
        Ok(driver)
    }
}

// -------------------------
// Status pixel
// -------------------------

#[derive(Debug, Default)]
pub struct RecordingIndicator {
    pub shown: Vec<Color>,
}

impl StatusIndicator for RecordingIndicator {
    fn show(&mut self, value: Color) {
        self.shown.push(value);
    }
}

// -------------------------
// Timer
// -------------------------

/// Clock that advances `tick_ms` on every read and by the full amount on every delay.
#[derive(Debug, Default)]
pub struct FakeTimer {
    pub now: Cell<u64>,
    pub tick_ms: u64,
    pub delays_ms: Vec<u32>,
}

impl FakeTimer {
    pub fn ticking(tick_ms: u64) -> Self {
        Self {
            tick_ms,
            ..Self::default()
        }
    }
}

impl embedded_hal::delay::DelayNs for FakeTimer {
    fn delay_ns(&mut self, ns: u32) {
        self.now.set(self.now.get() + u64::from(ns) / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
        self.now.set(self.now.get() + u64::from(ms));
    }
}

impl Monotonic for FakeTimer {
    fn now_ms(&self) -> u64 {
        let now = self.now.get();
        self.now.set(now + self.tick_ms);
        now
    }
}

// -------------------------
// Byte socket
// -------------------------

#[derive(Debug, Default)]
pub struct ByteSocket {
    pub incoming: VecDeque<u8>,
    /// Byte returned forever once `incoming` is drained.
    pub endless: Option<u8>,
    pub fail: bool,
    pub reads: usize,
    pub closed: bool,
}

impl ByteSocket {
    pub fn new(data: &[u8]) -> Self {
        Self {
            incoming: data.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn endless(byte: u8) -> Self {
        Self {
            endless: Some(byte),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> Vec<u8> {
        self.incoming.iter().copied().collect()
    }
}

impl Read for ByteSocket {
    type Error = ();

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.reads += 1;
        if self.fail {
            return Err(());
        }
        if buf.is_empty() {
            return Ok(0);
        }
        match self.incoming.pop_front().or(self.endless) {
            Some(byte) => {
                buf[0] = byte;
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

impl Close for ByteSocket {
    type Error = ();

    fn close(&mut self) -> Result<(), Self::Error> {
        self.closed = true;
        Ok(())
    }
}

// -------------------------
// HTTP client
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub method: Method,
    pub url: String,
    pub body: Option<Vec<u8>>,
    pub headers: Vec<(String, String)>,
    pub stream: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    pub status_code: u16,
    pub method: Method,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockHttpError(pub u16);

#[derive(Debug, Default)]
pub struct RecordingClient {
    pub calls: Vec<Call>,
    pub fail_with: Option<MockHttpError>,
}

impl Requests for RecordingClient {
    type Response = MockResponse;
    type Error = MockHttpError;

    fn request(
        &mut self,
        method: Method,
        url: &str,
        options: &Options<'_>,
    ) -> Result<Self::Response, Self::Error> {
        self.calls.push(Call {
            method,
            url: url.to_string(),
            body: options.body().map(|b| b.to_vec()),
            headers: options
                .headers
                .iter()
                .map(|h| (h.name.as_str().to_string(), h.value.as_str().to_string()))
                .collect(),
            stream: options.stream,
        });
        match self.fail_with {
            Some(err) => Err(err),
            None => Ok(MockResponse {
                status_code: 200,
                method,
            }),
        }
    }
}

pub type Manager = EthernetManager<MockDriver, RecordingIndicator, RecordingClient, FakeTimer>;

pub fn manager(driver: MockDriver) -> Manager {
    EthernetManager::from_driver(
        driver,
        Some(RecordingIndicator::default()),
        RecordingClient::default(),
        FakeTimer::default(),
        Config::default(),
    )
}

pub fn shown(manager: &Manager) -> Vec<Color> {
    manager.indicator().unwrap().shown.clone()
}
