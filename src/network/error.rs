//! Common error types for network operations

/// Errors raised by the Ethernet manager.
///
/// This enum is kept `Copy` and free of payloads so it stays cheap to pass
/// around in `no_std` firmware. Errors from collaborators are collapsed into
/// [`Error::Driver`] or [`Error::ReadError`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// No Ethernet cable is plugged in.
    Disconnected,
    /// The manager was de-initialized and no longer owns a driver.
    Deinitialized,
    /// A reset was requested but no reset pin was configured.
    ResetUnavailable,
    /// The peer stopped sending before a full line arrived.
    IncompleteLine,
    /// A full line did not arrive within the read timeout.
    ReadTimeout,
    /// The line did not fit in the receive buffer.
    LineTooLong,
    /// The socket reported an error while reading.
    ReadError,
    /// The Ethernet driver reported an error.
    Driver,
    /// A payload could not be serialized into its buffer.
    Serialize,
    /// A configuration blob could not be parsed.
    InvalidConfig,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Disconnected => write!(f, "Disconnected - plug an ethernet cable in"),
            Self::Deinitialized => write!(f, "Ethernet interface was de-initialized"),
            Self::ResetUnavailable => write!(
                f,
                "Reset pin must be provided to the manager prior to initialization"
            ),
            Self::IncompleteLine => write!(f, "Didn't receive full response"),
            Self::ReadTimeout => write!(f, "Timed out waiting for a full line"),
            Self::LineTooLong => write!(f, "Line exceeds receive buffer"),
            Self::ReadError => write!(f, "Socket read error"),
            Self::Driver => write!(f, "Ethernet driver error"),
            Self::Serialize => write!(f, "Payload serialization failed"),
            Self::InvalidConfig => write!(f, "Invalid configuration"),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Disconnected => defmt::write!(f, "Disconnected"),
            Error::Deinitialized => defmt::write!(f, "Deinitialized"),
            Error::ResetUnavailable => defmt::write!(f, "ResetUnavailable"),
            Error::IncompleteLine => defmt::write!(f, "IncompleteLine"),
            Error::ReadTimeout => defmt::write!(f, "ReadTimeout"),
            Error::LineTooLong => defmt::write!(f, "LineTooLong"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::Driver => defmt::write!(f, "Driver"),
            Error::Serialize => defmt::write!(f, "Serialize"),
            Error::InvalidConfig => defmt::write!(f, "InvalidConfig"),
        }
    }
}

/// Error returned by the HTTP verb methods of the manager.
///
/// The HTTP client's own error is passed through untouched.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RequestError<E> {
    /// Bringing the link up before the request failed.
    Network(Error),
    /// The HTTP client failed.
    Http(E),
}

impl<E> From<Error> for RequestError<E> {
    fn from(err: Error) -> Self {
        RequestError::Network(err)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for RequestError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Network(err) => write!(f, "{}", err),
            Self::Http(err) => write!(f, "HTTP client error: {:?}", err),
        }
    }
}

impl<E: core::fmt::Debug> core::error::Error for RequestError<E> {}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for RequestError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            RequestError::Network(err) => defmt::write!(f, "Network({})", err),
            RequestError::Http(err) => defmt::write!(f, "Http({})", err),
        }
    }
}
