//! HTTP request vocabulary shared by the manager and the HTTP client it drives.
//!
//! The manager does not speak HTTP itself. It hands a [`Method`], a URL and an
//! [`Options`] set to whatever implements [`Requests`] (typically a client
//! built on the controller's socket pool) and returns the response untouched.
//!
//! ```rust
//! use ethernet_manager::network::http::Options;
//!
//! #[derive(serde::Serialize)]
//! struct Reading {
//!     temperature: i32,
//! }
//!
//! let options = Options::new()
//!     .with_header("Accept", "application/json")
//!     .unwrap()
//!     .with_json(&Reading { temperature: 23 })
//!     .unwrap();
//!
//! assert_eq!(options.body(), Some(&br#"{"temperature":23}"#[..]));
//! ```

use crate::network::error::Error;
use heapless::{String, Vec};
use serde::Serialize;

pub const MAX_HEADERS: usize = 16;
pub const MAX_HEADER_NAME_LEN: usize = 64;
pub const MAX_HEADER_VALUE_LEN: usize = 256;
/// Room reserved for a serialized JSON payload.
pub const MAX_JSON_LEN: usize = 512;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// The method token as it appears on the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl core::fmt::Display for Method {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Method {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String<MAX_HEADER_NAME_LEN>,
    pub value: String<MAX_HEADER_VALUE_LEN>,
}

impl Header {
    /// Builds a header, failing if either part exceeds its fixed capacity.
    pub fn new(name: &str, value: &str) -> Result<Self, Error> {
        Ok(Self {
            name: String::try_from(name).map_err(|_| Error::Serialize)?,
            value: String::try_from(value).map_err(|_| Error::Serialize)?,
        })
    }
}

/// Optional request parameters forwarded verbatim to the HTTP client.
///
/// `data` and `json` are alternatives: a client sends `data` when it is set
/// and only falls back to `json` otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options<'a> {
    /// Raw form or text body
    pub data: Option<&'a [u8]>,
    /// Serialized JSON body
    pub json: Option<Vec<u8, MAX_JSON_LEN>>,
    /// Extra request headers
    pub headers: Vec<Header, MAX_HEADERS>,
    /// Whether the response body should be streamed instead of buffered
    pub stream: bool,
}

impl<'a> Options<'a> {
    /// An empty option set: no body, no extra headers, buffered response.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(mut self, data: &'a [u8]) -> Self {
        self.data = Some(data);
        self
    }

    /// Serializes `value` as the JSON body.
    pub fn with_json<T: Serialize>(mut self, value: &T) -> Result<Self, Error> {
        let mut buf = [0u8; MAX_JSON_LEN];
        let len = serde_json_core::to_slice(value, &mut buf).map_err(|_| Error::Serialize)?;
        self.json = Some(Vec::from_slice(&buf[..len]).map_err(|_| Error::Serialize)?);
        Ok(self)
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, Error> {
        self.headers
            .push(Header::new(name, value)?)
            .map_err(|_| Error::Serialize)?;
        Ok(self)
    }

    pub fn with_stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    /// The bytes a client should send as the request body, if any.
    pub fn body(&self) -> Option<&[u8]> {
        self.data.or(self.json.as_deref())
    }
}

/// An HTTP client able to perform a request against a URL.
///
/// The client owns its socket factory; the manager only decides *when* a
/// request is made and drives the status indicator around it.
pub trait Requests {
    /// Response object returned to the caller unmodified
    type Response;
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Perform a request.
    fn request(
        &mut self,
        method: Method,
        url: &str,
        options: &Options<'_>,
    ) -> Result<Self::Response, Self::Error>;
}
