//! Debug-gated logging.
//!
//! Messages only go out when the manager's `debug` flag is set and the crate
//! is built with the `defmt` feature. Without the feature the macros expand to
//! a tuple of their arguments, so those must be side-effect free.

#![deny(unsafe_code)]

#[cfg(feature = "defmt")]
macro_rules! debug {
    ($enabled:expr, $($arg:tt)*) => {{
        if $enabled {
            defmt::debug!($($arg)*);
        }
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! debug {
    ($enabled:expr, $($arg:tt)*) => {{
        let _ = ($enabled, $($arg)*);
    }};
}

#[cfg(feature = "defmt")]
macro_rules! info {
    ($enabled:expr, $($arg:tt)*) => {{
        if $enabled {
            defmt::info!($($arg)*);
        }
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! info {
    ($enabled:expr, $($arg:tt)*) => {{
        let _ = ($enabled, $($arg)*);
    }};
}

#[cfg(feature = "defmt")]
macro_rules! warn {
    ($enabled:expr, $($arg:tt)*) => {{
        if $enabled {
            defmt::warn!($($arg)*);
        }
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! warn {
    ($enabled:expr, $($arg:tt)*) => {{
        let _ = ($enabled, $($arg)*);
    }};
}
