//! Byte-at-a-time line reader.
//!
//! WIZnet socket layers commonly lack a native read timeout, so lines are
//! pulled off the socket one byte per call and the elapsed time is checked
//! against a [`Monotonic`] clock after every byte.

use crate::network::Socket;
use crate::network::error::Error;
use core::time::Duration;
use heapless::Vec;

/// Line terminator
pub const CRLF: &[u8] = b"\r\n";

/// A millisecond clock that never goes backwards.
pub trait Monotonic {
    /// Milliseconds since an arbitrary fixed point.
    fn now_ms(&self) -> u64;
}

/// Reads from `sock` until a CR-LF pair arrives and returns the bytes before it.
///
/// A zero `timeout` disables the time check; any other value counts as at
/// least one millisecond. On every failure the socket is
/// closed before the error is returned:
///
/// * [`Error::IncompleteLine`] when a read yields no data before the terminator,
/// * [`Error::ReadTimeout`] when more than `timeout` elapses,
/// * [`Error::LineTooLong`] when the line plus terminator exceeds `N` bytes,
/// * [`Error::ReadError`] when the socket itself fails.
///
/// Bytes following the terminator are left in the socket.
pub fn read_line<S, C, const N: usize>(
    sock: &mut S,
    clock: &C,
    timeout: Duration,
) -> Result<Vec<u8, N>, Error>
where
    S: Socket,
    C: Monotonic,
{
    // Sub-millisecond budgets round up so they still expire.
    let limit_ms = match timeout.is_zero() {
        true => None,
        false => Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX).max(1)),
    };
    let started = clock.now_ms();
    let mut line: Vec<u8, N> = Vec::new();
    let mut byte = [0u8; 1];

    loop {
        let read = match sock.read(&mut byte) {
            Ok(n) => n,
            Err(_) => return fail(sock, Error::ReadError),
        };
        if read == 0 {
            return fail(sock, Error::IncompleteLine);
        }
        if line.push(byte[0]).is_err() {
            return fail(sock, Error::LineTooLong);
        }
        if line.ends_with(CRLF) {
            line.truncate(line.len() - CRLF.len());
            return Ok(line);
        }
        let expired = limit_ms.is_some_and(|limit| clock.now_ms().saturating_sub(started) > limit);
        if expired {
            return fail(sock, Error::ReadTimeout);
        }
    }
}

fn fail<S: Socket, T>(sock: &mut S, err: Error) -> Result<T, Error> {
    // The caller only cares about the read failure.
    let _ = sock.close();
    Err(err)
}
