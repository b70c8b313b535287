// Copyright 2025 The Pigweed Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License. You may obtain a copy of
// the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations under
// the License.

//! # elog_status
//!
//! Status codes reported by `elog` sinks.  A sink is the equivalent of a
//! `vprintf`-family function: it either accepts a line or reports why it
//! could not.  Instead of a signed integer this is expressed as a
//! [`Result`] whose error side carries a canonical status code (the same
//! numbering Pigweed's `pw_status` uses), and the [`StatusCode`] trait turns
//! the `Result` back into a plain number when one is needed on the wire or
//! across an FFI boundary.
//!
//! # Example
//!
//! ```
//! use elog_status::{Error, Result, StatusCode};
//!
//! fn uart_write(ready: bool, line: &[u8]) -> Result<usize> {
//!     if ready { Ok(line.len()) } else { Err(Error::Unavailable) }
//! }
//!
//! assert_eq!(uart_write(true, b"I [1] app: up\n"), Ok(14));
//! assert_eq!(uart_write(false, b"").status_code(), 14);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

use core::fmt;

/// Status code for no error.
pub const OK: u32 = 0;

/// Reasons a log line could not be delivered.
///
/// Truncating an over-long line is not an error; it is reported through
/// the line buffer instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    /// The sink failed for a reason it could not classify.
    Unknown = 2,
    /// A value (for example a raw log level) was out of its valid range.
    InvalidArgument = 3,
    /// The sink timed out waiting for the transport.
    DeadlineExceeded = 4,
    /// The sink ran out of buffer space or memory.
    ResourceExhausted = 8,
    /// The transport does not support the requested operation.
    Unimplemented = 12,
    /// An invariant inside the logger was violated.
    Internal = 13,
    /// The transport is not ready; retrying later may succeed.
    Unavailable = 14,
    /// Only part of the line reached the transport.
    DataLoss = 15,
}

impl Error {
    /// Short, stable name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Error::Unknown => "UNKNOWN",
            Error::InvalidArgument => "INVALID_ARGUMENT",
            Error::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Error::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Error::Unimplemented => "UNIMPLEMENTED",
            Error::Internal => "INTERNAL",
            Error::Unavailable => "UNAVAILABLE",
            Error::DataLoss => "DATA_LOSS",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        use std::io::ErrorKind;
        match error.kind() {
            ErrorKind::WouldBlock | ErrorKind::Interrupted => Error::Unavailable,
            ErrorKind::WriteZero | ErrorKind::UnexpectedEof => Error::DataLoss,
            ErrorKind::TimedOut => Error::DeadlineExceeded,
            ErrorKind::Unsupported => Error::Unimplemented,
            ErrorKind::OutOfMemory => Error::ResourceExhausted,
            _ => Error::Unknown,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

/// Convert a Result into an status code.
pub trait StatusCode {
    /// Return a canonical status code.
    fn status_code(self) -> u32;
}

impl<T> StatusCode for Result<T> {
    fn status_code(self) -> u32 {
        match self {
            Ok(_) => OK,
            Err(e) => e as u32,
        }
    }
}
