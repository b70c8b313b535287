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

//! `elog` is a small leveled logger for firmware.  Every log call renders
//! exactly one line:
//!
//! ```text
//! <color><letter> [<tick>] <tag>: <message><reset>
//! ```
//!
//! and hands it to a single [`LogSink`].  The timestamp comes from a
//! [`TickSource`], usually the HAL's millisecond tick.  Besides text messages
//! the logger can dump byte buffers sixteen bytes per line as hex, as raw
//! characters or as a classic hexdump with addresses and an ASCII gutter.
//!
//! Lines are rendered into a fixed size stack buffer
//! ([`LINE_CAPACITY`] bytes); anything longer is truncated rather than
//! overflowing.
//!
//! ```
//! use elog::{Config, FnSink, LineBuffer, LogLevel, Logger, StepTicks};
//! use elog::{elog_buffer_hex, elog_debug, elog_info};
//!
//! let mut console = LineBuffer::<128>::new();
//! let sink = FnSink::new(|line: &[u8]| Ok(console.push_bytes(line)));
//! let config = Config::new().with_level(LogLevel::Info).with_colors(false);
//! let mut logger = Logger::new(sink, StepTicks::new(4, 5), config);
//!
//! elog_info!(logger, "OLA", "mola {}", 10);
//! elog_debug!(logger, "OLA", "filtered out");
//! elog_buffer_hex!(logger, "OLA", b"nola");
//! drop(logger);
//!
//! assert_eq!(
//!     console.as_bytes(),
//!     b"I [4] OLA: mola 10\nI [9] OLA: 6e 6f 6c 61 \n"
//! );
//! ```
//!
//! The threshold and color setting are part of the [`Config`] a [`Logger`] is
//! built with.  A call below the threshold does not read the clock, format
//! anything or touch the sink; the macros still evaluate their arguments.
//!
//! # Features
//! * `std` (default): [`StdoutSink`], [`MemorySink`], [`StdClock`] and
//!   `Default` for a stdout [`Logger`].
//! * `log`: the [`bridge`] module, routing the `log` crate's macros through
//!   a [`Logger`] (requires `std`).
//! * `serde`: `Deserialize`/`Serialize` for [`Config`] and [`LogLevel`].
#![cfg_attr(not(feature = "std"), no_std)]

pub mod colors;
pub mod dump;
pub mod format;

mod config;
mod level;
mod line;
mod logger;
mod sink;
mod tick;

#[cfg(all(feature = "log", feature = "std"))]
pub mod bridge;

pub use config::Config;
pub use elog_status::{Error, Result};
pub use format::{LINE_CAPACITY, Message};
pub use level::LogLevel;
pub use line::LineBuffer;
pub use logger::Logger;
pub use sink::{FnSink, IoSink, LogSink};
#[cfg(feature = "std")]
pub use sink::{MemorySink, StdoutSink};
#[cfg(feature = "std")]
pub use tick::StdClock;
pub use tick::{FnTicks, StepTicks, TickSource};

/// Log a message at `level` using `core::fmt` format string semantics.
///
/// The sink's status is discarded; call [`Logger::log`] directly to observe
/// it.
///
/// ```
/// use elog::{elog, Config, FnSink, LogLevel, Logger, StepTicks};
///
/// let uart = FnSink::new(|line: &[u8]| Ok(line.len()));
/// let mut logger = Logger::new(uart, StepTicks::fixed(1), Config::new());
/// elog!(logger, LogLevel::Warn, "fan", "speed {} rpm", 1200);
/// ```
#[macro_export]
macro_rules! elog {
    ($logger:expr, $level:expr, $tag:expr, $($args:tt)+) => {{
        let _ = $logger.log($level, $tag, ::core::format_args!($($args)+));
    }};
}

/// Log an error level message.
///
/// ```
/// use elog::{elog_error, Config, FnSink, Logger, StepTicks};
///
/// let uart = FnSink::new(|line: &[u8]| Ok(line.len()));
/// let mut logger = Logger::new(uart, StepTicks::fixed(1), Config::new());
/// elog_error!(logger, "i2c", "no ack from {:#04x}", 0x50);
/// ```
#[macro_export]
macro_rules! elog_error {
    ($logger:expr, $tag:expr, $($args:tt)+) => {
        $crate::elog!($logger, $crate::LogLevel::Error, $tag, $($args)+)
    };
}

/// Log a warn level message.
#[macro_export]
macro_rules! elog_warn {
    ($logger:expr, $tag:expr, $($args:tt)+) => {
        $crate::elog!($logger, $crate::LogLevel::Warn, $tag, $($args)+)
    };
}

/// Log an info level message.
#[macro_export]
macro_rules! elog_info {
    ($logger:expr, $tag:expr, $($args:tt)+) => {
        $crate::elog!($logger, $crate::LogLevel::Info, $tag, $($args)+)
    };
}

/// Log a debug level message.
#[macro_export]
macro_rules! elog_debug {
    ($logger:expr, $tag:expr, $($args:tt)+) => {
        $crate::elog!($logger, $crate::LogLevel::Debug, $tag, $($args)+)
    };
}

/// Log a verbose level message.
#[macro_export]
macro_rules! elog_verbose {
    ($logger:expr, $tag:expr, $($args:tt)+) => {
        $crate::elog!($logger, $crate::LogLevel::Verbose, $tag, $($args)+)
    };
}

/// Log a buffer as hex bytes at `level`, sixteen bytes per line.
#[macro_export]
macro_rules! elog_buffer_hex_level {
    ($logger:expr, $tag:expr, $buffer:expr, $level:expr $(,)?) => {{
        let _ = $logger.buffer_hex($tag, $buffer, $level);
    }};
}

/// Log a buffer as hex bytes at info level.
#[macro_export]
macro_rules! elog_buffer_hex {
    ($logger:expr, $tag:expr, $buffer:expr $(,)?) => {
        $crate::elog_buffer_hex_level!($logger, $tag, $buffer, $crate::LogLevel::Info)
    };
}

/// Log a buffer of printable characters at `level`, sixteen per line.
#[macro_export]
macro_rules! elog_buffer_char_level {
    ($logger:expr, $tag:expr, $buffer:expr, $level:expr $(,)?) => {{
        let _ = $logger.buffer_char($tag, $buffer, $level);
    }};
}

/// Log a buffer of printable characters at info level.
#[macro_export]
macro_rules! elog_buffer_char {
    ($logger:expr, $tag:expr, $buffer:expr $(,)?) => {
        $crate::elog_buffer_char_level!($logger, $tag, $buffer, $crate::LogLevel::Info)
    };
}

/// Dump a buffer at `level` as a hexdump:
///
/// ```text
/// W [195] log_example: 0x3ffb4280   45 53 50 33 32 20 69 73  20 67 72 65 61 74 2c 20  |ESP32 is great, |
/// W [195] log_example: 0x3ffb4290   77 6f 72 6b 69 6e 67 20  61 6c 6f 6e 67 20 77 69  |working along wi|
/// W [205] log_example: 0x3ffb42a0   74 68 20 74 68 65 20 49  44 46 2e 00              |th the IDF..|
/// ```
///
/// Lines are a bit over 100 columns wide with a short tag.
#[macro_export]
macro_rules! elog_buffer_hexdump {
    ($logger:expr, $tag:expr, $buffer:expr, $level:expr $(,)?) => {{
        let _ = $logger.buffer_hexdump($tag, $buffer, $level);
    }};
}
