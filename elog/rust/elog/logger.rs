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

use core::fmt;

use elog_status::Result;

use crate::dump::BYTES_PER_LINE;
use crate::format::{LINE_CAPACITY, Message, render_line};
use crate::{Config, LineBuffer, LogLevel, LogSink, TickSource};

/// A leveled logger writing to a single sink.
///
/// The sink, the tick source and the [`Config`] are all supplied when the
/// logger is built and stay fixed for its lifetime.  Calls below the
/// configured threshold return immediately: the clock is not read, nothing
/// is formatted and the sink is not called.
///
/// Logging is synchronous and not reentrant.  Do not log from an interrupt
/// handler that may preempt another log call on the same logger.
pub struct Logger<S: LogSink, T: TickSource> {
    sink: S,
    ticks: T,
    config: Config,
}

impl<S: LogSink, T: TickSource> Logger<S, T> {
    pub const fn new(sink: S, ticks: T, config: Config) -> Self {
        Self {
            sink,
            ticks,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_parts(self) -> (S, T, Config) {
        (self.sink, self.ticks, self.config)
    }

    /// Returns true if messages at `level` reach the sink.
    #[inline]
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.config.level.admits(level)
    }

    /// Emit one line at `level`.
    ///
    /// Returns the sink's status for the line, or `Ok(())` if the level is
    /// filtered out.
    pub fn log(&mut self, level: LogLevel, tag: &str, args: fmt::Arguments<'_>) -> Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        self.emit(level, tag, &Message::Args(args))
    }

    pub fn error(&mut self, tag: &str, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Error, tag, args)
    }

    pub fn warn(&mut self, tag: &str, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Warn, tag, args)
    }

    pub fn info(&mut self, tag: &str, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Info, tag, args)
    }

    pub fn debug(&mut self, tag: &str, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Debug, tag, args)
    }

    pub fn verbose(&mut self, tag: &str, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Verbose, tag, args)
    }

    /// Log `bytes` as hex, sixteen bytes per line.
    ///
    /// An empty buffer logs nothing.  Stops at the first line the sink
    /// rejects and returns its error.
    pub fn buffer_hex(&mut self, tag: &str, bytes: &[u8], level: LogLevel) -> Result<()> {
        self.dump(tag, bytes, level, Message::Hex)
    }

    /// Log `bytes` as raw characters, sixteen per line.
    ///
    /// The bytes are written as they are, so the buffer should only hold
    /// printable text.
    pub fn buffer_char(&mut self, tag: &str, bytes: &[u8], level: LogLevel) -> Result<()> {
        self.dump(tag, bytes, level, Message::Chars)
    }

    /// Log `bytes` as a hexdump labelled with each row's memory address.
    pub fn buffer_hexdump(&mut self, tag: &str, bytes: &[u8], level: LogLevel) -> Result<()> {
        self.buffer_hexdump_at(tag, bytes, bytes.as_ptr().addr(), level)
    }

    /// Log `bytes` as a hexdump whose first row is labelled `base`.
    ///
    /// Useful when the interesting address is not where the bytes live, for
    /// example a copy of a flash region or the offset within a file.
    pub fn buffer_hexdump_at(
        &mut self,
        tag: &str,
        bytes: &[u8],
        base: usize,
        level: LogLevel,
    ) -> Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        for (row, chunk) in bytes.chunks(BYTES_PER_LINE).enumerate() {
            let address = base.wrapping_add(row * BYTES_PER_LINE);
            self.emit(
                level,
                tag,
                &Message::HexDump {
                    address,
                    bytes: chunk,
                },
            )?;
        }
        Ok(())
    }

    fn dump<'a>(
        &mut self,
        tag: &str,
        bytes: &'a [u8],
        level: LogLevel,
        message: fn(&'a [u8]) -> Message<'a>,
    ) -> Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        for chunk in bytes.chunks(BYTES_PER_LINE) {
            self.emit(level, tag, &message(chunk))?;
        }
        Ok(())
    }

    fn emit(&mut self, level: LogLevel, tag: &str, message: &Message<'_>) -> Result<()> {
        let mut line = LineBuffer::<LINE_CAPACITY>::new();
        let tick = self.ticks.now();
        render_line(&mut line, level, tick, tag, self.config.colors, message);
        self.sink.write_line(line.as_bytes()).map(|_| ())
    }
}

#[cfg(feature = "std")]
impl Default for Logger<crate::StdoutSink, crate::StdClock> {
    fn default() -> Self {
        Self::new(crate::StdoutSink, crate::StdClock::new(), Config::default())
    }
}
