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

//! Route records from the [`log`] crate through a [`Logger`].
//!
//! A [`log::Log`] implementation has to be shared between threads, so unlike
//! a bare [`Logger`] the bridge serializes access to the sink with a mutex.
//! The record's target is used as the tag.
//!
//! ```
//! use elog::bridge::LogBridge;
//! use elog::{Config, FnSink, Logger, StdClock};
//!
//! let uart = FnSink::new(|line: &[u8]| Ok(line.len()));
//! let logger = Logger::new(uart, StdClock::new(), Config::new());
//! LogBridge::new(logger).install().unwrap();
//! log::info!(target: "net", "link up");
//! ```

use std::sync::{Mutex, PoisonError};

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

use crate::{LogLevel, LogSink, Logger, TickSource};

/// `log` level equivalent to `level`.  `Trace` maps to `Verbose`.
#[must_use]
pub const fn from_log_level(level: Level) -> LogLevel {
    match level {
        Level::Error => LogLevel::Error,
        Level::Warn => LogLevel::Warn,
        Level::Info => LogLevel::Info,
        Level::Debug => LogLevel::Debug,
        Level::Trace => LogLevel::Verbose,
    }
}

/// `log` max level filter for a logger with threshold `level`.
#[must_use]
pub const fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::None => LevelFilter::Off,
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Verbose => LevelFilter::Trace,
    }
}

pub struct LogBridge<S, T>
where
    S: LogSink + Send,
    T: TickSource + Send,
{
    threshold: LogLevel,
    logger: Mutex<Logger<S, T>>,
}

impl<S, T> LogBridge<S, T>
where
    S: LogSink + Send,
    T: TickSource + Send,
{
    pub fn new(logger: Logger<S, T>) -> Self {
        Self {
            threshold: logger.config().level,
            logger: Mutex::new(logger),
        }
    }

    /// Consumes the bridge and returns the wrapped logger.
    pub fn into_inner(self) -> Logger<S, T> {
        self.logger
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Register the bridge as the global `log` logger and set the global max
    /// level from the logger's threshold.
    pub fn install(self) -> Result<(), SetLoggerError>
    where
        S: 'static,
        T: 'static,
    {
        let filter = level_filter(self.threshold);
        log::set_boxed_logger(Box::new(self)).map(|()| log::set_max_level(filter))
    }
}

impl<S, T> log::Log for LogBridge<S, T>
where
    S: LogSink + Send,
    T: TickSource + Send,
{
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.threshold.admits(from_log_level(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut logger = self.logger.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = logger.log(
            from_log_level(record.level()),
            record.target(),
            *record.args(),
        );
    }

    // Sinks write through on every line.
    fn flush(&self) {}
}
