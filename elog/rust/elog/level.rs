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
use core::str::FromStr;

use elog_status::Error;

/// Log levels, ordered from most restrictive to most permissive.
///
/// The same enum is used both for the level of a message and for the
/// threshold configured on a logger.  A threshold admits every message level
/// up to and including itself: `Verbose` lets everything through and `None`
/// silences the logger.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum LogLevel {
    /// No log output.
    None = 0,
    /// Critical errors, the module can not recover on its own.
    Error = 1,
    /// Error conditions from which recovery measures have been taken.
    Warn = 2,
    /// Information messages which describe the normal flow of events.
    Info = 3,
    /// Extra information which is not necessary for normal use (values,
    /// pointers, sizes, etc).
    Debug = 4,
    /// Bigger chunks of debugging information, or frequent messages which
    /// can potentially flood the output.
    Verbose = 5,
}

impl LogLevel {
    /// All levels in severity order.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::None,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Verbose,
    ];

    /// Returns true if a logger whose threshold is `self` emits messages at
    /// `level`.
    ///
    /// `None` is not a message severity: a message tagged `None` is never
    /// emitted, whatever the threshold.
    #[must_use]
    pub const fn admits(self, level: LogLevel) -> bool {
        !matches!(level, LogLevel::None) && self as u8 >= level as u8
    }

    /// Single letter printed at the start of each log line.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            LogLevel::Error => 'E',
            LogLevel::Warn => 'W',
            LogLevel::Debug => 'D',
            LogLevel::Verbose => 'V',
            // Anything without a letter of its own prints as info.
            LogLevel::Info | LogLevel::None => 'I',
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            LogLevel::None => "none",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Verbose => "verbose",
        }
    }

    // `letter()` maps `None` to 'I', so parsing needs its own table.
    const fn short_name(self) -> &'static str {
        match self {
            LogLevel::None => "n",
            LogLevel::Error => "e",
            LogLevel::Warn => "w",
            LogLevel::Info => "i",
            LogLevel::Debug => "d",
            LogLevel::Verbose => "v",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = Error;

    // `Self::Error` would be ambiguous with the `LogLevel::Error` variant.
    fn try_from(value: u8) -> Result<Self, Error> {
        LogLevel::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(Error::InvalidArgument)
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| {
                s.eq_ignore_ascii_case(level.name())
                    || s.eq_ignore_ascii_case(level.short_name())
            })
            .ok_or(Error::InvalidArgument)
    }
}
