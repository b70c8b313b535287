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

use crate::LogLevel;

/// Logger configuration, fixed when the [`Logger`](crate::Logger) is built.
///
/// With the `serde` feature this can be read from a config file; missing
/// fields keep their defaults.
///
/// ```
/// use elog::{Config, LogLevel};
///
/// let config = Config::new().with_level(LogLevel::Warn).with_colors(false);
/// assert!(config.level.admits(LogLevel::Error));
/// assert!(!config.level.admits(LogLevel::Info));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Config {
    /// Most permissive level that is emitted.
    pub level: LogLevel,
    /// Wrap each line in ANSI color sequences.
    pub colors: bool,
}

impl Config {
    /// Everything enabled, colored output.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            level: LogLevel::Verbose,
            colors: true,
        }
    }

    #[must_use]
    pub const fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub const fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
