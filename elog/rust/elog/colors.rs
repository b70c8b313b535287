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

//! ANSI escape sequences used to color log lines on terminals that
//! understand them.

use crate::LogLevel;

pub const RESET: &str = "\x1b[0m";

pub const BLACK: &str = "\x1b[0;30m";
pub const RED: &str = "\x1b[0;31m";
pub const GREEN: &str = "\x1b[0;32m";
pub const BROWN: &str = "\x1b[0;33m";
pub const BLUE: &str = "\x1b[0;34m";
pub const PURPLE: &str = "\x1b[0;35m";
pub const CYAN: &str = "\x1b[0;36m";

pub const BOLD_BLACK: &str = "\x1b[1;30m";
pub const BOLD_RED: &str = "\x1b[1;31m";
pub const BOLD_GREEN: &str = "\x1b[1;32m";
pub const BOLD_BROWN: &str = "\x1b[1;33m";
pub const BOLD_BLUE: &str = "\x1b[1;34m";
pub const BOLD_PURPLE: &str = "\x1b[1;35m";
pub const BOLD_CYAN: &str = "\x1b[1;36m";

/// Color sequence that opens a line at `level`.
#[must_use]
pub const fn level_color(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => RED,
        LogLevel::Warn => BROWN,
        LogLevel::Debug => PURPLE,
        LogLevel::Verbose => BLUE,
        LogLevel::Info | LogLevel::None => GREEN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_use_their_colors() {
        assert_eq!(level_color(LogLevel::Error), "\x1b[0;31m");
        assert_eq!(level_color(LogLevel::Warn), "\x1b[0;33m");
        assert_eq!(level_color(LogLevel::Info), "\x1b[0;32m");
        assert_eq!(level_color(LogLevel::Debug), "\x1b[0;35m");
        assert_eq!(level_color(LogLevel::Verbose), "\x1b[0;34m");
    }

    #[test]
    fn none_level_falls_back_to_info_color() {
        assert_eq!(level_color(LogLevel::None), GREEN);
    }
}
