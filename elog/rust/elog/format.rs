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

use core::fmt::{self, Write};

use crate::colors::{RESET, level_color};
use crate::{LineBuffer, LogLevel, dump};

/// Capacity of the buffer each log line is rendered into.  Longer lines are
/// truncated, keeping the color reset and newline.
pub const LINE_CAPACITY: usize = 256;

/// Body of a log line.
#[derive(Clone, Copy, Debug)]
pub enum Message<'a> {
    /// Text produced by `format_args!`.
    Args(fmt::Arguments<'a>),
    /// One chunk of a hex dump.
    Hex(&'a [u8]),
    /// One chunk of a character dump.
    Chars(&'a [u8]),
    /// One row of a hexdump, labelled with `address`.
    HexDump { address: usize, bytes: &'a [u8] },
}

impl Message<'_> {
    fn write_to<const N: usize>(&self, line: &mut LineBuffer<N>) -> fmt::Result {
        match *self {
            Message::Args(args) => line.write_fmt(args),
            Message::Hex(bytes) => dump::write_hex(line, bytes),
            Message::Chars(bytes) => {
                dump::write_chars(line, bytes);
                Ok(())
            }
            Message::HexDump { address, bytes } => dump::write_hexdump(line, address, bytes),
        }
    }
}

/// Render a complete log line into `line`:
///
/// ```text
/// <color><letter> [<tick>] <tag>: <message><reset>\n
/// ```
///
/// The color and reset sequences are only written when `colors` is set.
/// `line` is cleared first.  If the line does not fit it is cut short, but
/// the reset sequence and newline are always present.
pub fn render_line<const N: usize>(
    line: &mut LineBuffer<N>,
    level: LogLevel,
    tick: u32,
    tag: &str,
    colors: bool,
    message: &Message<'_>,
) {
    line.clear();
    line.reserve(if colors { RESET.len() + 1 } else { 1 });

    // An error here only means the line is full; `line` records that.
    let _ = write_header(line, level, tick, tag, colors).and_then(|()| message.write_to(line));

    line.release();
    if colors {
        let _ = line.write_str(RESET);
    }
    let _ = line.write_char('\n');
}

fn write_header<const N: usize>(
    line: &mut LineBuffer<N>,
    level: LogLevel,
    tick: u32,
    tag: &str,
    colors: bool,
) -> fmt::Result {
    if colors {
        line.write_str(level_color(level))?;
    }
    write!(line, "{} [{}] {}: ", level.letter(), tick, tag)
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    fn render<const N: usize>(
        level: LogLevel,
        tick: u32,
        tag: &str,
        colors: bool,
        message: Message<'_>,
    ) -> LineBuffer<N> {
        let mut line = LineBuffer::<N>::new();
        render_line(&mut line, level, tick, tag, colors, &message);
        line
    }

    #[test]
    fn plain_line_has_letter_tick_and_tag() {
        let line = render::<64>(
            LogLevel::Info,
            4,
            "OLA",
            false,
            Message::Args(format_args!("mola-I-{}", 10)),
        );
        assert_eq!(line.as_bytes(), b"I [4] OLA: mola-I-10\n");
    }

    #[test]
    fn colored_line_is_wrapped_in_level_color() {
        let line = render::<64>(
            LogLevel::Error,
            14,
            "OLA",
            true,
            Message::Args(format_args!("boom")),
        );
        assert_eq!(line.as_bytes(), b"\x1b[0;31mE [14] OLA: boom\x1b[0m\n");
    }

    #[test]
    fn every_level_uses_its_letter_and_color() {
        let cases = [
            (LogLevel::Error, "\x1b[0;31mE"),
            (LogLevel::Warn, "\x1b[0;33mW"),
            (LogLevel::Info, "\x1b[0;32mI"),
            (LogLevel::Debug, "\x1b[0;35mD"),
            (LogLevel::Verbose, "\x1b[0;34mV"),
            (LogLevel::None, "\x1b[0;32mI"),
        ];
        for (level, prefix) in cases {
            let line = render::<64>(level, 0, "t", true, Message::Args(format_args!("m")));
            assert!(line.as_bytes().starts_with(prefix.as_bytes()), "{level}");
        }
    }

    #[test]
    fn dump_messages_render_their_chunk() {
        let hex = render::<64>(LogLevel::Info, 1, "t", false, Message::Hex(b"nola"));
        assert_eq!(hex.as_bytes(), b"I [1] t: 6e 6f 6c 61 \n");

        let chars = render::<64>(LogLevel::Debug, 2, "t", false, Message::Chars(b"ab\0"));
        assert_eq!(chars.as_bytes(), b"D [2] t: ab\0\n");
    }

    #[test]
    fn overlong_message_is_truncated_with_suffix_intact() {
        let long = "x".repeat(100);
        let line = render::<32>(
            LogLevel::Warn,
            1,
            "tag",
            true,
            Message::Args(format_args!("{long}")),
        );
        let bytes = line.as_bytes();
        assert_eq!(bytes.len(), 32);
        assert!(line.is_truncated());
        assert!(bytes.starts_with(b"\x1b[0;33mW [1] tag: xxx"));
        assert!(bytes.ends_with(b"x\x1b[0m\n"));
    }

    #[test]
    fn overlong_tag_still_ends_with_newline() {
        let tag = "t".repeat(40);
        let line = render::<16>(
            LogLevel::Info,
            1,
            &tag,
            false,
            Message::Args(format_args!("never shown")),
        );
        assert_eq!(line.as_bytes().len(), 16);
        assert_eq!(line.as_bytes().last(), Some(&b'\n'));
        assert!(!line.as_bytes().windows(5).any(|w| w == b"never"));
    }

    #[test]
    fn render_reuses_buffer_from_scratch() {
        let mut line = LineBuffer::<64>::new();
        render_line(&mut line, LogLevel::Info, 1, "a", false, &Message::Hex(&[1]));
        render_line(&mut line, LogLevel::Info, 2, "b", false, &Message::Hex(&[2]));
        assert_eq!(line.as_bytes(), b"I [2] b: 02 \n");
    }
}
