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

//! Renderers for one line of a buffer dump.
//!
//! Buffers are dumped [`BYTES_PER_LINE`] bytes at a time; each function here
//! renders a single chunk as the message body of one log line.  Three
//! layouts are supported:
//!
//! * hex: `6e 6f 6c 61 ` (two digits and a space per byte).
//! * chars: the bytes themselves, unmodified.
//! * hexdump: address, two groups of eight hex bytes and an ASCII gutter:
//!
//! ```text
//! 0x3ffb4280   45 53 50 33 32 20 69 73  20 67 72 65 61 74 2c 20  |ESP32 is great, |
//! 0x3ffb42a0   74 68 20 74 68 65 20 49  44 46 2e 00              |th the IDF..|
//! ```
//!
//! Note that the chars layout passes non-printable bytes through as is while
//! the hexdump gutter replaces them with `.`.  Consumers of either format
//! may rely on this difference.

use core::fmt::{self, Write};

use crate::LineBuffer;

/// Bytes rendered per dump line.
pub const BYTES_PER_LINE: usize = 16;

const GROUP_LEN: usize = 8;

/// Number of lines needed to dump `len` bytes.
#[must_use]
pub const fn line_count(len: usize) -> usize {
    len.div_ceil(BYTES_PER_LINE)
}

/// True for bytes the hexdump gutter shows as themselves.
#[must_use]
pub const fn is_printable(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7e)
}

/// Render `chunk` as space separated two digit hex values, each followed by
/// a space.
pub fn write_hex<W: Write>(w: &mut W, chunk: &[u8]) -> fmt::Result {
    for byte in chunk {
        write!(w, "{byte:02x} ")?;
    }
    Ok(())
}

/// Copy `chunk` into the line unmodified.
///
/// Callers are expected to pass printable text; nothing is escaped.
pub fn write_chars<const N: usize>(line: &mut LineBuffer<N>, chunk: &[u8]) {
    line.push_bytes(chunk);
}

/// Render one hexdump row for `chunk`, labelled with `address`.
///
/// Rows for short chunks are padded so the ASCII gutter lines up with full
/// rows.  Only the first [`BYTES_PER_LINE`] bytes of `chunk` are rendered.
pub fn write_hexdump<W: Write>(w: &mut W, address: usize, chunk: &[u8]) -> fmt::Result {
    let chunk = &chunk[..chunk.len().min(BYTES_PER_LINE)];

    write!(w, "{address:#010x} ")?;
    for column in 0..BYTES_PER_LINE {
        if column % GROUP_LEN == 0 {
            w.write_char(' ')?;
        }
        match chunk.get(column) {
            Some(byte) => write!(w, " {byte:02x}")?,
            None => w.write_str("   ")?,
        }
    }

    w.write_str("  |")?;
    for &byte in chunk {
        w.write_char(if is_printable(byte) {
            char::from(byte)
        } else {
            '.'
        })?;
    }
    w.write_char('|')
}

#[cfg(test)]
mod tests {
    use super::*;

    type Line = LineBuffer<128>;

    fn text(line: &Line) -> &str {
        core::str::from_utf8(line.as_bytes()).unwrap()
    }

    #[test]
    fn line_count_rounds_up() {
        assert_eq!(line_count(0), 0);
        assert_eq!(line_count(1), 1);
        assert_eq!(line_count(16), 1);
        assert_eq!(line_count(17), 2);
        assert_eq!(line_count(64), 4);
    }

    #[test]
    fn hex_renders_two_digits_and_trailing_space() {
        let mut line = Line::new();
        write_hex(&mut line, b"nola").unwrap();
        assert_eq!(text(&line), "6e 6f 6c 61 ");
    }

    #[test]
    fn hex_pads_small_values() {
        let mut line = Line::new();
        write_hex(&mut line, &[0x00, 0x0a, 0xff]).unwrap();
        assert_eq!(text(&line), "00 0a ff ");
    }

    #[test]
    fn chars_pass_bytes_through_unmodified() {
        let mut line = Line::new();
        write_chars(&mut line, b"ab\0\x07");
        assert_eq!(line.as_bytes(), b"ab\0\x07");
    }

    #[test]
    fn hexdump_full_row() {
        let mut line = Line::new();
        write_hexdump(&mut line, 0x2407_fee8, b"nolila\0\0\0\0\0\0\0\0\0\0").unwrap();
        assert_eq!(
            text(&line),
            "0x2407fee8   6e 6f 6c 69 6c 61 00 00  00 00 00 00 00 00 00 00  |nolila..........|"
        );
    }

    #[test]
    fn hexdump_short_row_keeps_gutter_aligned() {
        let mut full = Line::new();
        write_hexdump(&mut full, 0x3ffb_4280, b"ESP32 is great, ").unwrap();
        let mut short = Line::new();
        write_hexdump(&mut short, 0x3ffb_42a0, b"th the IDF.\0").unwrap();

        assert_eq!(
            text(&full),
            "0x3ffb4280   45 53 50 33 32 20 69 73  20 67 72 65 61 74 2c 20  |ESP32 is great, |"
        );
        assert_eq!(
            text(&short),
            "0x3ffb42a0   74 68 20 74 68 65 20 49  44 46 2e 00              |th the IDF..|"
        );
        assert_eq!(text(&full).find('|'), text(&short).find('|'));
    }

    #[test]
    fn hexdump_gutter_has_one_char_per_byte() {
        for len in 1..=BYTES_PER_LINE {
            let row: [u8; BYTES_PER_LINE] = core::array::from_fn(|i| (i as u8).wrapping_mul(37));
            let bytes = &row[..len];
            let mut line = Line::new();
            write_hexdump(&mut line, 0, bytes).unwrap();
            let rendered = text(&line);
            let gutter = &rendered[rendered.find('|').unwrap() + 1..rendered.len() - 1];
            assert_eq!(gutter.len(), len);
            for (shown, byte) in gutter.bytes().zip(bytes) {
                let expected = if is_printable(*byte) { *byte } else { b'.' };
                assert_eq!(shown, expected);
            }
        }
    }

    #[test]
    fn hexdump_ignores_bytes_past_one_row() {
        let mut line = Line::new();
        write_hexdump(&mut line, 0, &[b'a'; 20]).unwrap();
        assert!(text(&line).ends_with("|aaaaaaaaaaaaaaaa|"));
    }
}
