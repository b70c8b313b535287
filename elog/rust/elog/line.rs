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

use core::cmp::min;
use core::fmt;

/// A fixed capacity byte buffer that a single log line is rendered into.
///
/// Writes never overflow: anything past the capacity is dropped and the
/// buffer is marked as truncated.  The contents are always a prefix of what
/// was written, and text written through [`fmt::Write`] is only ever cut on
/// a UTF-8 character boundary.
pub struct LineBuffer<const N: usize> {
    buf: [u8; N],
    pos: usize,
    limit: usize,
    truncated: bool,
}

impl<const N: usize> LineBuffer<N> {
    /// Create an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: [0u8; N],
            pos: 0,
            limit: N,
            truncated: false,
        }
    }

    /// Bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.pos
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pos == 0
    }

    /// Space left before the current limit.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.pos)
    }

    /// True if any write was cut short.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Empty the buffer and lift any reservation.
    pub fn clear(&mut self) {
        self.pos = 0;
        self.limit = N;
        self.truncated = false;
    }

    /// Hold back the last `tail` bytes of capacity so they stay free for a
    /// suffix written after [`LineBuffer::release`].
    pub fn reserve(&mut self, tail: usize) {
        self.limit = N.saturating_sub(tail).max(self.pos);
    }

    /// Make reserved capacity available again.
    pub fn release(&mut self) {
        self.limit = N;
    }

    /// Copy as much of `bytes` as fits and return the number copied.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> usize {
        let write_len = min(self.remaining(), bytes.len());
        self.buf[self.pos..self.pos + write_len].copy_from_slice(&bytes[..write_len]);
        self.pos += write_len;
        if write_len < bytes.len() {
            self.truncated = true;
        }
        write_len
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Write for LineBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = self.remaining();
        if s.len() <= remaining {
            self.push_bytes(s.as_bytes());
            return Ok(());
        }

        let mut end = remaining;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.push_bytes(&s.as_bytes()[..end]);
        self.truncated = true;

        // Stop the formatter; there is no room for anything that follows.
        Err(fmt::Error)
    }
}
