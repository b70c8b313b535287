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

//! Destinations for rendered log lines.
//!
//! A sink receives one fully formatted line per call, including the trailing
//! newline.  It is the only place where a log call touches the outside world
//! (a UART, a semihosting channel, a host terminal) so it is also the only
//! place a log call can fail.

use elog_status::{Error, Result};

/// Terminal destination for rendered log lines.
pub trait LogSink {
    /// Transmit one complete line.  Returns the number of bytes accepted.
    fn write_line(&mut self, line: &[u8]) -> Result<usize>;
}

impl<S: LogSink + ?Sized> LogSink for &mut S {
    fn write_line(&mut self, line: &[u8]) -> Result<usize> {
        (**self).write_line(line)
    }
}

/// Sink backed by a plain function or closure.
///
/// ```
/// use elog::{FnSink, LogSink};
///
/// let mut count = 0;
/// let mut sink = FnSink::new(|line: &[u8]| {
///     count += 1;
///     Ok(line.len())
/// });
/// assert_eq!(sink.write_line(b"hi\n"), Ok(3));
/// ```
pub struct FnSink<F>
where
    F: FnMut(&[u8]) -> Result<usize>,
{
    write: F,
}

impl<F> FnSink<F>
where
    F: FnMut(&[u8]) -> Result<usize>,
{
    pub const fn new(write: F) -> Self {
        Self { write }
    }
}

impl<F> LogSink for FnSink<F>
where
    F: FnMut(&[u8]) -> Result<usize>,
{
    fn write_line(&mut self, line: &[u8]) -> Result<usize> {
        (self.write)(line)
    }
}

/// Sink that writes to any [`embedded_io::Write`] transport and flushes
/// after every line.
pub struct IoSink<W: embedded_io::Write> {
    inner: W,
}

impl<W: embedded_io::Write> IoSink<W> {
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Consumes the sink and returns the wrapped transport.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: embedded_io::Write> LogSink for IoSink<W> {
    fn write_line(&mut self, line: &[u8]) -> Result<usize> {
        // `write_all` panics when the transport accepts zero bytes, so the
        // loop is spelled out here.
        let mut rest = line;
        while !rest.is_empty() {
            match self.inner.write(rest) {
                Ok(0) => return Err(Error::DataLoss),
                Ok(written) => rest = &rest[written..],
                Err(error) => return Err(io_error(error)),
            }
        }
        self.inner.flush().map_err(io_error)?;
        Ok(line.len())
    }
}

fn io_error<E: embedded_io::Error>(error: E) -> Error {
    use embedded_io::ErrorKind;
    match error.kind() {
        ErrorKind::TimedOut => Error::DeadlineExceeded,
        ErrorKind::Unsupported => Error::Unimplemented,
        ErrorKind::OutOfMemory => Error::ResourceExhausted,
        ErrorKind::WriteZero => Error::DataLoss,
        ErrorKind::Interrupted | ErrorKind::NotConnected | ErrorKind::BrokenPipe => {
            Error::Unavailable
        }
        _ => Error::Unknown,
    }
}

/// Writes each line to the process standard output.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

#[cfg(feature = "std")]
impl LogSink for StdoutSink {
    fn write_line(&mut self, line: &[u8]) -> Result<usize> {
        use std::io::Write;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(line)?;
        stdout.flush()?;
        Ok(line.len())
    }
}

/// Keeps every line in memory.  Intended for host side tests.
#[cfg(feature = "std")]
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    lines: std::vec::Vec<std::vec::Vec<u8>>,
}

#[cfg(feature = "std")]
impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw lines in the order they were written.
    #[must_use]
    pub fn lines(&self) -> &[std::vec::Vec<u8>] {
        &self.lines
    }

    /// Line `index` decoded as text, with invalid UTF-8 replaced.
    #[must_use]
    pub fn text(&self, index: usize) -> Option<std::string::String> {
        self.lines
            .get(index)
            .map(|line| std::string::String::from_utf8_lossy(line).into_owned())
    }

    /// Forget all recorded lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(feature = "std")]
impl LogSink for MemorySink {
    fn write_line(&mut self, line: &[u8]) -> Result<usize> {
        self.lines.push(line.to_vec());
        Ok(line.len())
    }
}
