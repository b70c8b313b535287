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

/// Source of the timestamp printed in every log line.
///
/// The unit is whatever the platform counts in (milliseconds since boot on
/// most HALs); the logger only prints the value.
pub trait TickSource {
    fn now(&mut self) -> u32;
}

/// Tick source backed by a function such as a HAL's `get_tick`.
pub struct FnTicks<F: FnMut() -> u32> {
    now: F,
}

impl<F: FnMut() -> u32> FnTicks<F> {
    pub const fn new(now: F) -> Self {
        Self { now }
    }
}

impl<F: FnMut() -> u32> TickSource for FnTicks<F> {
    fn now(&mut self) -> u32 {
        (self.now)()
    }
}

/// A counter that starts at `start` and advances by `step` on every read.
///
/// Stands in for a hardware timer when none is available.  A `step` of zero
/// yields a fixed timestamp.
#[derive(Clone, Copy, Debug)]
pub struct StepTicks {
    next: u32,
    step: u32,
}

impl StepTicks {
    #[must_use]
    pub const fn new(start: u32, step: u32) -> Self {
        Self { next: start, step }
    }

    #[must_use]
    pub const fn fixed(value: u32) -> Self {
        Self::new(value, 0)
    }
}

impl TickSource for StepTicks {
    fn now(&mut self) -> u32 {
        let now = self.next;
        self.next = self.next.wrapping_add(self.step);
        now
    }
}

/// Milliseconds since the clock was created.
///
/// Truncated to 32 bits, so like a hardware tick counter it wraps after
/// roughly 49.7 days.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug)]
pub struct StdClock {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl TickSource for StdClock {
    fn now(&mut self) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let millis = self.start.elapsed().as_millis() as u32;
        millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_ticks_advance_monotonically() {
        let mut ticks = StepTicks::new(4, 5);
        assert_eq!(ticks.now(), 4);
        assert_eq!(ticks.now(), 9);
        assert_eq!(ticks.now(), 14);
    }

    #[test]
    fn step_ticks_wrap_like_a_hardware_counter() {
        let mut ticks = StepTicks::new(u32::MAX, 1);
        assert_eq!(ticks.now(), u32::MAX);
        assert_eq!(ticks.now(), 0);
    }

    #[test]
    fn fixed_ticks_never_move() {
        let mut ticks = StepTicks::fixed(7);
        assert_eq!(ticks.now(), 7);
        assert_eq!(ticks.now(), 7);
    }

    #[test]
    fn fn_ticks_call_through() {
        let mut calls = 0;
        let mut ticks = FnTicks::new(|| {
            calls += 1;
            calls * 10
        });
        assert_eq!(ticks.now(), 10);
        assert_eq!(ticks.now(), 20);
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_clock_does_not_go_backwards() {
        let mut clock = StdClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
