use core::fmt;

/// Time of day held by the clock loop.
///
/// `seconds` and `minutes` stay in `0..60` after every [`advance`](Self::advance).
/// `hours` never rolls over; only `0..100` is displayable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeState {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl TimeState {
    /// `minutes` and `seconds` must be below 60; `advance` only normalizes
    /// counters that land exactly on their modulus.
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        debug_assert!(minutes < 60 && seconds < 60);
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Advances by one second.
    ///
    /// Both rollovers are checked every call, independently of each other, so
    /// `00:59:59` becomes `01:00:00` in a single step.
    pub fn advance(&mut self) {
        self.seconds += 1;
        if self.seconds == 60 {
            self.seconds = 0;
            self.minutes += 1;
        }
        if self.minutes == 60 {
            self.minutes = 0;
            // Register width bounds the counter.
            self.hours = self.hours.wrapping_add(1);
        }
    }

    /// Formats as `HH:MM:SS` into `buf`.
    pub fn hms<'a>(&self, buf: &'a mut [u8; 8]) -> &'a str {
        match format_no_std::show(buf, format_args!("{}", self)) {
            Ok(text) => text,
            Err(_) => "--:--:--",
        }
    }
}

impl fmt::Display for TimeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours % 100,
            self.minutes,
            self.seconds
        )
    }
}
