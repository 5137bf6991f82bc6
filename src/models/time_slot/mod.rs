// TimeSlot module
// One hourly tick on the calendar's vertical time axis

use std::fmt;

/// AM/PM half of the day for 12-hour display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Am => write!(f, "AM"),
            Period::Pm => write!(f, "PM"),
        }
    }
}

/// One hourly tick on the grid's vertical axis.
///
/// Slots are derived per render pass and never mutated; a slot list is always
/// ordered ascending by `hour24` with no gaps. `hour24` may be 24 for the
/// midnight tick closing the default business range, which displays as
/// `12:00 AM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub hour24: u32,
    pub hour12: u32,
    pub period: Period,
    /// Axis label, e.g. `"8:00 AM"`.
    pub display: String,
}

impl TimeSlot {
    /// Build the tick for a 24-hour value in `0..=24`.
    pub fn for_hour(hour24: u32) -> Self {
        let hour12 = match hour24 % 12 {
            0 => 12,
            h => h,
        };
        // Hour 24 is the midnight boundary of the next day, so it is AM.
        let period = if hour24 >= 12 && hour24 < 24 {
            Period::Pm
        } else {
            Period::Am
        };

        Self {
            hour24,
            hour12,
            period,
            display: format!("{}:00 {}", hour12, period),
        }
    }
}
