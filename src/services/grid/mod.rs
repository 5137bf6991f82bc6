//! Day-grid layout engine for the booking calendar.
//!
//! Pure, synchronous, recomputed wholesale whenever the selected day, the
//! venue filter, or the underlying booking list changes. Composes three
//! steps: derive the hourly axis ([`slots`]), partition bookings into
//! per-pitch columns ([`columns`]), and map each booking's time range to a
//! percentage placement ([`position`]). Status classification and colours
//! live alongside in [`status`] and [`palette`].
//!
//! The engine never mutates its input bookings and never fails on malformed
//! data; it degrades to defaults per field.

pub mod columns;
pub mod palette;
pub mod position;
pub mod slots;
pub mod status;

use chrono::NaiveDate;

use crate::models::booking::Booking;
use crate::models::time_slot::TimeSlot;
use crate::utils::date::is_on_day;

pub use columns::{column_key, group_by_pitch, VenueColumn};
pub use palette::{style_for, Rgb, StatusStyle};
pub use position::{position_for, BlockPosition};
pub use slots::{derive_time_slots, DEFAULT_CLOSE_HOUR, DEFAULT_OPEN_HOUR};
pub use status::{classify, StatusCategory};

/// Fully derived layout for one day: the hourly axis plus the per-pitch
/// columns. Owns its derived structures; no aliasing back into the input.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGrid {
    pub slots: Vec<TimeSlot>,
    pub columns: Vec<VenueColumn>,
}

impl DayGrid {
    /// Compute the grid for a day's bookings.
    pub fn compute(bookings: &[Booking]) -> Self {
        let slots = derive_time_slots(bookings);
        let columns = group_by_pitch(bookings);
        Self { slots, columns }
    }

    /// Placement for one booking against this grid's axis.
    pub fn position_for(&self, booking: &Booking) -> Option<BlockPosition> {
        position_for(booking, &self.slots)
    }
}

/// Apply the dashboard's "selected day / selected venue" filter ahead of
/// layout. A booking belongs to a day by its start timestamp; bookings
/// without a parseable start are excluded from a day-filtered view, and a
/// `None` venue filter keeps all venues.
pub fn select_bookings(bookings: &[Booking], day: NaiveDate, venue: Option<i64>) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| match b.start {
            Some(start) => is_on_day(start, day),
            None => false,
        })
        .filter(|b| match venue {
            Some(venue_id) => b.venue_id == Some(venue_id),
            None => true,
        })
        .cloned()
        .collect()
}
