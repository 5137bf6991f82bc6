//! Time-slot range derivation for the day grid's vertical axis.
//!
//! The axis always covers the venue's default business hours and stretches,
//! never shrinks, to include bookings outside them.

use chrono::Timelike;

use crate::models::booking::Booking;
use crate::models::time_slot::TimeSlot;
use crate::utils::date::end_hour_rounded_up;

/// First hour of the default business range.
pub const DEFAULT_OPEN_HOUR: u32 = 8;
/// Closing tick of the default business range (midnight, displayed 12:00 AM).
pub const DEFAULT_CLOSE_HOUR: u32 = 24;

/// Derive the ordered hourly ticks covering every booking's active hours,
/// union'ed with the 8:00-24:00 business-hours floor.
///
/// The result is never empty: an empty booking list yields the 17-slot
/// default range. Slots are contiguous and ascending with a step of exactly
/// one hour. Bookings with missing timestamps do not contribute to range
/// expansion; they are skipped here, not rejected.
pub fn derive_time_slots(bookings: &[Booking]) -> Vec<TimeSlot> {
    let mut earliest = DEFAULT_OPEN_HOUR;
    let mut latest = DEFAULT_CLOSE_HOUR;

    for booking in bookings {
        if let Some(start) = booking.start {
            earliest = earliest.min(start.hour());
        }
        if let Some(end) = booking.end {
            latest = latest.max(end_hour_rounded_up(end));
        }
    }

    // Keep at least one renderable hour and never run past midnight.
    let earliest = earliest.min(23);
    let latest = latest.min(24);

    (earliest..=latest).map(TimeSlot::for_hour).collect()
}
