//! Mapping of booking time ranges to percentage offsets inside a column.

use chrono::Timelike;

use crate::models::booking::Booking;
use crate::models::time_slot::TimeSlot;

/// Percentage placement of one booking block within its column, where the
/// column's full height spans the derived slot range.
///
/// Values are not clamped to `[0, 100]` and not rounded; pixel snapping and
/// off-grid handling belong to the rendering layer. `height` is non-positive
/// when the booking's range is inverted or zero-length, which is passed
/// through as-is rather than corrected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockPosition {
    /// Offset from the top of the column, percent.
    pub top: f64,
    /// Block height, percent.
    pub height: f64,
}

/// Compute the `{top, height}` placement for a booking against the derived
/// slot axis. Pure; each slot is assumed to occupy equal visual height.
///
/// Returns `None` when the booking has no parseable start or end timestamp
/// (such bookings are rendered unpositioned by the caller, never dropped).
pub fn position_for(booking: &Booking, slots: &[TimeSlot]) -> Option<BlockPosition> {
    let start = booking.start?;
    let end = booking.end?;
    let first_hour = slots.first()?.hour24;

    let slot_count = slots.len() as f64;
    let slot_offset = start.hour() as f64 - first_hour as f64;
    let fractional_offset = start.minute() as f64 / 60.0;
    let top = (slot_offset + fractional_offset) / slot_count * 100.0;

    let duration_minutes = (end - start).num_seconds() as f64 / 60.0;
    let height = (duration_minutes / 60.0) / slot_count * 100.0;

    Some(BlockPosition { top, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::grid::slots::derive_time_slots;
    use chrono::{DateTime, FixedOffset};

    fn ts(raw: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(raw).unwrap()
    }

    fn booking(start: &str, end: &str) -> Booking {
        Booking::builder(1).start(ts(start)).end(ts(end)).build()
    }

    fn default_slots() -> Vec<TimeSlot> {
        derive_time_slots(&[])
    }

    #[test]
    fn test_booking_at_first_slot_starts_at_top() {
        let slots = default_slots();
        let booking = booking("2024-01-01T08:00:00Z", "2024-01-01T09:00:00Z");

        let pos = position_for(&booking, &slots).unwrap();

        assert_eq!(pos.top, 0.0);
        assert!((pos.height - 100.0 / 17.0).abs() < 1e-9);
    }

    #[test]
    fn test_fractional_start_offset() {
        let slots = default_slots();
        let booking = booking("2024-01-01T08:30:00Z", "2024-01-01T09:00:00Z");

        let pos = position_for(&booking, &slots).unwrap();

        assert!((pos.top - 0.5 / 17.0 * 100.0).abs() < 1e-9);
        assert!((pos.height - 0.5 / 17.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_ninety_minute_booking_height() {
        let bookings = vec![booking("2024-01-01T07:00:00Z", "2024-01-01T08:30:00Z")];
        let slots = derive_time_slots(&bookings);

        assert_eq!(slots[0].hour24, 7);
        let pos = position_for(&bookings[0], &slots).unwrap();

        assert_eq!(pos.top, 0.0);
        assert!((pos.height - 1.5 / slots.len() as f64 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_monotonic_in_start_time() {
        let slots = default_slots();
        let earlier = booking("2024-01-01T09:00:00Z", "2024-01-01T10:00:00Z");
        let later = booking("2024-01-01T09:15:00Z", "2024-01-01T10:00:00Z");

        let pos_a = position_for(&earlier, &slots).unwrap();
        let pos_b = position_for(&later, &slots).unwrap();

        assert!(pos_a.top < pos_b.top);
    }

    #[test]
    fn test_inverted_range_yields_negative_height() {
        let slots = default_slots();
        let booking = booking("2024-01-01T10:00:00Z", "2024-01-01T09:00:00Z");

        let pos = position_for(&booking, &slots).unwrap();

        assert!(pos.height < 0.0);
    }

    #[test]
    fn test_zero_duration_yields_zero_height() {
        let slots = default_slots();
        let booking = booking("2024-01-01T10:00:00Z", "2024-01-01T10:00:00Z");

        let pos = position_for(&booking, &slots).unwrap();

        assert_eq!(pos.height, 0.0);
    }

    #[test]
    fn test_missing_timestamps_yield_none() {
        let slots = default_slots();
        let no_end = Booking::builder(1).start(ts("2024-01-01T10:00:00Z")).build();

        assert!(position_for(&no_end, &slots).is_none());
        assert!(position_for(&Booking::builder(2).build(), &slots).is_none());
    }

    #[test]
    fn test_start_before_axis_is_not_clamped() {
        // Reachable only if the axis was derived from a different booking
        // set; the engine leaves the negative offset for the renderer.
        let slots = default_slots();
        let booking = booking("2024-01-01T07:00:00Z", "2024-01-01T08:00:00Z");

        let pos = position_for(&booking, &slots).unwrap();

        assert!(pos.top < 0.0);
    }
}
