//! Per-pitch grouping of the day's bookings into grid columns.

use std::collections::HashMap;

use crate::models::booking::Booking;

/// One vertical lane of the grid: a specific pitch within one venue, with
/// the bookings that belong to it in the order they arrived from the fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueColumn {
    /// Column header, `"Venue {venue_id} - {pitch_name}"`.
    pub key: String,
    pub bookings: Vec<Booking>,
}

/// Column header key for a booking. Missing fields fall back to an "Unknown"
/// label so the booking still gets a lane instead of being dropped.
pub fn column_key(booking: &Booking) -> String {
    let pitch = booking.pitch_name.as_deref().unwrap_or("Unknown Pitch");
    match booking.venue_id {
        Some(venue_id) => format!("Venue {} - {}", venue_id, pitch),
        None => format!("Venue Unknown - {}", pitch),
    }
}

/// Partition bookings into per-(venue, pitch) columns.
///
/// Column order is first-encounter order from the input, not alphabetical;
/// within a column, bookings keep their input order (the engine applies no
/// chronological sort). Every input booking lands in exactly one column.
pub fn group_by_pitch(bookings: &[Booking]) -> Vec<VenueColumn> {
    let mut columns: Vec<VenueColumn> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for booking in bookings {
        let key = column_key(booking);
        match index_by_key.get(&key) {
            Some(&index) => columns[index].bookings.push(booking.clone()),
            None => {
                index_by_key.insert(key.clone(), columns.len());
                columns.push(VenueColumn {
                    key,
                    bookings: vec![booking.clone()],
                });
            }
        }
    }

    columns
}
