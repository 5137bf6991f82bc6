// Test fixtures - reusable test data
// Provides consistent booking data across test files

use chrono::{DateTime, FixedOffset};

use freekick_calendar::models::booking::Booking;

/// Parse an RFC 3339 timestamp, panicking on bad fixture data.
pub fn ts(raw: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(raw).unwrap_or_else(|_| panic!("bad fixture timestamp {raw}"))
}

/// Sample bookings for testing
pub mod bookings {
    use super::*;

    /// Confirmed 10:00-11:00 booking on venue 3 / Court A.
    pub fn mid_morning_court_a() -> Booking {
        Booking::builder(1)
            .venue_id(3)
            .pitch_name("Court A")
            .start(ts("2024-01-01T10:00:00+03:00"))
            .end(ts("2024-01-01T11:00:00+03:00"))
            .status("confirmed")
            .host_name("Omar")
            .players(8, 10)
            .sport_name("Football")
            .total_price(180.0)
            .build()
    }

    /// Early 07:00-08:30 booking that expands the axis below the floor.
    pub fn early_bird() -> Booking {
        Booking::builder(2)
            .venue_id(3)
            .pitch_name("Court A")
            .start(ts("2024-01-01T07:00:00+03:00"))
            .end(ts("2024-01-01T08:30:00+03:00"))
            .status("pending")
            .build()
    }

    /// Late 22:00-23:30 booking near the top of the default range.
    pub fn night_match() -> Booking {
        Booking::builder(3)
            .venue_id(3)
            .pitch_name("Court B")
            .start(ts("2024-01-01T22:00:00+03:00"))
            .end(ts("2024-01-01T23:30:00+03:00"))
            .status("completed")
            .build()
    }

    /// Soft-removed booking whose status still claims "confirmed".
    pub fn removed_booking() -> Booking {
        Booking::builder(4)
            .venue_id(3)
            .pitch_name("Court B")
            .start(ts("2024-01-01T12:00:00+03:00"))
            .end(ts("2024-01-01T13:00:00+03:00"))
            .status("confirmed")
            .is_active(false)
            .build()
    }

    /// Booking missing both grouping keys and timestamps.
    pub fn orphan_booking() -> Booking {
        Booking::builder(5).status("cancelled").build()
    }
}

/// Raw backend payloads for wire-decode tests
pub mod payloads {
    /// A day's bookings as the backend sends them, wrapped in `data`.
    pub const DAY_RESPONSE: &str = r#"{
        "data": [
            {
                "id": 1,
                "start_time": "2024-01-01T10:00:00+03:00",
                "end_time": "2024-01-01T11:00:00+03:00",
                "pitch": {"translations": {"name": "Court A"}, "venue": 3},
                "status": "confirmed",
                "is_active": true,
                "host_name": "Omar",
                "max_players": 10,
                "current_players": 8,
                "sport_name": "Football",
                "total_price": 180.0
            },
            {
                "id": 2,
                "start_time": "2024-01-01T07:00:00+03:00",
                "end_time": "2024-01-01T08:30:00+03:00",
                "pitch": {"translations": {"name": "Court A"}, "venue": 3},
                "status": "pending",
                "is_active": true
            },
            {
                "id": 3,
                "start_time": "2024-01-01T12:00:00+03:00",
                "end_time": "2024-01-01T13:00:00+03:00",
                "pitch": {"translations": {"name": "Court B"}, "venue": 3},
                "status": "confirmed",
                "is_active": false
            },
            {
                "id": 4,
                "start_time": "not-a-timestamp",
                "status": "cancelled"
            }
        ]
    }"#;
}
