// Booking module
// Pitch reservation model as supplied by the Free Kick backend

use chrono::{DateTime, FixedOffset};

/// A reserved time interval at a specific pitch, owned by a host/customer.
///
/// Every field except `id` is optional or defaulted: the backend payload is
/// loosely shaped and the grid engine renders best-effort rather than
/// rejecting bookings. `start`/`end` are `None` when the backend timestamp
/// was missing or unparseable; such bookings cannot be positioned but are
/// never dropped. The engine treats bookings as read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i64,
    pub start: Option<DateTime<FixedOffset>>,
    pub end: Option<DateTime<FixedOffset>>,
    /// Display name of the sub-venue/court, e.g. "Court A".
    pub pitch_name: Option<String>,
    /// Identifier of the parent venue.
    pub venue_id: Option<i64>,
    /// Free-form status string from the backend; unrecognized values get the
    /// default visual treatment. See `services::grid::status`.
    pub status: String,
    /// When false, the booking was soft-removed; overrides `status` styling.
    pub is_active: bool,
    pub host_name: Option<String>,
    pub max_players: Option<u32>,
    pub current_players: Option<u32>,
    pub sport_name: Option<String>,
    pub total_price: Option<f64>,
}

impl Booking {
    /// Create a builder for constructing bookings with optional fields.
    pub fn builder(id: i64) -> BookingBuilder {
        BookingBuilder::new(id)
    }

    /// Duration of the booking, when both timestamps are present.
    ///
    /// May be zero or negative for inverted ranges; the engine passes that
    /// through as non-positive block height rather than correcting it.
    pub fn duration(&self) -> Option<chrono::Duration> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Whether the booking carries a usable time range for positioning.
    pub fn has_time_range(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// Builder for creating bookings with optional fields.
pub struct BookingBuilder {
    booking: Booking,
}

impl BookingBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            booking: Booking {
                id,
                start: None,
                end: None,
                pitch_name: None,
                venue_id: None,
                status: String::new(),
                is_active: true,
                host_name: None,
                max_players: None,
                current_players: None,
                sport_name: None,
                total_price: None,
            },
        }
    }

    /// Set the start time
    pub fn start(mut self, start: DateTime<FixedOffset>) -> Self {
        self.booking.start = Some(start);
        self
    }

    /// Set the end time
    pub fn end(mut self, end: DateTime<FixedOffset>) -> Self {
        self.booking.end = Some(end);
        self
    }

    /// Set the pitch display name
    pub fn pitch_name(mut self, name: impl Into<String>) -> Self {
        self.booking.pitch_name = Some(name.into());
        self
    }

    /// Set the parent venue identifier
    pub fn venue_id(mut self, venue_id: i64) -> Self {
        self.booking.venue_id = Some(venue_id);
        self
    }

    /// Set the backend status string
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.booking.status = status.into();
        self
    }

    /// Mark the booking active or soft-removed
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.booking.is_active = is_active;
        self
    }

    /// Set the host/customer display name
    pub fn host_name(mut self, name: impl Into<String>) -> Self {
        self.booking.host_name = Some(name.into());
        self
    }

    /// Set current/maximum player counts
    pub fn players(mut self, current: u32, max: u32) -> Self {
        self.booking.current_players = Some(current);
        self.booking.max_players = Some(max);
        self
    }

    /// Set the sport display name
    pub fn sport_name(mut self, name: impl Into<String>) -> Self {
        self.booking.sport_name = Some(name.into());
        self
    }

    /// Set the total price
    pub fn total_price(mut self, price: f64) -> Self {
        self.booking.total_price = Some(price);
        self
    }

    pub fn build(self) -> Booking {
        self.booking
    }
}
