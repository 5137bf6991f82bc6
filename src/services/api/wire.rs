//! Serde types mirroring the backend booking payload.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::booking::Booking;
use crate::utils::date::parse_timestamp;

/// Booking as the backend sends it: snake_case keys, nested pitch object,
/// every field beyond `id` optional.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiBooking {
    pub id: i64,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub pitch: Option<ApiPitch>,
    pub status: Option<String>,
    pub is_active: Option<bool>,
    pub host_name: Option<String>,
    pub max_players: Option<u32>,
    pub current_players: Option<u32>,
    pub sport_name: Option<String>,
    pub total_price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiPitch {
    pub translations: Option<ApiPitchTranslations>,
    /// Parent venue identifier.
    pub venue: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiPitchTranslations {
    pub name: Option<String>,
}

impl ApiBooking {
    /// Map the wire record into the typed booking model.
    ///
    /// Timestamps that fail to parse become `None` (the booking still
    /// renders, unpositioned); a missing `is_active` defaults to active and
    /// a missing `status` to the empty string, which classifies as the
    /// default confirmed-like category.
    pub fn into_booking(self) -> Booking {
        let (pitch_name, venue_id) = match self.pitch {
            Some(pitch) => (
                pitch.translations.and_then(|t| t.name),
                pitch.venue,
            ),
            None => (None, None),
        };

        Booking {
            id: self.id,
            start: parse_timestamp(self.start_time.as_deref()),
            end: parse_timestamp(self.end_time.as_deref()),
            pitch_name,
            venue_id,
            status: self.status.unwrap_or_default(),
            is_active: self.is_active.unwrap_or(true),
            host_name: self.host_name,
            max_players: self.max_players,
            current_players: self.current_players,
            sport_name: self.sport_name,
            total_price: self.total_price,
        }
    }
}

/// The backend wraps list responses in `{"data": [...]}`; older endpoints
/// return a bare array. Accept both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BookingsPayload {
    Wrapped { data: Vec<serde_json::Value> },
    Bare(Vec<serde_json::Value>),
}

/// Decode a bookings response body into typed bookings.
///
/// A response that is not valid JSON (or not a booking list at all) is an
/// error for the caller to surface. Individual elements that do not decode
/// are logged and skipped rather than failing the whole response.
pub fn decode_bookings(body: &str) -> Result<Vec<Booking>> {
    let payload: BookingsPayload =
        serde_json::from_str(body).context("Bookings response is not a valid booking list")?;

    let raw = match payload {
        BookingsPayload::Wrapped { data } => data,
        BookingsPayload::Bare(items) => items,
    };

    let mut bookings = Vec::with_capacity(raw.len());
    for value in raw {
        match serde_json::from_value::<ApiBooking>(value) {
            Ok(api_booking) => bookings.push(api_booking.into_booking()),
            Err(err) => log::warn!("Skipping undecodable booking element: {}", err),
        }
    }

    Ok(bookings)
}
