//! Backend REST integration: wire-shape decoding and the booking fetcher.
//!
//! Field names and nesting follow the Free Kick backend contract and are not
//! under this crate's control; everything is decoded defensively and mapped
//! into the typed [`Booking`](crate::models::booking::Booking) record.

pub mod fetcher;
pub mod wire;

pub use fetcher::BookingFetcher;
pub use wire::decode_bookings;
