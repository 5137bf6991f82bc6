// Free Kick Calendar Library
// Booking time-grid layout engine for the venue booking dashboard

pub mod models;
pub mod services;
pub mod utils;
