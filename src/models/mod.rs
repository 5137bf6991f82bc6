// Module exports for models

pub mod booking;
pub mod time_slot;
