// Service module exports

pub mod api;
pub mod config;
pub mod grid;
