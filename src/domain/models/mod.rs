//! Domain models for the booking system.

pub mod booking;
pub mod client;
pub mod movie;

pub use booking::Booking;
pub use client::Client;
pub use movie::Movie;
