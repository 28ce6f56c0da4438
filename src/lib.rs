//! # Cinema Booking
//!
//! Movie-ticket booking management: create, update, delete, list and search
//! bookings, backed by storage abstractions for bookings, clients and movies.
//!
//! The crate is split into two layers:
//!
//! - **domain**: the booking service and its models. Validates that a movie
//!   exists and is on screen before taking a booking, maintains the movie's
//!   booking counter and credits loyalty bonus points to clients.
//! - **storage**: per-entity storage traits plus a file-backed reference
//!   implementation (CSV for bookings, YAML for the movie and client
//!   catalogs). Callers may substitute any storage that satisfies the traits.

pub mod domain;
pub mod storage;

pub use domain::booking_service::{BookingError, BookingService};
pub use domain::models::booking::Booking;
pub use domain::models::client::Client;
pub use domain::models::movie::Movie;
pub use storage::csv::CsvConnection;
