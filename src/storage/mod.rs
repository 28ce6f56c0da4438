//! # Storage Module
//!
//! Handles data persistence for the booking system.
//!
//! This module abstracts away the specific storage implementation and
//! provides a consistent interface for persisting and retrieving bookings,
//! movies and clients. The implementation can be swapped out (database,
//! flat files, in-memory, etc.) without affecting the domain layer.
//!
//! ## Design Principles
//!
//! - **Repository Pattern**: clean separation between domain and data access
//! - **Dependency Inversion**: the domain depends on the traits in
//!   [`traits`], never on a concrete backend
//! - **Testability**: the file-backed implementation in [`csv`] runs against
//!   any directory, so tests use a temporary one

pub mod csv;
pub mod traits;

pub use csv::CsvConnection;
pub use traits::{BookingStorage, ClientStorage, MovieStorage};
