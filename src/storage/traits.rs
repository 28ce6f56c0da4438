//! # Storage Traits
//!
//! Defines the storage abstraction traits that allow different storage
//! backends to be used interchangeably by the domain layer. Each entity gets
//! its own trait carrying the same five operations: store, get by id, list
//! all, update, delete.

use anyhow::Result;

use crate::domain::models::booking::Booking;
use crate::domain::models::client::Client;
use crate::domain::models::movie::Movie;

/// Trait defining the interface for booking storage operations.
pub trait BookingStorage: Send + Sync {
    /// Store a new booking. Fails if a booking with the same id exists.
    fn store_booking(&self, booking: &Booking) -> Result<()>;

    /// Retrieve a specific booking by id.
    fn get_booking(&self, booking_id: &str) -> Result<Option<Booking>>;

    /// List all bookings in insertion order.
    fn list_bookings(&self) -> Result<Vec<Booking>>;

    /// Replace the stored booking with the same id. Fails if absent.
    fn update_booking(&self, booking: &Booking) -> Result<()>;

    /// Delete a booking by id.
    /// Returns true if the booking was found and deleted, false otherwise.
    fn delete_booking(&self, booking_id: &str) -> Result<bool>;
}

/// Trait defining the interface for movie storage operations.
///
/// The booking service only reads movies and increments their booking
/// counter; the rest of the contract exists for the catalog's owner.
pub trait MovieStorage: Send + Sync {
    /// Store a new movie. Fails if a movie with the same id exists.
    fn store_movie(&self, movie: &Movie) -> Result<()>;

    /// Retrieve a specific movie by id.
    fn get_movie(&self, movie_id: &str) -> Result<Option<Movie>>;

    /// List all movies ordered by title.
    fn list_movies(&self) -> Result<Vec<Movie>>;

    /// Replace the stored movie with the same id. Fails if absent.
    fn update_movie(&self, movie: &Movie) -> Result<()>;

    /// Delete a movie by id.
    /// Returns true if the movie was found and deleted, false otherwise.
    fn delete_movie(&self, movie_id: &str) -> Result<bool>;
}

/// Trait defining the interface for client storage operations.
pub trait ClientStorage: Send + Sync {
    /// Store a new client. Fails if a client with the same id exists.
    fn store_client(&self, client: &Client) -> Result<()>;

    /// Retrieve a specific client by id.
    fn get_client(&self, client_id: &str) -> Result<Option<Client>>;

    /// List all clients ordered by name.
    fn list_clients(&self) -> Result<Vec<Client>>;

    /// Replace the stored client with the same id. Fails if absent.
    fn update_client(&self, client: &Client) -> Result<()>;

    /// Delete a client by id.
    /// Returns true if the client was found and deleted, false otherwise.
    fn delete_client(&self, client_id: &str) -> Result<bool>;
}
