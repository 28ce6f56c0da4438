//! # File-Backed Storage
//!
//! Reference storage implementation for the booking system. Bookings live in
//! a single CSV file; the movie and client catalogs are YAML files. All
//! writes replace the whole file atomically (write to a temp file, rename).
//!
//! ## File Format
//!
//! `bookings.csv`:
//! ```csv
//! id,movie_id,client_id,date,time
//! b-101,m-7,c-3,2024-03-15,18:30
//! ```
//!
//! `movies.yaml` and `clients.yaml` hold a YAML list of records matching the
//! corresponding domain model.

pub mod booking_repository;
pub mod client_repository;
pub mod connection;
pub mod movie_repository;

pub use booking_repository::BookingRepository;
pub use client_repository::ClientRepository;
pub use connection::CsvConnection;
pub use movie_repository::MovieRepository;
