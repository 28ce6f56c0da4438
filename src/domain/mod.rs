//! # Domain Module
//!
//! Contains the business logic for the booking system.
//!
//! ## Module Organization
//!
//! - **booking_service**: booking CRUD, search and period queries
//! - **commands**: command and result structs consumed by the services
//! - **models**: the Booking, Movie and Client domain models
//!
//! ## Business Rules
//!
//! - A booking may only be taken for a movie that exists and is on screen
//! - Each accepted booking increments the movie's booking counter by one
//! - An existing client earns 10% of the ticket price (truncated) as bonus
//!   points; an unknown client earns nothing but the booking still stands
//! - Updates replace the stored record wholesale and are not re-validated
//!
//! The domain layer is storage agnostic: services work against the traits in
//! [`crate::storage::traits`] and never touch files or connections directly.

pub mod booking_service;
pub mod commands;
pub mod models;

pub use booking_service::*;
