use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use log::{debug, info, warn};
use std::collections::HashSet;
use thiserror::Error;

use crate::domain::commands::bookings::{
    BookingsByPeriodCommand, BookingsByPeriodResult, CreateBookingCommand, CreateBookingResult,
    DeleteBookingCommand, DeleteBookingResult, ListBookingsResult, RemoveBookingsByPeriodCommand,
    RemoveBookingsByPeriodResult, SearchBookingsCommand, SearchBookingsResult,
    UpdateBookingCommand, UpdateBookingResult,
};
use crate::domain::models::booking::Booking;
use crate::storage::traits::{BookingStorage, ClientStorage, MovieStorage};

/// Reasons a booking cannot be taken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// No movie in the catalog matches the requested id.
    #[error("there is no movie with id {0}")]
    MovieNotFound(String),
    /// The movie exists but is not currently being shown.
    #[error("movie {0} is not on screen")]
    MovieNotOnScreen(String),
}

/// Service for managing ticket bookings.
///
/// Orchestrates the three repositories supplied at construction time: checks
/// that the movie exists and is on screen, persists the booking, keeps the
/// movie's booking counter current and credits loyalty bonus points to the
/// client's card.
#[derive(Clone)]
pub struct BookingService<B, M, C>
where
    B: BookingStorage,
    M: MovieStorage,
    C: ClientStorage,
{
    booking_repository: B,
    movie_repository: M,
    client_repository: C,
}

impl<B, M, C> BookingService<B, M, C>
where
    B: BookingStorage,
    M: MovieStorage,
    C: ClientStorage,
{
    /// Create a new BookingService over the given repositories.
    pub fn new(booking_repository: B, movie_repository: M, client_repository: C) -> Self {
        Self {
            booking_repository,
            movie_repository,
            client_repository,
        }
    }

    /// Create a new booking.
    ///
    /// The referenced movie must exist and be on screen. On success the
    /// movie's booking counter goes up by one and, when the client exists,
    /// 10% of the ticket price (truncated toward zero) is credited to their
    /// bonus card. An unknown client earns no points; the booking still
    /// stands. Mutation order is fixed: booking, movie counter, bonus points.
    pub fn create_booking(&self, command: CreateBookingCommand) -> Result<CreateBookingResult> {
        info!(
            "Creating booking: id={}, movie={}, client={}",
            command.booking_id, command.movie_id, command.client_id
        );

        self.validate_ids(&command.booking_id, &command.movie_id)?;
        let date = parse_date(&command.date)?;
        let time = parse_time(&command.time)?;

        let movie = self
            .movie_repository
            .get_movie(&command.movie_id)?
            .ok_or_else(|| BookingError::MovieNotFound(command.movie_id.clone()))?;
        if !movie.on_screen {
            return Err(BookingError::MovieNotOnScreen(movie.id).into());
        }

        let booking = Booking {
            id: command.booking_id,
            movie_id: command.movie_id,
            client_id: command.client_id,
            date,
            time,
        };
        self.booking_repository.store_booking(&booking)?;

        let mut sold_movie = movie.clone();
        sold_movie.bookings += 1;
        self.movie_repository.update_movie(&sold_movie)?;

        let bonus_points_awarded = match self.client_repository.get_client(&booking.client_id)? {
            Some(mut client) => {
                let points = movie.bonus_points_per_ticket();
                client.bonus_points += points;
                self.client_repository.update_client(&client)?;
                debug!("Credited {} bonus points to client {}", points, client.id);
                points
            }
            None => {
                // Not an error: the booking stands, the points are simply lost.
                info!(
                    "No client with id {}; booking taken without bonus points",
                    booking.client_id
                );
                0
            }
        };

        info!("Created booking {} for movie {}", booking.id, booking.movie_id);

        Ok(CreateBookingResult {
            booking,
            bonus_points_awarded,
        })
    }

    /// Replace an existing booking wholesale.
    ///
    /// The movie and client are only validated when a booking is created;
    /// an update takes the new record as-is. Fails if no booking matches the
    /// id.
    pub fn update_booking(&self, command: UpdateBookingCommand) -> Result<UpdateBookingResult> {
        info!("Updating booking: {}", command.booking_id);

        self.validate_ids(&command.booking_id, &command.movie_id)?;
        let date = parse_date(&command.date)?;
        let time = parse_time(&command.time)?;

        let booking = Booking {
            id: command.booking_id,
            movie_id: command.movie_id,
            client_id: command.client_id,
            date,
            time,
        };
        self.booking_repository.update_booking(&booking)?;

        info!("Updated booking {}", booking.id);

        Ok(UpdateBookingResult { booking })
    }

    /// Delete a booking by id. A missing booking is not an error; the result
    /// reports whether anything was removed.
    pub fn delete_booking(&self, command: DeleteBookingCommand) -> Result<DeleteBookingResult> {
        info!("Deleting booking: {}", command.booking_id);

        let deleted = self.booking_repository.delete_booking(&command.booking_id)?;

        let success_message = if deleted {
            format!("Booking '{}' deleted successfully", command.booking_id)
        } else {
            warn!("Booking not found: {}", command.booking_id);
            format!("No booking with id '{}'", command.booking_id)
        };

        Ok(DeleteBookingResult {
            deleted,
            success_message,
        })
    }

    /// List every stored booking in repository iteration order.
    pub fn list_bookings(&self) -> Result<ListBookingsResult> {
        debug!("Listing all bookings");

        let bookings = self.booking_repository.list_bookings()?;

        debug!("Found {} bookings", bookings.len());

        Ok(ListBookingsResult { bookings })
    }

    /// Full-text search over bookings.
    ///
    /// A booking matches when the query is a substring of any of its id,
    /// movie id, client id, date text (`YYYY-MM-DD`) or time text (`HH:MM`).
    /// Each booking appears at most once in the result.
    pub fn search_bookings(&self, command: SearchBookingsCommand) -> Result<SearchBookingsResult> {
        debug!("Searching bookings for '{}'", command.text);

        let text = command.text.as_str();
        let mut seen: HashSet<String> = HashSet::new();
        let mut found = Vec::new();

        for booking in self.booking_repository.list_bookings()? {
            let matches = booking.id.contains(text)
                || booking.movie_id.contains(text)
                || booking.client_id.contains(text)
                || booking.date_text().contains(text)
                || booking.time_text().contains(text);

            if matches && seen.insert(booking.id.clone()) {
                found.push(booking);
            }
        }

        info!("Found {} bookings matching '{}'", found.len(), command.text);

        Ok(SearchBookingsResult { bookings: found })
    }

    /// List bookings whose screening time falls strictly inside the window.
    /// Both bounds are exclusive: a booking at exactly `begin` or `end` is
    /// left out.
    pub fn bookings_by_period(
        &self,
        command: BookingsByPeriodCommand,
    ) -> Result<BookingsByPeriodResult> {
        let begin = parse_time(&command.begin)?;
        let end = parse_time(&command.end)?;

        debug!("Listing bookings between {} and {}", begin, end);

        let bookings = self
            .booking_repository
            .list_bookings()?
            .into_iter()
            .filter(|b| b.time > begin && b.time < end)
            .collect();

        Ok(BookingsByPeriodResult { bookings })
    }

    /// Delete every booking whose date falls strictly inside the window.
    /// Both bounds are exclusive; boundary-date bookings are kept.
    pub fn remove_bookings_by_period(
        &self,
        command: RemoveBookingsByPeriodCommand,
    ) -> Result<RemoveBookingsByPeriodResult> {
        let begin = parse_date(&command.begin)?;
        let end = parse_date(&command.end)?;

        info!("Removing bookings between {} and {}", begin, end);

        // Collect matching ids first, then delete, so the store is never
        // mutated while being iterated.
        let matching_ids: Vec<String> = self
            .booking_repository
            .list_bookings()?
            .into_iter()
            .filter(|b| b.date > begin && b.date < end)
            .map(|b| b.id)
            .collect();

        let mut deleted_count = 0;
        for booking_id in &matching_ids {
            if self.booking_repository.delete_booking(booking_id)? {
                deleted_count += 1;
            }
        }

        info!("Removed {} bookings between {} and {}", deleted_count, begin, end);

        Ok(RemoveBookingsByPeriodResult {
            deleted_count,
            success_message: format!(
                "Removed {} bookings between {} and {}",
                deleted_count, begin, end
            ),
        })
    }

    fn validate_ids(&self, booking_id: &str, movie_id: &str) -> Result<()> {
        if booking_id.trim().is_empty() {
            return Err(anyhow::anyhow!("Booking id cannot be empty"));
        }
        if movie_id.trim().is_empty() {
            return Err(anyhow::anyhow!("Movie id cannot be empty"));
        }
        Ok(())
    }
}

/// Parse a `YYYY-MM-DD` date string.
fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", text))
}

/// Parse a `HH:MM` or `HH:MM:SS` time string.
fn parse_time(text: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(text, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
        .with_context(|| format!("Invalid time '{}', expected HH:MM or HH:MM:SS", text))
}
