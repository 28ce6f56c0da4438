//! Domain model for a booking.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Domain model representing a single ticket booking.
///
/// A booking links a client and a movie to a screening date and time. The
/// identifier is supplied by the caller and must be unique within the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub movie_id: String,
    pub client_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl Booking {
    /// Date text as stored and searched (`YYYY-MM-DD`).
    pub fn date_text(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Time text as stored and searched (`HH:MM`).
    pub fn time_text(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}
