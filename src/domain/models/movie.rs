//! Domain model for a movie.

use serde::{Deserialize, Serialize};

/// Domain model representing a movie in the cinema's catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    /// Ticket price.
    pub price: f64,
    /// Whether the movie is currently being shown and can be booked.
    pub on_screen: bool,
    /// Number of bookings taken for this movie, maintained by the booking
    /// service.
    pub bookings: i64,
}

impl Movie {
    /// Bonus points a client earns per ticket: 10% of the price, truncated
    /// toward zero.
    pub fn bonus_points_per_ticket(&self) -> i64 {
        (self.price / 10.0) as i64
    }
}
