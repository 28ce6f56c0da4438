//! Domain model for a client.

use serde::{Deserialize, Serialize};

/// Domain model representing a client with a loyalty card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    /// Loyalty points accrued from bookings.
    pub bonus_points: i64,
}
