//! Domain-level command and result types.
//!
//! These structs are the inputs and outputs of the services in this layer.
//! Commands carry dates and times as strings (`YYYY-MM-DD`, `HH:MM` or
//! `HH:MM:SS`); parsing and validation happen inside the service so that
//! every caller gets the same rules.

pub mod bookings {
    use crate::domain::models::booking::Booking;

    /// Input for creating a new booking.
    #[derive(Debug, Clone)]
    pub struct CreateBookingCommand {
        pub booking_id: String,
        pub movie_id: String,
        pub client_id: String,
        /// Screening date, `YYYY-MM-DD`.
        pub date: String,
        /// Screening time, `HH:MM` or `HH:MM:SS`.
        pub time: String,
    }

    /// Result of creating a booking.
    #[derive(Debug, Clone)]
    pub struct CreateBookingResult {
        pub booking: Booking,
        /// Loyalty points credited to the client's card. Zero when no client
        /// record matched the command's client id.
        pub bonus_points_awarded: i64,
    }

    /// Input for replacing an existing booking.
    #[derive(Debug, Clone)]
    pub struct UpdateBookingCommand {
        pub booking_id: String,
        pub movie_id: String,
        pub client_id: String,
        pub date: String,
        pub time: String,
    }

    /// Result of updating a booking.
    #[derive(Debug, Clone)]
    pub struct UpdateBookingResult {
        pub booking: Booking,
    }

    /// Input for deleting a booking.
    #[derive(Debug, Clone)]
    pub struct DeleteBookingCommand {
        pub booking_id: String,
    }

    /// Result of deleting a booking.
    #[derive(Debug, Clone)]
    pub struct DeleteBookingResult {
        /// False when no booking matched the id.
        pub deleted: bool,
        pub success_message: String,
    }

    /// Result of listing all bookings.
    #[derive(Debug, Clone)]
    pub struct ListBookingsResult {
        pub bookings: Vec<Booking>,
    }

    /// Input for the full-text booking search.
    #[derive(Debug, Clone)]
    pub struct SearchBookingsCommand {
        pub text: String,
    }

    /// Result of the full-text booking search.
    #[derive(Debug, Clone)]
    pub struct SearchBookingsResult {
        pub bookings: Vec<Booking>,
    }

    /// Input for listing bookings inside a time-of-day window.
    #[derive(Debug, Clone)]
    pub struct BookingsByPeriodCommand {
        /// Exclusive lower bound, `HH:MM` or `HH:MM:SS`.
        pub begin: String,
        /// Exclusive upper bound, `HH:MM` or `HH:MM:SS`.
        pub end: String,
    }

    /// Result of a time-of-day window query.
    #[derive(Debug, Clone)]
    pub struct BookingsByPeriodResult {
        pub bookings: Vec<Booking>,
    }

    /// Input for deleting bookings inside a date window.
    #[derive(Debug, Clone)]
    pub struct RemoveBookingsByPeriodCommand {
        /// Exclusive lower bound, `YYYY-MM-DD`.
        pub begin: String,
        /// Exclusive upper bound, `YYYY-MM-DD`.
        pub end: String,
    }

    /// Result of a date-window delete.
    #[derive(Debug, Clone)]
    pub struct RemoveBookingsByPeriodResult {
        pub deleted_count: usize,
        pub success_message: String,
    }
}
