use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use csv::{Reader, Writer};
use log::{info, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::sync::Arc;

use super::connection::CsvConnection;
use crate::domain::models::booking::Booking;
use crate::storage::traits::BookingStorage;

/// CSV-based booking repository.
///
/// Every operation reads the whole file and rewrites it on mutation, which
/// keeps insertion order stable and is plenty for a single cinema's volume.
#[derive(Clone)]
pub struct BookingRepository {
    connection: Arc<CsvConnection>,
}

impl BookingRepository {
    /// Create a new CSV booking repository.
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self { connection }
    }

    /// Read all bookings from the CSV file.
    fn read_bookings(&self) -> Result<Vec<Booking>> {
        self.connection.ensure_bookings_file_exists()?;

        let file = File::open(self.connection.bookings_file_path())?;
        let reader = BufReader::new(file);
        let mut csv_reader = Reader::from_reader(reader);

        let mut bookings = Vec::new();

        for result in csv_reader.records() {
            let record = result?;

            let booking = Booking {
                id: record.get(0).unwrap_or("").to_string(),
                movie_id: record.get(1).unwrap_or("").to_string(),
                client_id: record.get(2).unwrap_or("").to_string(),
                date: Self::parse_date(record.get(3).unwrap_or(""))?,
                time: Self::parse_time(record.get(4).unwrap_or(""))?,
            };

            bookings.push(booking);
        }

        Ok(bookings)
    }

    fn parse_date(text: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map_err(|e| anyhow::anyhow!("Failed to parse booking date '{}': {}", text, e))
    }

    fn parse_time(text: &str) -> Result<NaiveTime> {
        NaiveTime::parse_from_str(text, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
            .map_err(|e| anyhow::anyhow!("Failed to parse booking time '{}': {}", text, e))
    }

    /// Write all bookings to the CSV file, replacing it atomically.
    fn write_bookings(&self, bookings: &[Booking]) -> Result<()> {
        let path = self.connection.bookings_file_path();
        let temp_path = path.with_extension("tmp");

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;

        let writer = BufWriter::new(file);
        let mut csv_writer = Writer::from_writer(writer);

        csv_writer.write_record(&["id", "movie_id", "client_id", "date", "time"])?;

        for booking in bookings {
            csv_writer.write_record(&[
                &booking.id,
                &booking.movie_id,
                &booking.client_id,
                &booking.date_text(),
                &booking.time_text(),
            ])?;
        }

        csv_writer.flush()?;
        drop(csv_writer);
        fs::rename(&temp_path, &path)?;

        Ok(())
    }
}

impl BookingStorage for BookingRepository {
    fn store_booking(&self, booking: &Booking) -> Result<()> {
        let mut bookings = self.read_bookings()?;

        if bookings.iter().any(|b| b.id == booking.id) {
            return Err(anyhow::anyhow!("Booking already exists: {}", booking.id));
        }

        bookings.push(booking.clone());
        self.write_bookings(&bookings)?;

        info!("Stored booking {} for movie {}", booking.id, booking.movie_id);
        Ok(())
    }

    fn get_booking(&self, booking_id: &str) -> Result<Option<Booking>> {
        let bookings = self.read_bookings()?;
        Ok(bookings.into_iter().find(|b| b.id == booking_id))
    }

    fn list_bookings(&self) -> Result<Vec<Booking>> {
        self.read_bookings()
    }

    fn update_booking(&self, booking: &Booking) -> Result<()> {
        let mut bookings = self.read_bookings()?;

        match bookings.iter_mut().find(|b| b.id == booking.id) {
            Some(stored) => {
                *stored = booking.clone();
                self.write_bookings(&bookings)?;
                info!("Updated booking {}", booking.id);
                Ok(())
            }
            None => {
                warn!("Attempted to update a non-existent booking: {}", booking.id);
                Err(anyhow::anyhow!("Booking not found for update: {}", booking.id))
            }
        }
    }

    fn delete_booking(&self, booking_id: &str) -> Result<bool> {
        let mut bookings = self.read_bookings()?;
        let before = bookings.len();

        bookings.retain(|b| b.id != booking_id);

        if bookings.len() == before {
            return Ok(false);
        }

        self.write_bookings(&bookings)?;
        info!("Deleted booking {}", booking_id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_repo() -> (BookingRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path()).unwrap();
        let repo = BookingRepository::new(Arc::new(connection));
        (repo, temp_dir)
    }

    fn sample_booking(id: &str) -> Booking {
        Booking {
            id: id.to_string(),
            movie_id: "m-1".to_string(),
            client_id: "c-1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_list_bookings_empty_store() {
        let (repo, _temp_dir) = setup_test_repo();
        let bookings = repo.list_bookings().expect("Failed to list bookings");
        assert!(bookings.is_empty());
    }

    #[test]
    fn test_store_and_get_booking() {
        let (repo, _temp_dir) = setup_test_repo();

        let booking = sample_booking("b-1");
        repo.store_booking(&booking).expect("Failed to store booking");

        let retrieved = repo.get_booking("b-1").expect("Failed to get booking");
        assert_eq!(retrieved, Some(booking));

        let missing = repo.get_booking("b-2").expect("Failed to get booking");
        assert!(missing.is_none());
    }

    #[test]
    fn test_store_duplicate_booking_fails() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_booking(&sample_booking("b-1")).unwrap();
        assert!(repo.store_booking(&sample_booking("b-1")).is_err());
    }

    #[test]
    fn test_list_bookings_keeps_insertion_order() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_booking(&sample_booking("b-3")).unwrap();
        repo.store_booking(&sample_booking("b-1")).unwrap();
        repo.store_booking(&sample_booking("b-2")).unwrap();

        let ids: Vec<String> = repo
            .list_bookings()
            .unwrap()
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec!["b-3", "b-1", "b-2"]);
    }

    #[test]
    fn test_update_booking() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_booking(&sample_booking("b-1")).unwrap();

        let mut replacement = sample_booking("b-1");
        replacement.movie_id = "m-9".to_string();
        replacement.time = NaiveTime::from_hms_opt(21, 0, 0).unwrap();
        repo.update_booking(&replacement).expect("Failed to update booking");

        let stored = repo.get_booking("b-1").unwrap().unwrap();
        assert_eq!(stored.movie_id, "m-9");
        assert_eq!(stored.time_text(), "21:00");
    }

    #[test]
    fn test_update_nonexistent_booking_fails() {
        let (repo, _temp_dir) = setup_test_repo();
        assert!(repo.update_booking(&sample_booking("b-1")).is_err());
    }

    #[test]
    fn test_delete_booking() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_booking(&sample_booking("b-1")).unwrap();
        repo.store_booking(&sample_booking("b-2")).unwrap();

        assert!(repo.delete_booking("b-1").unwrap());
        assert!(!repo.delete_booking("b-1").unwrap());

        let ids: Vec<String> = repo
            .list_bookings()
            .unwrap()
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec!["b-2"]);
    }

    #[test]
    fn test_time_is_stored_without_seconds() {
        let (repo, _temp_dir) = setup_test_repo();

        let mut booking = sample_booking("b-1");
        booking.time = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        repo.store_booking(&booking).unwrap();

        let stored = repo.get_booking("b-1").unwrap().unwrap();
        assert_eq!(stored.time_text(), "09:05");
    }
}
