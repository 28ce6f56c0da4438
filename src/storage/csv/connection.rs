use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// CsvConnection manages file paths and ensures the data files exist under
/// the base directory.
#[derive(Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a new connection with a base directory, creating the directory
    /// if it doesn't exist.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {:?}", base_path);
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// The directory all data files live in.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the bookings CSV file.
    pub fn bookings_file_path(&self) -> PathBuf {
        self.base_directory.join("bookings.csv")
    }

    /// Path of the movie catalog file.
    pub fn movies_file_path(&self) -> PathBuf {
        self.base_directory.join("movies.yaml")
    }

    /// Path of the client catalog file.
    pub fn clients_file_path(&self) -> PathBuf {
        self.base_directory.join("clients.yaml")
    }

    /// Ensure the bookings CSV exists with its header row.
    pub fn ensure_bookings_file_exists(&self) -> Result<()> {
        let path = self.bookings_file_path();
        if !path.exists() {
            fs::write(&path, "id,movie_id,client_id,date,time\n")?;
            info!("Created bookings file: {:?}", path);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_base_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("cinema").join("data");

        let connection = CsvConnection::new(&nested).unwrap();

        assert!(nested.exists());
        assert_eq!(connection.base_directory(), nested.as_path());
    }

    #[test]
    fn test_ensure_bookings_file_writes_header_once() {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path()).unwrap();

        connection.ensure_bookings_file_exists().unwrap();
        let header = std::fs::read_to_string(connection.bookings_file_path()).unwrap();
        assert_eq!(header, "id,movie_id,client_id,date,time\n");

        // A second call must not truncate an existing file.
        std::fs::write(
            connection.bookings_file_path(),
            "id,movie_id,client_id,date,time\nb-1,m-1,c-1,2024-03-15,18:30\n",
        )
        .unwrap();
        connection.ensure_bookings_file_exists().unwrap();
        let content = std::fs::read_to_string(connection.bookings_file_path()).unwrap();
        assert!(content.contains("b-1"));
    }
}
