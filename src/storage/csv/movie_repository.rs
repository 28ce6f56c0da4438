use anyhow::Result;
use log::{info, warn};
use std::fs;
use std::sync::Arc;

use super::connection::CsvConnection;
use crate::domain::models::movie::Movie;
use crate::storage::traits::MovieStorage;

/// YAML-based movie catalog repository.
#[derive(Clone)]
pub struct MovieRepository {
    connection: Arc<CsvConnection>,
}

impl MovieRepository {
    /// Create a new movie repository.
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self { connection }
    }

    /// Read the whole movie catalog.
    fn read_movies(&self) -> Result<Vec<Movie>> {
        let path = self.connection.movies_file_path();

        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let movies: Vec<Movie> = serde_yaml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse movie catalog: {}", e))?;
        Ok(movies)
    }

    /// Write the whole movie catalog, replacing the file atomically.
    fn write_movies(&self, movies: &[Movie]) -> Result<()> {
        let path = self.connection.movies_file_path();
        let content = serde_yaml::to_string(movies)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }
}

impl MovieStorage for MovieRepository {
    fn store_movie(&self, movie: &Movie) -> Result<()> {
        let mut movies = self.read_movies()?;

        if movies.iter().any(|m| m.id == movie.id) {
            return Err(anyhow::anyhow!("Movie already exists: {}", movie.id));
        }

        movies.push(movie.clone());
        self.write_movies(&movies)?;

        info!("Stored movie {} ({})", movie.id, movie.title);
        Ok(())
    }

    fn get_movie(&self, movie_id: &str) -> Result<Option<Movie>> {
        let movies = self.read_movies()?;
        Ok(movies.into_iter().find(|m| m.id == movie_id))
    }

    fn list_movies(&self) -> Result<Vec<Movie>> {
        let mut movies = self.read_movies()?;
        movies.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(movies)
    }

    fn update_movie(&self, movie: &Movie) -> Result<()> {
        let mut movies = self.read_movies()?;

        match movies.iter_mut().find(|m| m.id == movie.id) {
            Some(stored) => {
                *stored = movie.clone();
                self.write_movies(&movies)?;
                Ok(())
            }
            None => {
                warn!("Attempted to update a non-existent movie: {}", movie.id);
                Err(anyhow::anyhow!("Movie not found for update: {}", movie.id))
            }
        }
    }

    fn delete_movie(&self, movie_id: &str) -> Result<bool> {
        let mut movies = self.read_movies()?;
        let before = movies.len();

        movies.retain(|m| m.id != movie_id);

        if movies.len() == before {
            return Ok(false);
        }

        self.write_movies(&movies)?;
        info!("Deleted movie {}", movie_id);
        Ok(true)
    }
}
