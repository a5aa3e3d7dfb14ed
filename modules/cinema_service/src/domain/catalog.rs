//! Movie catalog - CRUD over movies keyed by unique title

use super::repository::{MovieRepository, RepoError};
use super::validation::{validate_movie_patch, validate_new_movie};
use crate::config::Config;
use crate::contract::{CinemaError, Movie, MoviePatch, NewMovie};
use std::sync::Arc;

pub struct MovieCatalog {
    movies: Arc<dyn MovieRepository>,
    config: Config,
}

impl MovieCatalog {
    pub fn new(movies: Arc<dyn MovieRepository>, config: Config) -> Self {
        Self { movies, config }
    }

    /// Add a movie; a duplicate title is a conflict
    pub async fn create(&self, movie: NewMovie) -> Result<Movie, CinemaError> {
        validate_new_movie(&movie, &self.config)?;

        let created = self
            .movies
            .create(&movie)
            .await
            .map_err(|e| map_title_error(e, &movie.title))?;

        tracing::debug!(movie_id = created.id, title = %created.title, "movie created");
        Ok(created)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Movie, CinemaError> {
        self.movies
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| CinemaError::movie_id_not_found(id))
    }

    pub async fn find_by_title(&self, title: &str) -> Result<Movie, CinemaError> {
        self.movies
            .find_by_title(title)
            .await
            .map_err(internal)?
            .ok_or_else(|| CinemaError::movie_title_not_found(title))
    }

    pub async fn list_all(&self) -> Result<Vec<Movie>, CinemaError> {
        self.movies.list_all().await.map_err(internal)
    }

    /// Apply the provided fields to the movie with `title`
    pub async fn update(&self, title: &str, patch: MoviePatch) -> Result<(), CinemaError> {
        validate_movie_patch(&patch, &self.config)?;
        let movie = self.find_by_title(title).await?;

        if patch.is_empty() {
            return Ok(());
        }

        let new_title = patch.title.as_deref().unwrap_or(title);
        self.movies
            .update(movie.id, &patch)
            .await
            .map_err(|e| map_title_error(e, new_title))?;

        tracing::debug!(movie_id = movie.id, "movie updated");
        Ok(())
    }

    /// Delete the movie with `title`, its showtimes and their bookings
    pub async fn delete(&self, title: &str) -> Result<(), CinemaError> {
        let movie = self.find_by_title(title).await?;
        self.movies.delete_cascade(movie.id).await.map_err(internal)?;

        tracing::debug!(movie_id = movie.id, title, "movie deleted");
        Ok(())
    }
}

fn map_title_error(error: RepoError, title: &str) -> CinemaError {
    match error {
        RepoError::UniqueViolation(_) => {
            tracing::warn!(title, "rejected duplicate movie title");
            CinemaError::conflict(format!("Movie \"{}\" already exists", title))
        }
        other => internal(other),
    }
}

/// Log a repository failure and hide it behind `CinemaError::Internal`
pub(crate) fn internal(error: RepoError) -> CinemaError {
    tracing::error!("Repository error: {:?}", error);
    CinemaError::Internal
}
