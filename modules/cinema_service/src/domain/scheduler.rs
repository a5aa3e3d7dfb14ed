//! Showtime scheduler - validates running time and theater overlap

use super::catalog::{internal, MovieCatalog};
use super::repository::{RepoError, ShowtimeRepository};
use super::validation::{validate_new_showtime, validate_showtime_patch};
use crate::contract::{CinemaError, NewShowtime, Showtime, ShowtimeDetails, ShowtimePatch};
use chrono::{DateTime, Utc};
use std::sync::Arc;

const DURATION_TOO_SHORT: &str = "Start time and end time should be chosen so the showtime duration bigger than the movie duration";

pub struct ShowtimeScheduler {
    showtimes: Arc<dyn ShowtimeRepository>,
    catalog: Arc<MovieCatalog>,
}

impl ShowtimeScheduler {
    pub fn new(showtimes: Arc<dyn ShowtimeRepository>, catalog: Arc<MovieCatalog>) -> Self {
        Self { showtimes, catalog }
    }

    /// Schedule a showtime for an existing movie
    pub async fn create(&self, showtime: NewShowtime) -> Result<Showtime, CinemaError> {
        validate_new_showtime(&showtime)?;

        let movie = self.catalog.find_by_id(showtime.movie_id).await?;
        check_duration(showtime.start_time, showtime.end_time, movie.duration)?;
        self.check_overlap(&showtime.theater, showtime.start_time, showtime.end_time, None)
            .await?;

        let created = self
            .showtimes
            .create(&showtime)
            .await
            .map_err(|e| map_overlap_error(e, &showtime.theater))?;

        tracing::debug!(
            showtime_id = created.id,
            movie_id = created.movie_id,
            theater = %created.theater,
            "showtime scheduled"
        );
        Ok(created)
    }

    /// Get a showtime with its movie
    pub async fn find_by_id(&self, id: i32) -> Result<ShowtimeDetails, CinemaError> {
        self.showtimes
            .find_with_movie(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| CinemaError::showtime_not_found(id))
    }

    /// Apply the provided fields, re-validating duration and overlap
    /// against the effective values
    pub async fn update(&self, id: i32, patch: ShowtimePatch) -> Result<(), CinemaError> {
        validate_showtime_patch(&patch)?;
        let existing = self.find_by_id(id).await?;

        let required_minutes = match patch.movie_id {
            Some(movie_id) => self.catalog.find_by_id(movie_id).await?.duration,
            None => existing.movie.duration,
        };

        let start_time = patch.start_time.unwrap_or(existing.showtime.start_time);
        let end_time = patch.end_time.unwrap_or(existing.showtime.end_time);
        check_duration(start_time, end_time, required_minutes)?;

        let theater = patch
            .theater
            .clone()
            .unwrap_or_else(|| existing.showtime.theater.clone());
        if patch.reschedules() {
            self.check_overlap(&theater, start_time, end_time, Some(id))
                .await?;
        }

        self.showtimes
            .update(id, &patch)
            .await
            .map_err(|e| map_overlap_error(e, &theater))?;

        tracing::debug!(showtime_id = id, "showtime updated");
        Ok(())
    }

    /// Delete a showtime and its bookings
    pub async fn delete(&self, id: i32) -> Result<(), CinemaError> {
        let existing = self.find_by_id(id).await?;
        self.showtimes
            .delete_cascade(existing.showtime.id)
            .await
            .map_err(internal)?;

        tracing::debug!(showtime_id = id, "showtime deleted");
        Ok(())
    }

    async fn check_overlap(
        &self,
        theater: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        excluding: Option<i32>,
    ) -> Result<(), CinemaError> {
        let overlapping = self
            .showtimes
            .exists_overlapping(theater, start_time, end_time, excluding)
            .await
            .map_err(internal)?;

        if overlapping {
            tracing::warn!(theater, %start_time, %end_time, "rejected overlapping showtime");
            return Err(overlap_conflict(theater));
        }
        Ok(())
    }
}

/// Running time between two instants in (fractional) minutes
pub fn showtime_minutes(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> f64 {
    (end_time - start_time).num_milliseconds() as f64 / 60_000.0
}

/// A showtime must last at least as long as its movie. Also rejects
/// `end_time <= start_time` for any positive movie duration.
pub fn check_duration(
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    movie_minutes: i32,
) -> Result<(), CinemaError> {
    if showtime_minutes(start_time, end_time) < f64::from(movie_minutes) {
        return Err(CinemaError::BadRequest {
            message: DURATION_TOO_SHORT.to_string(),
        });
    }
    Ok(())
}

fn overlap_conflict(theater: &str) -> CinemaError {
    CinemaError::conflict(format!(
        "Showtime scheduled time is overlapping another scheduled showtime in theater \"{}\"",
        theater
    ))
}

fn map_overlap_error(error: RepoError, theater: &str) -> CinemaError {
    match error {
        RepoError::UniqueViolation(_) => {
            tracing::warn!(theater, "showtime rejected by storage uniqueness");
            overlap_conflict(theater)
        }
        other => internal(other),
    }
}
