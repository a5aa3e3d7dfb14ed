//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{
    Booking, Movie, MoviePatch, NewMovie, NewShowtime, Showtime, ShowtimeDetails, ShowtimePatch,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Failure reported by a repository
#[derive(Debug, Error)]
pub enum RepoError {
    /// A storage-level uniqueness constraint rejected the write
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    /// Any other back-end failure
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository for movies
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Insert a movie; title uniqueness is enforced by storage
    async fn create(&self, movie: &NewMovie) -> RepoResult<Movie>;

    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Movie>>;

    async fn find_by_title(&self, title: &str) -> RepoResult<Option<Movie>>;

    async fn list_all(&self) -> RepoResult<Vec<Movie>>;

    /// Write only the provided fields
    async fn update(&self, id: i32, patch: &MoviePatch) -> RepoResult<()>;

    /// Delete a movie together with its showtimes and their bookings
    async fn delete_cascade(&self, id: i32) -> RepoResult<()>;
}

/// Repository for showtimes
#[async_trait]
pub trait ShowtimeRepository: Send + Sync {
    async fn create(&self, showtime: &NewShowtime) -> RepoResult<Showtime>;

    /// Find a showtime with its movie populated
    async fn find_with_movie(&self, id: i32) -> RepoResult<Option<ShowtimeDetails>>;

    /// Whether any showtime in `theater`, other than `excluding`, starts no
    /// later than `end_time` and ends after `start_time`. A showtime ending
    /// exactly at `start_time` does not count.
    async fn exists_overlapping(
        &self,
        theater: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        excluding: Option<i32>,
    ) -> RepoResult<bool>;

    /// Write only the provided fields
    async fn update(&self, id: i32, patch: &ShowtimePatch) -> RepoResult<()>;

    /// Delete a showtime together with its bookings
    async fn delete_cascade(&self, id: i32) -> RepoResult<()>;
}

/// Repository for bookings
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert a booking; `(showtime_id, seat_number)` uniqueness is enforced by storage
    async fn create(&self, booking: &Booking) -> RepoResult<Booking>;

    /// Whether the seat is already booked for the showtime
    async fn seat_taken(&self, showtime_id: i32, seat_number: i32) -> RepoResult<bool>;
}
