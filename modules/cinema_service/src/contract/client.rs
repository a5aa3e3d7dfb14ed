//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with the cinema service.
//! NO HTTP - direct function calls.

use super::{
    error::CinemaError,
    model::{Movie, MoviePatch, NewBooking, NewMovie, NewShowtime, Showtime, ShowtimeDetails, ShowtimePatch},
};
use async_trait::async_trait;
use uuid::Uuid;

/// Cinema service API for inter-module communication
#[async_trait]
pub trait CinemaApi: Send + Sync {
    // ===== Movie Operations =====

    /// Add a movie to the catalog
    async fn create_movie(&self, movie: NewMovie) -> Result<Movie, CinemaError>;

    /// List every movie
    async fn list_movies(&self) -> Result<Vec<Movie>, CinemaError>;

    async fn find_movie_by_title(&self, title: &str) -> Result<Movie, CinemaError>;

    async fn find_movie_by_id(&self, id: i32) -> Result<Movie, CinemaError>;

    /// Apply the provided fields to the movie with this title
    async fn update_movie(&self, title: &str, patch: MoviePatch) -> Result<(), CinemaError>;

    /// Delete a movie with its showtimes and their bookings
    async fn delete_movie(&self, title: &str) -> Result<(), CinemaError>;

    // ===== Showtime Operations =====

    /// Schedule a showtime
    async fn create_showtime(&self, showtime: NewShowtime) -> Result<Showtime, CinemaError>;

    /// Get a showtime with its movie
    async fn get_showtime(&self, id: i32) -> Result<ShowtimeDetails, CinemaError>;

    async fn update_showtime(&self, id: i32, patch: ShowtimePatch) -> Result<(), CinemaError>;

    /// Delete a showtime and its bookings
    async fn delete_showtime(&self, id: i32) -> Result<(), CinemaError>;

    // ===== Booking Operations =====

    /// Book a seat, returning the booking identifier
    async fn create_booking(&self, booking: NewBooking) -> Result<Uuid, CinemaError>;
}
