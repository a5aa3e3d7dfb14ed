//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    CinemaApi, CinemaError, Movie, MoviePatch, NewBooking, NewMovie, NewShowtime, Showtime,
    ShowtimeDetails, ShowtimePatch,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CinemaApi for NativeClient {
    async fn create_movie(&self, movie: NewMovie) -> Result<Movie, CinemaError> {
        self.service.create_movie(movie).await
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, CinemaError> {
        self.service.list_movies().await
    }

    async fn find_movie_by_title(&self, title: &str) -> Result<Movie, CinemaError> {
        self.service.find_movie_by_title(title).await
    }

    async fn find_movie_by_id(&self, id: i32) -> Result<Movie, CinemaError> {
        self.service.find_movie_by_id(id).await
    }

    async fn update_movie(&self, title: &str, patch: MoviePatch) -> Result<(), CinemaError> {
        self.service.update_movie(title, patch).await
    }

    async fn delete_movie(&self, title: &str) -> Result<(), CinemaError> {
        self.service.delete_movie(title).await
    }

    async fn create_showtime(&self, showtime: NewShowtime) -> Result<Showtime, CinemaError> {
        self.service.create_showtime(showtime).await
    }

    async fn get_showtime(&self, id: i32) -> Result<ShowtimeDetails, CinemaError> {
        self.service.get_showtime(id).await
    }

    async fn update_showtime(&self, id: i32, patch: ShowtimePatch) -> Result<(), CinemaError> {
        self.service.update_showtime(id, patch).await
    }

    async fn delete_showtime(&self, id: i32) -> Result<(), CinemaError> {
        self.service.delete_showtime(id).await
    }

    async fn create_booking(&self, booking: NewBooking) -> Result<Uuid, CinemaError> {
        self.service.create_booking(booking).await
    }
}
