//! Domain service - wires the catalog, scheduler and ledger together

use super::catalog::MovieCatalog;
use super::ledger::BookingLedger;
use super::repository::{BookingRepository, MovieRepository, ShowtimeRepository};
use super::scheduler::ShowtimeScheduler;
use crate::config::Config;
use crate::contract::{
    CinemaError, Movie, MoviePatch, NewBooking, NewMovie, NewShowtime, Showtime, ShowtimeDetails,
    ShowtimePatch,
};
use std::sync::Arc;
use uuid::Uuid;

/// Domain service for the cinema
///
/// Dependencies run one way: ledger -> scheduler -> catalog.
pub struct Service {
    catalog: Arc<MovieCatalog>,
    scheduler: Arc<ShowtimeScheduler>,
    ledger: BookingLedger,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        showtime_repo: Arc<dyn ShowtimeRepository>,
        booking_repo: Arc<dyn BookingRepository>,
        config: Config,
    ) -> Self {
        let catalog = Arc::new(MovieCatalog::new(movie_repo, config.clone()));
        let scheduler = Arc::new(ShowtimeScheduler::new(showtime_repo, catalog.clone()));
        let ledger = BookingLedger::new(booking_repo, scheduler.clone(), config);

        Self {
            catalog,
            scheduler,
            ledger,
        }
    }

    pub fn catalog(&self) -> &MovieCatalog {
        &self.catalog
    }

    pub fn scheduler(&self) -> &ShowtimeScheduler {
        &self.scheduler
    }

    pub fn ledger(&self) -> &BookingLedger {
        &self.ledger
    }

    // ===== Movie Operations =====

    pub async fn create_movie(&self, movie: NewMovie) -> Result<Movie, CinemaError> {
        self.catalog.create(movie).await
    }

    pub async fn list_movies(&self) -> Result<Vec<Movie>, CinemaError> {
        self.catalog.list_all().await
    }

    pub async fn find_movie_by_title(&self, title: &str) -> Result<Movie, CinemaError> {
        self.catalog.find_by_title(title).await
    }

    pub async fn find_movie_by_id(&self, id: i32) -> Result<Movie, CinemaError> {
        self.catalog.find_by_id(id).await
    }

    pub async fn update_movie(&self, title: &str, patch: MoviePatch) -> Result<(), CinemaError> {
        self.catalog.update(title, patch).await
    }

    pub async fn delete_movie(&self, title: &str) -> Result<(), CinemaError> {
        self.catalog.delete(title).await
    }

    // ===== Showtime Operations =====

    pub async fn create_showtime(&self, showtime: NewShowtime) -> Result<Showtime, CinemaError> {
        self.scheduler.create(showtime).await
    }

    pub async fn get_showtime(&self, id: i32) -> Result<ShowtimeDetails, CinemaError> {
        self.scheduler.find_by_id(id).await
    }

    pub async fn update_showtime(&self, id: i32, patch: ShowtimePatch) -> Result<(), CinemaError> {
        self.scheduler.update(id, patch).await
    }

    pub async fn delete_showtime(&self, id: i32) -> Result<(), CinemaError> {
        self.scheduler.delete(id).await
    }

    // ===== Booking Operations =====

    pub async fn create_booking(&self, booking: NewBooking) -> Result<Uuid, CinemaError> {
        self.ledger.create(booking).await
    }
}
