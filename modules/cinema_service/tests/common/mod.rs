//! Common test utilities: in-memory repositories and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use cinema_service::config::Config;
use cinema_service::contract::*;
use cinema_service::domain::repository::{
    BookingRepository, MovieRepository, RepoError, RepoResult, ShowtimeRepository,
};
use cinema_service::domain::Service;
use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

// ===== Fixtures =====

/// Fixed reference instant for showtimes
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap()
}

pub fn inception() -> NewMovie {
    NewMovie {
        title: "Inception".to_string(),
        genre: "Sci-Fi".to_string(),
        duration: 148,
        rating: 8.8,
        release_year: 2010,
    }
}

pub fn movie(title: &str, duration: i32) -> NewMovie {
    NewMovie {
        title: title.to_string(),
        genre: "Drama".to_string(),
        duration,
        rating: 7.5,
        release_year: 2001,
    }
}

pub fn showtime(
    movie_id: i32,
    theater: &str,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> NewShowtime {
    NewShowtime {
        movie_id,
        price: 20.0,
        theater: theater.to_string(),
        start_time,
        end_time,
    }
}

pub fn booking(showtime_id: i32, seat_number: i32) -> NewBooking {
    NewBooking {
        showtime_id,
        seat_number,
        user_id: Uuid::new_v4(),
    }
}

// ===== In-memory store =====

/// Shared tables behind the three mock repositories, so cascades and joins
/// see the same data.
#[derive(Default)]
pub struct InMemoryStore {
    movies: RwLock<Vec<Movie>>,
    showtimes: RwLock<Vec<Showtime>>,
    bookings: RwLock<Vec<Booking>>,
    next_movie_id: RwLock<i32>,
    next_showtime_id: RwLock<i32>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn movie_count(&self) -> usize {
        self.movies.read().len()
    }

    pub fn showtime_count(&self) -> usize {
        self.showtimes.read().len()
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.read().len()
    }

    pub fn showtime(&self, id: i32) -> Option<Showtime> {
        self.showtimes.read().iter().find(|s| s.id == id).cloned()
    }

    pub fn bookings_for(&self, showtime_id: i32) -> Vec<Booking> {
        self.bookings
            .read()
            .iter()
            .filter(|b| b.showtime_id == showtime_id)
            .cloned()
            .collect()
    }

    /// Print verbose information about store state
    pub fn print_state(&self, context: &str) {
        println!("\n========== Store State: {} ==========", context);
        for m in self.movies.read().iter() {
            println!("  🎬 #{} {} ({} min)", m.id, m.title, m.duration);
        }
        for s in self.showtimes.read().iter() {
            println!(
                "  🕒 #{} movie={} {} {} -> {}",
                s.id, s.movie_id, s.theater, s.start_time, s.end_time
            );
        }
        println!("  🎟️  bookings: {}", self.bookings.read().len());
        println!("==============================================\n");
    }
}

pub struct MockMovieRepo {
    store: Arc<InMemoryStore>,
}

impl MockMovieRepo {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MovieRepository for MockMovieRepo {
    async fn create(&self, movie: &NewMovie) -> RepoResult<Movie> {
        let mut movies = self.store.movies.write();
        if movies.iter().any(|m| m.title == movie.title) {
            return Err(RepoError::UniqueViolation("movies.title".to_string()));
        }

        let mut next_id = self.store.next_movie_id.write();
        *next_id += 1;
        let created = Movie {
            id: *next_id,
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            duration: movie.duration,
            rating: movie.rating,
            release_year: movie.release_year,
        };
        movies.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Movie>> {
        Ok(self.store.movies.read().iter().find(|m| m.id == id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> RepoResult<Option<Movie>> {
        Ok(self
            .store
            .movies
            .read()
            .iter()
            .find(|m| m.title == title)
            .cloned())
    }

    async fn list_all(&self) -> RepoResult<Vec<Movie>> {
        Ok(self.store.movies.read().clone())
    }

    async fn update(&self, id: i32, patch: &MoviePatch) -> RepoResult<()> {
        let mut movies = self.store.movies.write();
        if let Some(title) = &patch.title {
            if movies.iter().any(|m| m.id != id && &m.title == title) {
                return Err(RepoError::UniqueViolation("movies.title".to_string()));
            }
        }

        if let Some(movie) = movies.iter_mut().find(|m| m.id == id) {
            if let Some(title) = &patch.title {
                movie.title = title.clone();
            }
            if let Some(genre) = &patch.genre {
                movie.genre = genre.clone();
            }
            if let Some(duration) = patch.duration {
                movie.duration = duration;
            }
            if let Some(rating) = patch.rating {
                movie.rating = rating;
            }
            if let Some(release_year) = patch.release_year {
                movie.release_year = release_year;
            }
        }
        Ok(())
    }

    async fn delete_cascade(&self, id: i32) -> RepoResult<()> {
        let mut showtimes = self.store.showtimes.write();
        let showtime_ids: Vec<i32> = showtimes
            .iter()
            .filter(|s| s.movie_id == id)
            .map(|s| s.id)
            .collect();

        self.store
            .bookings
            .write()
            .retain(|b| !showtime_ids.contains(&b.showtime_id));
        showtimes.retain(|s| s.movie_id != id);
        self.store.movies.write().retain(|m| m.id != id);
        Ok(())
    }
}

pub struct MockShowtimeRepo {
    store: Arc<InMemoryStore>,
}

impl MockShowtimeRepo {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ShowtimeRepository for MockShowtimeRepo {
    async fn create(&self, showtime: &NewShowtime) -> RepoResult<Showtime> {
        let mut showtimes = self.store.showtimes.write();
        if showtimes
            .iter()
            .any(|s| s.theater == showtime.theater && s.start_time == showtime.start_time)
        {
            return Err(RepoError::UniqueViolation(
                "showtimes.theater, showtimes.start_time".to_string(),
            ));
        }

        let mut next_id = self.store.next_showtime_id.write();
        *next_id += 1;
        let created = Showtime {
            id: *next_id,
            movie_id: showtime.movie_id,
            price: showtime.price,
            theater: showtime.theater.clone(),
            start_time: showtime.start_time,
            end_time: showtime.end_time,
        };
        showtimes.push(created.clone());
        Ok(created)
    }

    async fn find_with_movie(&self, id: i32) -> RepoResult<Option<ShowtimeDetails>> {
        let Some(showtime) = self.store.showtime(id) else {
            return Ok(None);
        };
        let movie = self
            .store
            .movies
            .read()
            .iter()
            .find(|m| m.id == showtime.movie_id)
            .cloned()
            .ok_or_else(|| RepoError::Backend(anyhow::anyhow!("dangling movie reference")))?;

        Ok(Some(ShowtimeDetails { showtime, movie }))
    }

    async fn exists_overlapping(
        &self,
        theater: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        excluding: Option<i32>,
    ) -> RepoResult<bool> {
        Ok(self.store.showtimes.read().iter().any(|s| {
            s.theater == theater
                && s.start_time <= end_time
                && s.end_time > start_time
                && Some(s.id) != excluding
        }))
    }

    async fn update(&self, id: i32, patch: &ShowtimePatch) -> RepoResult<()> {
        let mut showtimes = self.store.showtimes.write();
        if let Some(showtime) = showtimes.iter_mut().find(|s| s.id == id) {
            if let Some(movie_id) = patch.movie_id {
                showtime.movie_id = movie_id;
            }
            if let Some(price) = patch.price {
                showtime.price = price;
            }
            if let Some(theater) = &patch.theater {
                showtime.theater = theater.clone();
            }
            if let Some(start_time) = patch.start_time {
                showtime.start_time = start_time;
            }
            if let Some(end_time) = patch.end_time {
                showtime.end_time = end_time;
            }
        }
        Ok(())
    }

    async fn delete_cascade(&self, id: i32) -> RepoResult<()> {
        self.store.bookings.write().retain(|b| b.showtime_id != id);
        self.store.showtimes.write().retain(|s| s.id != id);
        Ok(())
    }
}

pub struct MockBookingRepo {
    store: Arc<InMemoryStore>,
}

impl MockBookingRepo {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepo {
    async fn create(&self, booking: &Booking) -> RepoResult<Booking> {
        let mut bookings = self.store.bookings.write();
        if bookings
            .iter()
            .any(|b| b.showtime_id == booking.showtime_id && b.seat_number == booking.seat_number)
        {
            return Err(RepoError::UniqueViolation(
                "bookings.showtime_id, bookings.seat_number".to_string(),
            ));
        }
        bookings.push(booking.clone());
        Ok(booking.clone())
    }

    async fn seat_taken(&self, showtime_id: i32, seat_number: i32) -> RepoResult<bool> {
        Ok(self
            .store
            .bookings
            .read()
            .iter()
            .any(|b| b.showtime_id == showtime_id && b.seat_number == seat_number))
    }
}

/// Booking repository whose pre-check always misses, as when a concurrent
/// request inserts the seat between the check and the write
pub struct RacingBookingRepo {
    inner: MockBookingRepo,
}

impl RacingBookingRepo {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self {
            inner: MockBookingRepo::new(store),
        }
    }
}

#[async_trait]
impl BookingRepository for RacingBookingRepo {
    async fn create(&self, booking: &Booking) -> RepoResult<Booking> {
        self.inner.create(booking).await
    }

    async fn seat_taken(&self, _showtime_id: i32, _seat_number: i32) -> RepoResult<bool> {
        Ok(false)
    }
}

/// Showtime repository whose overlap query always misses
pub struct RacingShowtimeRepo {
    inner: MockShowtimeRepo,
}

impl RacingShowtimeRepo {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self {
            inner: MockShowtimeRepo::new(store),
        }
    }
}

#[async_trait]
impl ShowtimeRepository for RacingShowtimeRepo {
    async fn create(&self, showtime: &NewShowtime) -> RepoResult<Showtime> {
        self.inner.create(showtime).await
    }

    async fn find_with_movie(&self, id: i32) -> RepoResult<Option<ShowtimeDetails>> {
        self.inner.find_with_movie(id).await
    }

    async fn exists_overlapping(
        &self,
        _theater: &str,
        _start_time: DateTime<Utc>,
        _end_time: DateTime<Utc>,
        _excluding: Option<i32>,
    ) -> RepoResult<bool> {
        Ok(false)
    }

    async fn update(&self, id: i32, patch: &ShowtimePatch) -> RepoResult<()> {
        self.inner.update(id, patch).await
    }

    async fn delete_cascade(&self, id: i32) -> RepoResult<()> {
        self.inner.delete_cascade(id).await
    }
}

/// Movie repository that fails every call with a back-end error
pub struct FailingMovieRepo;

#[async_trait]
impl MovieRepository for FailingMovieRepo {
    async fn create(&self, _movie: &NewMovie) -> RepoResult<Movie> {
        Err(anyhow::anyhow!("connection reset").into())
    }

    async fn find_by_id(&self, _id: i32) -> RepoResult<Option<Movie>> {
        Err(anyhow::anyhow!("connection reset").into())
    }

    async fn find_by_title(&self, _title: &str) -> RepoResult<Option<Movie>> {
        Err(anyhow::anyhow!("connection reset").into())
    }

    async fn list_all(&self) -> RepoResult<Vec<Movie>> {
        Err(anyhow::anyhow!("connection reset").into())
    }

    async fn update(&self, _id: i32, _patch: &MoviePatch) -> RepoResult<()> {
        Err(anyhow::anyhow!("connection reset").into())
    }

    async fn delete_cascade(&self, _id: i32) -> RepoResult<()> {
        Err(anyhow::anyhow!("connection reset").into())
    }
}

// ===== Service builders =====

/// Service over fresh in-memory repositories
pub fn build_service() -> (Arc<Service>, Arc<InMemoryStore>) {
    let store = InMemoryStore::new();
    let service = Service::new(
        Arc::new(MockMovieRepo::new(store.clone())),
        Arc::new(MockShowtimeRepo::new(store.clone())),
        Arc::new(MockBookingRepo::new(store.clone())),
        Config::default(),
    );
    (Arc::new(service), store)
}

/// Service whose booking and overlap pre-checks always miss
pub fn build_racing_service() -> (Arc<Service>, Arc<InMemoryStore>) {
    let store = InMemoryStore::new();
    let service = Service::new(
        Arc::new(MockMovieRepo::new(store.clone())),
        Arc::new(RacingShowtimeRepo::new(store.clone())),
        Arc::new(RacingBookingRepo::new(store.clone())),
        Config::default(),
    );
    (Arc::new(service), store)
}
