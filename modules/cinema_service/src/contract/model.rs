//! Contract models for cinema service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Movie as stored in the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    /// Generated identifier
    pub id: i32,
    /// Unique title
    pub title: String,
    pub genre: String,
    /// Running time in minutes
    pub duration: i32,
    /// Rating in [0, 10]
    pub rating: f64,
    pub release_year: i32,
}

/// Input for creating a movie
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub genre: String,
    pub duration: i32,
    pub rating: f64,
    pub release_year: i32,
}

/// Partial movie update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub duration: Option<i32>,
    pub rating: Option<f64>,
    pub release_year: Option<i32>,
}

impl MoviePatch {
    /// True when no field is provided
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.genre.is_none()
            && self.duration.is_none()
            && self.rating.is_none()
            && self.release_year.is_none()
    }
}

/// Scheduled screening of a movie in a theater
#[derive(Debug, Clone, PartialEq)]
pub struct Showtime {
    /// Generated identifier
    pub id: i32,
    pub movie_id: i32,
    pub price: f64,
    pub theater: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Showtime together with the movie it screens
#[derive(Debug, Clone, PartialEq)]
pub struct ShowtimeDetails {
    pub showtime: Showtime,
    pub movie: Movie,
}

/// Input for scheduling a showtime
#[derive(Debug, Clone, PartialEq)]
pub struct NewShowtime {
    pub movie_id: i32,
    pub price: f64,
    pub theater: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Partial showtime update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowtimePatch {
    pub movie_id: Option<i32>,
    pub price: Option<f64>,
    pub theater: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl ShowtimePatch {
    /// Whether the patch moves the showtime in time or space, which
    /// requires re-running the overlap check
    pub fn reschedules(&self) -> bool {
        self.start_time.is_some() || self.end_time.is_some() || self.theater.is_some()
    }
}

/// One booked seat for one showtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// Generated identifier
    pub id: Uuid,
    pub showtime_id: i32,
    pub seat_number: i32,
    /// Opaque user reference
    pub user_id: Uuid,
}

/// Input for booking a seat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub showtime_id: i32,
    pub seat_number: i32,
    pub user_id: Uuid,
}
