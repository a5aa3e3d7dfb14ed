//! REST DTOs with serde derives for HTTP API
//!
//! Field names are camelCase on the wire.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// ===== Movie DTOs =====

/// Movie response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieDto {
    /// Generated identifier
    pub id: i32,

    #[schema(example = "Inception")]
    pub title: String,

    #[schema(example = "Sci-Fi")]
    pub genre: String,

    /// Running time in minutes
    #[schema(example = 148)]
    pub duration: i32,

    #[schema(example = 8.8)]
    pub rating: f64,

    #[schema(example = 2010)]
    pub release_year: i32,
}

/// Create movie request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieRequest {
    pub title: String,
    pub genre: String,
    pub duration: i32,
    pub rating: f64,
    pub release_year: i32,
}

/// Partial movie update request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovieRequest {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub duration: Option<i32>,
    pub rating: Option<f64>,
    pub release_year: Option<i32>,
}

// ===== Showtime DTOs =====

/// Showtime response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShowtimeDto {
    /// Generated identifier
    pub id: i32,

    pub movie_id: i32,

    #[schema(example = 20.0)]
    pub price: f64,

    #[schema(example = "Hall 1")]
    pub theater: String,

    pub start_time: DateTime<Utc>,

    pub end_time: DateTime<Utc>,

    /// Screened movie, present on single-showtime lookups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie: Option<MovieDto>,
}

/// Create showtime request; timestamps are ISO-8601 with offset
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateShowtimeRequest {
    pub movie_id: i32,
    pub price: f64,
    pub theater: String,
    #[schema(value_type = String, example = "2025-02-14T11:47:46.125405Z")]
    pub start_time: DateTime<FixedOffset>,
    #[schema(value_type = String, example = "2025-02-14T14:15:46.125405Z")]
    pub end_time: DateTime<FixedOffset>,
}

/// Partial showtime update request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShowtimeRequest {
    pub movie_id: Option<i32>,
    pub price: Option<f64>,
    pub theater: Option<String>,
    #[schema(value_type = Option<String>)]
    pub start_time: Option<DateTime<FixedOffset>>,
    #[schema(value_type = Option<String>)]
    pub end_time: Option<DateTime<FixedOffset>>,
}

// ===== Booking DTOs =====

/// Book a seat request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub showtime_id: i32,
    #[schema(example = 15)]
    pub seat_number: i32,
    pub user_id: Uuid,
}

/// Booking response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreatedResponse {
    pub booking_id: Uuid,
}

// Note: Conversion implementations live in mapper.rs
