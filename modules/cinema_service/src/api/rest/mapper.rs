//! Mapper implementations for converting between DTOs and contract models
//!
//! This module contains all From/Into implementations for bidirectional
//! conversion between REST DTOs and transport-agnostic contract models.

use super::dto::*;
use crate::contract;
use chrono::Utc;

// ===== Movie conversions =====

impl From<contract::Movie> for MovieDto {
    fn from(movie: contract::Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            genre: movie.genre,
            duration: movie.duration,
            rating: movie.rating,
            release_year: movie.release_year,
        }
    }
}

impl From<CreateMovieRequest> for contract::NewMovie {
    fn from(req: CreateMovieRequest) -> Self {
        Self {
            title: req.title,
            genre: req.genre,
            duration: req.duration,
            rating: req.rating,
            release_year: req.release_year,
        }
    }
}

impl From<UpdateMovieRequest> for contract::MoviePatch {
    fn from(req: UpdateMovieRequest) -> Self {
        Self {
            title: req.title,
            genre: req.genre,
            duration: req.duration,
            rating: req.rating,
            release_year: req.release_year,
        }
    }
}

// ===== Showtime conversions =====

impl From<contract::Showtime> for ShowtimeDto {
    fn from(showtime: contract::Showtime) -> Self {
        Self {
            id: showtime.id,
            movie_id: showtime.movie_id,
            price: showtime.price,
            theater: showtime.theater,
            start_time: showtime.start_time,
            end_time: showtime.end_time,
            movie: None,
        }
    }
}

impl From<contract::ShowtimeDetails> for ShowtimeDto {
    fn from(details: contract::ShowtimeDetails) -> Self {
        Self {
            movie: Some(details.movie.into()),
            ..details.showtime.into()
        }
    }
}

impl From<CreateShowtimeRequest> for contract::NewShowtime {
    fn from(req: CreateShowtimeRequest) -> Self {
        Self {
            movie_id: req.movie_id,
            price: req.price,
            theater: req.theater,
            start_time: req.start_time.with_timezone(&Utc),
            end_time: req.end_time.with_timezone(&Utc),
        }
    }
}

impl From<UpdateShowtimeRequest> for contract::ShowtimePatch {
    fn from(req: UpdateShowtimeRequest) -> Self {
        Self {
            movie_id: req.movie_id,
            price: req.price,
            theater: req.theater,
            start_time: req.start_time.map(|t| t.with_timezone(&Utc)),
            end_time: req.end_time.map(|t| t.with_timezone(&Utc)),
        }
    }
}

// ===== Booking conversions =====

impl From<CreateBookingRequest> for contract::NewBooking {
    fn from(req: CreateBookingRequest) -> Self {
        Self {
            showtime_id: req.showtime_id,
            seat_number: req.seat_number,
            user_id: req.user_id,
        }
    }
}
