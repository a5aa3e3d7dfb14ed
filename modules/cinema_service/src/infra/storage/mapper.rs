//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{booking, movie, showtime};
use crate::contract::{Booking, Movie, NewMovie, NewShowtime, Showtime};
use sea_orm::ActiveValue::{NotSet, Set};

// ===== Movie Conversions =====

impl From<movie::Model> for Movie {
    fn from(entity: movie::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            genre: entity.genre,
            duration: entity.duration,
            rating: entity.rating,
            release_year: entity.release_year,
        }
    }
}

impl From<&NewMovie> for movie::ActiveModel {
    fn from(model: &NewMovie) -> Self {
        Self {
            id: NotSet,
            title: Set(model.title.clone()),
            genre: Set(model.genre.clone()),
            duration: Set(model.duration),
            rating: Set(model.rating),
            release_year: Set(model.release_year),
        }
    }
}

// ===== Showtime Conversions =====

impl From<showtime::Model> for Showtime {
    fn from(entity: showtime::Model) -> Self {
        Self {
            id: entity.id,
            movie_id: entity.movie_id,
            price: entity.price,
            theater: entity.theater,
            start_time: entity.start_time,
            end_time: entity.end_time,
        }
    }
}

impl From<&NewShowtime> for showtime::ActiveModel {
    fn from(model: &NewShowtime) -> Self {
        Self {
            id: NotSet,
            movie_id: Set(model.movie_id),
            price: Set(model.price),
            theater: Set(model.theater.clone()),
            start_time: Set(model.start_time),
            end_time: Set(model.end_time),
        }
    }
}

// ===== Booking Conversions =====

impl From<booking::Model> for Booking {
    fn from(entity: booking::Model) -> Self {
        Self {
            id: entity.id,
            showtime_id: entity.showtime_id,
            seat_number: entity.seat_number,
            user_id: entity.user_id,
        }
    }
}

impl From<&Booking> for booking::ActiveModel {
    fn from(model: &Booking) -> Self {
        Self {
            id: Set(model.id),
            showtime_id: Set(model.showtime_id),
            seat_number: Set(model.seat_number),
            user_id: Set(model.user_id),
        }
    }
}
