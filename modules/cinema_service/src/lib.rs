//! Cinema Service Module
//!
//! Ticket-booking backend for a cinema: a movie catalog, showtime
//! scheduling with running-time and theater-overlap checks, and seat
//! bookings that allow one booking per seat per showtime.

// Public exports
pub mod contract;
pub use contract::{
    client::CinemaApi, error::CinemaError, Booking, Movie, MoviePatch, NewBooking, NewMovie,
    NewShowtime, Showtime, ShowtimeDetails, ShowtimePatch,
};

pub mod module;
pub use module::CinemaServiceModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
