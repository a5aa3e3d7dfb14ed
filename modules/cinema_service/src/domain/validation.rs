//! Input validation for movies, showtimes and bookings
//!
//! Every check here runs before the service touches a repository.

use crate::config::Config;
use crate::contract::{CinemaError, MoviePatch, NewBooking, NewMovie, NewShowtime, ShowtimePatch};
use chrono::{Datelike, Utc};

/// Validate a movie before insertion
pub fn validate_new_movie(movie: &NewMovie, config: &Config) -> Result<(), CinemaError> {
    validate_non_empty("title", &movie.title)?;
    validate_non_empty("genre", &movie.genre)?;
    validate_duration(movie.duration)?;
    validate_rating(movie.rating)?;
    validate_release_year(movie.release_year, config, Utc::now().year())
}

/// Validate the provided fields of a movie patch
pub fn validate_movie_patch(patch: &MoviePatch, config: &Config) -> Result<(), CinemaError> {
    if let Some(title) = &patch.title {
        validate_non_empty("title", title)?;
    }
    if let Some(genre) = &patch.genre {
        validate_non_empty("genre", genre)?;
    }
    if let Some(duration) = patch.duration {
        validate_duration(duration)?;
    }
    if let Some(rating) = patch.rating {
        validate_rating(rating)?;
    }
    if let Some(year) = patch.release_year {
        validate_release_year(year, config, Utc::now().year())?;
    }
    Ok(())
}

/// Validate a showtime before scheduling
pub fn validate_new_showtime(showtime: &NewShowtime) -> Result<(), CinemaError> {
    validate_reference("movieId", showtime.movie_id)?;
    validate_price(showtime.price)?;
    validate_non_empty("theater", &showtime.theater)
}

/// Validate the provided fields of a showtime patch
pub fn validate_showtime_patch(patch: &ShowtimePatch) -> Result<(), CinemaError> {
    if let Some(movie_id) = patch.movie_id {
        validate_reference("movieId", movie_id)?;
    }
    if let Some(price) = patch.price {
        validate_price(price)?;
    }
    if let Some(theater) = &patch.theater {
        validate_non_empty("theater", theater)?;
    }
    Ok(())
}

/// Validate a booking request
pub fn validate_new_booking(booking: &NewBooking, config: &Config) -> Result<(), CinemaError> {
    validate_reference("showtimeId", booking.showtime_id)?;
    if booking.seat_number < 1 || booking.seat_number > config.max_seat_number {
        return Err(CinemaError::validation(format!(
            "seatNumber must be between 1 and {}, got {}",
            config.max_seat_number, booking.seat_number
        )));
    }
    Ok(())
}

fn validate_non_empty(field: &str, value: &str) -> Result<(), CinemaError> {
    if value.trim().is_empty() {
        return Err(CinemaError::validation(format!("{} should not be empty", field)));
    }
    Ok(())
}

fn validate_duration(duration: i32) -> Result<(), CinemaError> {
    if duration <= 0 {
        return Err(CinemaError::validation(format!(
            "duration must be a positive number of minutes, got {}",
            duration
        )));
    }
    Ok(())
}

fn validate_rating(rating: f64) -> Result<(), CinemaError> {
    if !rating.is_finite() || !(0.0..=10.0).contains(&rating) {
        return Err(CinemaError::validation(format!(
            "rating must be between 0 and 10, got {}",
            rating
        )));
    }
    Ok(())
}

fn validate_release_year(year: i32, config: &Config, current_year: i32) -> Result<(), CinemaError> {
    let max_year = current_year + config.release_year_lead;
    if year < config.min_release_year || year > max_year {
        return Err(CinemaError::validation(format!(
            "releaseYear must be between {} and {}, got {}",
            config.min_release_year, max_year, year
        )));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), CinemaError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(CinemaError::validation(format!(
            "price must be a positive number, got {}",
            price
        )));
    }
    Ok(())
}

fn validate_reference(field: &str, id: i32) -> Result<(), CinemaError> {
    if id < 1 {
        return Err(CinemaError::validation(format!(
            "{} must not be less than 1, got {}",
            field, id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn inception() -> NewMovie {
        NewMovie {
            title: "Inception".to_string(),
            genre: "Sci-Fi".to_string(),
            duration: 148,
            rating: 8.8,
            release_year: 2010,
        }
    }

    fn assert_validation(result: Result<(), CinemaError>) {
        match result {
            Err(CinemaError::Validation { .. }) => {}
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_movie() {
        assert!(validate_new_movie(&inception(), &Config::default()).is_ok());
    }

    #[test]
    fn test_movie_blank_fields() {
        let cfg = Config::default();
        assert_validation(validate_new_movie(&NewMovie { title: "".into(), ..inception() }, &cfg));
        assert_validation(validate_new_movie(&NewMovie { title: "   ".into(), ..inception() }, &cfg));
        assert_validation(validate_new_movie(&NewMovie { genre: "".into(), ..inception() }, &cfg));
    }

    #[test]
    fn test_movie_duration_must_be_positive() {
        let cfg = Config::default();
        assert_validation(validate_new_movie(&NewMovie { duration: 0, ..inception() }, &cfg));
        assert_validation(validate_new_movie(&NewMovie { duration: -90, ..inception() }, &cfg));
    }

    #[test]
    fn test_rating_bounds() {
        let cfg = Config::default();
        assert!(validate_new_movie(&NewMovie { rating: 0.0, ..inception() }, &cfg).is_ok());
        assert!(validate_new_movie(&NewMovie { rating: 10.0, ..inception() }, &cfg).is_ok());
        assert_validation(validate_new_movie(&NewMovie { rating: 10.1, ..inception() }, &cfg));
        assert_validation(validate_new_movie(&NewMovie { rating: -0.5, ..inception() }, &cfg));
        assert_validation(validate_new_movie(&NewMovie { rating: f64::NAN, ..inception() }, &cfg));
    }

    #[test]
    fn test_release_year_window() {
        let cfg = Config::default();
        assert!(validate_release_year(1000, &cfg, 2026).is_ok());
        assert!(validate_release_year(2031, &cfg, 2026).is_ok());
        assert_validation(validate_release_year(999, &cfg, 2026));
        assert_validation(validate_release_year(2032, &cfg, 2026));
    }

    #[test]
    fn test_movie_patch_checks_only_provided_fields() {
        let cfg = Config::default();
        assert!(validate_movie_patch(&MoviePatch::default(), &cfg).is_ok());
        assert!(validate_movie_patch(
            &MoviePatch { rating: Some(7.5), ..Default::default() },
            &cfg
        )
        .is_ok());
        assert_validation(validate_movie_patch(
            &MoviePatch { title: Some(String::new()), ..Default::default() },
            &cfg,
        ));
        assert_validation(validate_movie_patch(
            &MoviePatch { duration: Some(0), ..Default::default() },
            &cfg,
        ));
    }

    #[test]
    fn test_showtime_fields() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap();
        let valid = NewShowtime {
            movie_id: 1,
            price: 20.0,
            theater: "Hall 1".to_string(),
            start_time: start,
            end_time: start + chrono::Duration::minutes(150),
        };
        assert!(validate_new_showtime(&valid).is_ok());
        assert_validation(validate_new_showtime(&NewShowtime { price: 0.0, ..valid.clone() }));
        assert_validation(validate_new_showtime(&NewShowtime { movie_id: 0, ..valid.clone() }));
        assert_validation(validate_new_showtime(&NewShowtime { theater: "".into(), ..valid }));
    }

    #[test]
    fn test_showtime_patch_fields() {
        assert!(validate_showtime_patch(&ShowtimePatch::default()).is_ok());
        assert_validation(validate_showtime_patch(&ShowtimePatch {
            price: Some(-1.0),
            ..Default::default()
        }));
        assert_validation(validate_showtime_patch(&ShowtimePatch {
            theater: Some(" ".into()),
            ..Default::default()
        }));
    }

    #[test]
    fn test_seat_number_range() {
        let cfg = Config::default();
        let booking = |seat_number| NewBooking {
            showtime_id: 1,
            seat_number,
            user_id: Uuid::new_v4(),
        };
        assert!(validate_new_booking(&booking(1), &cfg).is_ok());
        assert!(validate_new_booking(&booking(200), &cfg).is_ok());
        assert_validation(validate_new_booking(&booking(0), &cfg));
        assert_validation(validate_new_booking(&booking(201), &cfg));
    }
}
