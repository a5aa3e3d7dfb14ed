//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
    extract::JsonBody,
};
use crate::domain::Service;
use axum::{extract::Path, Extension, Json};
use std::sync::Arc;

// ===== Movie Handlers =====

/// List all movies
#[utoipa::path(
    get,
    path = "/movies/all",
    tag = "movies",
    responses(
        (status = 200, description = "All movies", body = [MovieDto])
    )
)]
pub async fn list_movies(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<MovieDto>>, Problem> {
    let movies = service.list_movies().await.map_err(map_domain_error)?;

    Ok(Json(movies.into_iter().map(|m| m.into()).collect()))
}

/// Add a movie
#[utoipa::path(
    post,
    path = "/movies",
    tag = "movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 200, description = "Movie created", body = MovieDto),
        (status = 400, description = "Invalid movie"),
        (status = 409, description = "Title already exists")
    )
)]
pub async fn create_movie(
    Extension(service): Extension<Arc<Service>>,
    JsonBody(req): JsonBody<CreateMovieRequest>,
) -> Result<Json<MovieDto>, Problem> {
    let movie = service
        .create_movie(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(movie.into()))
}

/// Update a movie by title
#[utoipa::path(
    post,
    path = "/movies/update/{movieTitle}",
    tag = "movies",
    params(("movieTitle" = String, Path, description = "Movie title")),
    request_body = UpdateMovieRequest,
    responses(
        (status = 200, description = "Movie updated"),
        (status = 400, description = "Invalid field"),
        (status = 404, description = "Movie not found"),
        (status = 409, description = "Title already exists")
    )
)]
pub async fn update_movie(
    Extension(service): Extension<Arc<Service>>,
    Path(movie_title): Path<String>,
    JsonBody(req): JsonBody<UpdateMovieRequest>,
) -> Result<(), Problem> {
    service
        .update_movie(&movie_title, req.into())
        .await
        .map_err(map_domain_error)
}

/// Delete a movie by title
#[utoipa::path(
    delete,
    path = "/movies/{movieTitle}",
    tag = "movies",
    params(("movieTitle" = String, Path, description = "Movie title")),
    responses(
        (status = 200, description = "Movie and its showtimes deleted"),
        (status = 404, description = "Movie not found")
    )
)]
pub async fn delete_movie(
    Extension(service): Extension<Arc<Service>>,
    Path(movie_title): Path<String>,
) -> Result<(), Problem> {
    service
        .delete_movie(&movie_title)
        .await
        .map_err(map_domain_error)
}

// ===== Showtime Handlers =====

/// Get a showtime with its movie
#[utoipa::path(
    get,
    path = "/showtimes/{showtimeId}",
    tag = "showtimes",
    params(("showtimeId" = i32, Path, description = "Showtime ID")),
    responses(
        (status = 200, description = "Showtime with its movie", body = ShowtimeDto),
        (status = 404, description = "Showtime not found")
    )
)]
pub async fn get_showtime(
    Extension(service): Extension<Arc<Service>>,
    Path(showtime_id): Path<i32>,
) -> Result<Json<ShowtimeDto>, Problem> {
    let details = service
        .get_showtime(showtime_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(details.into()))
}

/// Schedule a showtime
#[utoipa::path(
    post,
    path = "/showtimes",
    tag = "showtimes",
    request_body = CreateShowtimeRequest,
    responses(
        (status = 200, description = "Showtime scheduled", body = ShowtimeDto),
        (status = 400, description = "Invalid showtime or too short for the movie"),
        (status = 404, description = "Movie not found"),
        (status = 409, description = "Overlaps another showtime in the theater")
    )
)]
pub async fn create_showtime(
    Extension(service): Extension<Arc<Service>>,
    JsonBody(req): JsonBody<CreateShowtimeRequest>,
) -> Result<Json<ShowtimeDto>, Problem> {
    let showtime = service
        .create_showtime(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(showtime.into()))
}

/// Update a showtime
#[utoipa::path(
    post,
    path = "/showtimes/update/{showtimeId}",
    tag = "showtimes",
    params(("showtimeId" = i32, Path, description = "Showtime ID")),
    request_body = UpdateShowtimeRequest,
    responses(
        (status = 200, description = "Showtime updated"),
        (status = 400, description = "Invalid field or too short for the movie"),
        (status = 404, description = "Showtime or movie not found"),
        (status = 409, description = "Overlaps another showtime in the theater")
    )
)]
pub async fn update_showtime(
    Extension(service): Extension<Arc<Service>>,
    Path(showtime_id): Path<i32>,
    JsonBody(req): JsonBody<UpdateShowtimeRequest>,
) -> Result<(), Problem> {
    service
        .update_showtime(showtime_id, req.into())
        .await
        .map_err(map_domain_error)
}

/// Delete a showtime
#[utoipa::path(
    delete,
    path = "/showtimes/{showtimeId}",
    tag = "showtimes",
    params(("showtimeId" = i32, Path, description = "Showtime ID")),
    responses(
        (status = 200, description = "Showtime and its bookings deleted"),
        (status = 404, description = "Showtime not found")
    )
)]
pub async fn delete_showtime(
    Extension(service): Extension<Arc<Service>>,
    Path(showtime_id): Path<i32>,
) -> Result<(), Problem> {
    service
        .delete_showtime(showtime_id)
        .await
        .map_err(map_domain_error)
}

// ===== Booking Handlers =====

/// Book a seat
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 200, description = "Seat booked", body = BookingCreatedResponse),
        (status = 400, description = "Invalid booking"),
        (status = 404, description = "Showtime not found"),
        (status = 409, description = "Seat already booked")
    )
)]
pub async fn create_booking(
    Extension(service): Extension<Arc<Service>>,
    JsonBody(req): JsonBody<CreateBookingRequest>,
) -> Result<Json<BookingCreatedResponse>, Problem> {
    let booking_id = service
        .create_booking(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(BookingCreatedResponse { booking_id }))
}
