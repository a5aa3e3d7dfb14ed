//! Route registration and OpenAPI document

use super::{dto::*, handlers};
use crate::domain::Service;
use axum::{
    routing::{delete, get, post},
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_movies,
        handlers::create_movie,
        handlers::update_movie,
        handlers::delete_movie,
        handlers::get_showtime,
        handlers::create_showtime,
        handlers::update_showtime,
        handlers::delete_showtime,
        handlers::create_booking
    ),
    components(schemas(
        MovieDto,
        CreateMovieRequest,
        UpdateMovieRequest,
        ShowtimeDto,
        CreateShowtimeRequest,
        UpdateShowtimeRequest,
        CreateBookingRequest,
        BookingCreatedResponse
    )),
    tags(
        (name = "movies", description = "Movie catalog"),
        (name = "showtimes", description = "Showtime scheduling"),
        (name = "bookings", description = "Seat bookings")
    )
)]
pub struct ApiDoc;

/// Register all REST routes on `router`
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        // Movie endpoints
        .route("/movies/all", get(handlers::list_movies))
        .route("/movies", post(handlers::create_movie))
        .route("/movies/update/{movie_title}", post(handlers::update_movie))
        .route("/movies/{movie_title}", delete(handlers::delete_movie))
        // Showtime endpoints
        .route("/showtimes", post(handlers::create_showtime))
        .route(
            "/showtimes/{showtime_id}",
            get(handlers::get_showtime).delete(handlers::delete_showtime),
        )
        .route("/showtimes/update/{showtime_id}", post(handlers::update_showtime))
        // Booking endpoints
        .route("/bookings", post(handlers::create_booking))
        .route("/openapi.json", get(openapi_json))
        // Add service as extension for handlers
        .layer(Extension(service))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
