//! Booking ledger - one seat per showtime

use super::catalog::internal;
use super::repository::{BookingRepository, RepoError};
use super::scheduler::ShowtimeScheduler;
use super::validation::validate_new_booking;
use crate::config::Config;
use crate::contract::{Booking, CinemaError, NewBooking};
use std::sync::Arc;
use uuid::Uuid;

pub struct BookingLedger {
    bookings: Arc<dyn BookingRepository>,
    scheduler: Arc<ShowtimeScheduler>,
    config: Config,
}

impl BookingLedger {
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        scheduler: Arc<ShowtimeScheduler>,
        config: Config,
    ) -> Self {
        Self {
            bookings,
            scheduler,
            config,
        }
    }

    /// Book a seat and return the generated booking id
    pub async fn create(&self, request: NewBooking) -> Result<Uuid, CinemaError> {
        validate_new_booking(&request, &self.config)?;

        // NotFound if the showtime is gone; the details are not needed
        let _showtime = self.scheduler.find_by_id(request.showtime_id).await?;

        let taken = self
            .bookings
            .seat_taken(request.showtime_id, request.seat_number)
            .await
            .map_err(internal)?;
        if taken {
            tracing::warn!(
                showtime_id = request.showtime_id,
                seat_number = request.seat_number,
                "rejected booking for taken seat"
            );
            return Err(seat_conflict(&request));
        }

        let booking = Booking {
            id: Uuid::new_v4(),
            showtime_id: request.showtime_id,
            seat_number: request.seat_number,
            user_id: request.user_id,
        };

        // Two requests may both pass the pre-check; the storage constraint decides.
        let stored = self.bookings.create(&booking).await.map_err(|e| match e {
            RepoError::UniqueViolation(_) => {
                tracing::warn!(
                    showtime_id = request.showtime_id,
                    seat_number = request.seat_number,
                    "seat taken concurrently"
                );
                seat_conflict(&request)
            }
            other => internal(other),
        })?;

        tracing::debug!(booking_id = %stored.id, showtime_id = stored.showtime_id, "seat booked");
        Ok(stored.id)
    }
}

fn seat_conflict(request: &NewBooking) -> CinemaError {
    CinemaError::conflict(format!(
        "Seat number {} already booked for showtime ID {}",
        request.seat_number, request.showtime_id
    ))
}
