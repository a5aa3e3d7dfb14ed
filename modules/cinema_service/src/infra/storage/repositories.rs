//! SeaORM repository implementations

use crate::contract::{
    Booking, Movie, MoviePatch, NewMovie, NewShowtime, Showtime, ShowtimeDetails, ShowtimePatch,
};
use crate::domain::repository::{
    BookingRepository, MovieRepository, RepoError, RepoResult, ShowtimeRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    prelude::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionTrait,
};
use std::sync::Arc;

use super::entity::{booking, movie, showtime};

impl From<DbErr> for RepoError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => RepoError::UniqueViolation(detail),
            _ => RepoError::Backend(err.into()),
        }
    }
}

// ===== Movie Repository =====

pub struct SeaOrmMovieRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmMovieRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieRepository for SeaOrmMovieRepository {
    async fn create(&self, movie: &NewMovie) -> RepoResult<Movie> {
        let active: movie::ActiveModel = movie.into();
        let result = active.insert(&*self.db).await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Movie>> {
        let result = movie::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(|e| e.into()))
    }

    async fn find_by_title(&self, title: &str) -> RepoResult<Option<Movie>> {
        let result = movie::Entity::find()
            .filter(movie::Column::Title.eq(title))
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn list_all(&self) -> RepoResult<Vec<Movie>> {
        let results = movie::Entity::find()
            .order_by_asc(movie::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn update(&self, id: i32, patch: &MoviePatch) -> RepoResult<()> {
        if patch.is_empty() {
            return Ok(());
        }

        let mut update = movie::Entity::update_many().filter(movie::Column::Id.eq(id));

        if let Some(title) = &patch.title {
            update = update.col_expr(movie::Column::Title, Expr::value(title.clone()));
        }
        if let Some(genre) = &patch.genre {
            update = update.col_expr(movie::Column::Genre, Expr::value(genre.clone()));
        }
        if let Some(duration) = patch.duration {
            update = update.col_expr(movie::Column::Duration, Expr::value(duration));
        }
        if let Some(rating) = patch.rating {
            update = update.col_expr(movie::Column::Rating, Expr::value(rating));
        }
        if let Some(release_year) = patch.release_year {
            update = update.col_expr(movie::Column::ReleaseYear, Expr::value(release_year));
        }

        update.exec(&*self.db).await?;

        Ok(())
    }

    async fn delete_cascade(&self, id: i32) -> RepoResult<()> {
        let txn = self.db.begin().await?;

        let showtime_ids: Vec<i32> = showtime::Entity::find()
            .select_only()
            .column(showtime::Column::Id)
            .filter(showtime::Column::MovieId.eq(id))
            .into_tuple()
            .all(&txn)
            .await?;

        booking::Entity::delete_many()
            .filter(booking::Column::ShowtimeId.is_in(showtime_ids))
            .exec(&txn)
            .await?;
        showtime::Entity::delete_many()
            .filter(showtime::Column::MovieId.eq(id))
            .exec(&txn)
            .await?;
        movie::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}

// ===== Showtime Repository =====

pub struct SeaOrmShowtimeRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmShowtimeRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ShowtimeRepository for SeaOrmShowtimeRepository {
    async fn create(&self, showtime: &NewShowtime) -> RepoResult<Showtime> {
        let active: showtime::ActiveModel = showtime.into();
        let result = active.insert(&*self.db).await?;

        Ok(result.into())
    }

    async fn find_with_movie(&self, id: i32) -> RepoResult<Option<ShowtimeDetails>> {
        let result = showtime::Entity::find_by_id(id)
            .find_also_related(movie::Entity)
            .one(&*self.db)
            .await?;

        match result {
            Some((showtime, Some(movie))) => Ok(Some(ShowtimeDetails {
                showtime: showtime.into(),
                movie: movie.into(),
            })),
            Some((showtime, None)) => Err(RepoError::Backend(anyhow::anyhow!(
                "showtime {} references missing movie {}",
                showtime.id,
                showtime.movie_id
            ))),
            None => Ok(None),
        }
    }

    async fn exists_overlapping(
        &self,
        theater: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        excluding: Option<i32>,
    ) -> RepoResult<bool> {
        let mut query = showtime::Entity::find()
            .filter(showtime::Column::Theater.eq(theater))
            .filter(showtime::Column::StartTime.lte(end_time))
            .filter(showtime::Column::EndTime.gt(start_time));

        if let Some(id) = excluding {
            query = query.filter(showtime::Column::Id.ne(id));
        }

        let count = query.count(&*self.db).await?;
        Ok(count > 0)
    }

    async fn update(&self, id: i32, patch: &ShowtimePatch) -> RepoResult<()> {
        let mut update = showtime::Entity::update_many().filter(showtime::Column::Id.eq(id));
        let mut changed = false;

        if let Some(movie_id) = patch.movie_id {
            update = update.col_expr(showtime::Column::MovieId, Expr::value(movie_id));
            changed = true;
        }
        if let Some(price) = patch.price {
            update = update.col_expr(showtime::Column::Price, Expr::value(price));
            changed = true;
        }
        if let Some(theater) = &patch.theater {
            update = update.col_expr(showtime::Column::Theater, Expr::value(theater.clone()));
            changed = true;
        }
        if let Some(start_time) = patch.start_time {
            update = update.col_expr(showtime::Column::StartTime, Expr::value(start_time));
            changed = true;
        }
        if let Some(end_time) = patch.end_time {
            update = update.col_expr(showtime::Column::EndTime, Expr::value(end_time));
            changed = true;
        }

        if changed {
            update.exec(&*self.db).await?;
        }
        Ok(())
    }

    async fn delete_cascade(&self, id: i32) -> RepoResult<()> {
        let txn = self.db.begin().await?;

        booking::Entity::delete_many()
            .filter(booking::Column::ShowtimeId.eq(id))
            .exec(&txn)
            .await?;
        showtime::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}

// ===== Booking Repository =====

pub struct SeaOrmBookingRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmBookingRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn create(&self, booking: &Booking) -> RepoResult<Booking> {
        let active: booking::ActiveModel = booking.into();
        let result = active.insert(&*self.db).await?;

        Ok(result.into())
    }

    async fn seat_taken(&self, showtime_id: i32, seat_number: i32) -> RepoResult<bool> {
        let count = booking::Entity::find()
            .filter(booking::Column::ShowtimeId.eq(showtime_id))
            .filter(booking::Column::SeatNumber.eq(seat_number))
            .count(&*self.db)
            .await?;

        Ok(count > 0)
    }
}
