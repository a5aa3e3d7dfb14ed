//! SeaORM entities for database tables
//!
//! Ownership chain: movies -> showtimes -> bookings.

/// Movies table
pub mod movie {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "movies")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Unique title
        #[sea_orm(unique)]
        pub title: String,

        pub genre: String,

        /// Running time in minutes
        pub duration: i32,

        pub rating: f64,

        pub release_year: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// One-to-many relationship with showtimes
        #[sea_orm(has_many = "super::showtime::Entity")]
        Showtimes,
    }

    impl Related<super::showtime::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Showtimes.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Showtimes table
pub mod showtime {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "showtimes")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        pub movie_id: i32,

        pub price: f64,

        pub theater: String,

        pub start_time: DateTimeUtc,

        pub end_time: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Foreign key to movies
        #[sea_orm(
            belongs_to = "super::movie::Entity",
            from = "Column::MovieId",
            to = "super::movie::Column::Id",
            on_delete = "Cascade"
        )]
        Movie,
        /// One-to-many relationship with bookings
        #[sea_orm(has_many = "super::booking::Entity")]
        Bookings,
    }

    impl Related<super::movie::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Movie.def()
        }
    }

    impl Related<super::booking::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Bookings.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Bookings table
pub mod booking {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "bookings")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        pub showtime_id: i32,

        pub seat_number: i32,

        pub user_id: Uuid,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Foreign key to showtimes
        #[sea_orm(
            belongs_to = "super::showtime::Entity",
            from = "Column::ShowtimeId",
            to = "super::showtime::Column::Id",
            on_delete = "Cascade"
        )]
        Showtime,
    }

    impl Related<super::showtime::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Showtime.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
