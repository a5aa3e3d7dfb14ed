use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bookings::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bookings::ShowtimeId).integer().not_null())
                    .col(ColumnDef::new(Bookings::SeatNumber).integer().not_null())
                    .col(ColumnDef::new(Bookings::UserId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_showtime")
                            .from(Bookings::Table, Bookings::ShowtimeId)
                            .to(Showtimes::Table, Showtimes::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_bookings_showtime_seat")
                    .table(Bookings::Table)
                    .col(Bookings::ShowtimeId)
                    .col(Bookings::SeatNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Bookings {
    Table,
    Id,
    ShowtimeId,
    SeatNumber,
    UserId,
}

#[derive(DeriveIden)]
enum Showtimes {
    Table,
    Id,
}
