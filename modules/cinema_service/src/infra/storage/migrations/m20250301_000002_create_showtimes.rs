use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Showtimes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Showtimes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Showtimes::MovieId).integer().not_null())
                    .col(ColumnDef::new(Showtimes::Price).double().not_null())
                    .col(ColumnDef::new(Showtimes::Theater).string().not_null())
                    .col(
                        ColumnDef::new(Showtimes::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Showtimes::EndTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_showtimes_movie")
                            .from(Showtimes::Table, Showtimes::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_showtimes_theater")
                    .table(Showtimes::Table)
                    .col(Showtimes::Theater)
                    .to_owned(),
            )
            .await?;

        // Same theater and same start always overlap.
        manager
            .create_index(
                Index::create()
                    .name("uq_showtimes_theater_start_time")
                    .table(Showtimes::Table)
                    .col(Showtimes::Theater)
                    .col(Showtimes::StartTime)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Showtimes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Showtimes {
    Table,
    Id,
    MovieId,
    Price,
    Theater,
    StartTime,
    EndTime,
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
}
