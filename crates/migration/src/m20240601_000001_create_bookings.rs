//! Create `bookings` table.
//!
//! Seven mandatory intake columns plus a free-text status defaulting to
//! "Pending" and an insert timestamp.
use sea_orm_migration::{prelude::*, schema::*};

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
                    .col(pk_auto(Bookings::Id))
                    .col(string_len(Bookings::CustomerName, 255).not_null())
                    .col(string_len(Bookings::CustomerEmail, 255).not_null())
                    .col(string_len(Bookings::CustomerPhone, 64).not_null())
                    .col(string_len(Bookings::ServiceType, 128).not_null())
                    .col(string_len(Bookings::PreferredLocation, 255).not_null())
                    .col(date(Bookings::PreferredDate).not_null())
                    .col(time(Bookings::PreferredTime).not_null())
                    .col(
                        ColumnDef::new(Bookings::Status)
                            .string_len(64)
                            .not_null()
                            .default("Pending"),
                    )
                    .col(timestamp_with_time_zone(Bookings::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Bookings::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Bookings {
    Table,
    Id,
    CustomerName,
    CustomerEmail,
    CustomerPhone,
    ServiceType,
    PreferredLocation,
    PreferredDate,
    PreferredTime,
    Status,
    CreatedAt,
}
