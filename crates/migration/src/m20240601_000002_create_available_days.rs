//! Create `available_days` table.
//!
//! One row per weekday name; rows are upserted independently of bookings.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AvailableDays::Table)
                    .if_not_exists()
                    .col(string_len(AvailableDays::DayOfWeek, 16).primary_key())
                    .col(boolean(AvailableDays::IsAvailable).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AvailableDays::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AvailableDays { Table, DayOfWeek, IsAvailable }
