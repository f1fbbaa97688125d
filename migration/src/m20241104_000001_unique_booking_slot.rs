use sea_orm_migration::prelude::*;

use super::m20241020_000001_create_bookings::Booking;

const INDEX_NAME: &str = "idx_booking_date_time";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One booking per slot per day
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Booking::Table)
                    .col(Booking::Date)
                    .col(Booking::Time)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(INDEX_NAME)
                    .table(Booking::Table)
                    .to_owned(),
            )
            .await
    }
}
