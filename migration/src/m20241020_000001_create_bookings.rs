use sea_orm_migration::{prelude::*, schema::*};

/// Column width of `booking.name` and `booking.contact`, in characters.
pub const BOOKING_TEXT_MAX_LEN: u32 = 100;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(date(Booking::Date).not_null())
                    .col(time(Booking::Time).not_null())
                    .col(integer(Booking::Guests).not_null())
                    .col(string_len(Booking::Name, BOOKING_TEXT_MAX_LEN).not_null())
                    .col(string_len(Booking::Contact, BOOKING_TEXT_MAX_LEN).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    Date,
    Time,
    Guests,
    Name,
    Contact,
}
