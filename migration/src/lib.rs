pub use sea_orm_migration::prelude::*;

mod m20241020_000001_create_bookings;
mod m20241104_000001_unique_booking_slot;

pub use m20241020_000001_create_bookings::BOOKING_TEXT_MAX_LEN;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241020_000001_create_bookings::Migration),
            Box::new(m20241104_000001_unique_booking_slot::Migration),
        ]
    }
}
