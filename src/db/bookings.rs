//! Booking store: every query against the `booking` table lives here.
//!
//! Functions take any [`ConnectionTrait`] so they work on the pool as well as
//! inside a transaction.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, SqlErr, TransactionTrait,
};

use crate::entities::booking;
use crate::error::AppError;

/// A validated booking that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub guests: i32,
    pub name: String,
    pub contact: String,
}

#[derive(Debug, thiserror::Error)]
pub enum InsertError {
    #[error("slot {time} on {date} is already booked")]
    SlotTaken { date: NaiveDate, time: NaiveTime },

    #[error(transparent)]
    Database(#[from] DbErr),
}

impl From<InsertError> for AppError {
    fn from(err: InsertError) -> Self {
        match err {
            InsertError::SlotTaken { .. } => AppError::Conflict(
                "The selected time slot is already booked. Please choose another.".to_string(),
            ),
            InsertError::Database(e) => AppError::Database(e),
        }
    }
}

/// All bookings, oldest id first.
pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<booking::Model>, DbErr> {
    booking::Entity::find()
        .order_by_asc(booking::Column::Id)
        .all(db)
        .await
}

/// Times already booked on `date`, earliest first.
pub async fn times_on<C: ConnectionTrait>(db: &C, date: NaiveDate) -> Result<Vec<NaiveTime>, DbErr> {
    let bookings = booking::Entity::find()
        .filter(booking::Column::Date.eq(date))
        .order_by_asc(booking::Column::Time)
        .all(db)
        .await?;

    Ok(bookings.into_iter().map(|b| b.time).collect())
}

/// Unconditional insert. The unique index on `(date, time)` still applies.
pub async fn insert<C: ConnectionTrait>(db: &C, new: NewBooking) -> Result<booking::Model, InsertError> {
    let (date, time) = (new.date, new.time);

    let model = booking::ActiveModel {
        date: Set(new.date),
        time: Set(new.time),
        guests: Set(new.guests),
        name: Set(new.name),
        contact: Set(new.contact),
        ..Default::default()
    };

    model.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => InsertError::SlotTaken { date, time },
        _ => InsertError::Database(e),
    })
}

/// Checks the slot and inserts in one transaction.
///
/// A concurrent writer that wins the race between the check and the insert is
/// caught by the unique index, so both paths report [`InsertError::SlotTaken`].
pub async fn insert_if_free<C>(db: &C, new: NewBooking) -> Result<booking::Model, InsertError>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;

    let existing = booking::Entity::find()
        .filter(booking::Column::Date.eq(new.date))
        .filter(booking::Column::Time.eq(new.time))
        .one(&txn)
        .await?;

    if existing.is_some() {
        txn.rollback().await?;
        return Err(InsertError::SlotTaken {
            date: new.date,
            time: new.time,
        });
    }

    let booking = insert(&txn, new).await?;
    txn.commit().await?;

    Ok(booking)
}

/// Hard delete. Returns whether a row existed.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, DbErr> {
    let result = booking::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
