use chrono::{Days, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Past this local time, today can no longer be booked.
pub const SAME_DAY_CUTOFF_HOUR: u32 = 19;
/// How many days ahead a booking may be made.
pub const MAX_DAYS_AHEAD: u64 = 15;

/// Range of dates a customer may pick, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl BookingWindow {
    pub fn at(now: NaiveDateTime) -> Self {
        let today = now.date();
        let cutoff = NaiveTime::from_hms_opt(SAME_DAY_CUTOFF_HOUR, 0, 0).unwrap_or(NaiveTime::MIN);

        let min = if now.time() >= cutoff {
            today.checked_add_days(Days::new(1)).unwrap_or(today)
        } else {
            today
        };
        let max = today
            .checked_add_days(Days::new(MAX_DAYS_AHEAD))
            .unwrap_or(NaiveDate::MAX);

        Self { min, max }
    }

    /// Window for the current local time
    pub fn now() -> Self {
        Self::at(Local::now().naive_local())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }
}
