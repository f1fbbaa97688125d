//! Per-date slot availability.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::utils::slots;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub booked_slots: Vec<String>,
    pub available_slots: Vec<String>,
    pub is_fully_booked: bool,
}

impl Availability {
    /// Partition the fixed slots given the times already booked on a date.
    ///
    /// Booked labels come out in chronological order without duplicates. A booked
    /// time that is not one of the fixed slots is still reported as booked.
    pub fn from_booked_times(booked: impl IntoIterator<Item = NaiveTime>) -> Self {
        let mut times: Vec<NaiveTime> = booked.into_iter().collect();
        times.sort();
        times.dedup();

        let booked_slots: Vec<String> = times.into_iter().map(slots::format_label).collect();
        let available_slots: Vec<String> = slots::all_labels()
            .into_iter()
            .filter(|label| !booked_slots.contains(label))
            .collect();
        let is_fully_booked = available_slots.is_empty();

        Self {
            booked_slots,
            available_slots,
            is_fully_booked,
        }
    }

    pub fn is_booked(&self, label: &str) -> bool {
        self.booked_slots.iter().any(|s| s == label)
    }
}
