//! Class schedule
//!
//! A flat, read-only table of class slots. Queries compare strings
//! literally; dates and times are never parsed or normalized.

use serde::{Deserialize, Serialize};

/// One slot of the class schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub class_type: String,
    pub date: String,
    pub time: String,
    pub availability: bool,
}

impl ScheduleRow {
    pub fn new(
        class_type: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        availability: bool,
    ) -> Self {
        Self {
            class_type: class_type.into(),
            date: date.into(),
            time: time.into(),
            availability,
        }
    }

    /// Exact match on all three keys plus `availability == true`
    pub fn is_open_slot(&self, class_type: &str, date: &str, time: &str) -> bool {
        self.availability && self.class_type == class_type && self.date == date && self.time == time
    }
}

/// Ordered collection of schedule rows, immutable once built
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    rows: Vec<ScheduleRow>,
}

impl Schedule {
    pub fn new(rows: Vec<ScheduleRow>) -> Self {
        Self { rows }
    }

    /// A schedule with no rows; every query answers `false`
    pub fn empty() -> Self {
        Self::default()
    }

    /// True iff at least one row is an open slot for the given keys
    pub fn check_availability(&self, class_type: &str, date: &str, time: &str) -> bool {
        self.rows
            .iter()
            .any(|row| row.is_open_slot(class_type, date, time))
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<ScheduleRow> for Schedule {
    fn from_iter<I: IntoIterator<Item = ScheduleRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
