//! Schedule service - Class availability lookups
//!
//! Loads the schedule once at startup and answers availability queries from
//! memory. A missing or unreadable source degrades to an empty schedule so
//! the relay still starts; every query then answers `false`.

use domain::{Schedule, ScheduleRow};
use tracing::{info, instrument, warn};

use crate::{error::ApplicationError, ports::ScheduleSourcePort};

/// Read-only view over the loaded class schedule
#[derive(Debug, Clone, Default)]
pub struct ScheduleService {
    schedule: Schedule,
}

impl ScheduleService {
    /// Load the schedule from `source`, falling back to an empty schedule
    #[instrument(skip(source), fields(source = %source.describe()))]
    pub fn load(source: &dyn ScheduleSourcePort) -> Self {
        match source.load() {
            Ok(rows) => {
                info!(rows = rows.len(), "Loaded class schedule");
                Self::from_schedule(Schedule::new(rows))
            },
            Err(ApplicationError::ScheduleSourceMissing(location)) => {
                warn!(location = %location, "Schedule source not found, using empty schedule");
                Self::default()
            },
            Err(e) => {
                warn!(error = %e, "Failed to load schedule, using empty schedule");
                Self::default()
            },
        }
    }

    pub const fn from_schedule(schedule: Schedule) -> Self {
        Self { schedule }
    }

    /// True iff some row matches all three keys exactly and is available
    pub fn check_availability(&self, class_type: &str, date: &str, time: &str) -> bool {
        self.schedule.check_availability(class_type, date, time)
    }

    /// The loaded schedule
    pub const fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        self.schedule.rows()
    }

    pub fn len(&self) -> usize {
        self.schedule.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockScheduleSourcePort;

    fn source(result: Result<Vec<ScheduleRow>, ApplicationError>) -> MockScheduleSourcePort {
        let mut mock = MockScheduleSourcePort::new();
        mock.expect_describe()
            .returning(|| "data/schedule.csv".to_string());
        mock.expect_load().times(1).return_once(move || result);
        mock
    }

    #[test]
    fn loads_rows_from_source() {
        let mock = source(Ok(vec![
            ScheduleRow::new("Yoga", "2023-12-25", "10:00", true),
            ScheduleRow::new("Pilates", "2023-12-25", "11:00", false),
        ]));

        let service = ScheduleService::load(&mock);
        assert_eq!(service.len(), 2);
        assert!(service.check_availability("Yoga", "2023-12-25", "10:00"));
        assert!(!service.check_availability("Pilates", "2023-12-25", "11:00"));
    }

    #[test]
    fn missing_source_yields_empty_schedule() {
        let mock = source(Err(ApplicationError::ScheduleSourceMissing(
            "data/schedule.csv".to_string(),
        )));

        let service = ScheduleService::load(&mock);
        assert!(service.is_empty());
        assert!(!service.check_availability("Yoga", "2023-12-25", "10:00"));
    }

    #[test]
    fn unreadable_source_yields_empty_schedule() {
        let mock = source(Err(ApplicationError::ScheduleSource(
            "row 3: invalid availability".to_string(),
        )));

        let service = ScheduleService::load(&mock);
        assert!(service.is_empty());
    }

    #[test]
    fn from_schedule_keeps_rows_in_order() {
        let service = ScheduleService::from_schedule(Schedule::new(vec![
            ScheduleRow::new("Spin", "2023-12-26", "07:00", true),
            ScheduleRow::new("Yoga", "2023-12-25", "10:00", true),
        ]));

        assert_eq!(service.rows()[0].class_type, "Spin");
        assert_eq!(service.schedule().len(), 2);
    }

    #[test]
    fn queries_are_exact_string_matches() {
        let service = ScheduleService::from_schedule(Schedule::new(vec![ScheduleRow::new(
            "Yoga",
            "2023-12-25",
            "10:00",
            true,
        )]));

        assert!(!service.check_availability("Yoga ", "2023-12-25", "10:00"));
        assert!(!service.check_availability("Yoga", "2023-12-25", "10:00 "));
    }
}
