//! CSV schedule adapter
//!
//! Implements `ScheduleSourcePort` over a CSV file with the header
//! `class_type,date,time,availability`. Columns are matched by name, so
//! their order and any extra columns do not matter.

use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

use application::{error::ApplicationError, ports::ScheduleSourcePort};
use domain::ScheduleRow;
use serde::{Deserialize, Deserializer, de};
use tracing::debug;

/// One CSV record
#[derive(Debug, Deserialize)]
struct CsvRow {
    class_type: String,
    date: String,
    time: String,
    #[serde(deserialize_with = "deserialize_availability")]
    availability: bool,
}

impl From<CsvRow> for ScheduleRow {
    fn from(row: CsvRow) -> Self {
        Self::new(row.class_type, row.date, row.time, row.availability)
    }
}

/// Parse `true/false`, `1/0` and `yes/no` in any letter case
pub fn parse_availability(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn deserialize_availability<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_availability(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid availability value {raw:?}")))
}

/// Schedule source backed by a CSV file
#[derive(Debug, Clone)]
pub struct CsvScheduleAdapter {
    path: PathBuf,
}

impl CsvScheduleAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScheduleSourcePort for CsvScheduleAdapter {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<ScheduleRow>, ApplicationError> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ApplicationError::ScheduleSourceMissing(self.describe()),
            _ => ApplicationError::ScheduleSource(format!("{}: {e}", self.describe())),
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(file);

        let rows = reader
            .deserialize::<CsvRow>()
            .map(|record| {
                record.map(ScheduleRow::from).map_err(|e| {
                    ApplicationError::ScheduleSource(format!("{}: {e}", self.describe()))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(path = %self.describe(), rows = rows.len(), "Read schedule CSV");
        Ok(rows)
    }
}
