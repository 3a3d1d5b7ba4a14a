//! Class schedule source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the class schedule is read from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// CSV file with a `class_type,date,time,availability` header
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("data/schedule.csv")
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
        }
    }
}
