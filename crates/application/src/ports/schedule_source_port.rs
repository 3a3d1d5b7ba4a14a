//! Schedule source port
//!
//! Loads the rows of the class schedule from wherever they are stored.

use domain::ScheduleRow;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for loading schedule rows
#[cfg_attr(test, automock)]
pub trait ScheduleSourcePort: Send + Sync {
    /// Human-readable location of the source, used in logs
    fn describe(&self) -> String;

    /// Read every row, in source order
    ///
    /// Returns `ApplicationError::ScheduleSourceMissing` when the source
    /// does not exist and `ApplicationError::ScheduleSource` when it cannot
    /// be read or parsed.
    fn load(&self) -> Result<Vec<ScheduleRow>, ApplicationError>;
}
