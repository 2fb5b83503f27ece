//! Error types for slot-engine operations.
//!
//! Only malformed input is an error. Empty result sets (no shifts on a date,
//! an ineligible practitioner, a shift too short for the service) are
//! legitimate `Ok` outputs and never surface here.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid service {id}: duration must be positive")]
    InvalidService { id: String },

    #[error("Invalid shift for {practitioner_id}: end {end} is not after start {start}")]
    InvalidShift {
        practitioner_id: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Invalid busy period for {practitioner_id}: end {end} precedes start {start}")]
    InvalidBusyPeriod {
        practitioner_id: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Overlapping shifts for {practitioner_id} on {day}")]
    OverlappingShifts {
        practitioner_id: String,
        day: NaiveDate,
    },

    #[error("Invalid proposed duration: {0} minutes")]
    InvalidDuration(i64),
}

pub type Result<T> = std::result::Result<T, SlotError>;
