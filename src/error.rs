//! Error types for the appointment tracker.

use thiserror::Error;

/// Failures that stop the command loop.
///
/// A booking conflict is not an error: it is reported through
/// [`crate::registry::BookingOutcome`].
#[derive(Error, Debug)]
pub enum HospitalError {
    #[error("Expected an integer, got '{0}'")]
    InvalidNumber(String),

    #[error("Invalid appointment time: {year:04}-{month:02}-{day:02} {hour:02}:00")]
    InvalidTimestamp {
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
    },

    #[error("Input ended before quit was selected")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HospitalError>;
