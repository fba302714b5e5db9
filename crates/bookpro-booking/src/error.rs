use chrono::NaiveDate;
use thiserror::Error;

use crate::workflow::Phase;

/// Errors from the booking workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// Date or time slot not chosen yet.
    #[error("missing date or time")]
    MissingDateTime,

    /// First name, last name, or email is empty.
    #[error("missing required contact fields")]
    MissingRequiredFields,

    /// Weekend or past date.
    #[error("date {0} is not available")]
    DateUnavailable(NaiveDate),

    /// Text that is not one of the offered slots.
    #[error("invalid time slot: {0}")]
    InvalidSlot(String),

    #[error("no service selected")]
    NoServiceSelected,

    /// Service id not in the catalog.
    #[error("unknown service: {0}")]
    UnknownService(String),

    /// The action is not allowed in the current phase.
    #[error("cannot {action} while {phase}")]
    InvalidTransition { action: &'static str, phase: Phase },

    /// The submitter rejected the booking.
    #[error("submission failed: {0}")]
    SubmissionFailed(String),

    #[error("submission cancelled")]
    Cancelled,
}
