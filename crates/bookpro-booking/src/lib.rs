//! # bookpro-booking
//!
//! The booking workflow: service → slot → contact details → validation →
//! submission → confirmation, plus the calendar-link generator.

pub mod availability;
pub mod calendar;
pub mod cancel;
pub mod draft;
pub mod error;
pub mod events;
pub mod slot;
pub mod submit;
pub mod workflow;

pub use cancel::CancelToken;
pub use draft::{BookingDraft, Contact, ContactField};
pub use error::BookingError;
pub use events::WorkflowEvent;
pub use slot::TimeSlot;
pub use submit::{BookingReceipt, BookingRequest, SimulatedSubmitter, Submitter};
pub use workflow::{BookingWorkflow, Phase, SubmissionState};
