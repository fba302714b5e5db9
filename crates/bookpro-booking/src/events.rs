use crate::draft::ContactField;
use crate::error::BookingError;
use crate::submit::BookingReceipt;
use crate::workflow::Phase;

/// State-change notifications published by the workflow.
///
/// Presentation layers subscribe and re-render on each event instead of
/// polling the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowEvent {
    PhaseChanged { from: Phase, to: Phase },
    ServiceSelected { id: &'static str },
    DateSelected,
    TimeSelected,
    FieldChanged(ContactField),
    /// Submit was refused or failed; the draft is unchanged.
    Rejected(BookingError),
    Confirmed(Box<BookingReceipt>),
    /// Draft cleared and back to service selection.
    Reset,
}
