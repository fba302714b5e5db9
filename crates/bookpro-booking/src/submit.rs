//! Submission backends.
//!
//! The workflow only sees the `Submitter` trait, so the simulated delay can
//! be swapped for a real booking API without touching the state machine.

use async_trait::async_trait;
use bookpro_core::catalog::Service;
use chrono::{DateTime, NaiveDate, Utc};
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::draft::Contact;
use crate::error::BookingError;
use crate::slot::TimeSlot;

/// A validated booking ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub service: Service,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub contact: Contact,
}

/// What the backend hands back for an accepted booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingReceipt {
    pub id: Uuid,
    pub service: Service,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub contact: Contact,
    pub confirmed_at: DateTime<Utc>,
}

impl BookingReceipt {
    pub fn accept(request: &BookingRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            service: request.service.clone(),
            date: request.date,
            time: request.time,
            contact: request.contact.clone(),
            confirmed_at: Utc::now(),
        }
    }
}

/// Booking backend.
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Send the booking. Errors come back as `BookingError::SubmissionFailed`.
    async fn submit(&self, request: &BookingRequest) -> Result<BookingReceipt, BookingError>;
}

/// Accepts every booking after a fixed delay standing in for network latency.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn submit(&self, request: &BookingRequest) -> Result<BookingReceipt, BookingError> {
        tokio::time::sleep(self.delay).await;
        let receipt = BookingReceipt::accept(request);
        info!(
            "simulated booking {} accepted: {} on {} at {}",
            receipt.id, request.service.id, request.date, request.time
        );
        Ok(receipt)
    }
}
