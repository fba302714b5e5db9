//! Booking workflow — the state machine behind the booking form.
//!
//! Phases: `Selecting` (no service) → `Scheduling` (draft being edited) →
//! `Submitting` (submitter running) → `Confirmed` → back to `Selecting` on
//! dismissal. Validation failures are advisory: the user is notified, the
//! draft is left as is, and the phase stays `Scheduling`.


use bookpro_core::catalog::{self, Service};
use bookpro_core::config::{AgencyConfig, CalendarConfig};
use bookpro_core::i18n::{format, Locale, Localizer};
use bookpro_core::message::NoticeKind;
use bookpro_core::traits::{Clock, Notifier};
use chrono::NaiveDate;
use std::fmt;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::availability;
use crate::calendar;
use crate::cancel::CancelToken;
use crate::draft::{BookingDraft, ContactField};
use crate::error::BookingError;
use crate::events::WorkflowEvent;
use crate::slot::TimeSlot;
use crate::submit::{BookingReceipt, BookingRequest, Submitter};

const EVENT_CAPACITY: usize = 64;

/// Where the workflow is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No service chosen.
    Selecting,
    /// Service chosen; date, time, and contact being filled in.
    Scheduling,
    Submitting,
    Confirmed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Selecting => "selecting",
            Self::Scheduling => "scheduling",
            Self::Submitting => "submitting",
            Self::Confirmed => "confirmed",
        })
    }
}

/// Submission progress as seen by the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Confirmed,
}

/// One booking session's workflow. Holds at most one draft.
pub struct BookingWorkflow {
    phase: Phase,
    draft: BookingDraft,
    receipt: Option<BookingReceipt>,
    submitter: Arc<dyn Submitter>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    cancel: CancelToken,
    events: broadcast::Sender<WorkflowEvent>,
    agency: AgencyConfig,
    calendar: CalendarConfig,
}

impl BookingWorkflow {
    pub fn new(
        submitter: Arc<dyn Submitter>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            phase: Phase::Selecting,
            draft: BookingDraft::default(),
            receipt: None,
            submitter,
            notifier,
            clock,
            cancel: CancelToken::new(),
            events,
            agency: AgencyConfig::default(),
            calendar: CalendarConfig::default(),
        }
    }

    /// Use this agency and calendar endpoint for calendar links.
    pub fn with_calendar(mut self, agency: AgencyConfig, calendar: CalendarConfig) -> Self {
        self.agency = agency;
        self.calendar = calendar;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn submission_state(&self) -> SubmissionState {
        match self.phase {
            Phase::Selecting | Phase::Scheduling => SubmissionState::Idle,
            Phase::Submitting => SubmissionState::Submitting,
            Phase::Confirmed => SubmissionState::Confirmed,
        }
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// Receipt of the confirmed booking, until dismissed.
    pub fn receipt(&self) -> Option<&BookingReceipt> {
        self.receipt.as_ref()
    }

    /// Receive every subsequent `WorkflowEvent`.
    pub fn subscribe(&self) -> broadcast::Receiver<WorkflowEvent> {
        self.events.subscribe()
    }

    /// Cancellation for the next or in-flight submit. Re-armed whenever a
    /// submit finishes, so one cancel never affects later submissions.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Current date according to the workflow's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Whether the date picker allows `date` today.
    pub fn is_date_selectable(&self, date: NaiveDate) -> bool {
        availability::is_selectable(date, self.clock.today())
    }

    /// Start a fresh draft for `service`.
    pub fn select_service(&mut self, service: Service) -> Result<(), BookingError> {
        self.expect_phase("select a service", &[Phase::Selecting, Phase::Scheduling])?;
        info!("service selected: {}", service.id);
        let id = service.id;
        self.draft = BookingDraft::for_service(service);
        self.emit(WorkflowEvent::ServiceSelected { id });
        self.transition(Phase::Scheduling);
        Ok(())
    }

    /// Pick a date. Weekends and past dates are refused; the draft keeps
    /// its previous date.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), BookingError> {
        self.expect_phase("select a date", &[Phase::Scheduling])?;
        if !self.is_date_selectable(date) {
            debug!("date {date} refused by the date picker rules");
            return Err(BookingError::DateUnavailable(date));
        }
        self.draft.date = Some(date);
        self.emit(WorkflowEvent::DateSelected);
        Ok(())
    }

    pub fn select_time(&mut self, slot: TimeSlot) -> Result<(), BookingError> {
        self.expect_phase("select a time", &[Phase::Scheduling])?;
        self.draft.time = Some(slot);
        self.emit(WorkflowEvent::TimeSelected);
        Ok(())
    }

    /// Pick a time from its `HH:MM` label.
    pub fn select_time_str(&mut self, label: &str) -> Result<(), BookingError> {
        let slot: TimeSlot = label.parse()?;
        self.select_time(slot)
    }

    /// Update one contact field. Not validated until submit.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) -> Result<(), BookingError> {
        self.expect_phase("edit the form", &[Phase::Scheduling])?;
        self.draft.contact.set(field, value);
        debug!("field updated: {field}");
        self.emit(WorkflowEvent::FieldChanged(field));
        Ok(())
    }

    /// Validate the draft and send it.
    ///
    /// Validation runs in order: date and time, then required contact
    /// fields, then the date picker rules against today. A failure notifies
    /// the user and leaves the draft untouched. A submitter failure or a
    /// cancellation returns the workflow to `Scheduling`.
    pub async fn submit(&mut self, l10n: &Localizer) -> Result<BookingReceipt, BookingError> {
        self.expect_phase("submit", &[Phase::Scheduling])?;

        let request = match self.validate() {
            Ok(request) => request,
            Err(e) => {
                warn!("booking rejected: {e}");
                self.notify_error(l10n, &e);
                self.emit(WorkflowEvent::Rejected(e.clone()));
                return Err(e);
            }
        };

        self.transition(Phase::Submitting);
        info!(
            "submitting {} on {} at {} via {}",
            request.service.id,
            request.date,
            request.time,
            self.submitter.name()
        );

        let submitter = Arc::clone(&self.submitter);
        let cancel = self.cancel.clone();
        let outcome = tokio::select! {
            result = submitter.submit(&request) => result,
            _ = cancel.cancelled() => Err(BookingError::Cancelled),
        };
        self.cancel.reset();

        match outcome {
            Ok(receipt) => {
                self.receipt = Some(receipt.clone());
                self.transition(Phase::Confirmed);
                self.notify_confirmed(l10n, &receipt);
                self.emit(WorkflowEvent::Confirmed(Box::new(receipt.clone())));
                Ok(receipt)
            }
            Err(e) => {
                warn!("submission did not complete: {e}");
                self.transition(Phase::Scheduling);
                self.notify_error(l10n, &e);
                self.emit(WorkflowEvent::Rejected(e.clone()));
                Err(e)
            }
        }
    }

    /// Calendar-add link for the current draft, once date and time are set.
    pub fn calendar_link(&self) -> Option<String> {
        calendar::draft_link(&self.calendar, &self.agency, &self.draft)
    }

    /// Close the confirmation: clear the draft and return to service
    /// selection. Safe to call repeatedly.
    pub fn dismiss_confirmation(&mut self) {
        if self.phase == Phase::Confirmed {
            info!("confirmation dismissed");
        }
        self.reset();
    }

    /// Abandon the draft and go back to the service list.
    pub fn back_to_services(&mut self) {
        if self.phase == Phase::Scheduling {
            info!("booking abandoned before submit");
        }
        self.reset();
    }

    /// Re-resolve the draft's service text after a locale switch.
    pub fn relocalize(&mut self, locale: Locale) {
        if let Some(service) = self.draft.service.as_mut() {
            if let Some(localized) = catalog::find_service(service.id, locale) {
                *service = localized;
            }
        }
    }

    fn validate(&self) -> Result<BookingRequest, BookingError> {
        let (date, time) = self.draft.schedule().ok_or(BookingError::MissingDateTime)?;
        if !self.draft.contact.has_required() {
            return Err(BookingError::MissingRequiredFields);
        }
        if !self.is_date_selectable(date) {
            return Err(BookingError::DateUnavailable(date));
        }
        let service = self
            .draft
            .service
            .clone()
            .ok_or(BookingError::NoServiceSelected)?;
        Ok(BookingRequest {
            service,
            date,
            time,
            contact: self.draft.contact.clone(),
        })
    }

    fn reset(&mut self) {
        self.draft = BookingDraft::default();
        self.receipt = None;
        self.transition(Phase::Selecting);
        self.emit(WorkflowEvent::Reset);
    }

    fn expect_phase(&self, action: &'static str, allowed: &[Phase]) -> Result<(), BookingError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(BookingError::InvalidTransition {
                action,
                phase: self.phase,
            })
        }
    }

    fn transition(&mut self, to: Phase) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        debug!("workflow: {from} -> {to}");
        self.emit(WorkflowEvent::PhaseChanged { from, to });
    }

    fn emit(&self, event: WorkflowEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    fn notify_error(&self, l10n: &Localizer, error: &BookingError) {
        let (kind, title, message) = match error {
            BookingError::MissingDateTime => (
                NoticeKind::Error,
                l10n.t("booking.missing.title"),
                l10n.t("booking.missing.datetime"),
            ),
            BookingError::MissingRequiredFields => (
                NoticeKind::Error,
                l10n.t("booking.missing.title"),
                l10n.t("booking.missing.fields"),
            ),
            BookingError::DateUnavailable(date) => {
                let date = format::long_date(l10n.locale(), *date);
                (
                    NoticeKind::Error,
                    l10n.t("booking.unavailable.title"),
                    l10n.t_with("booking.unavailable.date", &[("date", date.as_str())]),
                )
            }
            BookingError::Cancelled => (
                NoticeKind::Info,
                l10n.t("booking.failed.title"),
                l10n.t("booking.cancelled"),
            ),
            other => {
                let reason = other.to_string();
                (
                    NoticeKind::Error,
                    l10n.t("booking.failed.title"),
                    l10n.t_with("booking.failed.desc", &[("reason", reason.as_str())]),
                )
            }
        };
        self.notifier.notify(kind, &title, &message);
    }

    fn notify_confirmed(&self, l10n: &Localizer, receipt: &BookingReceipt) {
        let date = format::long_date(l10n.locale(), receipt.date);
        let time = receipt.time.to_string();
        let message = l10n.t_with(
            "booking.confirmed.desc",
            &[
                ("service", receipt.service.name.as_str()),
                ("date", date.as_str()),
                ("time", time.as_str()),
            ],
        );
        self.notifier
            .notify(NoticeKind::Success, &l10n.t("booking.confirmed.title"), &message);
    }
}
