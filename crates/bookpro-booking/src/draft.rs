//! The in-progress booking: chosen service, slot, and contact details.

use bookpro_core::catalog::Service;
use chrono::NaiveDate;
use std::fmt;

use crate::slot::TimeSlot;

/// Contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Message,
    ];

    /// Whether submit requires a non-empty value.
    pub fn is_required(self) -> bool {
        matches!(self, Self::FirstName | Self::LastName | Self::Email)
    }

    /// Dictionary key of the field label.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::FirstName => "booking.firstName",
            Self::LastName => "booking.lastName",
            Self::Email => "booking.email",
            Self::Phone => "booking.phone",
            Self::Message => "booking.message.label",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who is booking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl Contact {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// First name, last name, and email are all non-empty.
    pub fn has_required(&self) -> bool {
        ContactField::ALL
            .iter()
            .filter(|f| f.is_required())
            .all(|f| !self.get(*f).is_empty())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Booking data that has not been submitted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub service: Option<Service>,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
    pub contact: Contact,
}

impl BookingDraft {
    pub fn for_service(service: Service) -> Self {
        Self {
            service: Some(service),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Date and time, when both are set.
    pub fn schedule(&self) -> Option<(NaiveDate, TimeSlot)> {
        self.date.zip(self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let mut c = Contact::default();
        assert!(!c.has_required());
        c.set(ContactField::FirstName, "Ana");
        c.set(ContactField::LastName, "Silva");
        assert!(!c.has_required());
        c.set(ContactField::Phone, "912345678");
        assert!(!c.has_required(), "phone is optional and does not count");
        c.set(ContactField::Email, "ana@example.com");
        assert!(c.has_required());
        assert_eq!(c.full_name(), "Ana Silva");
    }

    #[test]
    fn test_schedule_needs_both() {
        let mut draft = BookingDraft::default();
        assert!(draft.is_empty());
        draft.date = NaiveDate::from_ymd_opt(2024, 5, 1);
        assert!(draft.schedule().is_none());
        draft.time = "10:00".parse().ok();
        assert!(draft.schedule().is_some());
        assert!(!draft.is_empty());
    }
}
