//! Calendar-add links for a confirmed booking.
//!
//! The link opens the event-creation form of the calendar service with
//! title, UTC start/end, details, and location prefilled.

use bookpro_core::catalog::Service;
use bookpro_core::config::{AgencyConfig, CalendarConfig};
use bookpro_core::i18n::format;
use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::draft::{BookingDraft, Contact};
use crate::slot::TimeSlot;

const STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Start and end of the event. The slot's wall-clock time is taken as UTC.
pub fn event_window(date: NaiveDate, time: TimeSlot, duration_minutes: u32) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = date.and_time(time.as_time()).and_utc();
    let end = start + Duration::minutes(i64::from(duration_minutes));
    (start, end)
}

/// `YYYYMMDDTHHMMSSZ`.
pub fn utc_stamp(instant: DateTime<Utc>) -> String {
    instant.format(STAMP_FORMAT).to_string()
}

/// Percent-encode like ECMAScript `encodeURIComponent`.
///
/// Leaves `A-Z a-z 0-9 - _ . ! ~ * ' ( )` as is; everything else is UTF-8
/// percent-encoded with uppercase hex.
pub fn encode_component(text: &str) -> String {
    let encoded = urlencoding::encode(text);
    if !encoded.contains('%') {
        return encoded.into_owned();
    }
    encoded
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// Event title: `"{service} - {agency}"`.
pub fn event_title(service: &Service, agency: &AgencyConfig) -> String {
    format!("{} - {}", service.name, agency.name)
}

/// Event description with the booking summary, one item per line.
pub fn event_details(service: &Service, contact: &Contact) -> String {
    let mut lines = vec![
        format!("Service: {}", service.name),
        format!("Duration: {} minutes", service.duration),
        format!("Price: {}", format::price(service.price)),
        format!("Client: {}", contact.full_name()),
        format!("Email: {}", contact.email),
        format!("Phone: {}", contact.phone),
    ];
    if !contact.message.is_empty() {
        lines.push(format!("Notes: {}", contact.message));
    }
    lines.join("\n")
}

/// Build the event-creation URL.
pub fn calendar_link(
    calendar: &CalendarConfig,
    agency: &AgencyConfig,
    service: &Service,
    date: NaiveDate,
    time: TimeSlot,
    contact: &Contact,
) -> String {
    let (start, end) = event_window(date, time, service.duration);
    format!(
        "{}?action=TEMPLATE&text={}&dates={}/{}&details={}&location={}",
        calendar.base_url,
        encode_component(&event_title(service, agency)),
        utc_stamp(start),
        utc_stamp(end),
        encode_component(&event_details(service, contact)),
        encode_component(&agency.location),
    )
}

/// Link for a draft; `None` until service, date, and time are all chosen.
pub fn draft_link(
    calendar: &CalendarConfig,
    agency: &AgencyConfig,
    draft: &BookingDraft,
) -> Option<String> {
    let service = draft.service.as_ref()?;
    let (date, time) = draft.schedule()?;
    Some(calendar_link(
        calendar,
        agency,
        service,
        date,
        time,
        &draft.contact,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookpro_core::catalog::find_service;
    use bookpro_core::i18n::Locale;
    use rust_decimal::Decimal;

    fn haircut() -> Service {
        Service {
            id: "haircut",
            name: "Haircut".into(),
            duration: 60,
            price: Decimal::new(25, 0),
            description: String::new(),
        }
    }

    fn contact() -> Contact {
        Contact {
            first_name: "Ana".into(),
            last_name: "Silva".into(),
            email: "ana@example.com".into(),
            phone: "+351 912 345 678".into(),
            message: String::new(),
        }
    }

    fn may_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_dates_are_exact_utc() {
        let link = calendar_link(
            &CalendarConfig::default(),
            &AgencyConfig::default(),
            &haircut(),
            may_first(),
            "10:00".parse().unwrap(),
            &contact(),
        );
        assert!(link.contains("&dates=20240501T100000Z/20240501T110000Z&"), "{link}");
    }

    #[test]
    fn test_end_crosses_into_next_hour_and_minutes() {
        let (start, end) = event_window(may_first(), "17:30".parse().unwrap(), 45);
        assert_eq!(utc_stamp(start), "20240501T173000Z");
        assert_eq!(utc_stamp(end), "20240501T181500Z");
        let (_, end) = event_window(may_first(), "17:30".parse().unwrap(), 120);
        assert_eq!(utc_stamp(end), "20240501T193000Z");
    }

    #[test]
    fn test_full_link_is_byte_exact() {
        let agency = AgencyConfig {
            name: "BookPro Agency".into(),
            location: "Rua da Inovação, 123".into(),
            ..AgencyConfig::default()
        };
        let link = calendar_link(
            &CalendarConfig::default(),
            &agency,
            &haircut(),
            may_first(),
            "10:00".parse().unwrap(),
            &contact(),
        );
        assert_eq!(
            link,
            "https://calendar.google.com/calendar/render?action=TEMPLATE\
             &text=Haircut%20-%20BookPro%20Agency\
             &dates=20240501T100000Z/20240501T110000Z\
             &details=Service%3A%20Haircut%0ADuration%3A%2060%20minutes%0APrice%3A%20%E2%82%AC25\
             %0AClient%3A%20Ana%20Silva%0AEmail%3A%20ana%40example.com%0APhone%3A%20%2B351%20912%20345%20678\
             &location=Rua%20da%20Inova%C3%A7%C3%A3o%2C%20123"
        );
    }

    #[test]
    fn test_notes_only_when_present() {
        let mut c = contact();
        assert!(!event_details(&haircut(), &c).contains("Notes:"));
        c.message = "Bring the Q3 report".into();
        assert!(event_details(&haircut(), &c).ends_with("\nNotes: Bring the Q3 report"));
    }

    #[test]
    fn test_encode_component_matches_ecmascript() {
        assert_eq!(encode_component("a-b_c.d~e"), "a-b_c.d~e");
        assert_eq!(encode_component("it's (very) *fine*!"), "it's%20(very)%20*fine*!");
        assert_eq!(encode_component("a&b=c/d?e#f"), "a%26b%3Dc%2Fd%3Fe%23f");
        assert_eq!(encode_component("€"), "%E2%82%AC");
        assert_eq!(encode_component("line\nbreak"), "line%0Abreak");
    }

    #[test]
    fn test_title_uses_localized_service_name() {
        let service = find_service("review", Locale::Pt).unwrap();
        assert_eq!(
            event_title(&service, &AgencyConfig::default()),
            "Revisão de Negócio - BookPro Agency"
        );
    }

    #[test]
    fn test_draft_link_needs_date_and_time() {
        let cal = CalendarConfig::default();
        let agency = AgencyConfig::default();
        let mut draft = BookingDraft::for_service(haircut());
        assert!(draft_link(&cal, &agency, &draft).is_none());
        draft.date = Some(may_first());
        assert!(draft_link(&cal, &agency, &draft).is_none());
        draft.time = "09:00".parse().ok();
        let link = draft_link(&cal, &agency, &draft).unwrap();
        assert!(link.contains("dates=20240501T090000Z/20240501T100000Z"));
    }
}
