//! Booking form and confirmation views.

use bookpro_booking::{BookingWorkflow, ContactField, SubmissionState};
use bookpro_core::i18n::format;
use bookpro_core::message::Page;
use bookpro_core::Localizer;

use super::{PageView, Section};

/// Label for a contact field, with ` *` on required ones.
pub fn field_label(l10n: &Localizer, field: ContactField) -> String {
    let label = l10n.t(field.label_key());
    if field.is_required() {
        format!("{label} *")
    } else {
        label
    }
}

/// Text of the submit button for the current submission state.
pub fn submit_label(l10n: &Localizer, workflow: &BookingWorkflow) -> String {
    match workflow.submission_state() {
        SubmissionState::Submitting => l10n.t("booking.submitting"),
        _ => {
            let price = workflow
                .draft()
                .service
                .as_ref()
                .map(|s| format::price(s.price))
                .unwrap_or_default();
            l10n.t_with("booking.submit", &[("price", price.as_str())])
        }
    }
}

pub fn render_form(l10n: &Localizer, workflow: &BookingWorkflow, agency_name: &str) -> PageView {
    let draft = workflow.draft();
    let Some(service) = draft.service.as_ref() else {
        return PageView::new(l10n, Page::Booking, agency_name, l10n.t("booking.back"));
    };

    let date = draft
        .date
        .map(|d| format::long_date(l10n.locale(), d))
        .unwrap_or_else(|| l10n.t("booking.date.placeholder"));
    let time = draft
        .time
        .map(|t| t.to_string())
        .unwrap_or_else(|| l10n.t("booking.time.placeholder"));

    let contact = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Phone,
    ]
    .into_iter()
    .map(|f| format!("{}: {}", field_label(l10n, f), draft.contact.get(f)))
    .collect();

    PageView::new(l10n, Page::Booking, agency_name, service.name.clone())
        .section(Section::new(
            l10n.t("booking.back"),
            vec![
                service.description.clone(),
                format!(
                    "{} · {}",
                    format::duration(l10n.locale(), service.duration),
                    format::price(service.price)
                ),
            ],
        ))
        .section(Section::new(
            l10n.t("booking.datetime.title"),
            vec![
                format!("{}: {date}", l10n.t("booking.date.label")),
                format!("{}: {time}", l10n.t("booking.time.label")),
            ],
        ))
        .section(Section::new(l10n.t("booking.info.title"), contact))
        .section(Section::new(
            l10n.t("booking.additional.title"),
            vec![
                l10n.t("booking.message.label"),
                draft.contact.message.clone(),
            ],
        ))
        .section(Section::new(
            l10n.t("booking.ready.title"),
            vec![
                l10n.t("booking.ready.subtitle"),
                submit_label(l10n, workflow),
            ],
        ))
}

pub fn render_confirmation(
    l10n: &Localizer,
    workflow: &BookingWorkflow,
    agency_name: &str,
) -> PageView {
    let title = l10n.t("booking.confirmation.title");
    let Some(receipt) = workflow.receipt() else {
        return PageView::new(l10n, Page::Confirmation, agency_name, title);
    };

    let mut details = vec![
        format!(
            "{}: {}",
            l10n.t("booking.confirmation.service"),
            receipt.service.name
        ),
        format!(
            "{}: {}",
            l10n.t("booking.confirmation.date"),
            format::long_date(l10n.locale(), receipt.date)
        ),
        format!("{}: {}", l10n.t("booking.confirmation.time"), receipt.time),
        format!(
            "{}: {}",
            l10n.t("booking.confirmation.client"),
            receipt.contact.full_name()
        ),
    ];
    details.push(format!("#{}", receipt.id));

    let mut actions = Vec::new();
    if let Some(link) = workflow.calendar_link() {
        actions.push(format!("{}: {link}", l10n.t("booking.confirmation.calendar")));
    }
    actions.push(l10n.t("booking.confirmation.close"));

    PageView::new(l10n, Page::Confirmation, agency_name, title)
        .section(Section::new(
            l10n.t("booking.confirmation.details"),
            details,
        ))
        .section(Section::new(l10n.t("booking.confirmation.email"), actions))
}
