//! Contact page: agency details and a message form that goes nowhere.

use bookpro_core::config::AgencyConfig;
use bookpro_core::message::Page;
use bookpro_core::Localizer;
use tracing::debug;

use super::{PageView, Section};

/// The contact form's fields. Sending it has no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Labels in form order: name, email, subject, message.
    pub fn labels(l10n: &Localizer) -> [String; 4] {
        [
            l10n.t("contact.form.name"),
            l10n.t("contact.form.email"),
            l10n.t("contact.form.subject"),
            l10n.t("contact.form.message"),
        ]
    }

    /// Accept the form. Nothing is sent or stored.
    pub fn send(&mut self) {
        debug!(
            "contact form submitted ({} chars), not delivered",
            self.message.chars().count()
        );
        *self = Self::default();
    }
}

pub fn render(l10n: &Localizer, agency: &AgencyConfig) -> PageView {
    PageView::new(l10n, Page::Contact, &agency.name, l10n.t("contact.title"))
        .section(Section::new(
            l10n.t("contact.subtitle"),
            ContactForm::labels(l10n).to_vec(),
        ))
        .section(Section::new(
            l10n.t("contact.info.title"),
            vec![
                format!("{}: {}", l10n.t("contact.info.address"), agency.location),
                format!("{}: {}", l10n.t("contact.info.phone"), agency.phone),
                format!("{}: {}", l10n.t("contact.info.email"), agency.email),
            ],
        ))
        .section(Section::new(
            l10n.t("contact.info.hours"),
            vec![
                l10n.t("contact.info.hours.weekdays"),
                l10n.t("contact.info.hours.weekend"),
            ],
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookpro_core::Locale;

    #[test]
    fn test_contact_details_from_config() {
        let agency = AgencyConfig {
            phone: "+351 999".into(),
            ..AgencyConfig::default()
        };
        let view = render(&Localizer::new(Locale::Pt), &agency);
        assert_eq!(view.title, "Entre em Contacto");
        let info = &view.sections[1];
        assert_eq!(info.heading, "Informações de Contacto");
        assert_eq!(info.lines[1], "Telefone: +351 999");
        assert_eq!(view.sections[2].lines[1], "Fim de semana: Fechado");
    }

    #[test]
    fn test_send_only_clears_the_form() {
        let mut form = ContactForm {
            name: "Rui".into(),
            message: "Olá".into(),
            ..ContactForm::default()
        };
        form.send();
        assert_eq!(form, ContactForm::default());
    }
}
