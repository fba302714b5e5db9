//! Landing page: hero, feature highlights, and the service selector.

use bookpro_core::catalog::{self, Service};
use bookpro_core::i18n::format;
use bookpro_core::message::Page;
use bookpro_core::Localizer;

use super::{PageView, Section};

/// One service as shown in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCard {
    pub id: &'static str,
    pub name: String,
    pub description: String,
    pub duration_label: String,
    pub price_label: String,
    pub action_label: String,
}

/// Renders the catalog and reports which service the user picked.
#[derive(Debug, Clone)]
pub struct ServiceSelector {
    services: Vec<Service>,
    cards: Vec<ServiceCard>,
}

impl ServiceSelector {
    pub fn new(l10n: &Localizer) -> Self {
        let services = catalog::list_services(l10n.locale());
        let action_label = l10n.t("services.book");
        let cards = services
            .iter()
            .map(|s| ServiceCard {
                id: s.id,
                name: s.name.clone(),
                description: s.description.clone(),
                duration_label: format::duration(l10n.locale(), s.duration),
                price_label: format::price(s.price),
                action_label: action_label.clone(),
            })
            .collect();
        Self { services, cards }
    }

    pub fn cards(&self) -> &[ServiceCard] {
        &self.cards
    }

    /// The service behind a card, for handing to the booking workflow.
    pub fn select(&self, id: &str) -> Option<Service> {
        self.services.iter().find(|s| s.id == id).cloned()
    }
}

pub fn render(l10n: &Localizer, agency_name: &str) -> PageView {
    let title = format!(
        "{} {}",
        l10n.t("hero.title.book"),
        l10n.t("hero.title.success")
    );
    let selector = ServiceSelector::new(l10n);
    let cards: Vec<String> = selector
        .cards()
        .iter()
        .map(|c| {
            format!(
                "{} · {} · {} — {}",
                c.name, c.duration_label, c.price_label, c.description
            )
        })
        .collect();

    PageView::new(l10n, Page::Services, agency_name, title)
        .section(Section::new(
            l10n.t("hero.cta"),
            vec![l10n.t("hero.subtitle"), l10n.t("hero.cancellation")],
        ))
        .section(Section::new(
            l10n.t("features.scheduling.title"),
            vec![l10n.t("features.scheduling.desc")],
        ))
        .section(Section::new(
            l10n.t("features.hours.title"),
            vec![l10n.t("features.hours.desc")],
        ))
        .section(Section::new(
            l10n.t("features.team.title"),
            vec![l10n.t("features.team.desc")],
        ))
        .section(Section::new(
            l10n.t("services.title"),
            std::iter::once(l10n.t("services.subtitle"))
                .chain(cards)
                .collect(),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookpro_core::Locale;

    #[test]
    fn test_cards_follow_catalog() {
        let selector = ServiceSelector::new(&Localizer::new(Locale::En));
        let cards = selector.cards();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].name, "Business Consultation");
        assert_eq!(cards[0].duration_label, "60 minutes");
        assert_eq!(cards[0].price_label, "€135");
        assert_eq!(cards[3].price_label, "€360");
        assert!(cards.iter().all(|c| c.action_label == "Book"));
    }

    #[test]
    fn test_select_reports_service() {
        let selector = ServiceSelector::new(&Localizer::new(Locale::Pt));
        let service = selector.select("review").unwrap();
        assert_eq!(service.name, "Revisão de Negócio");
        assert_eq!(service.duration, 45);
        assert!(selector.select("haircut").is_none());
    }

    #[test]
    fn test_landing_lists_services_in_locale() {
        let view = render(&Localizer::new(Locale::Pt), "BookPro Agency");
        assert_eq!(view.title, "Reserve o Seu Sucesso");
        let services = view.sections.last().unwrap();
        assert_eq!(services.heading, "Os Nossos Serviços");
        assert_eq!(services.lines.len(), 5);
        assert!(services.lines[1].starts_with("Consultoria Empresarial · 60 minutos · €135"));
    }
}
