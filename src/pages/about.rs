use bookpro_core::message::Page;
use bookpro_core::Localizer;

use super::{PageView, Section};

pub fn render(l10n: &Localizer, agency_name: &str) -> PageView {
    let mut view = PageView::new(l10n, Page::About, agency_name, l10n.t("about.title"));
    for topic in ["mission", "team", "values"] {
        view = view.section(Section::new(
            l10n.t(&format!("about.{topic}.title")),
            vec![l10n.t(&format!("about.{topic}.desc"))],
        ));
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookpro_core::Locale;

    #[test]
    fn test_about_sections() {
        let view = render(&Localizer::new(Locale::En), "BookPro Agency");
        assert_eq!(view.title, "About BookPro Agency");
        let headings: Vec<_> = view.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, ["Our Mission", "Our Team", "Our Values"]);
    }
}
