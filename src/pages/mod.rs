//! Page views — localized, presentation-neutral content for each route.
//!
//! Every `render` function takes the session's `Localizer`, so a page built
//! after a locale switch is entirely in the new locale.

pub mod about;
pub mod booking;
pub mod contact;
pub mod landing;

use bookpro_core::message::Page;
use bookpro_core::Localizer;

/// A titled block of text lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(heading: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            lines,
        }
    }
}

/// Navigation bar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub page: Page,
    pub label: String,
    pub active: bool,
}

/// Everything a presenter needs to draw one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub page: Page,
    pub title: String,
    pub nav: Vec<NavLink>,
    pub sections: Vec<Section>,
    pub footer: Section,
}

impl PageView {
    pub fn new(l10n: &Localizer, page: Page, agency_name: &str, title: String) -> Self {
        Self {
            page,
            title,
            nav: nav(l10n, page),
            sections: Vec::new(),
            footer: footer(l10n, agency_name),
        }
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Plain-text rendering, one section after another.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        for section in &self.sections {
            out.push('\n');
            out.push_str(&section.heading);
            out.push('\n');
            for line in &section.lines {
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }
}

fn nav(l10n: &Localizer, current: Page) -> Vec<NavLink> {
    [
        (Page::Services, "nav.services"),
        (Page::About, "nav.about"),
        (Page::Contact, "nav.contact"),
    ]
    .into_iter()
    .map(|(page, key)| NavLink {
        page,
        label: l10n.t(key),
        active: page == current
            || (page == Page::Services && matches!(current, Page::Booking | Page::Confirmation)),
    })
    .collect()
}

fn footer(l10n: &Localizer, agency_name: &str) -> Section {
    Section::new(
        agency_name,
        vec![
            l10n.t("footer.tagline"),
            format!(
                "{} · {} · {}",
                l10n.t("footer.privacy"),
                l10n.t("footer.terms"),
                l10n.t("footer.support")
            ),
        ],
    )
}
