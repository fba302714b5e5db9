//! Page shell — one visitor session: active locale, current page, and the
//! booking workflow behind the booking pages.
//!
//! The booking and confirmation pages are only reachable while the workflow
//! is in a matching phase. Navigating anywhere else abandons the draft.

#[cfg(test)]
mod tests;

use bookpro_booking::{BookingError, BookingReceipt, BookingWorkflow, Phase};
use bookpro_core::config::{AgencyConfig, Config};
use bookpro_core::message::Page;
use bookpro_core::traits::Navigator;
use bookpro_core::{Locale, Localizer};
use std::sync::Arc;
use tracing::{info, warn};

use crate::pages::{self, contact::ContactForm, landing::ServiceSelector, PageView};

pub struct Shell {
    l10n: Localizer,
    page: Page,
    workflow: BookingWorkflow,
    navigator: Arc<dyn Navigator>,
    agency: AgencyConfig,
    contact_form: ContactForm,
}

impl Shell {
    pub fn new(config: &Config, workflow: BookingWorkflow, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            l10n: Localizer::new(config.bookpro.default_locale),
            page: Page::Services,
            workflow,
            navigator,
            agency: config.agency.clone(),
            contact_form: ContactForm::default(),
        }
    }

    pub fn localizer(&self) -> &Localizer {
        &self.l10n
    }

    pub fn locale(&self) -> Locale {
        self.l10n.locale()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn agency(&self) -> &AgencyConfig {
        &self.agency
    }

    pub fn workflow(&self) -> &BookingWorkflow {
        &self.workflow
    }

    pub fn workflow_mut(&mut self) -> &mut BookingWorkflow {
        &mut self.workflow
    }

    pub fn contact_form_mut(&mut self) -> &mut ContactForm {
        &mut self.contact_form
    }

    /// The landing page's service list in the current locale.
    pub fn service_selector(&self) -> ServiceSelector {
        ServiceSelector::new(&self.l10n)
    }

    /// Navigate to `page` and return the page actually shown.
    pub fn open(&mut self, page: Page) -> Page {
        let phase = self.workflow.phase();
        let target = match page {
            Page::Booking if !matches!(phase, Phase::Scheduling | Phase::Submitting) => {
                warn!("no booking in progress, showing services");
                Page::Services
            }
            Page::Confirmation if phase != Phase::Confirmed => {
                warn!("nothing to confirm, showing services");
                Page::Services
            }
            other => other,
        };

        if !matches!(target, Page::Booking | Page::Confirmation) {
            match phase {
                Phase::Confirmed => self.workflow.dismiss_confirmation(),
                Phase::Scheduling => self.workflow.back_to_services(),
                Phase::Selecting | Phase::Submitting => {}
            }
        }

        self.go(target)
    }

    /// Start booking the service with catalog id `id`.
    pub fn choose_service(&mut self, id: &str) -> Result<(), BookingError> {
        let service = self
            .service_selector()
            .select(id)
            .ok_or_else(|| BookingError::UnknownService(id.to_string()))?;
        self.workflow.select_service(service)?;
        self.go(Page::Booking);
        Ok(())
    }

    pub fn back_to_services(&mut self) {
        self.workflow.back_to_services();
        self.go(Page::Services);
    }

    /// Submit the draft; on success the confirmation page is shown.
    pub async fn submit_booking(&mut self) -> Result<BookingReceipt, BookingError> {
        let receipt = self.workflow.submit(&self.l10n).await?;
        self.go(Page::Confirmation);
        Ok(receipt)
    }

    pub fn dismiss_confirmation(&mut self) {
        self.workflow.dismiss_confirmation();
        self.go(Page::Services);
    }

    /// Switch to the other locale and redraw the current page.
    pub fn toggle_locale(&mut self) -> Locale {
        let locale = self.l10n.locale().toggled();
        self.set_locale(locale);
        locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.l10n.set_locale(locale);
        self.workflow.relocalize(locale);
        self.navigator.navigate(self.page);
    }

    /// Send the contact form. Nothing leaves the process.
    pub fn send_contact_form(&mut self) {
        self.contact_form.send();
    }

    /// The current page's content.
    pub fn render(&self) -> PageView {
        let name = self.agency.name.as_str();
        match self.page {
            Page::Services => pages::landing::render(&self.l10n, name),
            Page::Booking => pages::booking::render_form(&self.l10n, &self.workflow, name),
            Page::Confirmation => {
                pages::booking::render_confirmation(&self.l10n, &self.workflow, name)
            }
            Page::About => pages::about::render(&self.l10n, name),
            Page::Contact => pages::contact::render(&self.l10n, &self.agency),
        }
    }

    fn go(&mut self, page: Page) -> Page {
        if self.page != page {
            info!("page: {} -> {}", self.page, page);
        }
        self.page = page;
        self.navigator.navigate(page);
        page
    }
}
