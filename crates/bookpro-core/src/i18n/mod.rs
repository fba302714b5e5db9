//! Internationalization — the bilingual text dictionary for every page.
//!
//! `translate(locale, key, params)` resolves a key for one locale and fills
//! `{name}` placeholders. Unknown keys come back unchanged, so a missing
//! entry shows up on screen as its key instead of failing.
//! Supported locales: Portuguese (`pt`, default) and English (`en`).

mod booking;
pub mod format;
mod pages;
mod services;
mod site;


use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BookProError;

/// A supported display language.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Pt,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Pt, Locale::En];

    /// The locale tag (`"pt"` or `"en"`).
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
        }
    }

    /// The other locale. The switch is binary.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Pt => Self::En,
            Self::En => Self::Pt,
        }
    }

    /// Pick between a Portuguese and an English variant.
    pub(crate) const fn pick(self, pt: &'static str, en: &'static str) -> &'static str {
        match self {
            Self::Pt => pt,
            Self::En => en,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Locale {
    type Err = BookProError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pt" => Ok(Self::Pt),
            "en" => Ok(Self::En),
            other => Err(BookProError::UnsupportedLocale(other.to_string())),
        }
    }
}

/// Return the raw template for `key`, if the dictionary has one.
pub fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    site::lookup(key, locale)
        .or_else(|| services::lookup(key, locale))
        .or_else(|| booking::lookup(key, locale))
        .or_else(|| pages::lookup(key, locale))
}

/// Resolve `key` for `locale` and substitute `params`.
///
/// Every `{name}` occurrence whose name appears in `params` is replaced;
/// placeholders without a matching param stay verbatim.
pub fn translate(locale: Locale, key: &str, params: &[(&str, &str)]) -> String {
    let template = lookup(locale, key).unwrap_or(key);
    interpolate(template, params)
}

/// Fill `{name}` placeholders in `template`.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in params {
        let placeholder = format!("{{{name}}}");
        if out.contains(&placeholder) {
            out = out.replace(&placeholder, value);
        }
    }
    out
}

/// The session's text context.
///
/// Owns the active locale; every rendering call borrows it, so a locale
/// switch is seen by everything rendered afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Localizer {
    locale: Locale,
}

impl Localizer {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if self.locale != locale {
            tracing::debug!("locale changed: {} -> {}", self.locale, locale);
        }
        self.locale = locale;
    }

    /// Switch to the other locale and return it.
    pub fn toggle(&mut self) -> Locale {
        self.set_locale(self.locale.toggled());
        self.locale
    }

    /// Translate a key without params.
    pub fn t(&self, key: &str) -> String {
        translate(self.locale, key, &[])
    }

    /// Translate a key and fill its placeholders.
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        translate(self.locale, key, params)
    }
}
