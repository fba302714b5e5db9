//! Service catalog — the fixed list of bookable services.
//!
//! Ids, durations, and prices are language independent; names and
//! descriptions are resolved through the dictionary for the requested locale.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::i18n::{translate, Locale};

/// A bookable service, localized for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub name: String,
    /// Length in minutes. Always positive.
    pub duration: u32,
    pub price: Decimal,
    pub description: String,
}

struct Entry {
    id: &'static str,
    duration: u32,
    /// Whole euros.
    price: i64,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "consultation",
        duration: 60,
        price: 135,
    },
    Entry {
        id: "strategy",
        duration: 90,
        price: 225,
    },
    Entry {
        id: "review",
        duration: 45,
        price: 110,
    },
    Entry {
        id: "workshop",
        duration: 120,
        price: 360,
    },
];

impl Entry {
    fn localize(&self, locale: Locale) -> Service {
        let name_key = format!("services.{}", self.id);
        let desc_key = format!("services.{}.desc", self.id);
        Service {
            id: self.id,
            name: translate(locale, &name_key, &[]),
            duration: self.duration,
            price: Decimal::new(self.price, 0),
            description: translate(locale, &desc_key, &[]),
        }
    }
}

/// All services in catalog order, localized for `locale`.
pub fn list_services(locale: Locale) -> Vec<Service> {
    ENTRIES.iter().map(|e| e.localize(locale)).collect()
}

/// Look up one service by id.
pub fn find_service(id: &str, locale: Locale) -> Option<Service> {
    ENTRIES
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.localize(locale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_length() {
        let ids: Vec<_> = list_services(Locale::Pt).iter().map(|s| s.id).collect();
        assert_eq!(ids, ["consultation", "strategy", "review", "workshop"]);
        assert_eq!(list_services(Locale::En).len(), 4);
    }

    #[test]
    fn test_text_follows_locale_numbers_do_not() {
        let pt = list_services(Locale::Pt);
        let en = list_services(Locale::En);
        for (p, e) in pt.iter().zip(&en) {
            assert_eq!(p.id, e.id);
            assert_eq!(p.duration, e.duration);
            assert_eq!(p.price, e.price);
            assert_ne!(p.name, e.name);
        }
        assert_eq!(pt[0].name, "Consultoria Empresarial");
        assert_eq!(en[0].name, "Business Consultation");
        assert_eq!(en[3].description, "Intensive session to develop leadership skills and team management.");
    }

    #[test]
    fn test_every_service_is_translated() {
        for locale in Locale::ALL {
            for service in list_services(locale) {
                assert!(!service.name.starts_with("services."), "{}", service.name);
                assert!(!service.description.starts_with("services."));
                assert!(service.duration > 0);
                assert!(service.price >= Decimal::ZERO);
            }
        }
    }

    #[test]
    fn test_find_service() {
        let s = find_service("strategy", Locale::En).unwrap();
        assert_eq!(s.duration, 90);
        assert_eq!(s.price, Decimal::new(225, 0));
        assert!(find_service("haircut", Locale::En).is_none());
    }
}
