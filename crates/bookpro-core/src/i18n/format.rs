//! Format helpers for dates, prices, and durations.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::{translate, Locale};

const PT_MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Long date for confirmations: `May 1, 2024` / `1 de maio de 2024`.
pub fn long_date(locale: Locale, date: NaiveDate) -> String {
    match locale {
        Locale::En => date.format("%B %-d, %Y").to_string(),
        Locale::Pt => {
            let month = PT_MONTHS[date.month0() as usize];
            format!("{} de {month} de {}", date.day(), date.year())
        }
    }
}

/// Price label with the agency currency: `€135`, `€99.50`.
pub fn price(amount: Decimal) -> String {
    if amount.fract().is_zero() {
        format!("€{}", amount.trunc())
    } else {
        format!("€{:.2}", amount)
    }
}

/// Duration label: `60 minutes` / `60 minutos`.
pub fn duration(locale: Locale, minutes: u32) -> String {
    format!("{minutes} {}", translate(locale, "services.minutes", &[]))
}
