//! # bookpro-core
//!
//! Core types, localization, the service catalog, configuration, and error
//! handling shared by the booking workflow and the page shell.

pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod message;
pub mod traits;

pub use config::Config;
pub use i18n::{translate, Locale, Localizer};
