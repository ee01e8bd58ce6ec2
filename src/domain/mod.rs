//! Domain types for the directory.
//!
//! This module contains the records served by the index:
//! - App: client applications
//! - Extension: content-source plugins
//! - Faq: questions and answers
//! - Guide / GuideCategory: documentation topics and their grouping
//!
//! Records deserialize from the camelCase JSON the site bundles. Optional
//! fields map to `Option` and missing lists to empty `Vec`s.

pub mod app;
pub mod extension;
pub mod faq;
pub mod guide;
pub mod record;
pub mod tags;

use chrono::{DateTime, NaiveDate};

// Re-export commonly used types
pub use app::{App, AppTutorial, AuthorInfo};
pub use extension::Extension;
pub use faq::Faq;
pub use guide::{Guide, GuideCategory};
pub use record::{Collection, Record};
pub use tags::{ContentType, FaqCategory, GuideIcon, Platform, TutorialKind};

/// Parse an ISO date or RFC 3339 timestamp into a calendar date
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}
