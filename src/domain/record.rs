//! Collection names and borrowed views over any record kind.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;

use super::{App, Extension, Faq, Guide, GuideCategory};

/// The record collections held by the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Apps,
    Extensions,
    Faqs,
    Guides,
    GuideCategories,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Collection::Apps => "apps",
            Collection::Extensions => "extensions",
            Collection::Faqs => "faqs",
            Collection::Guides => "guides",
            Collection::GuideCategories => "guide categories",
        };
        f.write_str(name)
    }
}

impl FromStr for Collection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "app" | "apps" => Ok(Collection::Apps),
            "extension" | "extensions" | "ext" => Ok(Collection::Extensions),
            "faq" | "faqs" => Ok(Collection::Faqs),
            "guide" | "guides" => Ok(Collection::Guides),
            "category" | "categories" | "guide-categories" => Ok(Collection::GuideCategories),
            _ => anyhow::bail!("Unknown collection: {}", s),
        }
    }
}

/// A borrowed record from any collection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
pub enum Record<'a> {
    App(&'a App),
    Extension(&'a Extension),
    Faq(&'a Faq),
    Guide(&'a Guide),
    GuideCategory(&'a GuideCategory),
}

impl<'a> Record<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            Record::App(app) => &app.id,
            Record::Extension(ext) => &ext.id,
            Record::Faq(faq) => &faq.id,
            Record::Guide(guide) => &guide.id,
            Record::GuideCategory(category) => &category.id,
        }
    }

    /// Name, title or question, whichever the record displays
    pub fn title(&self) -> &'a str {
        match self {
            Record::App(app) => &app.name,
            Record::Extension(ext) => &ext.name,
            Record::Faq(faq) => &faq.question,
            Record::Guide(guide) => &guide.title,
            Record::GuideCategory(category) => &category.title,
        }
    }

    pub fn collection(&self) -> Collection {
        match self {
            Record::App(_) => Collection::Apps,
            Record::Extension(_) => Collection::Extensions,
            Record::Faq(_) => Collection::Faqs,
            Record::Guide(_) => Collection::Guides,
            Record::GuideCategory(_) => Collection::GuideCategories,
        }
    }
}
