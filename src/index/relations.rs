//! Relationship traversal between collections.
//!
//! Forward relations resolve the id list stored on the source record, in
//! list order. Reverse relations scan the target collection for records
//! that list the source id. Ids that don't resolve are stale references
//! and are skipped.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use super::ContentIndex;
use crate::domain::{App, Collection, Extension, Faq, Guide, Record};

/// A traversable link from one collection to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Relation {
    /// App -> extensions it supports
    AppExtensions,
    /// Extension -> apps that can load it
    ExtensionApps,
    /// App -> FAQs mentioning it
    AppFaqs,
    /// App -> guides mentioning it
    AppGuides,
    /// Extension -> guides mentioning it
    ExtensionGuides,
    /// FAQ -> related apps
    FaqApps,
    /// Guide -> related apps
    GuideApps,
    /// Guide -> related extensions
    GuideExtensions,
}

impl Relation {
    pub const ALL: [Relation; 8] = [
        Self::AppExtensions,
        Self::ExtensionApps,
        Self::AppFaqs,
        Self::AppGuides,
        Self::ExtensionGuides,
        Self::FaqApps,
        Self::GuideApps,
        Self::GuideExtensions,
    ];

    /// Collection the source id belongs to
    pub fn source(&self) -> Collection {
        match self {
            Relation::AppExtensions | Relation::AppFaqs | Relation::AppGuides => Collection::Apps,
            Relation::ExtensionApps | Relation::ExtensionGuides => Collection::Extensions,
            Relation::FaqApps => Collection::Faqs,
            Relation::GuideApps | Relation::GuideExtensions => Collection::Guides,
        }
    }

    /// Collection the results come from
    pub fn target(&self) -> Collection {
        match self {
            Relation::AppExtensions | Relation::GuideExtensions => Collection::Extensions,
            Relation::ExtensionApps | Relation::FaqApps | Relation::GuideApps => Collection::Apps,
            Relation::AppFaqs => Collection::Faqs,
            Relation::AppGuides | Relation::ExtensionGuides => Collection::Guides,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Relation::AppExtensions => "app-extensions",
            Relation::ExtensionApps => "extension-apps",
            Relation::AppFaqs => "app-faqs",
            Relation::AppGuides => "app-guides",
            Relation::ExtensionGuides => "extension-guides",
            Relation::FaqApps => "faq-apps",
            Relation::GuideApps => "guide-apps",
            Relation::GuideExtensions => "guide-extensions",
        };
        f.write_str(name)
    }
}

impl FromStr for Relation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Relation::ALL
            .into_iter()
            .find(|r| r.to_string() == wanted)
            .ok_or_else(|| anyhow::anyhow!("Unknown relation: {}", s))
    }
}

impl ContentIndex {
    /// Follow a relation from a source record.
    ///
    /// An unknown source id yields an empty list.
    pub fn related(&self, relation: Relation, source_id: &str) -> Vec<Record<'_>> {
        match relation {
            Relation::AppExtensions => wrap(self.app_extensions(source_id), Record::Extension),
            Relation::ExtensionApps => wrap(self.extension_apps(source_id), Record::App),
            Relation::AppFaqs => wrap(self.faqs_for_app(source_id), Record::Faq),
            Relation::AppGuides => wrap(self.guides_for_app(source_id), Record::Guide),
            Relation::ExtensionGuides => wrap(self.guides_for_extension(source_id), Record::Guide),
            Relation::FaqApps => wrap(self.faq_apps(source_id), Record::App),
            Relation::GuideApps => wrap(self.guide_apps(source_id), Record::App),
            Relation::GuideExtensions => wrap(self.guide_extensions(source_id), Record::Extension),
        }
    }

    /// Extensions listed in an app's `supportedExtensions`
    pub fn app_extensions(&self, app_id: &str) -> Vec<&Extension> {
        match self.app(app_id) {
            Some(app) => self.resolve_extensions(Collection::Apps, app_id, &app.supported_extensions),
            None => Vec::new(),
        }
    }

    /// Extensions to show on an app's page.
    ///
    /// The app's own list when anything on it resolves, otherwise the
    /// extensions whose `supportedApps` name the app.
    pub fn recommended_extensions(&self, app_id: &str) -> Vec<&Extension> {
        let listed = self.app_extensions(app_id);
        if !listed.is_empty() || self.app(app_id).is_none() {
            return listed;
        }

        self.extensions_where(|ext| ext.supported_apps.iter().any(|id| id == app_id))
    }

    /// Apps listed in an extension's `supportedApps`, in list order.
    ///
    /// A repeated id yields the app once per occurrence.
    pub fn extension_apps(&self, extension_id: &str) -> Vec<&App> {
        match self.extension(extension_id) {
            Some(ext) => self.resolve_apps(Collection::Extensions, extension_id, &ext.supported_apps),
            None => Vec::new(),
        }
    }

    /// FAQs whose related apps include the app
    pub fn faqs_for_app(&self, app_id: &str) -> Vec<&Faq> {
        self.faqs_where(|faq| faq.relates_to_app(app_id))
    }

    /// Guides, across all categories, whose related apps include the app
    pub fn guides_for_app(&self, app_id: &str) -> Vec<&Guide> {
        self.guides_where(|guide| guide.relates_to_app(app_id))
    }

    /// Guides, across all categories, whose related extensions include the extension
    pub fn guides_for_extension(&self, extension_id: &str) -> Vec<&Guide> {
        self.guides_where(|guide| guide.relates_to_extension(extension_id))
    }

    pub fn faq_apps(&self, faq_id: &str) -> Vec<&App> {
        match self.faq(faq_id) {
            Some(faq) => self.resolve_apps(Collection::Faqs, faq_id, &faq.related_app_ids),
            None => Vec::new(),
        }
    }

    pub fn guide_apps(&self, guide_id: &str) -> Vec<&App> {
        match self.guide(guide_id) {
            Some(guide) => self.resolve_apps(Collection::Guides, guide_id, &guide.related_app_ids),
            None => Vec::new(),
        }
    }

    pub fn guide_extensions(&self, guide_id: &str) -> Vec<&Extension> {
        match self.guide(guide_id) {
            Some(guide) => {
                self.resolve_extensions(Collection::Guides, guide_id, &guide.related_extension_ids)
            }
            None => Vec::new(),
        }
    }

    fn resolve_apps(&self, from: Collection, source_id: &str, ids: &[String]) -> Vec<&App> {
        resolve(ids, |id| self.app(id), from, source_id, Collection::Apps)
    }

    fn resolve_extensions(
        &self,
        from: Collection,
        source_id: &str,
        ids: &[String],
    ) -> Vec<&Extension> {
        resolve(ids, |id| self.extension(id), from, source_id, Collection::Extensions)
    }
}

fn resolve<'a, T>(
    ids: &[String],
    lookup: impl Fn(&str) -> Option<&'a T>,
    from: Collection,
    source_id: &str,
    target: Collection,
) -> Vec<&'a T> {
    ids.iter()
        .filter_map(|id| {
            let found = lookup(id);
            if found.is_none() {
                debug!(%from, source_id, %target, missing = %id, "Skipping stale reference");
            }
            found
        })
        .collect()
}

fn wrap<'a, T>(items: Vec<&'a T>, variant: fn(&'a T) -> Record<'a>) -> Vec<Record<'a>> {
    items.into_iter().map(variant).collect()
}
