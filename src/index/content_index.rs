//! The in-memory content index.
//!
//! Holds every collection loaded once from static JSON and answers lookup
//! and filter queries. The index is never mutated after construction.

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tracing::{info, warn};

use crate::domain::{
    App, Collection, ContentType, Extension, Faq, FaqCategory, Guide, GuideCategory, Platform,
    Record,
};
use crate::error::IndexError;

pub const APPS_FILE: &str = "apps.json";
pub const EXTENSIONS_FILE: &str = "extensions.json";
pub const FAQS_FILE: &str = "faqs.json";
pub const GUIDES_FILE: &str = "guides.json";

const BUNDLED_APPS: &str = include_str!("../../data/apps.json");
const BUNDLED_EXTENSIONS: &str = include_str!("../../data/extensions.json");
const BUNDLED_FAQS: &str = include_str!("../../data/faqs.json");
const BUNDLED_GUIDES: &str = include_str!("../../data/guides.json");

/// Read-only index over apps, extensions, FAQs and guides
#[derive(Debug, Clone, Default)]
pub struct ContentIndex {
    apps: Vec<App>,
    extensions: Vec<Extension>,
    faqs: Vec<Faq>,
    guide_categories: Vec<GuideCategory>,

    app_positions: HashMap<String, usize>,
    extension_positions: HashMap<String, usize>,
    faq_positions: HashMap<String, usize>,
    category_positions: HashMap<String, usize>,
    /// Guide id -> (category position, position within category)
    guide_positions: HashMap<String, (usize, usize)>,
}

/// Collection sizes, as shown on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub apps: usize,
    pub extensions: usize,
    pub faqs: usize,
    pub guide_categories: usize,
    pub guides: usize,
}

impl ContentIndex {
    /// Build an index from already-parsed collections.
    ///
    /// Fails if an id repeats within a collection. Guide ids must be unique
    /// across all categories.
    pub fn from_parts(
        apps: Vec<App>,
        extensions: Vec<Extension>,
        faqs: Vec<Faq>,
        guide_categories: Vec<GuideCategory>,
    ) -> Result<Self, IndexError> {
        let app_positions = positions(Collection::Apps, apps.iter().map(|a| a.id.as_str()))?;
        let extension_positions = positions(
            Collection::Extensions,
            extensions.iter().map(|e| e.id.as_str()),
        )?;
        let faq_positions = positions(Collection::Faqs, faqs.iter().map(|f| f.id.as_str()))?;
        let category_positions = positions(
            Collection::GuideCategories,
            guide_categories.iter().map(|c| c.id.as_str()),
        )?;

        let mut guide_positions = HashMap::new();
        for (cat_pos, category) in guide_categories.iter().enumerate() {
            for (guide_pos, guide) in category.guides.iter().enumerate() {
                if guide_positions
                    .insert(guide.id.clone(), (cat_pos, guide_pos))
                    .is_some()
                {
                    return Err(IndexError::DuplicateId {
                        collection: Collection::Guides,
                        id: guide.id.clone(),
                    });
                }
            }
        }

        let index = Self {
            apps,
            extensions,
            faqs,
            guide_categories,
            app_positions,
            extension_positions,
            faq_positions,
            category_positions,
            guide_positions,
        };

        let stats = index.stats();
        info!(
            apps = stats.apps,
            extensions = stats.extensions,
            faqs = stats.faqs,
            guides = stats.guides,
            "Content index built"
        );

        let report = index.audit();
        if !report.is_clean() {
            warn!(
                stale = report.stale_references.len(),
                asymmetric = report.asymmetric_links.len(),
                "Cross references are inconsistent"
            );
            report.log();
        }

        Ok(index)
    }

    /// Parse the four JSON documents and build an index
    pub fn from_json(
        apps: &str,
        extensions: &str,
        faqs: &str,
        guides: &str,
    ) -> Result<Self, IndexError> {
        Self::from_parts(
            parse(Collection::Apps, apps)?,
            parse(Collection::Extensions, extensions)?,
            parse(Collection::Faqs, faqs)?,
            parse(Collection::GuideCategories, guides)?,
        )
    }

    /// Load `apps.json`, `extensions.json`, `faqs.json` and `guides.json`
    /// from a data directory
    pub async fn load(dir: impl AsRef<Path>) -> Result<Self, IndexError> {
        let dir = dir.as_ref();
        info!(dir = %dir.display(), "Loading content data");

        let (apps, extensions, faqs, guides) = tokio::try_join!(
            read_file(dir, APPS_FILE),
            read_file(dir, EXTENSIONS_FILE),
            read_file(dir, FAQS_FILE),
            read_file(dir, GUIDES_FILE),
        )?;

        Self::from_json(&apps, &extensions, &faqs, &guides)
    }

    /// Index over the data compiled into the binary
    pub fn bundled() -> Result<Self, IndexError> {
        Self::from_json(
            BUNDLED_APPS,
            BUNDLED_EXTENSIONS,
            BUNDLED_FAQS,
            BUNDLED_GUIDES,
        )
    }

    // ------------------------------------------------------------------
    // Collections
    // ------------------------------------------------------------------

    pub fn apps(&self) -> &[App] {
        &self.apps
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    pub fn faqs(&self) -> &[Faq] {
        &self.faqs
    }

    pub fn guide_categories(&self) -> &[GuideCategory] {
        &self.guide_categories
    }

    /// All guides, category by category
    pub fn guides(&self) -> impl Iterator<Item = &Guide> {
        self.guide_categories.iter().flat_map(|c| c.guides.iter())
    }

    // ------------------------------------------------------------------
    // Lookup by id
    // ------------------------------------------------------------------

    pub fn app(&self, id: &str) -> Option<&App> {
        self.app_positions.get(id).map(|&pos| &self.apps[pos])
    }

    pub fn extension(&self, id: &str) -> Option<&Extension> {
        self.extension_positions
            .get(id)
            .map(|&pos| &self.extensions[pos])
    }

    pub fn faq(&self, id: &str) -> Option<&Faq> {
        self.faq_positions.get(id).map(|&pos| &self.faqs[pos])
    }

    pub fn guide(&self, id: &str) -> Option<&Guide> {
        self.guide_with_category(id).map(|(_, guide)| guide)
    }

    /// A guide together with the category it belongs to
    pub fn guide_with_category(&self, id: &str) -> Option<(&GuideCategory, &Guide)> {
        let &(cat_pos, guide_pos) = self.guide_positions.get(id)?;
        let category = &self.guide_categories[cat_pos];
        Some((category, &category.guides[guide_pos]))
    }

    pub fn guide_category(&self, id: &str) -> Option<&GuideCategory> {
        self.category_positions
            .get(id)
            .map(|&pos| &self.guide_categories[pos])
    }

    /// Look up a record in any collection
    pub fn get(&self, collection: Collection, id: &str) -> Option<Record<'_>> {
        match collection {
            Collection::Apps => self.app(id).map(Record::App),
            Collection::Extensions => self.extension(id).map(Record::Extension),
            Collection::Faqs => self.faq(id).map(Record::Faq),
            Collection::Guides => self.guide(id).map(Record::Guide),
            Collection::GuideCategories => self.guide_category(id).map(Record::GuideCategory),
        }
    }

    // ------------------------------------------------------------------
    // Filters (source order preserved)
    // ------------------------------------------------------------------

    pub fn apps_where(&self, predicate: impl Fn(&App) -> bool) -> Vec<&App> {
        self.apps.iter().filter(|a| predicate(a)).collect()
    }

    pub fn extensions_where(&self, predicate: impl Fn(&Extension) -> bool) -> Vec<&Extension> {
        self.extensions.iter().filter(|e| predicate(e)).collect()
    }

    pub fn faqs_where(&self, predicate: impl Fn(&Faq) -> bool) -> Vec<&Faq> {
        self.faqs.iter().filter(|f| predicate(f)).collect()
    }

    pub fn guides_where(&self, predicate: impl Fn(&Guide) -> bool) -> Vec<&Guide> {
        self.guides().filter(|g| predicate(g)).collect()
    }

    pub fn apps_by_platform(&self, platform: Platform) -> Vec<&App> {
        self.apps_where(|app| app.supports_platform(platform))
    }

    pub fn apps_by_content_type(&self, content_type: ContentType) -> Vec<&App> {
        self.apps_where(|app| app.serves(content_type))
    }

    pub fn extensions_by_content_type(&self, content_type: ContentType) -> Vec<&Extension> {
        self.extensions_where(|ext| ext.serves(content_type))
    }

    pub fn extensions_by_region(&self, region: &str) -> Vec<&Extension> {
        self.extensions_where(|ext| ext.in_region(region))
    }

    pub fn faqs_by_category(&self, category: FaqCategory) -> Vec<&Faq> {
        self.faqs_where(|faq| faq.category == category)
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            apps: self.apps.len(),
            extensions: self.extensions.len(),
            faqs: self.faqs.len(),
            guide_categories: self.guide_categories.len(),
            guides: self.guide_positions.len(),
        }
    }
}

/// Map each id to its position, rejecting repeats
fn positions<'a>(
    collection: Collection,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashMap<String, usize>, IndexError> {
    let mut positions = HashMap::new();
    for (pos, id) in ids.enumerate() {
        if positions.insert(id.to_string(), pos).is_some() {
            return Err(IndexError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(positions)
}

fn parse<T: DeserializeOwned>(collection: Collection, json: &str) -> Result<Vec<T>, IndexError> {
    serde_json::from_str(json).map_err(|source| IndexError::Parse { collection, source })
}

async fn read_file(dir: &Path, name: &str) -> Result<String, IndexError> {
    let path = dir.join(name);
    fs::read_to_string(&path)
        .await
        .map_err(|source| IndexError::Io { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    const APPS: &str = r#"[
        {"id": "mihon", "name": "Mihon", "description": "Manga reader for Android",
         "contentTypes": ["Manga"], "platforms": ["Android"], "supportedExtensions": ["keiyoushi"]},
        {"id": "aniyomi", "name": "Aniyomi", "description": "Anime and manga",
         "contentTypes": ["Manga", "Anime"], "platforms": ["Android"]},
        {"id": "suwayomi", "name": "Suwayomi", "description": "Self-hosted server",
         "contentTypes": ["Manga"], "platforms": ["Windows", "Mac", "Linux", "Web"]}
    ]"#;

    const EXTENSIONS: &str = r#"[
        {"id": "keiyoushi", "name": "Keiyoushi", "types": ["Manga"], "region": "ALL",
         "supportedApps": ["mihon"]}
    ]"#;

    const FAQS: &str = r#"[
        {"id": "faq-1", "question": "How do I install?", "answer": "Download the APK.",
         "category": "installation"},
        {"id": "faq-2", "question": "Why is it slow?", "answer": "Check your sources.",
         "category": "troubleshooting"}
    ]"#;

    const GUIDES: &str = r#"[
        {"id": "start", "title": "Start", "icon": "book", "guides": [
            {"id": "g1", "title": "First", "slug": "first"},
            {"id": "g2", "title": "Second", "slug": "second"}
        ]},
        {"id": "more", "title": "More", "icon": "help", "guides": [
            {"id": "g3", "title": "Third", "slug": "third"}
        ]}
    ]"#;

    fn index() -> ContentIndex {
        ContentIndex::from_json(APPS, EXTENSIONS, FAQS, GUIDES).unwrap()
    }

    #[test]
    fn test_lookup_by_id() {
        let index = index();

        assert_eq!(index.app("aniyomi").unwrap().name, "Aniyomi");
        assert_eq!(index.extension("keiyoushi").unwrap().region, "ALL");
        assert_eq!(index.faq("faq-2").unwrap().question, "Why is it slow?");
        assert_eq!(index.guide("g3").unwrap().slug, "third");
        assert_eq!(index.guide_category("start").unwrap().guides.len(), 2);

        assert!(index.app("tachiyomi").is_none());
        assert!(index.guide("g4").is_none());
    }

    #[test]
    fn test_guide_with_category() {
        let index = index();
        let (category, guide) = index.guide_with_category("g3").unwrap();
        assert_eq!(category.id, "more");
        assert_eq!(guide.title, "Third");
    }

    #[test]
    fn test_generic_get() {
        let index = index();

        let record = index.get(Collection::Apps, "mihon").unwrap();
        assert_eq!(record.id(), "mihon");
        assert_eq!(record.collection(), Collection::Apps);

        let record = index.get(Collection::Faqs, "faq-1").unwrap();
        assert_eq!(record.title(), "How do I install?");

        assert!(index.get(Collection::Extensions, "mihon").is_none());
    }

    #[test]
    fn test_filters_preserve_order() {
        let index = index();

        let manga: Vec<_> = index
            .apps_by_content_type(ContentType::Manga)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(manga, vec!["mihon", "aniyomi", "suwayomi"]);

        let android: Vec<_> = index
            .apps_by_platform(Platform::Android)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(android, vec!["mihon", "aniyomi"]);

        assert!(index.apps_by_platform(Platform::Ios).is_empty());
        assert_eq!(index.faqs_by_category(FaqCategory::Installation).len(), 1);
        assert_eq!(index.extensions_by_region("all").len(), 1);
    }

    #[test]
    fn test_stats_counts_guides_across_categories() {
        let stats = index().stats();
        assert_eq!(stats.apps, 3);
        assert_eq!(stats.extensions, 1);
        assert_eq!(stats.faqs, 2);
        assert_eq!(stats.guide_categories, 2);
        assert_eq!(stats.guides, 3);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let apps = r#"[
            {"id": "dup", "name": "A", "description": ""},
            {"id": "dup", "name": "B", "description": ""}
        ]"#;
        let err = ContentIndex::from_json(apps, "[]", "[]", "[]").unwrap_err();
        assert!(matches!(
            err,
            IndexError::DuplicateId { collection: Collection::Apps, ref id } if id == "dup"
        ));

        let guides = r#"[
            {"id": "a", "title": "A", "icon": "book", "guides": [{"id": "g", "title": "G", "slug": "g"}]},
            {"id": "b", "title": "B", "icon": "book", "guides": [{"id": "g", "title": "G", "slug": "g"}]}
        ]"#;
        let err = ContentIndex::from_json("[]", "[]", "[]", guides).unwrap_err();
        assert!(matches!(
            err,
            IndexError::DuplicateId { collection: Collection::Guides, .. }
        ));
    }

    #[test]
    fn test_malformed_json_reports_collection() {
        let err = ContentIndex::from_json("[]", "{not json", "[]", "[]").unwrap_err();
        assert!(matches!(
            err,
            IndexError::Parse { collection: Collection::Extensions, .. }
        ));
    }

    #[test]
    fn test_bundled_data_loads() {
        let index = ContentIndex::bundled().unwrap();
        assert!(!index.apps().is_empty());
        assert!(!index.extensions().is_empty());
        assert!(index.audit().is_clean());
    }
}
