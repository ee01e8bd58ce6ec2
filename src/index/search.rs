//! Case-insensitive substring search across every collection.

use serde::Serialize;

use super::ContentIndex;
use crate::domain::{App, Extension, Faq, Guide};

/// A record with a fixed set of searchable text fields
pub trait Searchable {
    /// Text fields the query is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// `needle` must already be lowercase
    fn matches(&self, needle: &str) -> bool {
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Searchable for App {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        fields.extend(self.keywords.iter().map(String::as_str));
        fields
    }
}

impl Searchable for Extension {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.info.as_deref());
        fields.extend(self.keywords.iter().map(String::as_str));
        fields
    }
}

impl Searchable for Faq {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.question.as_str(), self.answer.as_str()];
        fields.extend(self.keywords.iter().map(String::as_str));
        fields
    }
}

impl Searchable for Guide {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.summary.as_deref());
        fields.extend(self.keywords.iter().map(String::as_str));
        fields
    }
}

/// Matches from each collection, in collection order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults<'a> {
    pub apps: Vec<&'a App>,
    pub extensions: Vec<&'a Extension>,
    pub faqs: Vec<&'a Faq>,
    pub guides: Vec<&'a Guide>,
}

impl SearchResults<'_> {
    pub fn len(&self) -> usize {
        self.apps.len() + self.extensions.len() + self.faqs.len() + self.guides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ContentIndex {
    /// Search names, descriptions and keywords of every collection.
    ///
    /// The query is matched as written, whitespace included. An empty query
    /// matches every record.
    pub fn search(&self, query: &str) -> SearchResults<'_> {
        let needle = query.to_lowercase();

        SearchResults {
            apps: self.apps_where(|app| app.matches(&needle)),
            extensions: self.extensions_where(|ext| ext.matches(&needle)),
            faqs: self.faqs_where(|faq| faq.matches(&needle)),
            guides: self.guides_where(|guide| guide.matches(&needle)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> ContentIndex {
        ContentIndex::from_json(
            r#"[
                {"id": "a1", "name": "Kotatsu", "description": "Open source MANGA reader",
                 "keywords": ["Discord community"]},
                {"id": "a2", "name": "Seanime", "description": "Anime server"}
            ]"#,
            r#"[
                {"id": "e1", "name": "Keiyoushi", "region": "ALL"},
                {"id": "e2", "name": "Kohi", "info": "Manga sources", "region": "EN"}
            ]"#,
            r#"[
                {"id": "f1", "question": "Where are backups?", "answer": "In the manga folder.",
                 "category": "general"}
            ]"#,
            r#"[
                {"id": "c1", "title": "Basics", "icon": "book", "guides": [
                    {"id": "g1", "title": "Reading tips", "slug": "tips", "summary": "Manga layouts"},
                    {"id": "g2", "title": "Trackers", "slug": "trackers", "keywords": ["anilist"]}
                ]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let index = index();
        let results = index.search("manga");

        assert_eq!(results.apps.len(), 1);
        assert_eq!(results.apps[0].id, "a1");
        assert_eq!(results.extensions.len(), 1);
        assert_eq!(results.extensions[0].id, "e2");
        assert_eq!(results.faqs.len(), 1);
        assert_eq!(results.guides.len(), 1);
        assert_eq!(results.guides[0].id, "g1");
        assert_eq!(results.len(), 4);
    }

    #[test]
    fn test_search_matches_keywords() {
        let index = index();

        let results = index.search("DISCORD");
        assert_eq!(results.apps.len(), 1);
        assert!(results.extensions.is_empty());

        let results = index.search("AniList");
        assert_eq!(results.guides.len(), 1);
        assert_eq!(results.guides[0].id, "g2");
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let index = index();
        let results = index.search("");

        assert_eq!(results.apps.len(), 2);
        assert_eq!(results.extensions.len(), 2);
        assert_eq!(results.faqs.len(), 1);
        assert_eq!(results.guides.len(), 2);
    }

    #[test]
    fn test_query_whitespace_is_significant() {
        let index = ContentIndex::from_json(
            r#"[
                {"id": "a1", "name": "Manga Reader", "description": ""},
                {"id": "a2", "name": "Mangareader", "description": ""}
            ]"#,
            "[]",
            "[]",
            "[]",
        )
        .unwrap();

        let apps: Vec<_> = index.search(" reader").apps.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(apps, vec!["a1"]);

        let apps: Vec<_> = index.search("reader").apps.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(apps, vec!["a1", "a2"]);

        assert!(index.search("   ").is_empty());
    }

    #[test]
    fn test_missing_info_is_not_searched() {
        let index = index();
        let results = index.search("keiyoushi");
        assert_eq!(results.extensions.len(), 1);
        assert!(index.search("sources").extensions.iter().all(|e| e.id == "e2"));
    }
}
