//! Query Integration Tests
//!
//! Lookup, filter, relation and search behavior through the public API.

use appdex::{Collection, ContentIndex, ContentType, FaqCategory, Platform, Record, Relation};

fn ids<'a, T: 'a>(items: impl IntoIterator<Item = &'a T>, id: fn(&T) -> &str) -> Vec<String> {
    items.into_iter().map(|item| id(item).to_string()).collect()
}

fn small_index() -> ContentIndex {
    ContentIndex::from_json(
        r#"[{"id": "a1", "name": "Reader", "description": "Reads things",
             "supportedExtensions": ["e1"]}]"#,
        r#"[{"id": "e1", "name": "Source", "region": "EN", "supportedApps": ["a1"]}]"#,
        "[]",
        "[]",
    )
    .unwrap()
}

#[test]
fn test_related_both_directions() {
    let index = small_index();

    let extensions = index.related(Relation::AppExtensions, "a1");
    assert_eq!(extensions.len(), 1);
    assert_eq!(extensions[0].id(), "e1");
    assert_eq!(extensions[0].collection(), Collection::Extensions);

    let apps = index.related(Relation::ExtensionApps, "e1");
    assert_eq!(apps.len(), 1);
    assert!(matches!(apps[0], Record::App(app) if app.id == "a1"));
}

#[test]
fn test_related_unknown_source_is_empty() {
    let index = small_index();
    for relation in Relation::ALL {
        assert!(index.related(relation, "nope").is_empty());
    }
}

#[test]
fn test_stale_references_are_skipped() {
    let index = ContentIndex::from_json(
        r#"[
            {"id": "a1", "name": "A", "description": "", "supportedExtensions": ["e1", "gone", "e2"]},
            {"id": "a2", "name": "B", "description": ""}
        ]"#,
        r#"[
            {"id": "e1", "name": "One", "region": "EN", "supportedApps": ["a1"]},
            {"id": "e2", "name": "Two", "region": "EN", "supportedApps": ["a1", "removed"]}
        ]"#,
        r#"[{"id": "f1", "question": "Q", "answer": "A", "category": "general",
             "relatedAppIds": ["ghost", "a2"]}]"#,
        "[]",
    )
    .unwrap();

    assert_eq!(
        ids(index.app_extensions("a1"), |e| e.id.as_str()),
        vec!["e1", "e2"]
    );
    assert_eq!(ids(index.extension_apps("e2"), |a| a.id.as_str()), vec!["a1"]);
    assert_eq!(ids(index.faq_apps("f1"), |a| a.id.as_str()), vec!["a2"]);
}

#[test]
fn test_recommended_extensions_fall_back_to_reverse_links() {
    let index = ContentIndex::from_json(
        r#"[{"id": "a1", "name": "A", "description": ""}]"#,
        r#"[
            {"id": "e1", "name": "One", "region": "EN", "supportedApps": ["a1"]},
            {"id": "e2", "name": "Two", "region": "EN", "supportedApps": []},
            {"id": "e3", "name": "Three", "region": "JP", "supportedApps": ["a1"]}
        ]"#,
        "[]",
        "[]",
    )
    .unwrap();

    assert!(index.app_extensions("a1").is_empty());
    assert_eq!(
        ids(index.recommended_extensions("a1"), |e| e.id.as_str()),
        vec!["e1", "e3"]
    );
    assert!(index.recommended_extensions("nope").is_empty());
}

#[test]
fn test_related_app_extensions_ignores_reverse_links() {
    let index = ContentIndex::from_json(
        r#"[
            {"id": "a1", "name": "A", "description": "", "supportedExtensions": ["gone"]},
            {"id": "a2", "name": "B", "description": ""}
        ]"#,
        r#"[{"id": "e1", "name": "One", "region": "EN", "supportedApps": ["a1", "a2"]}]"#,
        "[]",
        "[]",
    )
    .unwrap();

    assert!(index.related(Relation::AppExtensions, "a1").is_empty());
    assert!(index.related(Relation::AppExtensions, "a2").is_empty());
    assert!(index.app_extensions("a1").is_empty());
    assert_eq!(
        ids(index.recommended_extensions("a1"), |e| e.id.as_str()),
        vec!["e1"]
    );
}

#[test]
fn test_recommended_extensions_prefer_stored_list() {
    let index = ContentIndex::from_json(
        r#"[{"id": "a1", "name": "A", "description": "", "supportedExtensions": ["e2"]}]"#,
        r#"[
            {"id": "e1", "name": "One", "region": "EN", "supportedApps": ["a1"]},
            {"id": "e2", "name": "Two", "region": "EN"}
        ]"#,
        "[]",
        "[]",
    )
    .unwrap();

    assert_eq!(
        ids(index.recommended_extensions("a1"), |e| e.id.as_str()),
        vec!["e2"]
    );
}

#[test]
fn test_extension_apps_follow_list_order() {
    let index = ContentIndex::from_json(
        r#"[
            {"id": "a1", "name": "A", "description": ""},
            {"id": "a2", "name": "B", "description": ""}
        ]"#,
        r#"[
            {"id": "e1", "name": "One", "region": "EN", "supportedApps": ["a2", "a1"]},
            {"id": "e2", "name": "Two", "region": "EN", "supportedApps": ["a1", "a1"]}
        ]"#,
        "[]",
        "[]",
    )
    .unwrap();

    assert_eq!(ids(index.extension_apps("e1"), |a| a.id.as_str()), vec!["a2", "a1"]);
    assert_eq!(ids(index.extension_apps("e2"), |a| a.id.as_str()), vec!["a1", "a1"]);
    assert_eq!(index.related(Relation::ExtensionApps, "e2").len(), 2);
}

#[test]
fn test_reverse_relations_scan_every_category() {
    let index = ContentIndex::from_json(
        r#"[{"id": "a1", "name": "A", "description": ""}]"#,
        r#"[{"id": "e1", "name": "E", "region": "EN"}]"#,
        r#"[
            {"id": "f1", "question": "Q1", "answer": "", "category": "general", "relatedAppIds": ["a1"]},
            {"id": "f2", "question": "Q2", "answer": "", "category": "general"},
            {"id": "f3", "question": "Q3", "answer": "", "category": "extensions", "relatedAppIds": ["a1"]}
        ]"#,
        r#"[
            {"id": "c1", "title": "C1", "icon": "book", "guides": [
                {"id": "g1", "title": "G1", "slug": "g1", "relatedAppIds": ["a1"]},
                {"id": "g2", "title": "G2", "slug": "g2", "relatedExtensionIds": ["e1"]}
            ]},
            {"id": "c2", "title": "C2", "icon": "help", "guides": [
                {"id": "g3", "title": "G3", "slug": "g3", "relatedAppIds": ["a1"], "relatedExtensionIds": ["e1"]}
            ]}
        ]"#,
    )
    .unwrap();

    assert_eq!(ids(index.faqs_for_app("a1"), |f| f.id.as_str()), vec!["f1", "f3"]);
    assert_eq!(ids(index.guides_for_app("a1"), |g| g.id.as_str()), vec!["g1", "g3"]);
    assert_eq!(
        ids(index.guides_for_extension("e1"), |g| g.id.as_str()),
        vec!["g2", "g3"]
    );
    assert_eq!(ids(index.guide_extensions("g3"), |e| e.id.as_str()), vec!["e1"]);
    assert_eq!(index.related(Relation::AppGuides, "a1").len(), 2);
}

#[test]
fn test_search_discord_keyword() {
    let index = ContentIndex::from_json(
        r#"[{"id": "a1", "name": "Chat Reader", "description": "A reader",
             "keywords": ["discord"]}]"#,
        r#"[{"id": "e1", "name": "Unrelated", "info": "Nothing here", "region": "EN"}]"#,
        "[]",
        "[]",
    )
    .unwrap();

    let results = index.search("discord");
    assert_eq!(ids(results.apps.iter().copied(), |a| a.id.as_str()), vec!["a1"]);
    assert!(results.extensions.is_empty());
    assert!(results.faqs.is_empty());
    assert!(results.guides.is_empty());
}

#[test]
fn test_bundled_filters() {
    let index = ContentIndex::bundled().unwrap();

    let ios = index.apps_by_platform(Platform::Ios);
    assert!(!ios.is_empty());
    assert!(ios.iter().all(|a| a.platforms.contains(&Platform::Ios)));

    let anime = index.apps_by_content_type(ContentType::Anime);
    let expected: Vec<_> = index
        .apps()
        .iter()
        .filter(|a| a.content_types.contains(&ContentType::Anime))
        .map(|a| a.id.clone())
        .collect();
    assert_eq!(ids(anime, |a| a.id.as_str()), expected);

    let general = index.faqs_by_category(FaqCategory::General);
    assert!(general.iter().all(|f| f.category == FaqCategory::General));
}

#[test]
fn test_bundled_lookup_every_id() {
    let index = ContentIndex::bundled().unwrap();

    for app in index.apps() {
        assert_eq!(index.app(&app.id), Some(app));
    }
    for ext in index.extensions() {
        assert_eq!(index.extension(&ext.id), Some(ext));
    }
    for faq in index.faqs() {
        assert_eq!(index.faq(&faq.id), Some(faq));
    }
    for guide in index.guides() {
        assert_eq!(index.guide(&guide.id), Some(guide));
    }
    assert!(index.app("does-not-exist").is_none());
}

#[test]
fn test_queries_are_repeatable() {
    let index = ContentIndex::bundled().unwrap();

    assert_eq!(index.search("manga"), index.search("manga"));
    assert_eq!(
        index.related(Relation::AppExtensions, "aniyomi"),
        index.related(Relation::AppExtensions, "aniyomi")
    );
    assert_eq!(
        index.apps_by_platform(Platform::Android),
        index.apps_by_platform(Platform::Android)
    );
}
