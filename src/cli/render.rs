//! Text and JSON output for CLI commands.

use anyhow::Result;
use serde::Serialize;
use serde_json::json;

use crate::domain::{App, Extension, Faq, Guide, GuideCategory, Record};
use crate::index::{AuditReport, ContentIndex, IndexStats, SearchResults};

/// Extensions and apps shown inline on a detail view before "and N more"
const PREVIEW_LIMIT: usize = 3;

/// Output mode selected by `--json`
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce()) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            text();
        }
        Ok(())
    }

    pub fn app(&self, index: &ContentIndex, app: &App) -> Result<()> {
        let extensions = index.recommended_extensions(&app.id);
        let faqs = index.faqs_for_app(&app.id);
        let guides = index.guides_for_app(&app.id);

        let value = json!({
            "app": app,
            "statusLabel": app.status_label(),
            "author": app.author_info(),
            "extensions": extensions,
            "faqs": faqs,
            "guides": guides,
        });

        self.emit(&value, || {
            println!("{} ({})", app.name, app.id);
            if let Some(label) = app.status_label() {
                println!("Status: {}", label);
            }
            println!("{}", app.description);
            println!("Content: {}", join(&app.content_types));
            println!("Platforms: {}", join(&app.platforms));
            if let Some(author) = app.author_info() {
                match author.url {
                    Some(url) => println!("Author: {} <{}>", author.name, url),
                    None => println!("Author: {}", author.name),
                }
            }
            if let Some(date) = app.last_updated() {
                println!("Last updated: {}", date);
            }
            for tutorial in &app.tutorials {
                println!("Tutorial: {} ({:?}) {}", tutorial.title, tutorial.kind, tutorial.url);
            }
            print_preview("Extensions", extensions.iter().map(|e| e.name.as_str()));
            print_titles("FAQs", faqs.iter().map(|f| f.question.as_str()));
            print_titles("Guides", guides.iter().map(|g| g.title.as_str()));
        })
    }

    pub fn extension(&self, index: &ContentIndex, ext: &Extension) -> Result<()> {
        let apps = index.extension_apps(&ext.id);
        let guides = index.guides_for_extension(&ext.id);

        let value = json!({
            "extension": ext,
            "contentTypeLabel": ext.content_type_label(),
            "apps": apps,
            "guides": guides,
        });

        self.emit(&value, || {
            println!("{} ({})", ext.name, ext.id);
            if let Some(info) = &ext.info {
                println!("{}", info);
            }
            println!("Region: {}", ext.region);
            println!("Content: {}", ext.content_type_label());
            if let Some(url) = &ext.auto_url {
                println!("Install: {}", url);
            }
            if let Some(url) = &ext.manual_url {
                println!("Repository: {}", url);
            }
            if let Some(date) = ext.last_updated() {
                println!("Last updated: {}", date);
            }
            print_preview("Supported apps", apps.iter().map(|a| a.name.as_str()));
            print_titles("Guides", guides.iter().map(|g| g.title.as_str()));
        })
    }

    pub fn faq(&self, index: &ContentIndex, faq: &Faq) -> Result<()> {
        let apps = index.faq_apps(&faq.id);
        let value = json!({ "faq": faq, "apps": apps });

        self.emit(&value, || {
            println!("[{}] {}", faq.category, faq.question);
            println!("{}", faq.answer);
            print_titles("Related apps", apps.iter().map(|a| a.name.as_str()));
        })
    }

    pub fn guide(&self, index: &ContentIndex, category: &GuideCategory, guide: &Guide) -> Result<()> {
        let apps = index.guide_apps(&guide.id);
        let extensions = index.guide_extensions(&guide.id);
        let value = json!({
            "category": { "id": category.id, "title": category.title },
            "guide": guide,
            "apps": apps,
            "extensions": extensions,
        });

        self.emit(&value, || {
            println!("{} / {}", category.title, guide.title);
            println!("Slug: {}", guide.slug);
            if let Some(summary) = &guide.summary {
                println!("{}", summary);
            }
            print_titles("Related apps", apps.iter().map(|a| a.name.as_str()));
            print_titles("Related extensions", extensions.iter().map(|e| e.name.as_str()));
        })
    }

    pub fn apps(&self, apps: &[&App]) -> Result<()> {
        self.emit(&apps, || {
            if apps.is_empty() {
                println!("No apps found");
                return;
            }
            println!("{:<20} {:<24} {:<28}", "ID", "NAME", "PLATFORMS");
            println!("{}", "-".repeat(72));
            for app in apps {
                println!("{:<20} {:<24} {:<28}", app.id, app.name, join(&app.platforms));
            }
        })
    }

    pub fn extensions(&self, extensions: &[&Extension]) -> Result<()> {
        self.emit(&extensions, || {
            if extensions.is_empty() {
                println!("No extensions found");
                return;
            }
            println!("{:<20} {:<24} {:<8} {:<12}", "ID", "NAME", "REGION", "CONTENT");
            println!("{}", "-".repeat(66));
            for ext in extensions {
                println!(
                    "{:<20} {:<24} {:<8} {:<12}",
                    ext.id,
                    ext.name,
                    ext.region,
                    ext.content_type_label()
                );
            }
        })
    }

    pub fn faqs(&self, faqs: &[&Faq]) -> Result<()> {
        self.emit(&faqs, || {
            if faqs.is_empty() {
                println!("No FAQs found");
                return;
            }
            for faq in faqs {
                println!("{:<16} [{}] {}", faq.id, faq.category, faq.question);
            }
        })
    }

    pub fn guide_categories(&self, categories: &[GuideCategory]) -> Result<()> {
        self.emit(&categories, || {
            for category in categories {
                println!("{} ({})", category.title, category.id);
                for guide in &category.guides {
                    println!("  {:<24} {}", guide.id, guide.title);
                }
            }
        })
    }

    pub fn records(&self, records: &[Record<'_>]) -> Result<()> {
        self.emit(&records, || {
            if records.is_empty() {
                println!("No related records");
                return;
            }
            for record in records {
                println!("{:<20} {}", record.id(), record.title());
            }
        })
    }

    pub fn search(&self, query: &str, results: &SearchResults<'_>) -> Result<()> {
        self.emit(results, || {
            if results.is_empty() {
                println!("No results for '{}'", query);
                return;
            }
            println!("Found {} result(s) for '{}':", results.len(), query);
            print_titles("Apps", results.apps.iter().map(|a| a.name.as_str()));
            print_titles("Extensions", results.extensions.iter().map(|e| e.name.as_str()));
            print_titles("FAQs", results.faqs.iter().map(|f| f.question.as_str()));
            print_titles("Guides", results.guides.iter().map(|g| g.title.as_str()));
        })
    }

    pub fn stats(&self, stats: &IndexStats) -> Result<()> {
        self.emit(stats, || {
            println!("Apps:             {}", stats.apps);
            println!("Extensions:       {}", stats.extensions);
            println!("FAQs:             {}", stats.faqs);
            println!("Guide categories: {}", stats.guide_categories);
            println!("Guides:           {}", stats.guides);
        })
    }

    pub fn audit(&self, report: &AuditReport) -> Result<()> {
        self.emit(report, || {
            if report.is_clean() {
                println!("All cross references resolve and agree");
                return;
            }
            for stale in &report.stale_references {
                println!(
                    "stale      {} {} {} -> {}",
                    stale.collection, stale.source_id, stale.field, stale.missing_id
                );
            }
            for link in &report.asymmetric_links {
                println!(
                    "one-sided  app {} <-> extension {} (missing in {:?})",
                    link.app_id, link.extension_id, link.missing
                );
            }
        })
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_titles<'a>(heading: &str, titles: impl Iterator<Item = &'a str>) {
    let titles: Vec<_> = titles.collect();
    if titles.is_empty() {
        return;
    }
    println!("\n{}:", heading);
    for title in titles {
        println!("  - {}", title);
    }
}

fn print_preview<'a>(heading: &str, titles: impl Iterator<Item = &'a str>) {
    let titles: Vec<_> = titles.collect();
    if titles.is_empty() {
        return;
    }
    println!("\n{}:", heading);
    for title in titles.iter().take(PREVIEW_LIMIT) {
        println!("  - {}", title);
    }
    if titles.len() > PREVIEW_LIMIT {
        println!("  ... and {} more", titles.len() - PREVIEW_LIMIT);
    }
}
