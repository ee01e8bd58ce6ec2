//! Command-line interface for appdex.
//!
//! Provides commands for looking up records, listing filtered collections,
//! following relationships, searching, and auditing the content data.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use crate::config::{self, DataSource};
use crate::domain::{Collection, ContentType, FaqCategory, Platform};
use crate::index::{ContentIndex, Relation};

pub mod render;

use render::Output;

/// appdex - Query the manga/anime app directory
#[derive(Parser, Debug)]
#[command(name = "appdex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing apps.json, extensions.json, faqs.json, guides.json
    #[arg(long, global = true, env = config::DATA_ENV)]
    pub data: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show an app with its extensions, FAQs and guides
    App {
        /// App ID
        id: String,
    },

    /// Show an extension with the apps that support it
    Extension {
        /// Extension ID
        id: String,
    },

    /// Show an FAQ entry
    Faq {
        /// FAQ ID
        id: String,
    },

    /// Show a guide
    Guide {
        /// Guide ID
        id: String,
    },

    /// Show any record by collection and ID (e.g. `show ext keiyoushi`)
    Show {
        /// Collection name (apps, extensions, faqs, guides, categories)
        collection: String,

        /// Record ID
        id: String,
    },

    /// List apps
    Apps {
        /// Only apps available on this platform
        #[arg(short, long, value_enum)]
        platform: Option<PlatformArg>,

        /// Only apps serving this content type
        #[arg(short, long, value_enum)]
        content_type: Option<ContentTypeArg>,
    },

    /// List extensions
    Extensions {
        /// Only extensions serving this content type
        #[arg(short, long, value_enum)]
        content_type: Option<ContentTypeArg>,

        /// Only extensions for this region code (e.g. EN, ALL)
        #[arg(short, long)]
        region: Option<String>,
    },

    /// List FAQs
    Faqs {
        /// Only FAQs in this category
        #[arg(short, long, value_enum)]
        category: Option<FaqCategoryArg>,
    },

    /// List guide categories and their guides
    Guides,

    /// Follow a relation from a record (e.g. app-extensions, extension-apps)
    Related {
        /// Relation name
        relation: String,

        /// Source record ID
        id: String,
    },

    /// Search apps, extensions, FAQs and guides
    Search {
        /// Search query
        query: String,
    },

    /// Show collection sizes
    Stats,

    /// Check cross references between collections
    Audit {
        /// Exit with an error if anything is inconsistent
        #[arg(long)]
        strict: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Platform for CLI (maps to Platform)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PlatformArg {
    Android,
    Ios,
    Windows,
    Mac,
    Linux,
    Web,
}

impl From<PlatformArg> for Platform {
    fn from(p: PlatformArg) -> Self {
        match p {
            PlatformArg::Android => Platform::Android,
            PlatformArg::Ios => Platform::Ios,
            PlatformArg::Windows => Platform::Windows,
            PlatformArg::Mac => Platform::Mac,
            PlatformArg::Linux => Platform::Linux,
            PlatformArg::Web => Platform::Web,
        }
    }
}

/// Content type for CLI (maps to ContentType)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ContentTypeArg {
    Manga,
    Anime,
    LightNovel,
}

impl From<ContentTypeArg> for ContentType {
    fn from(t: ContentTypeArg) -> Self {
        match t {
            ContentTypeArg::Manga => ContentType::Manga,
            ContentTypeArg::Anime => ContentType::Anime,
            ContentTypeArg::LightNovel => ContentType::LightNovel,
        }
    }
}

/// FAQ category for CLI (maps to FaqCategory)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FaqCategoryArg {
    Installation,
    Configuration,
    Extensions,
    Troubleshooting,
    General,
}

impl From<FaqCategoryArg> for FaqCategory {
    fn from(c: FaqCategoryArg) -> Self {
        match c {
            FaqCategoryArg::Installation => FaqCategory::Installation,
            FaqCategoryArg::Configuration => FaqCategory::Configuration,
            FaqCategoryArg::Extensions => FaqCategory::Extensions,
            FaqCategoryArg::Troubleshooting => FaqCategory::Troubleshooting,
            FaqCategoryArg::General => FaqCategory::General,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let source = match self.data {
            Some(dir) => DataSource::Directory(dir),
            None => config::load_config()?.data,
        };

        let index = match self.command {
            Commands::Config => return show_config(&source),
            _ => open_index(&source).await?,
        };
        let out = Output { json: self.json };

        match self.command {
            Commands::App { id } => {
                let app = index
                    .app(&id)
                    .with_context(|| format!("App not found: {}", id))?;
                out.app(&index, app)
            }
            Commands::Extension { id } => {
                let ext = index
                    .extension(&id)
                    .with_context(|| format!("Extension not found: {}", id))?;
                out.extension(&index, ext)
            }
            Commands::Faq { id } => {
                let faq = index
                    .faq(&id)
                    .with_context(|| format!("FAQ not found: {}", id))?;
                out.faq(&index, faq)
            }
            Commands::Guide { id } => {
                let (category, guide) = index
                    .guide_with_category(&id)
                    .with_context(|| format!("Guide not found: {}", id))?;
                out.guide(&index, category, guide)
            }
            Commands::Show { collection, id } => {
                let collection: Collection = collection
                    .parse()
                    .with_context(|| format!("Invalid collection: {}", collection))?;
                let record = index
                    .get(collection, &id)
                    .with_context(|| format!("No {} record with id {}", collection, id))?;
                out.records(&[record])
            }
            Commands::Apps {
                platform,
                content_type,
            } => {
                let platform = platform.map(Platform::from);
                let content_type = content_type.map(ContentType::from);
                let apps = index.apps_where(|app| {
                    platform.map_or(true, |p| app.supports_platform(p))
                        && content_type.map_or(true, |t| app.serves(t))
                });
                out.apps(&apps)
            }
            Commands::Extensions {
                content_type,
                region,
            } => {
                let content_type = content_type.map(ContentType::from);
                let extensions = index.extensions_where(|ext| {
                    content_type.map_or(true, |t| ext.serves(t))
                        && region.as_deref().map_or(true, |r| ext.in_region(r))
                });
                out.extensions(&extensions)
            }
            Commands::Faqs { category } => {
                let faqs = match category {
                    Some(category) => index.faqs_by_category(category.into()),
                    None => index.faqs().iter().collect(),
                };
                out.faqs(&faqs)
            }
            Commands::Guides => out.guide_categories(index.guide_categories()),
            Commands::Related { relation, id } => {
                let relation: Relation = relation
                    .parse()
                    .with_context(|| format!("Invalid relation: {}", relation))?;
                if index.get(relation.source(), &id).is_none() {
                    anyhow::bail!("No {} record with id {}", relation.source(), id);
                }
                out.records(&index.related(relation, &id))
            }
            Commands::Search { query } => out.search(&query, &index.search(&query)),
            Commands::Stats => out.stats(&index.stats()),
            Commands::Audit { strict } => {
                let report = index.audit();
                out.audit(&report)?;
                if strict && !report.is_clean() {
                    anyhow::bail!(
                        "{} stale reference(s), {} one-sided link(s)",
                        report.stale_references.len(),
                        report.asymmetric_links.len()
                    );
                }
                Ok(())
            }
            Commands::Config => show_config(&source),
        }
    }
}

/// Build the index from the configured source
async fn open_index(source: &DataSource) -> Result<ContentIndex> {
    debug!(%source, "Opening content index");
    let index = match source {
        DataSource::Bundled => ContentIndex::bundled(),
        DataSource::Directory(dir) => ContentIndex::load(dir).await,
    };
    index.with_context(|| format!("Failed to load content data from {}", source))
}

/// Show resolved configuration
fn show_config(source: &DataSource) -> Result<()> {
    let config = config::load_config()?;

    println!("appdex Configuration");
    println!("====================\n");

    println!("Config file:");
    match &config.config_file {
        Some(path) => println!("  {}", path.display()),
        None => println!("  (none found)"),
    }

    println!("\nData source:");
    println!("  {}", source);

    println!("\nEnvironment:");
    println!(
        "  {}: {}",
        config::DATA_ENV,
        std::env::var(config::DATA_ENV).unwrap_or_else(|_| "(not set)".to_string())
    );

    Ok(())
}
