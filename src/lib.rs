//! appdex - Content index for a manga/anime app directory
//!
//! A read-only query layer over the directory's static content: client
//! apps, the extensions they load, FAQs, and guides grouped by category.
//!
//! # Architecture
//!
//! The data is loaded once into a `ContentIndex` owned by the caller:
//! - Records are immutable after load
//! - Lookups return `None` for unknown ids
//! - Relationship lists are resolved on demand; stale ids are skipped
//! - Cross-reference drift is reported by an audit, never rejected
//!
//! # Modules
//!
//! - `domain`: Record types (App, Extension, Faq, Guide, GuideCategory)
//! - `index`: ContentIndex with lookup, filters, relations, search, audit
//! - `config`: Data directory resolution
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Search everything
//! appdex search discord
//!
//! # Show an app and its extensions
//! appdex app mihon
//!
//! # Look up any record by collection
//! appdex show ext keiyoushi
//!
//! # Use a different data directory
//! appdex --data ./content audit --strict
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod index;

// Re-export main types at crate root for convenience
pub use domain::{
    App, Collection, ContentType, Extension, Faq, FaqCategory, Guide, GuideCategory, Platform,
    Record,
};
pub use error::IndexError;
pub use index::{AuditReport, ContentIndex, IndexStats, Relation, SearchResults};
