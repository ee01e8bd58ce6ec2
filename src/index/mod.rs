//! Read-only query layer over the directory's content.
//!
//! A `ContentIndex` is built once from the bundled JSON (or any data
//! directory) and handed to whatever needs it. It offers:
//! - lookup by id for every collection
//! - order-preserving filters
//! - relationship traversal between apps, extensions, FAQs and guides
//! - combined case-insensitive search
//! - a cross-reference audit
//!
//! # Data Layout
//!
//! ```text
//! data/
//! ├── apps.json          # App records
//! ├── extensions.json    # Extension records
//! ├── faqs.json          # FAQ records
//! └── guides.json        # Guide categories with nested guides
//! ```

pub mod audit;
pub mod content_index;
pub mod relations;
pub mod search;

pub use audit::{AsymmetricLink, AuditReport, MissingSide, StaleReference};
pub use content_index::{ContentIndex, IndexStats};
pub use relations::Relation;
pub use search::{SearchResults, Searchable};
