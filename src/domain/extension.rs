//! Content-source extension entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::tags::ContentType;

/// A content-source plugin compatible with one or more apps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    /// Unique extension identifier
    pub id: String,

    pub name: String,

    /// Short blurb shown on cards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(default)]
    pub types: Vec<ContentType>,

    /// Region code of the sources (e.g. "ALL", "EN", "JP")
    #[serde(default)]
    pub region: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,

    /// One-click install URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_url: Option<String>,

    /// Repository URL for manual installation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_url: Option<String>,

    /// App IDs able to load this extension
    #[serde(default)]
    pub supported_apps: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Extension {
    pub fn serves(&self, content_type: ContentType) -> bool {
        self.types.contains(&content_type)
    }

    /// Region comparison ignoring case and surrounding whitespace
    pub fn in_region(&self, region: &str) -> bool {
        self.region.trim().eq_ignore_ascii_case(region.trim())
    }

    /// "All" with no types, "Multi" with several, else the single type
    pub fn content_type_label(&self) -> String {
        match self.types.as_slice() {
            [] => "All".to_string(),
            [single] => single.to_string(),
            _ => "Multi".to_string(),
        }
    }

    pub fn last_updated(&self) -> Option<NaiveDate> {
        super::parse_date(self.last_updated.as_deref()?)
    }
}
