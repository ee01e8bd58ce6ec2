//! Guides and the categories that group them.

use serde::{Deserialize, Serialize};

use super::tags::GuideIcon;

/// A single documentation topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    pub id: String,
    pub title: String,

    /// URL path segment for the guide page
    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub related_app_ids: Vec<String>,

    #[serde(default)]
    pub related_extension_ids: Vec<String>,
}

impl Guide {
    pub fn relates_to_app(&self, app_id: &str) -> bool {
        self.related_app_ids.iter().any(|id| id == app_id)
    }

    pub fn relates_to_extension(&self, extension_id: &str) -> bool {
        self.related_extension_ids.iter().any(|id| id == extension_id)
    }
}

/// Named group of guides, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideCategory {
    pub id: String,
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    pub icon: GuideIcon,

    #[serde(default)]
    pub guides: Vec<Guide>,
}
