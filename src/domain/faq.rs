//! Frequently asked questions.

use serde::{Deserialize, Serialize};

use super::tags::FaqCategory;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,

    #[serde(default)]
    pub keywords: Vec<String>,

    pub category: FaqCategory,

    #[serde(default)]
    pub related_app_ids: Vec<String>,
}

impl Faq {
    pub fn relates_to_app(&self, app_id: &str) -> bool {
        self.related_app_ids.iter().any(|id| id == app_id)
    }
}
