//! Client application entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::tags::{ContentType, Platform, TutorialKind};

/// Labels for statuses that don't title-case cleanly
const STATUS_LABELS: &[(&str, &str)] = &[
    ("active", "Active"),
    ("discontinued", "Discontinued"),
    ("abandoned", "Abandoned"),
    ("suspended", "Suspended"),
    ("dmca", "DMCA"),
    ("dead", "Dead"),
];

/// A client application listed in the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    /// Unique app identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Development status (e.g. "active", "discontinued")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    pub description: String,

    #[serde(default)]
    pub content_types: Vec<ContentType>,

    #[serde(default)]
    pub platforms: Vec<Platform>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default)]
    pub keywords: Vec<String>,

    /// Extension IDs this app can load
    #[serde(default)]
    pub supported_extensions: Vec<String>,

    /// ISO date of the last release
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    /// GitHub repository, either `owner/repo` or a full URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_site: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord_url: Option<String>,

    #[serde(default)]
    pub tutorials: Vec<AppTutorial>,
}

/// Video or written walkthrough for an app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppTutorial {
    pub title: String,

    #[serde(rename = "type")]
    pub kind: TutorialKind,

    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Who to credit for an app, and where to link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorInfo {
    pub name: String,
    pub url: Option<String>,
}

impl App {
    pub fn supports_platform(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }

    pub fn serves(&self, content_type: ContentType) -> bool {
        self.content_types.contains(&content_type)
    }

    /// Owner segment of the GitHub repository, if any
    pub fn github_owner(&self) -> Option<&str> {
        github_segments(self.github_url.as_deref()?).next()
    }

    /// `(owner, repo)` pair of the GitHub repository, if both are present
    pub fn github_repo(&self) -> Option<(&str, &str)> {
        let mut segments = github_segments(self.github_url.as_deref()?);
        let owner = segments.next()?;
        let repo = segments.next()?;
        let repo = repo.strip_suffix(".git").unwrap_or(repo);
        Some((owner, repo))
    }

    /// Credit line for the app.
    ///
    /// An explicit author links to the GitHub owner's profile when one is
    /// known, otherwise to the official site. Without an author the GitHub
    /// owner is credited instead.
    pub fn author_info(&self) -> Option<AuthorInfo> {
        let owner = self.github_owner();
        let owner_url = owner.map(|o| format!("https://github.com/{}", o));

        if let Some(author) = self.author.as_deref().filter(|a| !a.trim().is_empty()) {
            return Some(AuthorInfo {
                name: author.to_string(),
                url: owner_url.or_else(|| self.official_site.clone()),
            });
        }

        owner.map(|o| AuthorInfo {
            name: o.to_string(),
            url: owner_url,
        })
    }

    /// Human-readable status badge text
    pub fn status_label(&self) -> Option<String> {
        let status = self.status.as_deref()?.trim();
        if status.is_empty() {
            return None;
        }
        Some(status_label(status))
    }

    pub fn last_updated(&self) -> Option<NaiveDate> {
        super::parse_date(self.last_updated.as_deref()?)
    }
}

/// Path segments of a GitHub reference, accepting `owner/repo` or a URL
fn github_segments(github_url: &str) -> impl Iterator<Item = &str> {
    let trimmed = github_url.trim();
    let path = if trimmed.starts_with("http") {
        match trimmed.split_once("://") {
            // Drop the host, keep everything after it
            Some((_, rest)) => rest.split_once('/').map(|(_, p)| p).unwrap_or(""),
            None => "",
        }
    } else {
        trimmed
    };

    path.split(['?', '#'])
        .next()
        .unwrap_or("")
        .split('/')
        .filter(|s| !s.is_empty())
}

fn status_label(status: &str) -> String {
    let normalized = status.to_lowercase();
    if let Some((_, label)) = STATUS_LABELS.iter().find(|(key, _)| *key == normalized) {
        return label.to_string();
    }

    let spaced = status.replace(['_', '-'], " ");
    let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut label = String::with_capacity(collapsed.len());
    let mut at_word_start = true;
    for c in collapsed.chars() {
        if at_word_start {
            label.extend(c.to_uppercase());
        } else {
            label.push(c);
        }
        at_word_start = !c.is_alphanumeric();
    }
    label
}
