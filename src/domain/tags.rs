//! Enumerated tags attached to directory records.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Kind of content an app or extension serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    Manga,
    Anime,
    #[serde(rename = "Light Novel")]
    LightNovel,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [Self::Manga, Self::Anime, Self::LightNovel];
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Manga => write!(f, "Manga"),
            ContentType::Anime => write!(f, "Anime"),
            ContentType::LightNovel => write!(f, "Light Novel"),
        }
    }
}

impl FromStr for ContentType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "manga" => Ok(ContentType::Manga),
            "anime" => Ok(ContentType::Anime),
            "light novel" | "light-novel" | "lightnovel" | "ln" => Ok(ContentType::LightNovel),
            _ => anyhow::bail!("Unknown content type: {}", s),
        }
    }
}

/// Platform an app runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Android,
    #[serde(rename = "iOS")]
    Ios,
    Windows,
    Mac,
    Linux,
    Web,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
            Platform::Windows => "Windows",
            Platform::Mac => "Mac",
            Platform::Linux => "Linux",
            Platform::Web => "Web",
        };
        f.write_str(name)
    }
}

impl FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            "windows" | "win" => Ok(Platform::Windows),
            "mac" | "macos" => Ok(Platform::Mac),
            "linux" => Ok(Platform::Linux),
            "web" => Ok(Platform::Web),
            _ => anyhow::bail!("Unknown platform: {}", s),
        }
    }
}

/// Topic an FAQ entry is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaqCategory {
    Installation,
    Configuration,
    Extensions,
    Troubleshooting,
    General,
}

impl fmt::Display for FaqCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FaqCategory::Installation => "installation",
            FaqCategory::Configuration => "configuration",
            FaqCategory::Extensions => "extensions",
            FaqCategory::Troubleshooting => "troubleshooting",
            FaqCategory::General => "general",
        };
        f.write_str(name)
    }
}

impl FromStr for FaqCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "installation" => Ok(FaqCategory::Installation),
            "configuration" => Ok(FaqCategory::Configuration),
            "extensions" => Ok(FaqCategory::Extensions),
            "troubleshooting" => Ok(FaqCategory::Troubleshooting),
            "general" => Ok(FaqCategory::General),
            _ => anyhow::bail!("Unknown FAQ category: {}", s),
        }
    }
}

/// Icon shown next to a guide category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuideIcon {
    Download,
    Settings,
    Book,
    Help,
}

/// Medium of an app tutorial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TutorialKind {
    Video,
    Guide,
}
