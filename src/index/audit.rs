//! Cross-reference consistency checks.
//!
//! Relationship lists are edited independently on both sides, so they can
//! drift. The audit reports ids that don't resolve and app/extension links
//! that only one side records. It never rejects data.

use serde::Serialize;
use tracing::warn;

use super::ContentIndex;
use crate::domain::Collection;

/// An id in a relationship list with no matching record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaleReference {
    pub collection: Collection,
    pub source_id: String,
    pub field: &'static str,
    pub missing_id: String,
}

/// Which side of an app/extension link is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingSide {
    /// The app lists the extension, the extension doesn't list the app
    ExtensionSupportedApps,
    /// The extension lists the app, the app doesn't list the extension
    AppSupportedExtensions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AsymmetricLink {
    pub app_id: String,
    pub extension_id: String,
    pub missing: MissingSide,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub stale_references: Vec<StaleReference>,
    pub asymmetric_links: Vec<AsymmetricLink>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.stale_references.is_empty() && self.asymmetric_links.is_empty()
    }

    /// Emit one warning per finding
    pub fn log(&self) {
        for stale in &self.stale_references {
            warn!(
                collection = %stale.collection,
                source_id = %stale.source_id,
                field = stale.field,
                missing_id = %stale.missing_id,
                "Stale reference"
            );
        }
        for link in &self.asymmetric_links {
            warn!(
                app_id = %link.app_id,
                extension_id = %link.extension_id,
                missing = ?link.missing,
                "One-sided app/extension link"
            );
        }
    }
}

impl ContentIndex {
    pub fn audit(&self) -> AuditReport {
        let mut report = AuditReport::default();

        for app in self.apps() {
            for ext_id in &app.supported_extensions {
                match self.extension(ext_id) {
                    None => report.stale_references.push(StaleReference {
                        collection: Collection::Apps,
                        source_id: app.id.clone(),
                        field: "supportedExtensions",
                        missing_id: ext_id.clone(),
                    }),
                    Some(ext) if !ext.supported_apps.contains(&app.id) => {
                        report.asymmetric_links.push(AsymmetricLink {
                            app_id: app.id.clone(),
                            extension_id: ext.id.clone(),
                            missing: MissingSide::ExtensionSupportedApps,
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        for ext in self.extensions() {
            for app_id in &ext.supported_apps {
                match self.app(app_id) {
                    None => report.stale_references.push(StaleReference {
                        collection: Collection::Extensions,
                        source_id: ext.id.clone(),
                        field: "supportedApps",
                        missing_id: app_id.clone(),
                    }),
                    Some(app) if !app.supported_extensions.contains(&ext.id) => {
                        report.asymmetric_links.push(AsymmetricLink {
                            app_id: app.id.clone(),
                            extension_id: ext.id.clone(),
                            missing: MissingSide::AppSupportedExtensions,
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        for faq in self.faqs() {
            self.check_apps(&mut report, Collection::Faqs, &faq.id, &faq.related_app_ids);
        }

        for guide in self.guides() {
            self.check_apps(&mut report, Collection::Guides, &guide.id, &guide.related_app_ids);
            for ext_id in &guide.related_extension_ids {
                if self.extension(ext_id).is_none() {
                    report.stale_references.push(StaleReference {
                        collection: Collection::Guides,
                        source_id: guide.id.clone(),
                        field: "relatedExtensionIds",
                        missing_id: ext_id.clone(),
                    });
                }
            }
        }

        report
    }

    fn check_apps(
        &self,
        report: &mut AuditReport,
        collection: Collection,
        source_id: &str,
        app_ids: &[String],
    ) {
        for app_id in app_ids {
            if self.app(app_id).is_none() {
                report.stale_references.push(StaleReference {
                    collection,
                    source_id: source_id.to_string(),
                    field: "relatedAppIds",
                    missing_id: app_id.clone(),
                });
            }
        }
    }
}
