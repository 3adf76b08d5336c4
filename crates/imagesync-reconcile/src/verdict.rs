//! Final health verdict.

use imagesync_common::error::{ImageSyncError, Result};
use imagesync_common::types::Severity;
use serde::Serialize;

use crate::tally::Tally;

/// Outcome of a run, ready to be reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Reported severity.
    pub status: Severity,
    /// Human-readable summary.
    pub message: String,
    /// Images found in the registry.
    pub ok: usize,
    /// Images missing from the registry.
    pub missing: usize,
    /// Resolved check lists of the missing images.
    pub missing_filters: Vec<String>,
}

impl Verdict {
    /// Applies the verdict ladder to a completed tally.
    ///
    /// # Errors
    ///
    /// Returns `ImageSyncError::CatalogUnavailable` if no image was probed.
    pub fn from_tally(tally: &Tally, site: &str, catalog_url: &str) -> Result<Self> {
        if tally.total() == 0 {
            return Err(ImageSyncError::CatalogUnavailable {
                url: catalog_url.to_string(),
                message: "no image record found".into(),
            });
        }

        let (status, message) = if tally.ok() > 0 && tally.missing() == 0 {
            (
                Severity::Ok,
                format!("{} images correctly published on {site}", tally.ok()),
            )
        } else {
            (
                Severity::Critical,
                format!(
                    "{} images on {} are not correctly updated: {}",
                    tally.missing(),
                    tally.total(),
                    tally.missing_filters().join(",")
                ),
            )
        };

        Ok(Self {
            status,
            message,
            ok: tally.ok(),
            missing: tally.missing(),
            missing_filters: tally.missing_filters().to_vec(),
        })
    }

    /// Reports a run aborted by `error`.
    #[must_use]
    pub fn from_error(error: &ImageSyncError) -> Self {
        Self {
            status: error.severity(),
            message: error.to_string(),
            ok: 0,
            missing: 0,
            missing_filters: Vec::new(),
        }
    }
}
