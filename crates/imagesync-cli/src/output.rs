//! Verdict rendering for the monitoring host.

use imagesync_common::constants::STATUS_TAG;
use imagesync_reconcile::verdict::Verdict;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    verdict: &'a Verdict,
    exit_code: u8,
}

/// Formats the single status line, e.g. `IMAGE_SYNC OK - 3 images ...`.
#[must_use]
pub fn render_line(verdict: &Verdict) -> String {
    format!("{STATUS_TAG} {} - {}", verdict.status, verdict.message)
}

/// Formats the verdict as a one-line JSON object.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(verdict: &Verdict) -> serde_json::Result<String> {
    serde_json::to_string(&JsonReport {
        verdict,
        exit_code: verdict.status.exit_code(),
    })
}
