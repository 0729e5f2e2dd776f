//! User-facing status lines.

use imgfetch_core::fetcher::{FetchOutcome, RunSummary};
use imgfetch_core::policy::Rejection;

/// One or more lines describing what happened to `url`.
pub fn describe(url: &str, outcome: &FetchOutcome) -> String {
    match outcome {
        FetchOutcome::Saved { filename, path, .. } => format!(
            "✓ Successfully fetched: {}\n✓ Image saved to {}",
            filename,
            path.display()
        ),
        FetchOutcome::Rejected(Rejection::NotAnImage { .. }) => {
            "✗ Not an image, skipping download.".to_string()
        }
        FetchOutcome::Rejected(Rejection::TooLarge { .. }) => {
            "✗ File too large, skipping download.".to_string()
        }
        FetchOutcome::Rejected(r @ Rejection::MalformedLength { .. }) => {
            format!("✗ Unusable response ({}), skipping download.", r)
        }
        FetchOutcome::Duplicate { .. } => format!("⚠️ Duplicate detected, skipping: {}", url),
        FetchOutcome::TransportFailed(e) => format!("✗ Connection error for {}: {}", url, e),
        FetchOutcome::Failed(e) => format!("✗ An unexpected error occurred: {:#}", e),
    }
}

pub fn summary_line(summary: &RunSummary) -> String {
    format!(
        "Saved {} of {} URL(s): {} skipped, {} duplicate(s), {} failed.",
        summary.saved,
        summary.total(),
        summary.rejected,
        summary.duplicates,
        summary.transport_errors + summary.failed
    )
}
