//! Per-URL outcome and run tally.

use crate::http::TransportError;
use crate::policy::Rejection;
use std::path::PathBuf;

/// Terminal state of one URL.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Image written to disk.
    Saved {
        filename: String,
        path: PathBuf,
        bytes: usize,
    },
    /// Response failed the safety policy; nothing written.
    Rejected(Rejection),
    /// Same content already saved earlier in this run.
    Duplicate { digest: String },
    /// GET failed (connection, timeout, non-2xx).
    TransportFailed(TransportError),
    /// Anything else, e.g. the file could not be written.
    Failed(anyhow::Error),
}

impl FetchOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, FetchOutcome::Saved { .. })
    }
}

/// Counts of each outcome over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub saved: usize,
    pub rejected: usize,
    pub duplicates: usize,
    pub transport_errors: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &FetchOutcome) {
        match outcome {
            FetchOutcome::Saved { .. } => self.saved += 1,
            FetchOutcome::Rejected(_) => self.rejected += 1,
            FetchOutcome::Duplicate { .. } => self.duplicates += 1,
            FetchOutcome::TransportFailed(_) => self.transport_errors += 1,
            FetchOutcome::Failed(_) => self.failed += 1,
        }
    }

    /// Number of URLs attempted.
    pub fn total(&self) -> usize {
        self.saved + self.rejected + self.duplicates + self.transport_errors + self.failed
    }
}
