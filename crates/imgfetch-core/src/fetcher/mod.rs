//! The fetch pipeline: request → validate → dedupe → name → persist.
//!
//! URLs are handled strictly one after another. Every URL ends in a
//! [`FetchOutcome`]; no single failure stops the run.

mod input;
mod outcome;

pub use input::parse_url_list;
pub use outcome::{FetchOutcome, RunSummary};

use crate::checksum::content_hash;
use crate::config::ImgfetchConfig;
use crate::dedup::DedupSet;
use crate::http::{CurlTransport, Transport};
use crate::policy::SafetyPolicy;
use crate::storage;
use crate::url_model;
use anyhow::Result;
use std::path::PathBuf;

/// Downloads images into one output directory using transport `T`.
#[derive(Debug, Clone)]
pub struct Fetcher<T> {
    transport: T,
    policy: SafetyPolicy,
    save_dir: PathBuf,
    default_filename: String,
}

impl Fetcher<CurlTransport> {
    /// Fetcher backed by libcurl, with timeout, policy and directory from `cfg`.
    pub fn from_config(cfg: &ImgfetchConfig) -> Self {
        Self::with_transport(cfg, CurlTransport::new(cfg.timeout()))
    }
}

impl<T: Transport> Fetcher<T> {
    pub fn with_transport(cfg: &ImgfetchConfig, transport: T) -> Self {
        Self {
            transport,
            policy: SafetyPolicy::from_config(cfg),
            save_dir: cfg.save_dir.clone(),
            default_filename: cfg.default_filename.clone(),
        }
    }

    /// Processes a single URL against the run's dedup set.
    ///
    /// The digest is recorded before the write, so content whose save failed
    /// is not retried later in the same run.
    pub fn fetch_one(&self, url: &str, dedup: &mut DedupSet) -> FetchOutcome {
        tracing::debug!(url, "fetching");
        let response = match self.transport.get(url) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(url, error = %e, "request failed");
                return FetchOutcome::TransportFailed(e);
            }
        };

        if let Err(rejection) = self.policy.check(&response.headers) {
            tracing::info!(url, reason = %rejection, "response rejected");
            return FetchOutcome::Rejected(rejection);
        }

        let digest = content_hash(&response.body);
        if dedup.contains(&digest) {
            tracing::info!(url, %digest, "duplicate content, skipping");
            return FetchOutcome::Duplicate { digest };
        }
        dedup.insert(digest.clone());

        match self.persist(url, &response.body) {
            Ok((filename, path)) => {
                tracing::info!(url, path = %path.display(), %digest, bytes = response.body.len(), "saved");
                FetchOutcome::Saved {
                    filename,
                    path,
                    bytes: response.body.len(),
                }
            }
            Err(e) => {
                tracing::warn!(url, error = %format!("{:#}", e), "save failed");
                FetchOutcome::Failed(e)
            }
        }
    }

    /// Processes `urls` in order with a fresh dedup set, calling `on_outcome`
    /// after each one.
    pub fn run<F>(&self, urls: &[String], mut on_outcome: F) -> RunSummary
    where
        F: FnMut(&str, &FetchOutcome),
    {
        let mut dedup = DedupSet::new();
        let mut summary = RunSummary::default();
        for url in urls {
            let outcome = self.fetch_one(url, &mut dedup);
            summary.record(&outcome);
            on_outcome(url, &outcome);
        }
        tracing::debug!(?summary, "run finished");
        summary
    }

    fn persist(&self, url: &str, body: &[u8]) -> Result<(String, PathBuf)> {
        let filename =
            url_model::resolve_filename_in_dir(url, &self.default_filename, &self.save_dir);
        let path = self.save_dir.join(&filename);
        storage::save_bytes(&path, body)?;
        Ok((filename, path))
    }
}
