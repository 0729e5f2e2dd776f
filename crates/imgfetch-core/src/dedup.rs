//! Run-scoped set of content fingerprints already saved.

use std::collections::HashSet;

/// Digests of every image accepted for saving during the current run.
/// Lives as long as the run; nothing is persisted.
#[derive(Debug, Default, Clone)]
pub struct DedupSet {
    seen: HashSet<String>,
}

impl DedupSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, digest: &str) -> bool {
        self.seen.contains(digest)
    }

    /// Records `digest`. Returns true if it was not already present.
    pub fn insert(&mut self, digest: impl Into<String>) -> bool {
        self.seen.insert(digest.into())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
