//! Disk I/O for saved images.
//!
//! Each image is written in one go to a uniquely named temp file in the
//! output directory, synced, then moved onto its final name without
//! replacing anything already there. The directory never holds a
//! half-written image under a real name, and no existing file is touched.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Temporary file suffix used before the final move.
pub const TEMP_SUFFIX: &str = ".part";

/// Create the output directory (and parents) if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create directory {}", dir.display()))
}

/// Write `bytes` to `final_path` via a fresh temp file + no-clobber move.
///
/// Fails if `final_path` already exists. The temp file is removed on any
/// failure.
pub fn save_bytes(final_path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match final_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".imgfetch-")
        .suffix(TEMP_SUFFIX)
        .tempfile_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    tmp.write_all(bytes)
        .with_context(|| format!("write {}", tmp.path().display()))?;
    tmp.as_file().sync_all().context("storage sync failed")?;

    tmp.persist_noclobber(final_path)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to move temp file to {}", final_path.display()))?;
    Ok(())
}
