use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Global configuration loaded from `~/.config/imgfetch/config.toml`.
///
/// Every field has a default, so a partial file (or an empty one) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImgfetchConfig {
    /// Directory images are saved into, relative to the working directory unless absolute.
    pub save_dir: PathBuf,
    /// Upper bound in seconds for a single GET, connect and body included.
    /// Values below 1 are treated as 1; libcurl reads 0 as "no timeout".
    pub timeout_secs: u64,
    /// Responses declaring a `Content-Length` above this many bytes are rejected.
    pub max_content_length: u64,
    /// Required prefix of the `Content-Type` header (compared ASCII case-insensitively).
    pub content_type_prefix: String,
    /// Name used when the URL path has no usable final segment.
    pub default_filename: String,
}

impl Default for ImgfetchConfig {
    fn default() -> Self {
        Self {
            save_dir: PathBuf::from("Fetched_Images"),
            timeout_secs: 10,
            max_content_length: 10_000_000,
            content_type_prefix: "image/".to_string(),
            default_filename: "downloaded_image.jpg".to_string(),
        }
    }
}

impl ImgfetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ImgfetchConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Like [`load_or_init`] but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<ImgfetchConfig> {
    if !path.exists() {
        let default_cfg = ImgfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ImgfetchConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
