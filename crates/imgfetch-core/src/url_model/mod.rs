//! URL modeling and filename derivation.
//!
//! Derives a local filename from the final URL path segment, sanitized for
//! the filesystem, falling back to a configured default, then bumps a numeric
//! suffix until the name does not collide with an existing file.

mod path;
mod sanitize;
mod unique;

pub use path::filename_from_url_path;
pub use sanitize::sanitize_filename;
pub use unique::unique_filename;

use std::path::Path;

/// Derives the preferred filename for `url`, before collision handling.
///
/// # Examples
///
/// - `candidate_filename("https://example.com/cat.png", "downloaded_image.jpg")` → `"cat.png"`
/// - `candidate_filename("https://example.com/", "downloaded_image.jpg")` → `"downloaded_image.jpg"`
pub fn candidate_filename(url: &str, default_name: &str) -> String {
    let sanitized = filename_from_url_path(url)
        .map(|raw| sanitize_filename(&raw))
        .filter(|s| !s.is_empty() && s != "." && s != "..");
    sanitized.unwrap_or_else(|| default_name.to_string())
}

/// Resolves the filename to save `url` under, given a predicate telling
/// whether a name is already taken.
pub fn resolve_filename<F>(url: &str, default_name: &str, exists: F) -> String
where
    F: FnMut(&str) -> bool,
{
    unique_filename(&candidate_filename(url, default_name), exists)
}

/// [`resolve_filename`] against the files currently in `dir`.
pub fn resolve_filename_in_dir(url: &str, default_name: &str, dir: &Path) -> String {
    resolve_filename(url, default_name, |name| dir.join(name).exists())
}

/// Splits `name` into stem and extension the way most tools do: the
/// extension starts at the last dot, and leading dots never start one.
pub(crate) fn split_ext(name: &str) -> (&str, &str) {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(i) => name.split_at(stem_start + i),
        None => (name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "downloaded_image.jpg";

    #[test]
    fn candidate_from_url_path() {
        assert_eq!(
            candidate_filename("https://example.com/img/cat.png", DEFAULT),
            "cat.png"
        );
        assert_eq!(candidate_filename("http://a/img.jpg", DEFAULT), "img.jpg");
    }

    #[test]
    fn candidate_empty_path_fallback() {
        assert_eq!(candidate_filename("https://example.com/", DEFAULT), DEFAULT);
        assert_eq!(candidate_filename("https://example.com", DEFAULT), DEFAULT);
        assert_eq!(candidate_filename("https://example.com/dir/", DEFAULT), DEFAULT);
    }

    #[test]
    fn resolve_with_existing_names() {
        let existing = ["img.jpg".to_string()];
        assert_eq!(
            resolve_filename("http://b/img.jpg", DEFAULT, |n| existing.iter().any(|e| e == n)),
            "img_1.jpg"
        );
        let existing = [DEFAULT.to_string()];
        assert_eq!(
            resolve_filename("http://b/", DEFAULT, |n| existing.iter().any(|e| e == n)),
            "downloaded_image_1.jpg"
        );
    }

    #[test]
    fn resolve_in_dir_sees_files_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("img.jpg"), b"old").unwrap();
        assert_eq!(
            resolve_filename_in_dir("http://a/img.jpg", DEFAULT, dir.path()),
            "img_1.jpg"
        );
        assert_eq!(
            resolve_filename_in_dir("http://a/new.jpg", DEFAULT, dir.path()),
            "new.jpg"
        );
    }

    #[test]
    fn split_ext_cases() {
        assert_eq!(split_ext("img.jpg"), ("img", ".jpg"));
        assert_eq!(split_ext("a.tar.gz"), ("a.tar", ".gz"));
        assert_eq!(split_ext("README"), ("README", ""));
        assert_eq!(split_ext(".hidden"), (".hidden", ""));
        assert_eq!(split_ext("..x.png"), ("..x", ".png"));
    }
}
