//! Filename extraction from URL path.

/// Returns the final segment of the URL path for use as a filename hint.
///
/// Query and fragment are ignored. Returns `None` if the URL cannot be parsed,
/// the path ends in `/`, or the segment is `.` or `..`.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').next()?;
    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
