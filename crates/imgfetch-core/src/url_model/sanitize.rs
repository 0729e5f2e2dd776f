//! Filesystem-safe filename sanitization.

/// Linux NAME_MAX.
const NAME_MAX: usize = 255;

/// Makes a URL-derived name safe to join onto the output directory.
///
/// - Replaces NUL, `/`, `\`, and control characters with `_`
/// - Keeps leading dots, so `.hidden` stays a dotfile
/// - Limits length to 255 bytes, cutting the stem and keeping the extension
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    if cleaned.len() <= NAME_MAX {
        return cleaned;
    }

    let (stem, ext) = super::split_ext(&cleaned);
    if ext.len() >= NAME_MAX {
        return truncate_at_char_boundary(&cleaned, NAME_MAX).to_string();
    }
    let stem = truncate_at_char_boundary(stem, NAME_MAX - ext.len());
    format!("{}{}", stem, ext)
}

fn truncate_at_char_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut take = max;
    while take > 0 && !s.is_char_boundary(take) {
        take -= 1;
    }
    &s[..take]
}
