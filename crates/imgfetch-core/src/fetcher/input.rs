//! Parsing the user's URL list.

/// Splits comma-separated input into URLs, trimming whitespace and dropping
/// empty entries. Order is preserved.
pub fn parse_url_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
