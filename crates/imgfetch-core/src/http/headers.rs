//! Parse HTTP response header lines into ResponseHeaders.

/// The response headers the safety policy looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHeaders {
    /// `Content-Type` value if present.
    pub content_type: Option<String>,
    /// Raw `Content-Length` value if present. Kept unparsed so the policy can
    /// tell a missing header from a malformed one.
    pub content_length: Option<String>,
}

impl ResponseHeaders {
    /// `Content-Length` as a number, if present and numeric.
    pub fn content_length_bytes(&self) -> Option<u64> {
        self.content_length.as_deref()?.trim().parse().ok()
    }
}

/// Parse collected header lines into ResponseHeaders.
///
/// When redirects were followed, libcurl hands over the header block of every
/// response in the chain. Each status line starts a new block, so only the
/// last response's headers survive.
pub(crate) fn parse_headers(lines: &[String]) -> ResponseHeaders {
    let mut headers = ResponseHeaders::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            headers = ResponseHeaders::default();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-type") {
                headers.content_type = Some(value.to_string());
            }
            if name.eq_ignore_ascii_case("content-length") {
                headers.content_length = Some(value.to_string());
            }
        }
    }

    headers
}
