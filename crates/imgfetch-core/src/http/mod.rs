//! Blocking HTTP GET for whole-body image downloads.
//!
//! Uses the curl crate (libcurl) easy interface: one GET per URL, redirects
//! followed, a hard timeout, and the body buffered in memory. The
//! [`Transport`] trait is the seam the fetcher depends on, so the pipeline can
//! run against canned responses.

mod error;
mod headers;

pub use error::TransportError;
pub use headers::ResponseHeaders;

use std::str;
use std::time::Duration;

/// Redirect hops followed before giving up.
const MAX_REDIRECTS: u32 = 30;

/// A completed 2xx response: final status, parsed headers, and the full body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub headers: ResponseHeaders,
    pub body: Vec<u8>,
}

/// Something that can GET a URL and hand back the whole response.
pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// libcurl-backed transport. A fresh easy handle is used per request.
#[derive(Debug, Clone, Copy)]
pub struct CurlTransport {
    timeout: Duration,
}

impl CurlTransport {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Transport for CurlTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(MAX_REDIRECTS)?;
        easy.connect_timeout(self.timeout)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    header_lines.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(TransportError::Http {
                code,
                url: url.to_string(),
            });
        }

        let headers = headers::parse_headers(&header_lines);
        tracing::debug!(
            url,
            status = code,
            content_type = ?headers.content_type,
            content_length = ?headers.content_length,
            bytes = body.len(),
            "GET complete"
        );

        Ok(HttpResponse {
            status: code,
            headers,
            body,
        })
    }
}
