//! Safe-response policy: only images, only up to a declared size.

use crate::config::ImgfetchConfig;
use crate::http::ResponseHeaders;
use std::fmt;

/// Why a response was refused before anything touched the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// `Content-Type` missing or not an image type.
    NotAnImage { content_type: Option<String> },
    /// Declared `Content-Length` is above the configured limit.
    TooLarge { length: u64, limit: u64 },
    /// `Content-Length` is present but not a non-negative integer.
    MalformedLength { raw: String },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NotAnImage { content_type: None } => write!(f, "no Content-Type"),
            Rejection::NotAnImage {
                content_type: Some(ct),
            } => write!(f, "Content-Type {} is not an image", ct),
            Rejection::TooLarge { length, limit } => {
                write!(f, "Content-Length {} exceeds limit of {} bytes", length, limit)
            }
            Rejection::MalformedLength { raw } => write!(f, "malformed Content-Length {:?}", raw),
        }
    }
}

/// Thresholds a response must satisfy to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyPolicy {
    pub content_type_prefix: String,
    pub max_content_length: u64,
}

impl Default for SafetyPolicy {
    fn default() -> Self {
        Self::from_config(&ImgfetchConfig::default())
    }
}

impl SafetyPolicy {
    pub fn from_config(cfg: &ImgfetchConfig) -> Self {
        Self {
            content_type_prefix: cfg.content_type_prefix.clone(),
            max_content_length: cfg.max_content_length,
        }
    }

    /// Checks the content type first, then the declared length.
    /// A missing `Content-Length` passes.
    pub fn check(&self, headers: &ResponseHeaders) -> Result<(), Rejection> {
        let is_image = headers
            .content_type
            .as_deref()
            .map(|ct| starts_with_ignore_ascii_case(ct.trim_start(), &self.content_type_prefix))
            .unwrap_or(false);
        if !is_image {
            return Err(Rejection::NotAnImage {
                content_type: headers.content_type.clone(),
            });
        }

        if let Some(raw) = headers.content_length.as_deref() {
            let length = headers
                .content_length_bytes()
                .ok_or_else(|| Rejection::MalformedLength {
                    raw: raw.to_string(),
                })?;
            if length > self.max_content_length {
                return Err(Rejection::TooLarge {
                    length,
                    limit: self.max_content_length,
                });
            }
        }

        Ok(())
    }

    /// True when the response may be saved.
    pub fn validate(&self, headers: &ResponseHeaders) -> bool {
        self.check(headers).is_ok()
    }
}

fn starts_with_ignore_ascii_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(ct: Option<&str>, len: Option<&str>) -> ResponseHeaders {
        ResponseHeaders {
            content_type: ct.map(str::to_string),
            content_length: len.map(str::to_string),
        }
    }

    #[test]
    fn accepts_image_without_length() {
        let p = SafetyPolicy::default();
        assert!(p.validate(&headers(Some("image/jpeg"), None)));
        assert!(p.validate(&headers(Some("image/png; charset=binary"), Some("3"))));
    }

    #[test]
    fn rejects_missing_or_non_image_type() {
        let p = SafetyPolicy::default();
        assert_eq!(
            p.check(&headers(None, Some("3"))),
            Err(Rejection::NotAnImage { content_type: None })
        );
        for ct in ["text/html", "application/octet-stream", "imagex/png", "video/image"] {
            assert!(!p.validate(&headers(Some(ct), None)), "{ct} should be rejected");
        }
    }

    #[test]
    fn type_prefix_is_case_insensitive() {
        let p = SafetyPolicy::default();
        assert!(p.validate(&headers(Some("IMAGE/PNG"), None)));
    }

    #[test]
    fn length_boundary() {
        let p = SafetyPolicy::default();
        assert!(p.validate(&headers(Some("image/gif"), Some("10000000"))));
        assert_eq!(
            p.check(&headers(Some("image/gif"), Some("10000001"))),
            Err(Rejection::TooLarge {
                length: 10_000_001,
                limit: 10_000_000
            })
        );
    }

    #[test]
    fn too_large_rejected_regardless_of_type() {
        let p = SafetyPolicy::default();
        assert!(!p.validate(&headers(Some("image/png"), Some("20000000"))));
        assert!(!p.validate(&headers(Some("text/plain"), Some("20000000"))));
    }

    #[test]
    fn malformed_length_rejected() {
        let p = SafetyPolicy::default();
        assert_eq!(
            p.check(&headers(Some("image/png"), Some("big"))),
            Err(Rejection::MalformedLength {
                raw: "big".to_string()
            })
        );
    }

    #[test]
    fn negative_length_is_malformed() {
        let p = SafetyPolicy::default();
        assert_eq!(
            p.check(&headers(Some("image/png"), Some("-5"))),
            Err(Rejection::MalformedLength {
                raw: "-5".to_string()
            })
        );
    }

    #[test]
    fn custom_limit_from_config() {
        let cfg = ImgfetchConfig {
            max_content_length: 2,
            ..ImgfetchConfig::default()
        };
        let p = SafetyPolicy::from_config(&cfg);
        assert!(p.validate(&headers(Some("image/png"), Some("2"))));
        assert!(!p.validate(&headers(Some("image/png"), Some("3"))));
    }
}
