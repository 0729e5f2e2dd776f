//! Transport error type for a single GET.

use thiserror::Error;

/// Why a GET produced no usable response: curl failed, or the final status
/// was not 2xx.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Curl reported an error (timeout, connection refused, DNS, TLS...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {code} for url ({url})")]
    Http { code: u32, url: String },
}

impl TransportError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Curl(e) if e.is_operation_timedout())
    }

    pub fn is_connect(&self) -> bool {
        matches!(
            self,
            TransportError::Curl(e) if e.is_couldnt_connect() || e.is_couldnt_resolve_host()
        )
    }

    /// Status code, when the server answered with a non-2xx status.
    pub fn status(&self) -> Option<u32> {
        match self {
            TransportError::Http { code, .. } => Some(*code),
            TransportError::Curl(_) => None,
        }
    }
}
