use std::borrow::Cow;

use gitoid_hash::{HashAlgorithm, HashError};

/// Fixed message recorded for any gitoid URL that fails to parse.
pub const INVALID_URL_MESSAGE: &str = "string is not a valid GitOID URL";

/// Errors produced while constructing or parsing a [`GitOid`](crate::GitOid).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GitOidError {
    /// Wrong scheme or wrong number of `:`-separated fields.
    #[error("malformed gitoid URL '{url}': {reason}")]
    MalformedUrl { url: String, reason: &'static str },

    #[error("unknown object type '{0}'")]
    UnknownObjectType(String),

    #[error("unknown hash algorithm '{0}'")]
    UnknownAlgorithm(String),

    /// The hex digest did not decode to exactly `algorithm.digest_len()` bytes.
    #[error("malformed {algorithm} digest")]
    MalformedDigest {
        algorithm: HashAlgorithm,
        #[source]
        source: HashError,
    },

    #[error("declared content length {declared} does not match actual length {actual}")]
    LengthMismatch { declared: usize, actual: usize },
}

impl GitOidError {
    /// Whether this error came out of URL parsing.
    pub fn is_url_error(&self) -> bool {
        !matches!(self, Self::LengthMismatch { .. })
    }

    /// The message stored in the last-error slot for this failure.
    ///
    /// Every URL failure reports the same fixed string; the structured
    /// variant is still available to Rust callers through the `Err` value.
    pub fn report_message(&self) -> Cow<'static, str> {
        if self.is_url_error() {
            Cow::Borrowed(INVALID_URL_MESSAGE)
        } else {
            Cow::Owned(self.to_string())
        }
    }
}
