//! The canonical `gitoid:<object-type>:<hash-algorithm>:<hex-digest>` form.

use std::fmt;

use gitoid_hash::hex::write_hex;
use gitoid_hash::{HashAlgorithm, HashValue};

use crate::{GitOid, GitOidError, ObjectType};

/// Scheme of every gitoid URL.
pub const GITOID_URL_SCHEME: &str = "gitoid";

/// Format `gitoid` as its canonical URL.
pub fn format_url(gitoid: &GitOid) -> String {
    let mut s = String::with_capacity(
        GITOID_URL_SCHEME.len()
            + gitoid.object_type_name().len()
            + gitoid.algorithm_name().len()
            + gitoid.hash_len() * 2
            + 3,
    );
    // Writing into a String cannot fail.
    let _ = write_url(gitoid, &mut s);
    s
}

pub(crate) fn write_url<W: fmt::Write>(gitoid: &GitOid, out: &mut W) -> fmt::Result {
    write!(
        out,
        "{}:{}:{}:",
        GITOID_URL_SCHEME,
        gitoid.object_type_name(),
        gitoid.algorithm_name()
    )?;
    write_hex(gitoid.as_bytes(), out)
}

/// Parse a canonical gitoid URL.
///
/// Checks run in a fixed order and the first failure wins: field count and
/// scheme, then object type, then hash algorithm, then the digest.
pub fn parse_url(url: &str) -> Result<GitOid, GitOidError> {
    let result = UrlParser::new(url).and_then(|parser| parser.parse());
    if let Err(e) = &result {
        tracing::trace!(url, error = %e, "rejected gitoid URL");
    }
    result
}

/// A URL split into its four `:`-separated fields.
struct UrlParser<'u> {
    url: &'u str,
    scheme: &'u str,
    object_type: &'u str,
    hash_algorithm: &'u str,
    hex: &'u str,
}

impl<'u> UrlParser<'u> {
    fn new(url: &'u str) -> Result<Self, GitOidError> {
        let mut fields = url.split(':');
        let mut next = || {
            fields.next().ok_or_else(|| GitOidError::MalformedUrl {
                url: url.to_owned(),
                reason: "expected four ':'-separated fields",
            })
        };
        let parser = Self {
            url,
            scheme: next()?,
            object_type: next()?,
            hash_algorithm: next()?,
            hex: next()?,
        };
        if fields.next().is_some() {
            return Err(GitOidError::MalformedUrl {
                url: url.to_owned(),
                reason: "too many ':'-separated fields",
            });
        }
        Ok(parser)
    }

    fn parse(&self) -> Result<GitOid, GitOidError> {
        self.validate_scheme()?;
        let object_type = self.parse_object_type()?;
        let hash_algorithm = self.parse_hash_algorithm()?;
        let hash = self.parse_hash(hash_algorithm)?;
        Ok(GitOid::from_parts(object_type, hash))
    }

    fn validate_scheme(&self) -> Result<(), GitOidError> {
        if self.scheme != GITOID_URL_SCHEME {
            return Err(GitOidError::MalformedUrl {
                url: self.url.to_owned(),
                reason: "scheme is not 'gitoid'",
            });
        }
        Ok(())
    }

    fn parse_object_type(&self) -> Result<ObjectType, GitOidError> {
        self.object_type.parse()
    }

    fn parse_hash_algorithm(&self) -> Result<HashAlgorithm, GitOidError> {
        HashAlgorithm::from_name(self.hash_algorithm)
            .ok_or_else(|| GitOidError::UnknownAlgorithm(self.hash_algorithm.to_owned()))
    }

    fn parse_hash(&self, algorithm: HashAlgorithm) -> Result<HashValue, GitOidError> {
        HashValue::from_hex(algorithm, self.hex)
            .map_err(|source| GitOidError::MalformedDigest { algorithm, source })
    }
}
