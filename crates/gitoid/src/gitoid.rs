use std::fmt;
use std::str::FromStr;

use gitoid_hash::{digest_object, HashAlgorithm, HashValue};

use crate::header::write_header;
use crate::{url, GitOidError, ObjectType};

/// A content-addressable identifier for a piece of content.
///
/// Built only through the constructors below, so the digest length always
/// matches the algorithm. Immutable and `Copy`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GitOid {
    object_type: ObjectType,
    hash: HashValue,
}

impl GitOid {
    /// Identify the UTF-8 bytes of `s`, without any normalization.
    pub fn new_from_str(hash_algorithm: HashAlgorithm, object_type: ObjectType, s: &str) -> Self {
        Self::new_from_bytes(hash_algorithm, object_type, s.as_bytes())
    }

    /// Identify `content`.
    ///
    /// The header length is taken from the slice itself, so it always agrees
    /// with the bytes hashed.
    pub fn new_from_bytes(
        hash_algorithm: HashAlgorithm,
        object_type: ObjectType,
        content: &[u8],
    ) -> Self {
        let header = write_header(object_type, content.len());
        Self {
            object_type,
            hash: digest_object(hash_algorithm, &header, content),
        }
    }

    /// Identify `content` after checking it is exactly `declared_len` bytes.
    ///
    /// For callers that carry a separate length alongside their buffer.
    pub fn new_from_bytes_with_len(
        hash_algorithm: HashAlgorithm,
        object_type: ObjectType,
        content: &[u8],
        declared_len: usize,
    ) -> Result<Self, GitOidError> {
        if declared_len != content.len() {
            return Err(GitOidError::LengthMismatch {
                declared: declared_len,
                actual: content.len(),
            });
        }
        Ok(Self::new_from_bytes(hash_algorithm, object_type, content))
    }

    /// Parse a `gitoid:` URL. No hashing happens; the digest is taken from the URL.
    pub fn from_url(s: &str) -> Result<Self, GitOidError> {
        url::parse_url(s)
    }

    pub(crate) fn from_parts(object_type: ObjectType, hash: HashValue) -> Self {
        Self { object_type, hash }
    }

    /// The canonical `gitoid:` URL for this identifier.
    pub fn url(&self) -> String {
        url::format_url(self)
    }

    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash.algorithm()
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.hash.algorithm().name()
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn object_type_name(&self) -> &'static str {
        self.object_type.name()
    }

    /// The digest with its algorithm tag.
    pub fn hash(&self) -> HashValue {
        self.hash
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.hash.as_bytes()
    }

    /// Length of the digest in bytes; always `hash_algorithm().digest_len()`.
    pub fn hash_len(&self) -> usize {
        self.hash.len()
    }

    /// Lowercase hex of the digest.
    pub fn to_hex(&self) -> String {
        self.hash.to_hex()
    }
}

impl fmt::Display for GitOid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        url::write_url(self, f)
    }
}

impl fmt::Debug for GitOid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GitOid({self})")
    }
}

impl FromStr for GitOid {
    type Err = GitOidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        url::parse_url(s)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::GitOid;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for GitOid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for GitOid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(de::Error::custom)
        }
    }
}

#[cfg(feature = "url")]
mod url_impls {
    use super::GitOid;
    use crate::GitOidError;
    use ::url::Url;

    impl TryFrom<Url> for GitOid {
        type Error = GitOidError;

        /// `Url` has already lowercased the scheme; every other field is
        /// checked exactly as in [`GitOid::from_url`].
        fn try_from(url: Url) -> Result<Self, Self::Error> {
            crate::url::parse_url(url.as_str())
        }
    }

    impl From<GitOid> for Url {
        fn from(gitoid: GitOid) -> Url {
            let s = gitoid.url();
            match Url::parse(&s) {
                Ok(url) => url,
                // An ASCII scheme followed by an opaque path of names, hex and ':' always parses.
                Err(e) => unreachable!("canonical gitoid URL '{s}' rejected: {e}"),
            }
        }
    }
}
