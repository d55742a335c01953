use std::fmt;
use std::str::FromStr;

use digest::DynDigest;

use crate::HashError;

/// Capacity of the inline digest buffer in [`HashValue`](crate::HashValue).
///
/// Must be at least the largest `digest_len` in the registry.
pub const MAX_DIGEST_LEN: usize = 32;

/// Hash algorithms a gitoid can be computed with.
///
/// Each variant is one registry entry: a canonical lowercase name, a fixed
/// digest length, and a digest constructor. Adding an algorithm means adding
/// a variant here, extending [`HashAlgorithm::ALL`], and filling in the three
/// matches below. Nothing outside this file branches on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HashAlgorithm {
    /// SHA-1 (20 bytes / 160 bits).
    Sha1,
    /// SHA-256 (32 bytes / 256 bits).
    Sha256,
}

const _: () = {
    let mut i = 0;
    while i < HashAlgorithm::ALL.len() {
        let len = HashAlgorithm::ALL[i].digest_len();
        assert!(len > 0 && len <= MAX_DIGEST_LEN);
        i += 1;
    }
};

impl HashAlgorithm {
    /// Every registered algorithm, in declaration order.
    pub const ALL: [HashAlgorithm; 2] = [Self::Sha1, Self::Sha256];

    /// Length of the digest in bytes.
    pub const fn digest_len(&self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
        }
    }

    /// Length of the hex representation.
    pub const fn hex_len(&self) -> usize {
        self.digest_len() * 2
    }

    /// The canonical lowercase name, as it appears in gitoid URLs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }

    /// Look up an algorithm by its canonical name.
    ///
    /// Matching is exact: `"SHA1"` and `"sha-1"` are not `sha1`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|algo| algo.name() == name)
    }

    /// A fresh digester for this algorithm.
    pub(crate) fn new_digester(&self) -> Box<dyn DynDigest> {
        use digest::Digest;
        match self {
            Self::Sha1 => Box::new(sha1::Sha1::new()),
            Self::Sha256 => Box::new(sha2::Sha256::new()),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| HashError::UnknownAlgorithm(s.to_owned()))
    }
}
