use std::fmt;

use crate::hex::{hex_decode, hex_to_string, write_hex};
use crate::{HashAlgorithm, HashError, MAX_DIGEST_LEN};

/// Digest bytes tagged with the algorithm that produced them.
///
/// The bytes live inline in a fixed buffer sized for the largest registered
/// algorithm; only the first `algorithm.digest_len()` bytes are meaningful,
/// the rest are always zero. Values are therefore `Copy` and can be shared
/// across threads without synchronization.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HashValue {
    algorithm: HashAlgorithm,
    bytes: [u8; MAX_DIGEST_LEN],
}

impl HashValue {
    /// Create a value from raw digest bytes.
    ///
    /// Fails unless `bytes` is exactly `algorithm.digest_len()` long.
    pub fn from_bytes(algorithm: HashAlgorithm, bytes: &[u8]) -> Result<Self, HashError> {
        let expected = algorithm.digest_len();
        if bytes.len() != expected {
            return Err(HashError::InvalidHashLength {
                expected,
                actual: bytes.len(),
            });
        }
        let mut buf = [0u8; MAX_DIGEST_LEN];
        buf[..expected].copy_from_slice(bytes);
        Ok(Self {
            algorithm,
            bytes: buf,
        })
    }

    /// Create a value from a hex string of exactly `algorithm.hex_len()` digits.
    pub fn from_hex(algorithm: HashAlgorithm, hex: &str) -> Result<Self, HashError> {
        let mut buf = [0u8; MAX_DIGEST_LEN];
        hex_decode(hex, &mut buf[..algorithm.digest_len()])?;
        Ok(Self {
            algorithm,
            bytes: buf,
        })
    }

    /// Wrap the output of `algorithm`'s own digester.
    ///
    /// The registry guarantees the output length, so no check is needed here.
    pub(crate) fn from_digest_output(algorithm: HashAlgorithm, out: &[u8]) -> Self {
        debug_assert_eq!(out.len(), algorithm.digest_len());
        let mut bytes = [0u8; MAX_DIGEST_LEN];
        bytes[..out.len()].copy_from_slice(out);
        Self { algorithm, bytes }
    }

    /// The algorithm that produced this digest.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// The digest bytes, exactly `algorithm().digest_len()` of them.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.algorithm.digest_len()]
    }

    /// Number of digest bytes.
    pub fn len(&self) -> usize {
        self.algorithm.digest_len()
    }

    /// Always false; every registered algorithm has a non-empty digest.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Lowercase hex of the digest bytes.
    pub fn to_hex(&self) -> String {
        hex_to_string(self.as_bytes())
    }
}

impl fmt::Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(self.as_bytes(), f)
    }
}

impl fmt::Debug for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashValue({}:", self.algorithm)?;
        write_hex(&self.as_bytes()[..4], f)?;
        f.write_str(")")
    }
}

impl AsRef<[u8]> for HashValue {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHA1_HEX: &str = "95d09f2b10159347eece71399a7e2e907ea3df4f";
    const SHA256_HEX: &str = "fee53a18d32820613c0527aa79be5cb30173c823a9b448fa4817767cc84c6f03";

    #[test]
    fn from_hex_sha1() {
        let value = HashValue::from_hex(HashAlgorithm::Sha1, SHA1_HEX).unwrap();
        assert_eq!(value.algorithm(), HashAlgorithm::Sha1);
        assert_eq!(value.as_bytes().len(), 20);
        assert_eq!(value.as_bytes()[0], 0x95);
        assert_eq!(value.to_hex(), SHA1_HEX);
    }

    #[test]
    fn from_hex_sha256() {
        let value = HashValue::from_hex(HashAlgorithm::Sha256, SHA256_HEX).unwrap();
        assert_eq!(value.len(), 32);
        assert_eq!(value.as_bytes()[0], 0xfe);
        assert_eq!(value.to_string(), SHA256_HEX);
    }

    #[test]
    fn from_hex_wrong_length_for_algorithm() {
        let err = HashValue::from_hex(HashAlgorithm::Sha256, SHA1_HEX).unwrap_err();
        assert_eq!(
            err,
            HashError::InvalidHexLength {
                expected: 64,
                actual: 40
            }
        );
    }

    #[test]
    fn from_bytes_wrong_length() {
        let err = HashValue::from_bytes(HashAlgorithm::Sha1, &[0; 10]).unwrap_err();
        assert!(matches!(
            err,
            HashError::InvalidHashLength {
                expected: 20,
                actual: 10
            }
        ));
    }

    #[test]
    fn from_bytes_matches_from_hex() {
        let a = HashValue::from_hex(HashAlgorithm::Sha1, SHA1_HEX).unwrap();
        let b = HashValue::from_bytes(HashAlgorithm::Sha1, a.as_bytes()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn same_bytes_different_algorithm_differ() {
        let zeros = [0u8; 20];
        let a = HashValue::from_bytes(HashAlgorithm::Sha1, &zeros).unwrap();
        let b = HashValue::from_bytes(HashAlgorithm::Sha256, &[0u8; 32]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn uppercase_hex_normalizes() {
        let upper = HashValue::from_hex(HashAlgorithm::Sha1, &SHA1_HEX.to_uppercase()).unwrap();
        assert_eq!(upper.to_hex(), SHA1_HEX);
    }

    #[test]
    fn debug_shows_algorithm_and_prefix() {
        let value = HashValue::from_hex(HashAlgorithm::Sha1, SHA1_HEX).unwrap();
        assert_eq!(format!("{value:?}"), "HashValue(sha1:95d09f2b)");
    }
}
