use digest::DynDigest;

use crate::{HashAlgorithm, HashValue};

/// Streaming digest over the selected algorithm.
///
/// Kept private: callers get one-shot functions only. Feeding the header and
/// content as separate updates is bit-identical to hashing their
/// concatenation in one pass.
struct Hasher {
    algorithm: HashAlgorithm,
    inner: Box<dyn DynDigest>,
}

impl Hasher {
    fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            inner: algorithm.new_digester(),
        }
    }

    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn finalize(self) -> HashValue {
        let out = self.inner.finalize();
        HashValue::from_digest_output(self.algorithm, &out)
    }
}

/// Hash `data` with `algorithm`, no header.
pub fn digest_bytes(algorithm: HashAlgorithm, data: &[u8]) -> HashValue {
    digest_object(algorithm, &[], data)
}

/// Hash `header || content` with `algorithm`.
pub fn digest_object(algorithm: HashAlgorithm, header: &[u8], content: &[u8]) -> HashValue {
    let mut h = Hasher::new(algorithm);
    h.update(header);
    h.update(content);
    h.finalize()
}
