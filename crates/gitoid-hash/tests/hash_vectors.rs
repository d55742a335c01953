use gitoid_hash::{digest_bytes, digest_object, HashAlgorithm};

// ── Raw digest vectors ──────────────────────────────────────────────

#[test]
fn sha1_empty_string() {
    assert_eq!(
        digest_bytes(HashAlgorithm::Sha1, b"").to_hex(),
        "da39a3ee5e6b4b0d3255bfef95601890afd80709"
    );
}

#[test]
fn sha256_hello_world() {
    assert_eq!(
        digest_bytes(HashAlgorithm::Sha256, b"hello world").to_hex(),
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
    );
}

// ── Header + content vectors ────────────────────────────────────────
// These match `git hash-object --stdin` for SHA-1.

#[test]
fn blob_empty_sha1() {
    let value = digest_object(HashAlgorithm::Sha1, b"blob 0\0", b"");
    assert_eq!(value.to_hex(), "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391");
}

#[test]
fn blob_hello_world_sha1() {
    let value = digest_object(HashAlgorithm::Sha1, b"blob 11\0", b"hello world");
    assert_eq!(value.to_hex(), "95d09f2b10159347eece71399a7e2e907ea3df4f");
}

#[test]
fn blob_hello_world_sha256() {
    let value = digest_object(HashAlgorithm::Sha256, b"blob 11\0", b"hello world");
    assert_eq!(
        value.to_hex(),
        "fee53a18d32820613c0527aa79be5cb30173c823a9b448fa4817767cc84c6f03"
    );
}

#[test]
fn header_is_part_of_the_digest() {
    let with = digest_object(HashAlgorithm::Sha1, b"blob 11\0", b"hello world");
    let without = digest_bytes(HashAlgorithm::Sha1, b"hello world");
    assert_ne!(with, without);
}

#[test]
fn algorithms_differ_on_same_input() {
    let sha1 = digest_bytes(HashAlgorithm::Sha1, b"same input");
    let sha256 = digest_bytes(HashAlgorithm::Sha256, b"same input");
    assert_eq!(sha1.algorithm(), HashAlgorithm::Sha1);
    assert_eq!(sha256.algorithm(), HashAlgorithm::Sha256);
    assert_ne!(sha1.len(), sha256.len());
}
