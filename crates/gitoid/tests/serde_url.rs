#![cfg(feature = "serde")]

use gitoid::{GitOid, HashAlgorithm, ObjectType};

#[test]
fn serializes_as_url_string() {
    let id = GitOid::new_from_str(HashAlgorithm::Sha256, ObjectType::Blob, "hello, world");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(
        json,
        "\"gitoid:blob:sha256:7d0be525d6521168c74051e5ab1b99e3b6d1c962fba763818f1954ab9e1c821a\""
    );
    let back: GitOid = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn rejects_invalid_url_string() {
    let err = serde_json::from_str::<GitOid>("\"gitoid:blob:md5:00\"").unwrap_err();
    assert!(err.to_string().contains("unknown hash algorithm 'md5'"));
}
