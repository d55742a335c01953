//! Adapters for callers that want an absent result plus a queryable message
//! instead of a `Result`, as foreign-function layers usually do.
//!
//! Each adapter returns `None` on failure and records the failure's report
//! message in the thread's [last-error slot](crate::last_error). Success
//! never touches the slot. URL strings handed out are owned `String`s;
//! releasing one is dropping it.

use gitoid_hash::HashAlgorithm;

use crate::last_error::set_last_error;
use crate::{GitOid, GitOidError, ObjectType};

/// Turn a `Result` into an `Option`, recording the error's report message.
pub fn capture<T>(result: Result<T, GitOidError>) -> Option<T> {
    result
        .map_err(|e| set_last_error(e.report_message()))
        .ok()
}

/// Whether a possibly-absent result can be used. Absent means invalid.
pub fn is_valid(gitoid: Option<&GitOid>) -> bool {
    gitoid.is_some()
}

pub fn gitoid_from_url(url: &str) -> Option<GitOid> {
    capture(GitOid::from_url(url))
}

/// Resolve canonical names, as passed across the boundary, to registry entries.
fn resolve_names(
    hash_algorithm: &str,
    object_type: &str,
) -> Result<(HashAlgorithm, ObjectType), GitOidError> {
    let algorithm = HashAlgorithm::from_name(hash_algorithm)
        .ok_or_else(|| GitOidError::UnknownAlgorithm(hash_algorithm.to_owned()))?;
    let object_type = object_type.parse()?;
    Ok((algorithm, object_type))
}

/// Like [`capture`], but records the error's own text. Used where the
/// failure did not come from a URL.
fn capture_detail<T>(result: Result<T, GitOidError>) -> Option<T> {
    result.map_err(|e| set_last_error(e.to_string())).ok()
}

/// Identify the bytes of `s` under the named algorithm and object type.
pub fn gitoid_from_str(hash_algorithm: &str, object_type: &str, s: &str) -> Option<GitOid> {
    capture_detail(
        resolve_names(hash_algorithm, object_type)
            .map(|(algorithm, object_type)| GitOid::new_from_str(algorithm, object_type, s)),
    )
}

/// Identify a buffer whose length the caller supplies separately.
pub fn gitoid_from_bytes_with_len(
    hash_algorithm: &str,
    object_type: &str,
    content: &[u8],
    declared_len: usize,
) -> Option<GitOid> {
    capture_detail(
        resolve_names(hash_algorithm, object_type).and_then(|(algorithm, object_type)| {
            GitOid::new_from_bytes_with_len(algorithm, object_type, content, declared_len)
        }),
    )
}

/// The URL of a possibly-absent result.
pub fn gitoid_url(gitoid: Option<&GitOid>) -> Option<String> {
    gitoid.map(GitOid::url)
}
