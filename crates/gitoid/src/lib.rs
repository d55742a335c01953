//! Content-addressable gitoid identifiers.
//!
//! A gitoid is the digest of `"<type> <len>\0" || content`, tagged with the
//! hash algorithm and object type that produced it. Its canonical text form
//! is `gitoid:<object-type>:<hash-algorithm>:<hex-digest>`.
//!
//! ```
//! use gitoid::{GitOid, HashAlgorithm, ObjectType};
//!
//! let id = GitOid::new_from_str(HashAlgorithm::Sha1, ObjectType::Blob, "hello world");
//! assert_eq!(id.url(), "gitoid:blob:sha1:95d09f2b10159347eece71399a7e2e907ea3df4f");
//! assert_eq!(GitOid::from_url(&id.url()).unwrap(), id);
//! ```

pub mod boundary;
mod error;
mod gitoid;
pub mod header;
pub mod last_error;
mod object_type;
pub mod url;

pub use error::{GitOidError, INVALID_URL_MESSAGE};
pub use gitoid::GitOid;
pub use gitoid_hash::{HashAlgorithm, HashError, HashValue};
pub use object_type::ObjectType;
