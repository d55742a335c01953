//! Hash algorithms and digest computation for gitoid identifiers.
//!
//! This crate provides the `HashAlgorithm` registry, the `HashValue` digest
//! container, hex encoding/decoding, and the one-shot digest functions that
//! hash a predigest header followed by content.

mod algorithm;
mod error;
mod hasher;
pub mod hex;
mod value;

pub use algorithm::{HashAlgorithm, MAX_DIGEST_LEN};
pub use error::HashError;
pub use hasher::{digest_bytes, digest_object};
pub use value::HashValue;
