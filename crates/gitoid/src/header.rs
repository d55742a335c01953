//! The predigest header hashed in front of every gitoid's content.

use crate::ObjectType;

/// Build the header `"<type> <len>\0"`.
///
/// `content_len` must be the exact byte length of the content that follows
/// it into the digest.
pub fn write_header(object_type: ObjectType, content_len: usize) -> Vec<u8> {
    format!("{} {}\0", object_type, content_len).into_bytes()
}
