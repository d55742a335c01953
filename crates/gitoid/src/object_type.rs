use std::fmt;
use std::str::FromStr;

use crate::GitOidError;

/// Kinds of object a gitoid can identify.
///
/// Only flat content is supported; composite git objects (trees, commits,
/// tags) would each be a new variant with its own canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum ObjectType {
    Blob,
}

impl ObjectType {
    /// Every registered object type.
    pub const ALL: [ObjectType; 1] = [Self::Blob];

    /// The canonical lowercase name, used in headers and URLs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Blob => "blob",
        }
    }

    /// The canonical name as bytes.
    pub const fn as_bytes(&self) -> &'static [u8] {
        self.name().as_bytes()
    }

    /// Look up an object type by its exact canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.name() == name)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ObjectType {
    type Err = GitOidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| GitOidError::UnknownObjectType(s.to_owned()))
    }
}
