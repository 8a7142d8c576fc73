#![forbid(unsafe_code)]

//! Opaque identifier for a string template in an external table.

use std::fmt;

/// Identifies a string template in an externally managed string table.
///
/// The id is opaque: constructing one is total and performs no validation.
/// Whether an id actually maps to a template is decided by the resolver at
/// resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StringId(u32);

impl StringId {
    /// Create an id from its raw value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw numeric value of this id.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for StringId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<StringId> for u32 {
    fn from(id: StringId) -> Self {
        id.0
    }
}

impl fmt::Display for StringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
