#![forbid(unsafe_code)]

//! The deferred text resource value type.
//!
//! [`TextResource`] is a closed sum type: exactly one of its two variants is
//! populated, and every consumer matches on it exhaustively. Adding a third
//! variant is a breaking change, and the compiler flags every match site
//! that needs updating.
//!
//! # Invariants
//!
//! 1. Construction is total: any string and any id produce a valid value.
//! 2. Equality is structural: same variant and same payload.
//! 3. The type never resolves itself. Ids are not validated here; an
//!    unregistered id only surfaces at resolution time, in the UI layer.

use crate::id::StringId;

/// Text to be shown in the UI, passed either as a literal string or as a
/// reference to a string template in an external table.
///
/// `TextResource` carries no resolution capability and no dependency on a
/// rendering context, which keeps it usable from non-UI code. The UI layer
/// converts it into its resolvable counterpart at presentation time.
///
/// There is no `Display` impl: rendering an `Id` variant requires a
/// resolver, so turning a resource into user-visible text always goes
/// through the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextResource {
    /// Literal text, held verbatim.
    Text(String),
    /// Reference to a string template owned by an external resolver.
    Id(StringId),
}

impl TextResource {
    /// Wrap literal text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Wrap a string template reference.
    pub const fn id(id: StringId) -> Self {
        Self::Id(id)
    }

    /// The literal text, if this is the `Text` variant.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Id(_) => None,
        }
    }

    /// The template id, if this is the `Id` variant.
    pub fn as_id(&self) -> Option<StringId> {
        match self {
            Self::Text(_) => None,
            Self::Id(value) => Some(*value),
        }
    }

    /// Whether this resource holds literal text.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Whether this resource references a string template.
    pub fn is_id(&self) -> bool {
        matches!(self, Self::Id(_))
    }
}

impl From<&str> for TextResource {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for TextResource {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<StringId> for TextResource {
    fn from(id: StringId) -> Self {
        Self::Id(id)
    }
}
