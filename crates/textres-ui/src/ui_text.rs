#![forbid(unsafe_code)]

//! The resolvable UI-layer text resource.
//!
//! [`UiTextResource`] mirrors the two variants of
//! [`TextResource`](textres_core::TextResource) and adds the one capability
//! the core type deliberately lacks: turning itself into a `String` against
//! a resolver, either the ambient one installed by a
//! [`ResolverScope`](crate::scope::ResolverScope) or one passed explicitly.
//!
//! # Invariants
//!
//! 1. The literal variant resolves to its payload verbatim. Format
//!    arguments are only meaningful for string templates, so the literal
//!    variant ignores them rather than failing; callers may pass arguments
//!    unconditionally. It also never touches a resolver, so it resolves
//!    even outside any scope.
//! 2. The id variant delegates to the resolver verbatim; resolver failures
//!    propagate unchanged.
//! 3. Both variants are plain data: the type round-trips through serde
//!    (behind the `serde` feature) with no custom codec.

use textres_core::StringId;

use crate::error::{ResolveError, Result};
use crate::resolver::{FormatArgs, TextResolver};
use crate::scope::ambient_resolver;

/// Text to be shown in the UI, resolvable into a `String` at presentation
/// time.
///
/// Use [`From`] impls or the conversions in [`crate::convert`] to move
/// between this type and the presentation-agnostic
/// [`TextResource`](textres_core::TextResource); both directions preserve
/// variant and payload exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UiTextResource {
    /// Literal text, held verbatim.
    Text(String),
    /// Reference to a string template owned by a resolver.
    Id(StringId),
}

impl UiTextResource {
    /// Wrap literal text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Wrap a string template reference.
    pub const fn id(id: StringId) -> Self {
        Self::Id(id)
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

impl From<&str> for UiTextResource {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for UiTextResource {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<StringId> for UiTextResource {
    fn from(id: StringId) -> Self {
        Self::Id(id)
    }
}

/// Capability of resolving into displayable text.
///
/// Implemented by [`UiTextResource`] and, via the conversion layer, by the
/// core `TextResource`: importing this trait is what grants core values
/// resolution, keeping the core crate itself free of any context
/// dependency.
pub trait Resolvable {
    /// Resolve against an explicitly passed resolver.
    ///
    /// Usable anywhere, including outside rendering code paths.
    fn resolve_with(&self, resolver: &dyn TextResolver, args: FormatArgs<'_>) -> Result<String>;

    /// Resolve against the ambient resolver of the current thread.
    ///
    /// Fails with [`ResolveError::NoAmbientResolver`] when called outside a
    /// [`ResolverScope`](crate::scope::ResolverScope) and a resolver is
    /// actually needed.
    fn resolve(&self, args: FormatArgs<'_>) -> Result<String> {
        let resolver = ambient_resolver().ok_or(ResolveError::NoAmbientResolver)?;
        self.resolve_with(resolver.as_ref(), args)
    }
}

impl Resolvable for UiTextResource {
    fn resolve_with(&self, resolver: &dyn TextResolver, args: FormatArgs<'_>) -> Result<String> {
        match self {
            Self::Text(value) => Ok(value.clone()),
            Self::Id(id) => resolver.format(*id, args),
        }
    }

    fn resolve(&self, args: FormatArgs<'_>) -> Result<String> {
        match self {
            // Literal text needs no context; skip the ambient lookup.
            Self::Text(value) => Ok(value.clone()),
            Self::Id(id) => {
                let resolver = ambient_resolver().ok_or(ResolveError::NoAmbientResolver)?;
                resolver.format(*id, args)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::resolver::{NO_ARGS, StringTable};
    use crate::scope::ResolverScope;

    fn greeting_table() -> StringTable {
        StringTable::new().with(7, "Hi, {0}")
    }

    #[test]
    fn text_resolves_to_payload() {
        let res = UiTextResource::text("Hello");
        let table = StringTable::new();
        assert_eq!(res.resolve_with(&table, NO_ARGS).unwrap(), "Hello");
    }

    #[test]
    fn text_ignores_arguments() {
        let res = UiTextResource::text("Hello");
        let table = StringTable::new();
        assert_eq!(
            res.resolve_with(&table, &[&"ignored", &"args"]).unwrap(),
            "Hello"
        );
    }

    #[test]
    fn text_resolves_without_ambient_scope() {
        let res = UiTextResource::text("Hello");
        assert_eq!(res.resolve(&[&"still", &"ignored"]).unwrap(), "Hello");
    }

    #[test]
    fn id_delegates_to_resolver() {
        let res = UiTextResource::id(StringId::new(7));
        let table = greeting_table();
        assert_eq!(res.resolve_with(&table, &[&"World"]).unwrap(), "Hi, World");
    }

    #[test]
    fn id_resolves_against_ambient_scope() {
        let res = UiTextResource::id(StringId::new(7));
        let _scope = ResolverScope::enter(Arc::new(greeting_table()));
        assert_eq!(res.resolve(&[&"World"]).unwrap(), "Hi, World");
    }

    #[test]
    fn id_without_ambient_scope_fails() {
        let res = UiTextResource::id(StringId::new(7));
        assert_eq!(
            res.resolve(&[&"World"]),
            Err(ResolveError::NoAmbientResolver)
        );
    }

    #[test]
    fn unknown_id_propagates_unchanged() {
        let res = UiTextResource::id(StringId::new(404));
        let table = greeting_table();
        assert_eq!(
            res.resolve_with(&table, NO_ARGS),
            Err(ResolveError::UnknownId(StringId::new(404)))
        );
    }

    #[test]
    fn arity_mismatch_propagates_unchanged() {
        let res = UiTextResource::id(StringId::new(7));
        let table = greeting_table();
        assert_eq!(
            res.resolve_with(&table, NO_ARGS),
            Err(ResolveError::MissingArg {
                id: StringId::new(7),
                index: 0,
                supplied: 0,
            })
        );
    }

    #[test]
    fn constructors_and_queries() {
        assert!(UiTextResource::text("x").is_text());
        assert!(!UiTextResource::text("x").is_id());
        assert!(UiTextResource::id(StringId::new(1)).is_id());
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(UiTextResource::text("x"), UiTextResource::text("x"));
        assert_ne!(UiTextResource::text("x"), UiTextResource::text("y"));
        assert_ne!(
            UiTextResource::text("x"),
            UiTextResource::id(StringId::new(1))
        );
    }

    #[test]
    fn from_impls_wrap_expected_variants() {
        let a: UiTextResource = "abc".into();
        let b: UiTextResource = String::from("abc").into();
        let c: UiTextResource = StringId::new(5).into();
        assert_eq!(a, b);
        assert_eq!(a, UiTextResource::text("abc"));
        assert_eq!(c, UiTextResource::id(StringId::new(5)));
    }

    #[cfg(feature = "serde")]
    mod serde_round_trip {
        use super::*;

        #[test]
        fn text_variant() {
            let res = UiTextResource::text("saved state");
            let json = serde_json::to_string(&res).unwrap();
            let back: UiTextResource = serde_json::from_str(&json).unwrap();
            assert_eq!(back, res);
        }

        #[test]
        fn id_variant() {
            let res = UiTextResource::id(StringId::new(1234));
            let json = serde_json::to_string(&res).unwrap();
            let back: UiTextResource = serde_json::from_str(&json).unwrap();
            assert_eq!(back, res);
        }
    }
}
