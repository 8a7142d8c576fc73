#![forbid(unsafe_code)]

//! Resolution error model.
//!
//! # Design Principles
//!
//! 1. **Result everywhere** — resolution never panics and never substitutes
//!    fallback text; every failure is a typed value the caller can match on.
//! 2. **Propagate unchanged** — the resolution layer does not catch,
//!    reinterpret, or log-and-swallow resolver failures. Callers own any
//!    fallback policy.
//! 3. **Total elsewhere** — construction and conversion of text resources
//!    cannot fail, so this module only models resolution.

use std::fmt;

use textres_core::StringId;

/// Why resolving a text resource failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No template is registered for the id.
    UnknownId(StringId),
    /// The template references a positional argument the caller did not
    /// supply.
    MissingArg {
        /// Id of the template being resolved.
        id: StringId,
        /// Zero-based argument index the template references.
        index: usize,
        /// Number of arguments the caller supplied.
        supplied: usize,
    },
    /// The caller supplied more arguments than the template consumes.
    UnusedArgs {
        /// Id of the template being resolved.
        id: StringId,
        /// Number of distinct arguments the template consumes.
        used: usize,
        /// Number of arguments the caller supplied.
        supplied: usize,
    },
    /// The registered template contains invalid placeholder syntax.
    MalformedTemplate {
        /// Id of the offending template.
        id: StringId,
        /// What is wrong with it.
        detail: String,
    },
    /// The ambient `resolve` entry point was called outside any
    /// [`ResolverScope`](crate::scope::ResolverScope).
    NoAmbientResolver,
}

/// Standard result type for resolution APIs.
pub type Result<T> = std::result::Result<T, ResolveError>;

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownId(id) => write!(f, "no string template registered for {id}"),
            Self::MissingArg {
                id,
                index,
                supplied,
            } => write!(
                f,
                "template {id} references argument {{{index}}} but only {supplied} supplied"
            ),
            Self::UnusedArgs { id, used, supplied } => write!(
                f,
                "template {id} consumes {used} arguments but {supplied} supplied"
            ),
            Self::MalformedTemplate { id, detail } => {
                write!(f, "malformed template {id}: {detail}")
            }
            Self::NoAmbientResolver => {
                write!(f, "no ambient resolver: call inside a ResolverScope or use resolve_with")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_id_names_the_id() {
        let err = ResolveError::UnknownId(StringId::new(7));
        assert!(err.to_string().contains("#7"));
    }

    #[test]
    fn missing_arg_names_index_and_count() {
        let err = ResolveError::MissingArg {
            id: StringId::new(3),
            index: 2,
            supplied: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("{2}"));
        assert!(msg.contains("only 1 supplied"));
    }

    #[test]
    fn unused_args_names_both_counts() {
        let err = ResolveError::UnusedArgs {
            id: StringId::new(3),
            used: 1,
            supplied: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("consumes 1"));
        assert!(msg.contains("4 supplied"));
    }

    #[test]
    fn malformed_template_carries_detail() {
        let err = ResolveError::MalformedTemplate {
            id: StringId::new(1),
            detail: "unmatched '}'".into(),
        };
        assert!(err.to_string().contains("unmatched '}'"));
    }

    #[test]
    fn no_ambient_resolver_suggests_alternatives() {
        let msg = ResolveError::NoAmbientResolver.to_string();
        assert!(msg.contains("ResolverScope"));
        assert!(msg.contains("resolve_with"));
    }

    #[test]
    fn question_mark_propagation() {
        fn lookup() -> Result<String> {
            Err(ResolveError::UnknownId(StringId::new(1)))
        }
        fn resolve_something() -> Result<String> {
            let text = lookup()?;
            Ok(text)
        }
        assert_eq!(
            resolve_something(),
            Err(ResolveError::UnknownId(StringId::new(1)))
        );
    }
}
