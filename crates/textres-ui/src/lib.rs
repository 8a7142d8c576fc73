#![forbid(unsafe_code)]

//! Resolvable UI text resources for textres.
//!
//! Provides the presentation-layer counterpart to
//! [`textres_core::TextResource`]: a [`UiTextResource`] that resolves
//! itself into a `String` against a [`TextResolver`], either passed
//! explicitly or installed ambiently for a rendering scope.
//!
//! # Role in textres
//! `textres-ui` owns everything that needs a resolution context: the
//! resolver seam and errors, the bundled [`StringTable`], the thread-local
//! [`ResolverScope`], and the lossless conversions to and from the core
//! value types.
//!
//! # How it fits in the system
//! Application code builds and passes around `textres-core` values; the
//! rendering layer opens a [`ResolverScope`] around each render pass and
//! resolves at presentation time. Non-rendering code paths resolve with an
//! explicit resolver instead.

/// Conversions between core and UI text resources.
pub mod convert;
/// Resolution error model.
pub mod error;
/// Resolver seam and the bundled in-memory string table.
pub mod resolver;
/// Thread-local ambient resolver scope.
pub mod scope;
/// The resolvable UI-layer text resource.
pub mod ui_text;

pub use error::{ResolveError, Result};
pub use resolver::{FormatArgs, NO_ARGS, StringTable, TextResolver};
pub use scope::{ResolverScope, SharedResolver, ambient_resolver, has_ambient_resolver};
pub use ui_text::{Resolvable, UiTextResource};
