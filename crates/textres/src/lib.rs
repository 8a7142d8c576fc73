#![forbid(unsafe_code)]

//! textres public facade and prelude.
//!
//! Re-exports the core value types and the UI resolution layer under one
//! crate. Depend on `textres-core` alone if a crate only builds and passes
//! text resources around and must stay free of the resolution layer.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use textres::prelude::*;
//!
//! let table = Arc::new(StringTable::new().with(7, "Hi, {0}"));
//!
//! // Business logic side: no context needed.
//! let title = TextResource::text("Settings");
//! let greeting = TextResource::id(StringId::new(7));
//!
//! // Rendering side: open a scope, resolve.
//! let _scope = ResolverScope::enter(table);
//! assert_eq!(title.resolve(NO_ARGS).unwrap(), "Settings");
//! assert_eq!(greeting.resolve(&[&"World"]).unwrap(), "Hi, World");
//! ```

pub use textres_core::{StringId, TextResource};
pub use textres_ui::{
    FormatArgs, NO_ARGS, Resolvable, ResolveError, ResolverScope, Result, SharedResolver,
    StringTable, TextResolver, UiTextResource, ambient_resolver, has_ambient_resolver,
};

/// Convenient glob import for applications.
pub mod prelude {
    pub use textres_core::{StringId, TextResource};
    pub use textres_ui::{
        FormatArgs, NO_ARGS, Resolvable, ResolveError, ResolverScope, StringTable, TextResolver,
        UiTextResource,
    };
}
