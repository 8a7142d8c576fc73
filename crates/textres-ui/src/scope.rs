#![forbid(unsafe_code)]

//! Thread-local ambient resolver scope.
//!
//! The no-context `resolve` entry point needs a resolver without taking one
//! as a parameter. GUI platforms hand one out implicitly inside a rendering
//! scope; here the rendering call tree opens a [`ResolverScope`] instead,
//! and everything beneath it on the same thread resolves against the
//! installed resolver.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use textres_ui::resolver::StringTable;
//! use textres_ui::scope::{ResolverScope, has_ambient_resolver};
//!
//! let table = Arc::new(StringTable::new().with(1, "Ready"));
//! {
//!     let _scope = ResolverScope::enter(table);
//!     assert!(has_ambient_resolver());
//!     // render pass runs here; ambient `resolve` works
//! }
//! assert!(!has_ambient_resolver());
//! ```
//!
//! # Invariants
//!
//! 1. Scopes nest: entering installs a resolver, dropping restores whatever
//!    was installed before. The innermost live scope wins.
//! 2. Scopes are strictly per-thread: a scope on one thread is invisible to
//!    every other thread.
//! 3. Guards must drop in LIFO order, which holding them as locals
//!    guarantees. A guard moved out of its frame and dropped out of order
//!    restores a stale resolver.

use std::cell::RefCell;
use std::sync::Arc;

use tracing::trace;

use crate::resolver::TextResolver;

/// A resolver shared into an ambient scope.
pub type SharedResolver = Arc<dyn TextResolver + Send + Sync>;

thread_local! {
    static AMBIENT: RefCell<Option<SharedResolver>> = const { RefCell::new(None) };
}

/// RAII guard installing an ambient resolver for the current thread.
///
/// Dropping the guard restores the previously installed resolver, so scopes
/// nest naturally around nested render passes.
#[must_use = "the ambient resolver is uninstalled when the scope is dropped"]
pub struct ResolverScope {
    previous: Option<SharedResolver>,
}

impl ResolverScope {
    /// Install `resolver` as the ambient resolver for the current thread.
    pub fn enter(resolver: SharedResolver) -> Self {
        let previous = AMBIENT.with(|cell| cell.borrow_mut().replace(resolver));
        trace!(nested = previous.is_some(), "resolver scope entered");
        Self { previous }
    }
}

impl Drop for ResolverScope {
    fn drop(&mut self) {
        AMBIENT.with(|cell| *cell.borrow_mut() = self.previous.take());
        trace!("resolver scope left");
    }
}

impl std::fmt::Debug for ResolverScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverScope")
            .field("nested", &self.previous.is_some())
            .finish()
    }
}

/// The resolver installed by the innermost live scope, if any.
pub fn ambient_resolver() -> Option<SharedResolver> {
    AMBIENT.with(|cell| cell.borrow().clone())
}

/// Whether an ambient resolver is installed on the current thread.
pub fn has_ambient_resolver() -> bool {
    AMBIENT.with(|cell| cell.borrow().is_some())
}
