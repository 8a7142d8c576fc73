#![forbid(unsafe_code)]

//! The resolution seam and the bundled in-memory string table.
//!
//! [`TextResolver`] is the entire surface this crate requires from the
//! external resolution service: template lookup by [`StringId`] plus
//! positional substitution of format arguments. Applications back it with
//! whatever actually owns their strings; [`StringTable`] is the bundled
//! in-memory implementation.
//!
//! # Template syntax
//!
//! Positional placeholders `{0}`, `{1}`, … reference the supplied format
//! arguments; `{{` and `}}` escape literal braces. Substitution is a single
//! pass: substituted values are never re-scanned for placeholders.
//!
//! # Invariants
//!
//! 1. Lookup never substitutes fallback text: an unregistered id is an
//!    error, not an empty string.
//! 2. Arity is strict both ways: a placeholder without a matching argument
//!    and an argument no placeholder consumes are both errors.
//! 3. Substitution is not recursive: an argument value containing `{0}`
//!    comes through verbatim.
//! 4. A template without placeholders formats to itself, regardless of the
//!    (empty) argument list.

use std::fmt;
use std::fmt::Write as _;

use ahash::AHashMap;
use textres_core::StringId;
use tracing::trace;

use crate::error::{ResolveError, Result};

/// Positional format arguments, rendered to text at the resolver boundary.
pub type FormatArgs<'a> = &'a [&'a dyn fmt::Display];

/// The empty argument list, for call sites resolving plain templates.
pub const NO_ARGS: FormatArgs<'static> = &[];

/// External resolution service seam.
///
/// Implementations own the string templates; this crate only ever asks them
/// to format one. Errors come back as [`ResolveError`] values and are
/// propagated to the caller unchanged.
pub trait TextResolver {
    /// Look up the template for `id` and substitute `args` positionally.
    fn format(&self, id: StringId, args: FormatArgs<'_>) -> Result<String>;
}

/// In-memory string table mapping ids to templates.
///
/// # Usage
///
/// ```
/// use textres_core::StringId;
/// use textres_ui::resolver::{StringTable, TextResolver};
///
/// let table = StringTable::new()
///     .with(1, "Hi, {0}")
///     .with(2, "Ready");
///
/// let text = table.format(StringId::new(1), &[&"World"]).unwrap();
/// assert_eq!(text, "Hi, World");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    entries: AHashMap<StringId, String>,
}

impl StringTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template, builder style.
    #[must_use]
    pub fn with(mut self, id: impl Into<StringId>, template: impl Into<String>) -> Self {
        self.insert(id, template);
        self
    }

    /// Register a template, replacing and returning any previous one.
    pub fn insert(
        &mut self,
        id: impl Into<StringId>,
        template: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(id.into(), template.into())
    }

    /// The raw template registered for `id`, if any.
    pub fn template(&self, id: StringId) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }

    /// Whether a template is registered for `id`.
    pub fn contains(&self, id: StringId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TextResolver for StringTable {
    fn format(&self, id: StringId, args: FormatArgs<'_>) -> Result<String> {
        let template = self.entries.get(&id).ok_or(ResolveError::UnknownId(id))?;
        let resolved = interpolate(id, template, args)?;
        trace!(id = %id, args = args.len(), "resolved string template");
        Ok(resolved)
    }
}

/// Single-pass positional substitution of `args` into `template`.
fn interpolate(id: StringId, template: &str, args: FormatArgs<'_>) -> Result<String> {
    let malformed = |detail: String| ResolveError::MalformedTemplate { id, detail };

    let mut out = String::with_capacity(template.len());
    let mut used = vec![false; args.len()];
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut digits = String::new();
                loop {
                    match chars.next() {
                        Some(d) if d.is_ascii_digit() => digits.push(d),
                        Some('}') => break,
                        Some(other) => {
                            return Err(malformed(format!(
                                "unexpected '{other}' in placeholder"
                            )));
                        }
                        None => return Err(malformed("unterminated placeholder".into())),
                    }
                }
                if digits.is_empty() {
                    return Err(malformed("empty placeholder".into()));
                }
                let index: usize = digits
                    .parse()
                    .map_err(|_| malformed(format!("placeholder index '{digits}' too large")))?;
                let Some(arg) = args.get(index) else {
                    return Err(ResolveError::MissingArg {
                        id,
                        index,
                        supplied: args.len(),
                    });
                };
                used[index] = true;
                // Infallible: fmt::Write into a String cannot fail.
                let _ = write!(out, "{arg}");
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(malformed("unmatched '}'".into()));
                }
            }
            other => out.push(other),
        }
    }

    let consumed = used.iter().filter(|u| **u).count();
    if consumed < args.len() {
        return Err(ResolveError::UnusedArgs {
            id,
            used: consumed,
            supplied: args.len(),
        });
    }
    Ok(out)
}
