#![forbid(unsafe_code)]

//! Presentation-agnostic text resource values for textres.
//!
//! Application code often needs to hand a piece of displayable text to the
//! UI layer without knowing yet whether that text is a literal string or a
//! reference into an externally managed string table. [`TextResource`] is
//! that deferred reference: a closed two-variant value that carries either
//! the text itself or a [`StringId`] pointing at a template owned by a
//! resolver.
//!
//! # Role in textres
//! `textres-core` holds only the value types. It has no notion of
//! resolution and no dependency on any rendering context, so business
//! logic, view models, and plain tests can construct and compare text
//! resources freely. Resolution lives in `textres-ui`.
//!
//! # How it fits in the system
//! `textres-ui` mirrors [`TextResource`] with a resolvable counterpart and
//! provides the lossless conversion between the two. Both directions
//! preserve the variant and payload exactly.

/// Opaque string template identifiers.
pub mod id;
/// The deferred text resource value type.
pub mod resource;

pub use id::StringId;
pub use resource::TextResource;
