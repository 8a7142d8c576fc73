#![forbid(unsafe_code)]

//! Lossless conversion between the core and UI text resource types.
//!
//! Both directions are total, variant-preserving, and mutual inverses:
//! converting there and back yields a value equal to the original. The
//! matches are exhaustive, so a new variant on either side is a compile
//! error here rather than a silent mismatch.
//!
//! This module also grants the core [`TextResource`] the [`Resolvable`]
//! capability by composition (convert, then resolve), so call sites that
//! only hold core values can still produce displayable text where a
//! resolver is available.

use textres_core::TextResource;

use crate::error::Result;
use crate::resolver::{FormatArgs, TextResolver};
use crate::ui_text::{Resolvable, UiTextResource};

impl From<TextResource> for UiTextResource {
    fn from(res: TextResource) -> Self {
        match res {
            TextResource::Text(value) => Self::Text(value),
            TextResource::Id(value) => Self::Id(value),
        }
    }
}

impl From<UiTextResource> for TextResource {
    fn from(res: UiTextResource) -> Self {
        match res {
            UiTextResource::Text(value) => Self::Text(value),
            UiTextResource::Id(value) => Self::Id(value),
        }
    }
}

impl From<&TextResource> for UiTextResource {
    fn from(res: &TextResource) -> Self {
        res.clone().into()
    }
}

impl From<&UiTextResource> for TextResource {
    fn from(res: &UiTextResource) -> Self {
        res.clone().into()
    }
}

impl Resolvable for TextResource {
    fn resolve_with(&self, resolver: &dyn TextResolver, args: FormatArgs<'_>) -> Result<String> {
        UiTextResource::from(self).resolve_with(resolver, args)
    }

    fn resolve(&self, args: FormatArgs<'_>) -> Result<String> {
        UiTextResource::from(self).resolve(args)
    }
}
