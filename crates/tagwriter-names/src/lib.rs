//! Well-known HTML names and the tag metadata table for tagwriter.
//!
//! # Scope
//!
//! This crate provides:
//! - **Tags** ([`HtmlTag`]) with a precomputed rendering policy per tag
//! - **Tag metadata** ([`TagMetadata`]) resolved from a tag or any name string
//! - **Attribute names** ([`HtmlAttribute`])
//! - **Style property names** ([`HtmlStyle`])
//!
//! Every name type implements `AsRef<str>`, so the writer accepts a
//! well-known enumerant anywhere it accepts a plain string.

/// Well-known attribute names.
pub mod attribute;
/// Tag rendering policy and name resolution.
pub mod metadata;
/// Well-known CSS property names.
pub mod style;
/// Well-known tags.
pub mod tag;

pub use attribute::HtmlAttribute;
pub use metadata::{IndentBehavior, OpenBehavior, TagMetadata};
pub use style::HtmlStyle;
pub use tag::HtmlTag;
