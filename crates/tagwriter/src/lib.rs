//! Indentation-aware HTML text writer.
//!
//! # Scope
//!
//! This crate implements:
//! - **Character sinks** ([`TextSink`], [`StringSink`], [`IoSink`])
//! - **Attribute and style staging** flushed into the next opened tag
//! - **Tag stack** with a per-tag rendering policy ([`TagMetadata`])
//! - **Indentation coordination** (one prefix per output line)
//! - **Encoding helpers** for element text and URLs
//!
//! # Not Implemented
//!
//! - Parsing or validating markup
//! - Asynchronous writing

/// Staged attribute and style entries.
pub mod buffer;
/// Writer error type.
pub mod error;
mod indent;
/// Character sink abstraction and adapters.
pub mod sink;
/// The writer state machine.
pub mod writer;

pub use buffer::PendingEntry;
pub use error::{WriteResult, WriterError};
pub use sink::{DEFAULT_NEW_LINE, IoSink, StringSink, TextSink};
pub use tagwriter_common::{encode_text, encode_url, encode_url_parameter};
pub use tagwriter_names::{
    HtmlAttribute, HtmlStyle, HtmlTag, IndentBehavior, OpenBehavior, TagMetadata,
};
pub use writer::{DEFAULT_TAB_STRING, HtmlTextWriter};
