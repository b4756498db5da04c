//! Common utilities for tagwriter.
//!
//! This crate provides shared infrastructure used by the writer crates:
//! - **Encoding** - HTML escaping and URL percent-encoding
//! - **Warning System** - colored terminal output for caller mistakes

pub mod encode;
pub mod warning;

pub use encode::{encode_text, encode_url, encode_url_parameter};
