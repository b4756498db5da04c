//! Attribute and style buffers.
//!
//! Entries staged with `add_attribute` / `add_style_attribute` wait here
//! until the next `render_begin_tag`, which drains both buffers. Nothing else
//! reads them.

use std::mem;

/// One staged `name`/`value` pair. The value is already encoded and is
/// written exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEntry {
    /// Attribute or style property name.
    pub name: String,
    /// Encoded value. Empty means "no value".
    pub value: String,
}

impl PendingEntry {
    /// Create an entry from an already encoded value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Insertion-ordered queues of staged attributes and styles.
#[derive(Debug, Default)]
pub(crate) struct PendingBuffers {
    attributes: Vec<PendingEntry>,
    styles: Vec<PendingEntry>,
}

impl PendingBuffers {
    pub(crate) fn push_attribute(&mut self, entry: PendingEntry) {
        self.attributes.push(entry);
    }

    pub(crate) fn push_style(&mut self, entry: PendingEntry) {
        self.styles.push(entry);
    }

    pub(crate) fn attributes(&self) -> &[PendingEntry] {
        &self.attributes
    }

    pub(crate) fn styles(&self) -> &[PendingEntry] {
        &self.styles
    }

    /// Take both queues, leaving them empty.
    pub(crate) fn drain(&mut self) -> (Vec<PendingEntry>, Vec<PendingEntry>) {
        (mem::take(&mut self.attributes), mem::take(&mut self.styles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut buffers = PendingBuffers::default();
        buffers.push_attribute(PendingEntry::new("class", "x"));
        buffers.push_attribute(PendingEntry::new("class", "y"));
        buffers.push_style(PendingEntry::new("color", "Red"));

        let (attributes, styles) = buffers.drain();

        assert_eq!(
            attributes,
            vec![PendingEntry::new("class", "x"), PendingEntry::new("class", "y")]
        );
        assert_eq!(styles, vec![PendingEntry::new("color", "Red")]);
        assert!(buffers.attributes().is_empty());
        assert!(buffers.styles().is_empty());
    }
}
