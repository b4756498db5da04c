//! The HTML text writer.
//!
//! A small state machine on top of a [`TextSink`]: staged attributes and
//! styles are flushed when a tag opens, every open tag is pushed onto a
//! stack together with its [`TagMetadata`], and closing a tag is decided
//! entirely by the metadata that was pushed.

use std::fmt;
use std::io;

use tagwriter_common::warning::warn_once;
use tagwriter_common::{encode_text, encode_url, encode_url_parameter};
use tagwriter_names::{HtmlTag, OpenBehavior, TagMetadata};

use crate::buffer::{PendingBuffers, PendingEntry};
use crate::error::{WriteResult, WriterError};
use crate::indent::Indentation;
use crate::sink::TextSink;

/// Indentation unit used by [`HtmlTextWriter::new`].
pub const DEFAULT_TAB_STRING: &str = "\t";

/// Emits indented HTML to a [`TextSink`].
///
/// # Example
///
/// ```
/// use tagwriter::{HtmlAttribute, HtmlTag, HtmlTextWriter, StringSink};
///
/// let mut writer = HtmlTextWriter::new(StringSink::new());
/// writer.add_attribute(HtmlAttribute::Class, "note");
/// writer.render_begin_tag(HtmlTag::Div)?;
/// writer.render_begin_tag(HtmlTag::Span)?;
/// writer.write_encoded_text("1 < 2")?;
/// writer.render_end_tag()?;
/// writer.render_end_tag()?;
///
/// assert_eq!(
///     writer.into_inner().as_str(),
///     "<div class=\"note\">\n\t<span>1 &lt; 2</span>\n</div>"
/// );
/// # Ok::<(), tagwriter::WriterError>(())
/// ```
#[derive(Debug)]
pub struct HtmlTextWriter<S: TextSink> {
    sink: S,
    indentation: Indentation,
    pending: PendingBuffers,
    open_tags: Vec<TagMetadata>,
}

impl<S: TextSink> HtmlTextWriter<S> {
    /// Create a writer that indents with [`DEFAULT_TAB_STRING`].
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self::with_tab_string(sink, DEFAULT_TAB_STRING)
    }

    /// Create a writer with a custom indentation unit. An empty string
    /// disables indentation.
    #[must_use]
    pub fn with_tab_string(sink: S, tab_string: impl Into<String>) -> Self {
        Self {
            sink,
            indentation: Indentation::new(tab_string.into()),
            pending: PendingBuffers::default(),
            open_tags: Vec::new(),
        }
    }

    // ========== properties ==========

    /// Current indent level.
    #[must_use]
    pub const fn indent(&self) -> usize {
        self.indentation.level()
    }

    /// Set the indent level. Applies from the next line that receives content.
    pub const fn set_indent(&mut self, indent: usize) {
        self.indentation.set_level(indent);
    }

    /// Indent one level deeper.
    pub const fn increase_indent(&mut self) {
        self.indentation.increase();
    }

    /// Indent one level shallower, stopping at zero.
    pub const fn decrease_indent(&mut self) {
        self.indentation.decrease();
    }

    /// The indentation unit.
    #[must_use]
    pub fn tab_string(&self) -> &str {
        self.indentation.tab()
    }

    /// The sink's line-break string.
    #[must_use]
    pub fn new_line(&self) -> &str {
        self.sink.new_line()
    }

    /// Change the sink's line-break string.
    pub fn set_new_line(&mut self, new_line: impl Into<String>) {
        self.sink.set_new_line(new_line.into());
    }

    /// Number of tags opened by `render_begin_tag` and not yet closed.
    #[must_use]
    pub fn open_tag_count(&self) -> usize {
        self.open_tags.len()
    }

    /// The innermost open tag.
    #[must_use]
    pub fn current_tag(&self) -> Option<&TagMetadata> {
        self.open_tags.last()
    }

    /// Attributes staged for the next `render_begin_tag`.
    #[must_use]
    pub fn pending_attributes(&self) -> &[PendingEntry] {
        self.pending.attributes()
    }

    /// Styles staged for the next `render_begin_tag`.
    #[must_use]
    pub fn pending_styles(&self) -> &[PendingEntry] {
        self.pending.styles()
    }

    /// Borrow the sink.
    #[must_use]
    pub const fn get_ref(&self) -> &S {
        &self.sink
    }

    /// Release the writer and hand the sink back. The sink is neither flushed
    /// nor closed.
    #[must_use]
    pub fn into_inner(self) -> S {
        if !self.open_tags.is_empty() {
            let names: Vec<&str> = self.open_tags.iter().map(TagMetadata::name).collect();
            warn_once(
                "Writer",
                &format!(
                    "released with {} unclosed tag(s): {}",
                    names.len(),
                    names.join(", ")
                ),
            );
        }
        let staged = self.pending.attributes().len() + self.pending.styles().len();
        if staged > 0 {
            warn_once(
                "Writer",
                &format!("released with {staged} staged attribute(s) that were never rendered"),
            );
        }
        self.sink
    }

    /// Flush the sink.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::Io`] if the sink fails to flush.
    pub fn flush(&mut self) -> WriteResult {
        Ok(self.sink.flush()?)
    }

    // ========== attribute / style staging ==========

    /// Stage an attribute for the next `render_begin_tag`. The value is
    /// HTML-escaped. An empty value renders the bare attribute name.
    pub fn add_attribute(&mut self, name: impl AsRef<str>, value: &str) {
        self.pending
            .push_attribute(PendingEntry::new(name.as_ref(), encode_text(value)));
    }

    /// Stage an attribute whose value is already encoded.
    pub fn add_raw_attribute(&mut self, name: impl AsRef<str>, value: &str) {
        self.pending.push_attribute(PendingEntry::new(name.as_ref(), value));
    }

    /// Stage a style declaration for the next `render_begin_tag`. All staged
    /// declarations are combined into one `style` attribute. The value is
    /// HTML-escaped.
    pub fn add_style_attribute(&mut self, name: impl AsRef<str>, value: &str) {
        self.pending
            .push_style(PendingEntry::new(name.as_ref(), encode_text(value)));
    }

    /// Stage a style declaration whose value is already encoded.
    pub fn add_raw_style_attribute(&mut self, name: impl AsRef<str>, value: &str) {
        self.pending.push_style(PendingEntry::new(name.as_ref(), value));
    }

    // ========== tag stack ==========

    /// Open a tag, flushing every staged attribute and style into it.
    ///
    /// # Algorithm
    ///
    /// STEP 1: Resolve the tag's metadata.
    ///
    /// STEP 2: Write `<` and the resolved name.
    ///
    /// STEP 3: Write staged attributes in insertion order as ` name="value"`.
    ///
    /// STEP 4: If styles are staged, write them as one
    /// ` style="name:value;…"` attribute.
    ///
    /// STEP 5: Terminate according to the open behavior: `>`, `>` plus a
    /// line break, or ` />`.
    ///
    /// STEP 6: Push the metadata and, if the tag indents, go one level deeper.
    ///
    /// Both staging buffers are empty when this returns, even on error.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::Io`] if the sink fails.
    pub fn render_begin_tag(&mut self, tag: impl Into<TagMetadata>) -> WriteResult {
        // STEP 1
        let metadata = tag.into();
        let (attributes, styles) = self.pending.drain();

        // STEP 2
        self.write_indented("<")?;
        self.sink.write_str(metadata.name())?;

        // STEP 3
        for attribute in &attributes {
            self.write_attribute_fragment(&attribute.name, &attribute.value)?;
        }

        // STEP 4
        if !styles.is_empty() {
            self.sink.write_str(" style=\"")?;
            for style in &styles {
                self.write_style_fragment(&style.name, &style.value)?;
            }
            self.sink.write_str("\"")?;
        }

        // STEP 5
        match metadata.open_behavior() {
            OpenBehavior::OpenTag => self.sink.write_str(">")?,
            OpenBehavior::OpenTagWithLineBreak => {
                self.sink.write_str(">")?;
                self.line_break()?;
            }
            OpenBehavior::SelfClose => self.sink.write_str(" />")?,
        }

        // STEP 6
        if metadata.indents() {
            self.indentation.increase();
        }
        self.open_tags.push(metadata);
        Ok(())
    }

    /// Close the innermost tag opened by `render_begin_tag`.
    ///
    /// A self-closing tag writes nothing here; the call still pops it and
    /// restores indentation.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::UnbalancedNesting`] if no tag is open (the
    /// writer is left untouched), or [`WriterError::Io`] if the sink fails.
    pub fn render_end_tag(&mut self) -> WriteResult {
        let Some(metadata) = self.open_tags.pop() else {
            return Err(WriterError::UnbalancedNesting);
        };

        if metadata.indents() {
            self.indentation.decrease();
        }

        match metadata.open_behavior() {
            OpenBehavior::OpenTag => self.write_end_tag(metadata.name()),
            OpenBehavior::OpenTagWithLineBreak => {
                self.line_break()?;
                self.write_end_tag(metadata.name())
            }
            OpenBehavior::SelfClose => Ok(()),
        }
    }

    // ========== low-level markup ==========

    /// Write `<name` with no terminator. Bypasses the tag stack.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::Io`] if the sink fails.
    pub fn write_begin_tag(&mut self, name: impl AsRef<str>) -> WriteResult {
        self.write_indented("<")?;
        Ok(self.sink.write_str(name.as_ref())?)
    }

    /// Write `<name>`. Bypasses the tag stack.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::Io`] if the sink fails.
    pub fn write_full_begin_tag(&mut self, name: impl AsRef<str>) -> WriteResult {
        self.write_begin_tag(name)?;
        Ok(self.sink.write_str(">")?)
    }

    /// Write `</name>`. Bypasses the tag stack.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::Io`] if the sink fails.
    pub fn write_end_tag(&mut self, name: impl AsRef<str>) -> WriteResult {
        self.write_indented("</")?;
        self.sink.write_str(name.as_ref())?;
        Ok(self.sink.write_str(">")?)
    }

    /// Write ` name="value"` with an HTML-escaped value, or ` name` when the
    /// value is empty.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::Io`] if the sink fails.
    pub fn write_attribute(&mut self, name: impl AsRef<str>, value: &str) -> WriteResult {
        self.write_indented("")?;
        self.write_attribute_fragment(name.as_ref(), &encode_text(value))
    }

    /// Write ` name="value"` with the value as given.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::Io`] if the sink fails.
    pub fn write_raw_attribute(&mut self, name: impl AsRef<str>, value: &str) -> WriteResult {
        self.write_indented("")?;
        self.write_attribute_fragment(name.as_ref(), value)
    }

    /// Write a single `name:value;` declaration with an HTML-escaped value,
    /// for use inside a hand-written `style` attribute.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::Io`] if the sink fails.
    pub fn write_style_attribute(&mut self, name: impl AsRef<str>, value: &str) -> WriteResult {
        self.write_indented("")?;
        self.write_style_fragment(name.as_ref(), &encode_text(value))
    }

    /// Write a single `name:value;` declaration with the value as given.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::Io`] if the sink fails.
    pub fn write_raw_style_attribute(&mut self, name: impl AsRef<str>, value: &str) -> WriteResult {
        self.write_indented("")?;
        self.write_style_fragment(name.as_ref(), value)
    }

    /// Write `<br />`.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::Io`] if the sink fails.
    pub fn write_break(&mut self) -> WriteResult {
        self.write_begin_tag(HtmlTag::Br)?;
        Ok(self.sink.write_str(" />")?)
    }

    // ========== content ==========

    /// Write `text` verbatim after the line's indentation.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::Io`] if the sink fails.
    pub fn write(&mut self, text: &str) -> WriteResult {
        Ok(self.write_indented(text)?)
    }

    /// Write a single character after the line's indentation.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::Io`] if the sink fails.
    pub fn write_char(&mut self, c: char) -> WriteResult {
        self.write(c.encode_utf8(&mut [0; 4]))
    }

    /// Write formatted content; this is what `write!(writer, …)` calls.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::Io`] if the sink fails.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> WriteResult {
        match args.as_str() {
            Some(text) => self.write(text),
            None => self.write(&fmt::format(args)),
        }
    }

    /// Write `text` followed by a line break.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::Io`] if the sink fails.
    pub fn write_line(&mut self, text: &str) -> WriteResult {
        self.write_indented(text)?;
        Ok(self.line_break()?)
    }

    /// Write a bare line break. The empty line receives no indentation.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::Io`] if the sink fails.
    pub fn write_line_break(&mut self) -> WriteResult {
        Ok(self.line_break()?)
    }

    /// Write `text` and a line break without indenting the line, unless the
    /// line already has content.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::Io`] if the sink fails.
    pub fn write_line_no_tabs(&mut self, text: &str) -> WriteResult {
        self.indentation.suppress_line();
        self.sink.write_str(text)?;
        Ok(self.line_break()?)
    }

    /// Write `text` HTML-escaped.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::Io`] if the sink fails.
    pub fn write_encoded_text(&mut self, text: &str) -> WriteResult {
        self.write(&encode_text(text))
    }

    /// Write `url` with its path percent-encoded and its query string intact.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::Io`] if the sink fails.
    pub fn write_encoded_url(&mut self, url: &str) -> WriteResult {
        self.write(&encode_url(url))
    }

    /// Write `text` percent-encoded as a single URL component.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::Io`] if the sink fails.
    pub fn write_encoded_url_parameter(&mut self, text: &str) -> WriteResult {
        self.write(&encode_url_parameter(text))
    }

    // ========== internals ==========

    fn write_indented(&mut self, text: &str) -> io::Result<()> {
        self.indentation.prefix_line(&mut self.sink)?;
        self.sink.write_str(text)
    }

    fn line_break(&mut self) -> io::Result<()> {
        self.sink.write_line()?;
        self.indentation.line_ended();
        Ok(())
    }

    fn write_attribute_fragment(&mut self, name: &str, value: &str) -> WriteResult {
        self.sink.write_str(" ")?;
        self.sink.write_str(name)?;
        if !value.is_empty() {
            self.sink.write_str("=\"")?;
            self.sink.write_str(value)?;
            self.sink.write_str("\"")?;
        }
        Ok(())
    }

    fn write_style_fragment(&mut self, name: &str, value: &str) -> WriteResult {
        self.sink.write_str(name)?;
        self.sink.write_str(":")?;
        self.sink.write_str(value)?;
        Ok(self.sink.write_str(";")?)
    }
}
