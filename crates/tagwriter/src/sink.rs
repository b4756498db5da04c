//! Character sinks.
//!
//! The writer never talks to a buffer or stream directly. It depends on the
//! small [`TextSink`] capability: write text, write a line break, and report
//! (or change) what a line break is. Two adapters are provided, one for an
//! in-memory `String` and one for any [`io::Write`].

use std::fmt;
use std::io::{self, Write};

/// Line break used by sinks unless configured otherwise.
pub const DEFAULT_NEW_LINE: &str = "\n";

/// Destination for the characters a writer produces.
///
/// The writer is the only mutator of its sink and never reads output back.
/// Closing or releasing the underlying resource is up to whoever owns it.
pub trait TextSink {
    /// Write `text` verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying destination rejects the write.
    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// The current line-break string.
    fn new_line(&self) -> &str;

    /// Replace the line-break string used by [`TextSink::write_line`].
    fn set_new_line(&mut self, new_line: String);

    /// Write the current line-break string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying destination rejects the write.
    fn write_line(&mut self) -> io::Result<()> {
        let new_line = self.new_line().to_owned();
        self.write_str(&new_line)
    }

    /// Push buffered output to the destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying destination fails to flush.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<T: TextSink + ?Sized> TextSink for &mut T {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        (**self).write_str(text)
    }

    fn new_line(&self) -> &str {
        (**self).new_line()
    }

    fn set_new_line(&mut self, new_line: String) {
        (**self).set_new_line(new_line);
    }

    fn write_line(&mut self) -> io::Result<()> {
        (**self).write_line()
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// In-memory sink backed by a `String`. Never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringSink {
    buffer: String,
    new_line: String,
}

impl StringSink {
    /// Create an empty sink using [`DEFAULT_NEW_LINE`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_new_line(DEFAULT_NEW_LINE)
    }

    /// Create an empty sink with a custom line break (e.g. `"\r\n"` or `""`).
    #[must_use]
    pub fn with_new_line(new_line: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            new_line: new_line.into(),
        }
    }

    /// Everything written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the sink and return its contents.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Default for StringSink {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StringSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

impl TextSink for StringSink {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.buffer.push_str(text);
        Ok(())
    }

    fn new_line(&self) -> &str {
        &self.new_line
    }

    fn set_new_line(&mut self, new_line: String) {
        self.new_line = new_line;
    }

    fn write_line(&mut self) -> io::Result<()> {
        self.buffer.push_str(&self.new_line);
        Ok(())
    }
}

/// Sink adapter over any byte stream. Text is written as UTF-8.
#[derive(Debug)]
pub struct IoSink<W: Write> {
    inner: W,
    new_line: String,
}

impl<W: Write> IoSink<W> {
    /// Wrap `inner` using [`DEFAULT_NEW_LINE`].
    #[must_use]
    pub fn new(inner: W) -> Self {
        Self::with_new_line(inner, DEFAULT_NEW_LINE)
    }

    /// Wrap `inner` with a custom line break.
    #[must_use]
    pub fn with_new_line(inner: W, new_line: impl Into<String>) -> Self {
        Self {
            inner,
            new_line: new_line.into(),
        }
    }

    /// Borrow the wrapped stream.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Mutably borrow the wrapped stream.
    pub const fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwrap the stream without flushing or closing it.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> TextSink for IoSink<W> {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }

    fn new_line(&self) -> &str {
        &self.new_line
    }

    fn set_new_line(&mut self, new_line: String) {
        self.new_line = new_line;
    }

    fn write_line(&mut self) -> io::Result<()> {
        self.inner.write_all(self.new_line.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
