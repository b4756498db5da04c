//! Indentation coordinator.

use std::io;

use crate::sink::TextSink;

/// Tracks the nesting depth and whether the current output line already
/// carries its leading indentation.
///
/// The prefix is written lazily, right before the first content on a line,
/// so a line that only receives a line break stays empty.
#[derive(Debug)]
pub(crate) struct Indentation {
    level: usize,
    tab: String,
    line_has_indent: bool,
}

impl Indentation {
    pub(crate) fn new(tab: String) -> Self {
        Self {
            level: 0,
            tab,
            line_has_indent: false,
        }
    }

    pub(crate) const fn level(&self) -> usize {
        self.level
    }

    pub(crate) const fn set_level(&mut self, level: usize) {
        self.level = level;
    }

    pub(crate) const fn increase(&mut self) {
        self.level += 1;
    }

    /// Never goes below zero.
    pub(crate) const fn decrease(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    pub(crate) fn tab(&self) -> &str {
        &self.tab
    }

    /// Write `tab × level` unless this line already has it.
    pub(crate) fn prefix_line<S: TextSink>(&mut self, sink: &mut S) -> io::Result<()> {
        if !self.line_has_indent {
            for _ in 0..self.level {
                sink.write_str(&self.tab)?;
            }
            self.line_has_indent = true;
        }
        Ok(())
    }

    /// Mark the current line as a line without indentation, so later writes on
    /// it do not add a prefix.
    pub(crate) const fn suppress_line(&mut self) {
        self.line_has_indent = true;
    }

    /// A line break was written; the next content needs a fresh prefix.
    pub(crate) const fn line_ended(&mut self) {
        self.line_has_indent = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::StringSink;

    #[test]
    fn test_prefix_written_once_per_line() {
        let mut sink = StringSink::new();
        let mut indentation = Indentation::new("  ".to_string());
        indentation.increase();
        indentation.increase();

        indentation.prefix_line(&mut sink).unwrap();
        indentation.prefix_line(&mut sink).unwrap();
        assert_eq!(sink.as_str(), "    ");

        indentation.line_ended();
        indentation.decrease();
        indentation.prefix_line(&mut sink).unwrap();
        assert_eq!(sink.as_str(), "      ");
    }

    #[test]
    fn test_decrease_clamps_at_zero() {
        let mut indentation = Indentation::new("\t".to_string());
        indentation.decrease();
        assert_eq!(indentation.level(), 0);
    }
}
