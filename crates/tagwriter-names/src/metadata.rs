//! The tag metadata table.
//!
//! Every tag the writer opens is first resolved to a [`TagMetadata`]: its
//! rendered name plus a precomputed policy for how its opening sequence is
//! terminated and whether nested content is indented. Closing a tag is then
//! a pure function of the metadata that was pushed when it was opened, so
//! the output shape never depends on what was written in between.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use strum::IntoEnumIterator;

use crate::tag::HtmlTag;

/// How the opening sequence of a tag is terminated, which also fixes how it
/// is closed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenBehavior {
    /// `<name>` … `</name>`
    OpenTag,
    /// `<name>` + line break … line break + `</name>`
    OpenTagWithLineBreak,
    /// `<name />`; the matching end call writes nothing.
    SelfClose,
}

/// Whether nested content is indented one level deeper than the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndentBehavior {
    /// Increase the indent level while the tag is open.
    Indent,
    /// Leave the indent level alone.
    NoIndent,
}

/// Rendering policy for one tag.
///
/// Immutable once built. Obtain one with [`HtmlTag::metadata`],
/// [`TagMetadata::resolve`], or [`TagMetadata::new`] for a custom policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagMetadata {
    name: Cow<'static, str>,
    open: OpenBehavior,
    indent: IndentBehavior,
}

/// Lowercase tag name → well-known tag.
static TAG_INDEX: LazyLock<HashMap<&'static str, HtmlTag>> =
    LazyLock::new(|| HtmlTag::iter().map(|tag| (tag.as_str(), tag)).collect());

impl HtmlTag {
    /// Look up a well-known tag by name, ignoring case.
    ///
    /// # Example
    /// ```
    /// use tagwriter_names::HtmlTag;
    ///
    /// assert_eq!(HtmlTag::from_name("TextArea"), Some(HtmlTag::Textarea));
    /// assert_eq!(HtmlTag::from_name("my-widget"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        TAG_INDEX.get(name.to_lowercase().as_str()).copied()
    }

    /// The rendering policy of this tag.
    #[must_use]
    pub fn metadata(self) -> TagMetadata {
        TagMetadata {
            name: Cow::Borrowed(self.as_str()),
            open: self.open_behavior(),
            indent: self.indent_behavior(),
        }
    }
}

impl TagMetadata {
    /// Policy applied to tags that are not in the well-known set.
    pub const UNKNOWN_OPEN: OpenBehavior = OpenBehavior::OpenTag;
    /// Indentation applied to tags that are not in the well-known set.
    pub const UNKNOWN_INDENT: IndentBehavior = IndentBehavior::Indent;

    /// Build metadata with an explicit policy. The name is used verbatim.
    #[must_use]
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        open: OpenBehavior,
        indent: IndentBehavior,
    ) -> Self {
        Self {
            name: name.into(),
            open,
            indent,
        }
    }

    /// Resolve an arbitrary tag name.
    ///
    /// # Algorithm
    ///
    /// STEP 1: Lowercase `name` and look it up in the well-known set.
    ///
    /// STEP 2: On a match, use the canonical lowercase name and that tag's
    /// policy.
    ///
    /// STEP 3: Otherwise keep the original casing and apply the default
    /// `OpenTag` / `Indent` policy.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        HtmlTag::from_name(name).map_or_else(
            || Self::new(name.to_owned(), Self::UNKNOWN_OPEN, Self::UNKNOWN_INDENT),
            HtmlTag::metadata,
        )
    }

    /// The name written between `<` and `>`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How the opening sequence is terminated.
    #[must_use]
    pub const fn open_behavior(&self) -> OpenBehavior {
        self.open
    }

    /// Whether nested content is indented.
    #[must_use]
    pub const fn indent_behavior(&self) -> IndentBehavior {
        self.indent
    }

    /// Shorthand for `indent_behavior() == IndentBehavior::Indent`.
    #[must_use]
    pub const fn indents(&self) -> bool {
        matches!(self.indent, IndentBehavior::Indent)
    }
}

impl From<HtmlTag> for TagMetadata {
    fn from(tag: HtmlTag) -> Self {
        tag.metadata()
    }
}

impl From<&str> for TagMetadata {
    fn from(name: &str) -> Self {
        Self::resolve(name)
    }
}

impl From<&String> for TagMetadata {
    fn from(name: &String) -> Self {
        Self::resolve(name)
    }
}

impl From<String> for TagMetadata {
    fn from(name: String) -> Self {
        match HtmlTag::from_name(&name) {
            Some(tag) => tag.metadata(),
            None => Self::new(name, Self::UNKNOWN_OPEN, Self::UNKNOWN_INDENT),
        }
    }
}
