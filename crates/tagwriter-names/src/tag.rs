//! Well-known HTML tags.
//!
//! The set mirrors the classic server-side HTML writer vocabulary: every
//! element a legacy page generator is likely to emit, including a handful
//! of obsolete presentational elements that still show up in generated
//! reports and mail bodies.

use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, IntoStaticStr};

use crate::metadata::{IndentBehavior, OpenBehavior};

/// A well-known HTML tag.
///
/// The textual name of every variant is its lowercase spelling
/// (`HtmlTag::Blockquote` renders as `blockquote`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, IntoStaticStr, EnumIter, EnumCount,
)]
#[strum(serialize_all = "lowercase")]
pub enum HtmlTag {
    /// `<a>` Hyperlink anchor.
    A,
    /// `<acronym>` Acronym (obsolete).
    Acronym,
    /// `<address>` Contact information block.
    Address,
    /// `<area>` Image map area.
    Area,
    /// `<b>` Bold text.
    B,
    /// `<base>` Document base URL.
    Base,
    /// `<basefont>` Default font (obsolete).
    Basefont,
    /// `<bdo>` Bidirectional text override.
    Bdo,
    /// `<bgsound>` Background sound (obsolete).
    Bgsound,
    /// `<big>` Larger text (obsolete).
    Big,
    /// `<blockquote>` Block quotation.
    Blockquote,
    /// `<body>` Document body.
    Body,
    /// `<br>` Line break.
    Br,
    /// `<button>` Push button.
    Button,
    /// `<caption>` Table caption.
    Caption,
    /// `<center>` Centered block (obsolete).
    Center,
    /// `<cite>` Citation.
    Cite,
    /// `<code>` Code fragment.
    Code,
    /// `<col>` Table column.
    Col,
    /// `<colgroup>` Table column group.
    Colgroup,
    /// `<dd>` Description list details.
    Dd,
    /// `<del>` Deleted text.
    Del,
    /// `<dfn>` Defining instance of a term.
    Dfn,
    /// `<dir>` Directory list (obsolete).
    Dir,
    /// `<div>` Generic block container.
    Div,
    /// `<dl>` Description list.
    Dl,
    /// `<dt>` Description list term.
    Dt,
    /// `<em>` Emphasis.
    Em,
    /// `<embed>` Embedded external content.
    Embed,
    /// `<fieldset>` Form control group.
    Fieldset,
    /// `<font>` Font change (obsolete).
    Font,
    /// `<form>` User-submittable form.
    Form,
    /// `<frame>` Frame (obsolete).
    Frame,
    /// `<frameset>` Frame set (obsolete).
    Frameset,
    /// `<h1>` Level 1 heading.
    H1,
    /// `<h2>` Level 2 heading.
    H2,
    /// `<h3>` Level 3 heading.
    H3,
    /// `<h4>` Level 4 heading.
    H4,
    /// `<h5>` Level 5 heading.
    H5,
    /// `<h6>` Level 6 heading.
    H6,
    /// `<head>` Document metadata container.
    Head,
    /// `<hr>` Thematic break.
    Hr,
    /// `<html>` Document root.
    Html,
    /// `<i>` Alternate voice (italic).
    I,
    /// `<iframe>` Nested browsing context.
    Iframe,
    /// `<img>` Image.
    Img,
    /// `<input>` Form input control.
    Input,
    /// `<ins>` Inserted text.
    Ins,
    /// `<isindex>` Single-line search prompt (obsolete).
    Isindex,
    /// `<kbd>` Keyboard input.
    Kbd,
    /// `<label>` Form control caption.
    Label,
    /// `<legend>` Fieldset caption.
    Legend,
    /// `<li>` List item.
    Li,
    /// `<link>` External resource link.
    Link,
    /// `<map>` Image map.
    Map,
    /// `<marquee>` Scrolling text (obsolete).
    Marquee,
    /// `<menu>` Menu list.
    Menu,
    /// `<meta>` Document metadata.
    Meta,
    /// `<nobr>` Non-breaking text (obsolete).
    Nobr,
    /// `<noframes>` Frameless fallback (obsolete).
    Noframes,
    /// `<noscript>` Scriptless fallback.
    Noscript,
    /// `<object>` External object.
    Object,
    /// `<ol>` Ordered list.
    Ol,
    /// `<option>` Select option.
    Option,
    /// `<p>` Paragraph.
    P,
    /// `<param>` Object parameter.
    Param,
    /// `<pre>` Preformatted text.
    Pre,
    /// `<q>` Inline quotation.
    Q,
    /// `<rt>` Ruby annotation text.
    Rt,
    /// `<ruby>` Ruby annotation.
    Ruby,
    /// `<s>` Struck-through text.
    S,
    /// `<samp>` Sample output.
    Samp,
    /// `<script>` Embedded script.
    Script,
    /// `<select>` Selection control.
    Select,
    /// `<small>` Side comment (small print).
    Small,
    /// `<span>` Generic inline container.
    Span,
    /// `<strike>` Struck-through text (obsolete).
    Strike,
    /// `<strong>` Strong importance.
    Strong,
    /// `<style>` Embedded style sheet.
    Style,
    /// `<sub>` Subscript.
    Sub,
    /// `<sup>` Superscript.
    Sup,
    /// `<table>` Table.
    Table,
    /// `<tbody>` Table body.
    Tbody,
    /// `<td>` Table data cell.
    Td,
    /// `<textarea>` Multi-line text control.
    Textarea,
    /// `<tfoot>` Table footer.
    Tfoot,
    /// `<th>` Table header cell.
    Th,
    /// `<thead>` Table header.
    Thead,
    /// `<title>` Document title.
    Title,
    /// `<tr>` Table row.
    Tr,
    /// `<tt>` Teletype text (obsolete).
    Tt,
    /// `<u>` Unarticulated annotation (underline).
    U,
    /// `<ul>` Unordered list.
    Ul,
    /// `<var>` Variable.
    Var,
    /// `<wbr>` Line break opportunity.
    Wbr,
    /// `<xml>` XML data island.
    Xml,
}

impl HtmlTag {
    /// The canonical lowercase tag name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#elements-2)
    ///
    /// "Void elements only have a start tag; end tags must not be specified
    /// for void elements."
    ///
    /// The obsolete void elements (`basefont`, `bgsound`, `frame`, `isindex`,
    /// `param`) are included.
    #[must_use]
    pub const fn is_void(self) -> bool {
        matches!(
            self,
            Self::Area
                | Self::Base
                | Self::Basefont
                | Self::Bgsound
                | Self::Br
                | Self::Col
                | Self::Embed
                | Self::Frame
                | Self::Hr
                | Self::Img
                | Self::Input
                | Self::Isindex
                | Self::Link
                | Self::Meta
                | Self::Param
                | Self::Wbr
        )
    }

    /// Elements whose content is whitespace-significant. Indenting their
    /// content would change what the user agent displays.
    #[must_use]
    pub const fn preserves_whitespace(self) -> bool {
        matches!(self, Self::Pre | Self::Textarea)
    }

    /// Structural elements whose content starts on its own line.
    #[must_use]
    pub const fn is_block(self) -> bool {
        matches!(
            self,
            Self::Address
                | Self::Blockquote
                | Self::Body
                | Self::Caption
                | Self::Center
                | Self::Colgroup
                | Self::Dir
                | Self::Div
                | Self::Dl
                | Self::Fieldset
                | Self::Form
                | Self::Frameset
                | Self::H1
                | Self::H2
                | Self::H3
                | Self::H4
                | Self::H5
                | Self::H6
                | Self::Head
                | Self::Html
                | Self::Iframe
                | Self::Legend
                | Self::Map
                | Self::Marquee
                | Self::Menu
                | Self::Noframes
                | Self::Noscript
                | Self::Object
                | Self::Ol
                | Self::Option
                | Self::Script
                | Self::Select
                | Self::Style
                | Self::Table
                | Self::Tbody
                | Self::Tfoot
                | Self::Thead
                | Self::Title
                | Self::Tr
                | Self::Ul
                | Self::Xml
        )
    }

    /// How the opening sequence of this tag is terminated.
    #[must_use]
    pub const fn open_behavior(self) -> OpenBehavior {
        if self.is_void() {
            OpenBehavior::SelfClose
        } else if self.is_block() {
            OpenBehavior::OpenTagWithLineBreak
        } else {
            OpenBehavior::OpenTag
        }
    }

    /// Whether content nested in this tag is indented one level deeper.
    #[must_use]
    pub const fn indent_behavior(self) -> IndentBehavior {
        if self.is_void() || self.preserves_whitespace() {
            IndentBehavior::NoIndent
        } else {
            IndentBehavior::Indent
        }
    }
}
