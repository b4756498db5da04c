//! Well-known HTML attribute names.

use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, IntoStaticStr};

/// A well-known attribute name.
///
/// Renders lowercase, except for two legacy spellings kept for
/// compatibility with existing page generators.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, IntoStaticStr, EnumIter, EnumCount,
)]
#[strum(serialize_all = "lowercase")]
pub enum HtmlAttribute {
    /// `accesskey` Keyboard shortcut.
    Accesskey,
    /// `align` Alignment (presentational).
    Align,
    /// `alt` Replacement text.
    Alt,
    /// `background` Background image (presentational).
    Background,
    /// `bgcolor` Background color (presentational).
    Bgcolor,
    /// `border` Border width (presentational).
    Border,
    /// `bordercolor` Border color (presentational).
    Bordercolor,
    /// `cellpadding` Table cell padding.
    Cellpadding,
    /// `cellspacing` Table cell spacing.
    Cellspacing,
    /// `checked` Checked state.
    Checked,
    /// `class` Class list.
    Class,
    /// `cols` Column count.
    Cols,
    /// `colspan` Column span.
    Colspan,
    /// `disabled` Disabled state.
    Disabled,
    /// `for` Associated control.
    For,
    /// `height` Vertical dimension.
    Height,
    /// `href` Link target.
    Href,
    /// `id` Unique identifier.
    Id,
    /// `maxlength` Maximum input length.
    Maxlength,
    /// `multiple` Allow multiple values.
    Multiple,
    /// `name` Control or element name.
    Name,
    /// `nowrap` Suppress wrapping (presentational).
    Nowrap,
    /// `onchange` Change event handler.
    Onchange,
    /// `onclick` Click event handler.
    Onclick,
    /// `readonly` Read-only state.
    ReadOnly,
    /// `rows` Row count.
    Rows,
    /// `rowspan` Row span.
    Rowspan,
    /// `rules` Table rules (presentational).
    Rules,
    /// `selected` Selected state.
    Selected,
    /// `size` Control size.
    Size,
    /// `src` Resource address.
    Src,
    /// `style` Inline style declarations.
    Style,
    /// `tabindex` Focus order.
    Tabindex,
    /// `target` Browsing context for navigation.
    Target,
    /// `title` Advisory information.
    Title,
    /// `type` Type of control or resource.
    Type,
    /// `valign` Vertical alignment (presentational).
    Valign,
    /// `value` Control value.
    Value,
    /// `width` Horizontal dimension.
    Width,
    /// `wrap` Text wrapping mode.
    Wrap,
    /// `abbr` Abbreviated cell label.
    Abbr,
    /// `autocomplete` Autofill hint.
    AutoComplete,
    /// `axis` Cell category (obsolete).
    Axis,
    /// `content` Metadata value.
    Content,
    /// `coords` Image map area coordinates.
    Coords,
    /// `_designerregion` Design-time region marker.
    #[strum(serialize = "_designerregion")]
    DesignerRegion,
    /// `dir` Text direction.
    Dir,
    /// `headers` Header cells for a data cell.
    Headers,
    /// `longdesc` Long description address (obsolete).
    Longdesc,
    /// `rel` Link relationship.
    Rel,
    /// `scope` Header cell scope.
    Scope,
    /// `shape` Image map area shape.
    Shape,
    /// `usemap` Image map reference.
    Usemap,
    /// `vcard_name` vCard field name (obsolete).
    #[strum(serialize = "vcard_name")]
    VCardName,
}

impl HtmlAttribute {
    /// The attribute name as written in markup.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
