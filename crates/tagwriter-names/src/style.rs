//! Well-known CSS property names for inline `style` declarations.

use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, IntoStaticStr};

/// A well-known CSS property, rendered in kebab case
/// (`HtmlStyle::BackgroundColor` → `background-color`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, IntoStaticStr, EnumIter, EnumCount,
)]
#[strum(serialize_all = "kebab-case")]
pub enum HtmlStyle {
    /// `background-color`
    BackgroundColor,
    /// `background-image`
    BackgroundImage,
    /// `border-collapse`
    BorderCollapse,
    /// `border-color`
    BorderColor,
    /// `border-style`
    BorderStyle,
    /// `border-width`
    BorderWidth,
    /// `color`
    Color,
    /// `font-family`
    FontFamily,
    /// `font-size`
    FontSize,
    /// `font-style`
    FontStyle,
    /// `font-weight`
    FontWeight,
    /// `height`
    Height,
    /// `text-decoration`
    TextDecoration,
    /// `width`
    Width,
    /// `list-style-image`
    ListStyleImage,
    /// `list-style-type`
    ListStyleType,
    /// `cursor`
    Cursor,
    /// `direction`
    Direction,
    /// `display`
    Display,
    /// `filter`
    Filter,
    /// `font-variant`
    FontVariant,
    /// `left`
    Left,
    /// `margin`
    Margin,
    /// `margin-bottom`
    MarginBottom,
    /// `margin-left`
    MarginLeft,
    /// `margin-right`
    MarginRight,
    /// `margin-top`
    MarginTop,
    /// `overflow`
    Overflow,
    /// `overflow-x`
    OverflowX,
    /// `overflow-y`
    OverflowY,
    /// `padding`
    Padding,
    /// `padding-bottom`
    PaddingBottom,
    /// `padding-left`
    PaddingLeft,
    /// `padding-right`
    PaddingRight,
    /// `padding-top`
    PaddingTop,
    /// `position`
    Position,
    /// `text-align`
    TextAlign,
    /// `vertical-align`
    VerticalAlign,
    /// `text-overflow`
    TextOverflow,
    /// `top`
    Top,
    /// `visibility`
    Visibility,
    /// `white-space`
    WhiteSpace,
    /// `z-index`
    ZIndex,
}

impl HtmlStyle {
    /// The property name as written in a declaration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
