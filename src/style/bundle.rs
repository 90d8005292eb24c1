//! Shape kinds and the `ThemeStyles` bundle that spans every cache.

use std::collections::BTreeMap;

use super::kinds::{IconStyle, ImageStyle, LineStyle, ShapeStyle, ShapeTextStyle, TextStyle};
use crate::errors::ThemeError;
use crate::types::literal_enum;

literal_enum! {
    /// Shape families that may override the generic shape styles.
    ShapeKind as "shape kind" {
        Arc => "arc",
        Circle => "circle",
        Donuts => "donuts",
        Ellipse => "ellipse",
        Fan => "fan",
        Polygon => "polygon",
        Rectangle => "rectangle",
        RegularPolygon => "regularpolygon",
        Wedge => "wedge",
        Arrow => "arrow",
        Chevron => "chevron",
        Parallelogram => "parallelogram",
        Rhombus => "rhombus",
        Star => "star",
        Trapezoid => "trapezoid",
        Triangle => "triangle",
        BubbleSpeech => "bubblespeech",
    }
}

impl ShapeKind {
    pub const COUNT: usize = ShapeKind::ALL.len();

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// One optional style per cache, used for theme definitions and bulk merges.
///
/// Shape-kind entries override the generic shape styles for that kind only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeStyles {
    pub iconstyle: Option<IconStyle>,
    pub imagestyle: Option<ImageStyle>,
    pub linestyle: Option<LineStyle>,
    pub shapestyle: Option<ShapeStyle>,
    pub shapetextstyle: Option<ShapeTextStyle>,
    pub textstyle: Option<TextStyle>,
    pub shape_styles: BTreeMap<ShapeKind, ShapeStyle>,
    pub shape_text_styles: BTreeMap<ShapeKind, ShapeTextStyle>,
}

impl ThemeStyles {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_iconstyle(mut self, style: IconStyle) -> Self {
        self.iconstyle = Some(style);
        self
    }

    #[must_use]
    pub fn with_imagestyle(mut self, style: ImageStyle) -> Self {
        self.imagestyle = Some(style);
        self
    }

    #[must_use]
    pub fn with_linestyle(mut self, style: LineStyle) -> Self {
        self.linestyle = Some(style);
        self
    }

    #[must_use]
    pub fn with_shapestyle(mut self, style: ShapeStyle) -> Self {
        self.shapestyle = Some(style);
        self
    }

    #[must_use]
    pub fn with_shapetextstyle(mut self, style: ShapeTextStyle) -> Self {
        self.shapetextstyle = Some(style);
        self
    }

    #[must_use]
    pub fn with_textstyle(mut self, style: TextStyle) -> Self {
        self.textstyle = Some(style);
        self
    }

    #[must_use]
    pub fn with_shape_style(mut self, kind: ShapeKind, style: ShapeStyle) -> Self {
        self.shape_styles.insert(kind, style);
        self
    }

    #[must_use]
    pub fn with_shape_text_style(mut self, kind: ShapeKind, style: ShapeTextStyle) -> Self {
        self.shape_text_styles.insert(kind, style);
        self
    }
}

/// A theme's default style: the six base kinds are mandatory.
#[derive(Clone, Debug, PartialEq)]
pub struct DefaultStyles {
    pub iconstyle: IconStyle,
    pub imagestyle: ImageStyle,
    pub linestyle: LineStyle,
    pub shapestyle: ShapeStyle,
    pub shapetextstyle: ShapeTextStyle,
    pub textstyle: TextStyle,
    pub shape_styles: BTreeMap<ShapeKind, ShapeStyle>,
    pub shape_text_styles: BTreeMap<ShapeKind, ShapeTextStyle>,
}

impl TryFrom<ThemeStyles> for DefaultStyles {
    type Error = ThemeError;

    fn try_from(styles: ThemeStyles) -> Result<Self, Self::Error> {
        fn require<T>(value: Option<T>, field: &'static str) -> Result<T, ThemeError> {
            value.ok_or(ThemeError::MissingDefaultStyle { field })
        }

        Ok(DefaultStyles {
            iconstyle: require(styles.iconstyle, "iconstyle")?,
            imagestyle: require(styles.imagestyle, "imagestyle")?,
            linestyle: require(styles.linestyle, "linestyle")?,
            shapestyle: require(styles.shapestyle, "shapestyle")?,
            shapetextstyle: require(styles.shapetextstyle, "shapetextstyle")?,
            textstyle: require(styles.textstyle, "textstyle")?,
            shape_styles: styles.shape_styles,
            shape_text_styles: styles.shape_text_styles,
        })
    }
}

impl From<DefaultStyles> for ThemeStyles {
    fn from(styles: DefaultStyles) -> Self {
        ThemeStyles {
            iconstyle: Some(styles.iconstyle),
            imagestyle: Some(styles.imagestyle),
            linestyle: Some(styles.linestyle),
            shapestyle: Some(styles.shapestyle),
            shapetextstyle: Some(styles.shapetextstyle),
            textstyle: Some(styles.textstyle),
            shape_styles: styles.shape_styles,
            shape_text_styles: styles.shape_text_styles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    fn complete() -> ThemeStyles {
        ThemeStyles::new()
            .with_iconstyle(IconStyle::system_default())
            .with_imagestyle(ImageStyle::system_default())
            .with_linestyle(LineStyle::system_default())
            .with_shapestyle(ShapeStyle::system_default())
            .with_shapetextstyle(ShapeTextStyle::system_default())
            .with_textstyle(TextStyle::system_default())
    }

    #[test]
    fn there_are_seventeen_shape_kinds() {
        assert_eq!(ShapeKind::COUNT, 17);
        for (i, kind) in ShapeKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn default_styles_require_every_base_kind() {
        let mut styles = complete();
        styles.linestyle = None;
        let err = DefaultStyles::try_from(styles).unwrap_err();
        assert_eq!(err, ThemeError::MissingDefaultStyle { field: "linestyle" });
        assert_eq!(err.to_string(), "default_style.linestyle is mandatory");
    }

    #[test]
    fn shape_kind_overrides_are_optional() {
        let styles = complete().with_shape_style(ShapeKind::Circle, ShapeStyle::new());
        let defaults = DefaultStyles::try_from(styles.clone()).expect("complete bundle");
        assert_eq!(defaults.shape_styles.len(), 1);
        assert_eq!(ThemeStyles::from(defaults), styles);
    }
}
