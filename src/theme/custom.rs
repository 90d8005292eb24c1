//! Theme definitions: the user-facing `CustomTheme` and its validated form.

use super::defaults::{DEFAULT_BACKGROUND_COLOR, DEFAULT_SOURCE_CODE_FONT};
use crate::errors::{ThemeError, ValidationError};
use crate::fonts::SourceCodeFont;
use crate::style::{DefaultStyles, ThemeStyles};
use crate::types::{Color, IntoColor, expect, out_of_domain};

/// Everything needed to (re)populate a theme.
///
/// `default_style` must define all six base style kinds; named styles may
/// be partial.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomTheme {
    pub default_style: ThemeStyles,
    pub named_styles: Vec<(String, ThemeStyles)>,
    pub theme_colors: Vec<(String, Color)>,
    pub background_color: Color,
    pub source_code_font: SourceCodeFont,
}

impl CustomTheme {
    pub fn new(default_style: ThemeStyles) -> Self {
        Self {
            default_style,
            named_styles: Vec::new(),
            theme_colors: Vec::new(),
            background_color: DEFAULT_BACKGROUND_COLOR,
            source_code_font: DEFAULT_SOURCE_CODE_FONT,
        }
    }

    #[must_use]
    pub fn with_named_style(mut self, name: impl Into<String>, styles: ThemeStyles) -> Self {
        self.named_styles.push((name.into(), styles));
        self
    }

    pub fn with_theme_color(
        mut self,
        name: impl Into<String>,
        color: impl IntoColor,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let color = required_color(color, &format!("theme_colors.{name}"))?;
        self.theme_colors.push((name, color));
        Ok(self)
    }

    pub fn with_background_color(mut self, color: impl IntoColor) -> Result<Self, ValidationError> {
        self.background_color = required_color(color, "backgroundcolor")?;
        Ok(self)
    }

    #[must_use]
    pub fn with_source_code_font(mut self, font: SourceCodeFont) -> Self {
        self.source_code_font = font;
        self
    }
}

fn required_color(color: impl IntoColor, field: &str) -> Result<Color, ValidationError> {
    color
        .into_color(field)?
        .ok_or_else(|| out_of_domain(field, "None", expect::COLOR))
}

/// A theme definition whose mandatory parts are guaranteed present.
#[derive(Clone, Debug)]
pub(crate) struct ThemeDefinition {
    pub default_style: DefaultStyles,
    pub named_styles: Vec<(String, ThemeStyles)>,
    pub theme_colors: Vec<(String, Color)>,
    pub background_color: Color,
    pub source_code_font: SourceCodeFont,
}

impl TryFrom<CustomTheme> for ThemeDefinition {
    type Error = ThemeError;

    fn try_from(theme: CustomTheme) -> Result<Self, Self::Error> {
        Ok(ThemeDefinition {
            default_style: DefaultStyles::try_from(theme.default_style)?,
            named_styles: theme.named_styles,
            theme_colors: theme.theme_colors,
            background_color: theme.background_color,
            source_code_font: theme.source_code_font,
        })
    }
}
