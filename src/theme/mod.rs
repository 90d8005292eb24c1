//! The theme: every style cache, the palette, and bulk operations over them.

mod all_styles;
mod caches;
mod custom;
pub mod defaults;
mod names;
mod report;

pub use all_styles::AllStyles;
pub use caches::{Caches, ShapeLayered, ShapeStyles, ShapeStylesMut, StylesMut, ThemeStyle};
pub use custom::CustomTheme;
pub(crate) use custom::ThemeDefinition;
pub use names::StyleNames;

use crate::cache::{StyleCache, ValueCache};
use crate::errors::ThemeError;
use crate::fonts::{Font, SourceCodeFont};
use crate::log::debug;
use crate::official::{self, OfficialTheme};
use crate::style::{LineStyle, ShapeKind, ShapeStyle, ShapeTextStyle, Style, TextStyle, ThemeStyles};
use crate::types::{Color, Width, expect, out_of_domain};
use defaults::DEFAULT_STYLE_NAME;

/// A complete set of styles used to resolve drawing calls.
///
/// A theme starts either populated with the "default" official theme
/// ([`Theme::new`]) or empty ([`Theme::empty`]). Applying a theme replaces
/// every cache at once; individual edits go through the cache handles.
#[derive(Clone, Debug)]
pub struct Theme {
    caches: Caches,
    initialized: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// A theme populated with the "default" official theme.
    pub fn new() -> Self {
        let mut theme = Self::empty();
        theme.apply_official(OfficialTheme::Default);
        theme
    }

    /// A theme with no styles at all. Lookups fail until a theme is applied.
    pub fn empty() -> Self {
        Self {
            caches: Caches::new(),
            initialized: false,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // ========================================================================
    // Cache access
    // ========================================================================

    /// The generic cache for style kind `S`.
    pub fn styles<S: ThemeStyle>(&self) -> &StyleCache<S> {
        S::slot(&self.caches)
    }

    pub fn styles_mut<S: ThemeStyle>(&mut self) -> StylesMut<'_, S> {
        self.caches.styles_mut::<S>()
    }

    /// Overrides of `kind`, falling back to the generic cache of `S`.
    pub fn shape_styles<S: ShapeLayered>(&self, kind: ShapeKind) -> ShapeStyles<'_, S> {
        ShapeStyles::new(&self.caches, kind)
    }

    pub fn shape_styles_mut<S: ShapeLayered>(&mut self, kind: ShapeKind) -> ShapeStylesMut<'_, S> {
        self.caches.shape_styles_mut::<S>(kind)
    }

    /// Every style name held by at least one cache, in registration order.
    pub fn style_names(&self) -> &StyleNames {
        &self.caches.names
    }

    pub fn theme_colors(&self) -> &ValueCache<Color> {
        &self.caches.colors
    }

    pub fn theme_colors_mut(&mut self) -> &mut ValueCache<Color> {
        &mut self.caches.colors
    }

    pub fn background_colors(&self) -> &ValueCache<Color> {
        &self.caches.backgrounds
    }

    pub fn background_colors_mut(&mut self) -> &mut ValueCache<Color> {
        &mut self.caches.backgrounds
    }

    pub fn source_code_fonts(&self) -> &ValueCache<SourceCodeFont> {
        &self.caches.source_fonts
    }

    pub fn source_code_fonts_mut(&mut self) -> &mut ValueCache<SourceCodeFont> {
        &mut self.caches.source_fonts
    }

    /// Operations on a style name across every cache.
    pub fn all_styles(&mut self) -> AllStyles<'_> {
        AllStyles::new(&mut self.caches)
    }

    // ========================================================================
    // Applying themes
    // ========================================================================

    pub fn list_official_themes() -> Vec<&'static str> {
        official::list_official_themes()
    }

    /// Replace everything with the official theme called `name`.
    pub fn apply_official_theme(&mut self, name: &str) -> Result<(), ThemeError> {
        let theme: OfficialTheme = name.parse()?;
        self.apply_official(theme);
        Ok(())
    }

    pub fn apply_official(&mut self, theme: OfficialTheme) {
        self.install(theme.definition());
        debug!(theme = theme.name(), "applied official theme");
    }

    /// Replace everything with `theme`.
    ///
    /// The definition is checked before anything is touched: on error the
    /// current styles stay exactly as they were.
    pub fn apply_custom_theme(&mut self, theme: CustomTheme) -> Result<(), ThemeError> {
        let definition = ThemeDefinition::try_from(theme)?;
        self.install(definition);
        debug!(styles = self.caches.names.len(), "applied custom theme");
        Ok(())
    }

    fn install(&mut self, definition: ThemeDefinition) {
        let ThemeDefinition {
            default_style,
            named_styles,
            theme_colors,
            background_color,
            source_code_font,
        } = definition;

        let mut caches = Caches::new();
        caches.backgrounds.set(DEFAULT_STYLE_NAME, background_color);
        caches.source_fonts.set(DEFAULT_STYLE_NAME, source_code_font);
        caches.put(DEFAULT_STYLE_NAME, default_style.into());
        for (name, styles) in named_styles {
            caches.put(&name, styles);
        }
        for (name, color) in theme_colors {
            caches.colors.set(&name, color);
        }

        self.caches = caches;
        self.initialized = true;
    }

    // ========================================================================
    // Default tweaks
    // ========================================================================

    /// Set arrow head filling on every line style.
    pub fn change_default_linearrow_fill(&mut self, fill: bool) {
        let line = LineStyle {
            ahfill: Some(fill),
            ..LineStyle::default()
        };
        self.caches.line.merge(&line, None);
    }

    /// Set the font size of every text and shape text style.
    pub fn change_default_font_size(&mut self, size: f64) -> Result<(), ThemeError> {
        let size = Width::try_positive(size)
            .map_err(|_| out_of_domain("size", size, expect::POSITIVE))?;
        let text = TextStyle {
            size: Some(size),
            ..TextStyle::default()
        };
        let shape_text = ShapeTextStyle {
            size: Some(size),
            ..ShapeTextStyle::default()
        };
        self.caches.merge(&text_overlay(text, shape_text), None);
        Ok(())
    }

    /// Set the fonts of the light, regular and bold text variants.
    ///
    /// `light` goes to `light` and `<color>_light`, `regular` to the default
    /// style and `<color>`, `bold` to `bold` and `<color>_bold`, for every
    /// color of the palette.
    pub fn change_default_fonts(&mut self, light: Font, regular: Font, bold: Font) {
        let colors = self.caches.colors.list();
        let mut light_targets = vec!["light".to_string()];
        let mut regular_targets = vec![DEFAULT_STYLE_NAME.to_string()];
        let mut bold_targets = vec!["bold".to_string()];
        for color in &colors {
            light_targets.push(format!("{color}_light"));
            regular_targets.push(color.clone());
            bold_targets.push(format!("{color}_bold"));
        }

        for (font, targets) in [
            (light, light_targets),
            (regular, regular_targets),
            (bold, bold_targets),
        ] {
            let targets: Vec<&str> = targets.iter().map(String::as_str).collect();
            let text = TextStyle {
                font: Some(font.clone()),
                ..TextStyle::default()
            };
            let shape_text = ShapeTextStyle {
                font: Some(font),
                ..ShapeTextStyle::default()
            };
            self.caches.merge(&text_overlay(text, shape_text), Some(targets.as_slice()));
        }
    }

    // ========================================================================
    // Reports
    // ========================================================================

    pub fn theme_colors_text(&self) -> String {
        report::theme_colors(&self.caches)
    }

    pub fn print_theme_colors(&self) {
        println!("{}", self.theme_colors_text());
    }

    /// Table of style names against the six base style kinds.
    pub fn style_table(&self, max_columns: usize) -> Result<String, ThemeError> {
        report::style_table(&self.caches, max_columns)
    }

    pub fn print_style_table(&self, max_columns: usize) -> Result<(), ThemeError> {
        println!("{}", self.style_table(max_columns)?);
        Ok(())
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// The effective style for a drawing call: the system baseline, then the
    /// theme default, then the chosen style.
    pub fn resolve<S: ThemeStyle>(&self, style: StyleRef<'_, S>) -> Result<S, ThemeError> {
        let cache = self.styles::<S>();
        resolve_with(style, |name| cache.get(name))
    }

    /// Like [`resolve`](Self::resolve) for both styles of a shape, looking
    /// names up in the `kind` overrides first.
    pub fn resolve_shape(
        &self,
        kind: ShapeKind,
        style: StyleRef<'_, ShapeStyle>,
        text_style: StyleRef<'_, ShapeTextStyle>,
    ) -> Result<(ShapeStyle, ShapeTextStyle), ThemeError> {
        let shapes = self.shape_styles::<ShapeStyle>(kind);
        let texts = self.shape_styles::<ShapeTextStyle>(kind);
        Ok((
            resolve_with(style, |name| shapes.get(name))?,
            resolve_with(text_style, |name| texts.get(name))?,
        ))
    }
}

/// Which style a drawing call asked for.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleRef<'a, S> {
    /// The theme's default style.
    Default,
    /// A named style of the theme.
    Named(&'a str),
    /// A style given directly; unset fields come from the theme default.
    Inline(S),
}

impl<S> Default for StyleRef<'_, S> {
    fn default() -> Self {
        StyleRef::Default
    }
}

impl<'a, S> From<&'a str> for StyleRef<'a, S> {
    fn from(name: &'a str) -> Self {
        if name.is_empty() {
            StyleRef::Default
        } else {
            StyleRef::Named(name)
        }
    }
}

fn resolve_with<S: Style>(
    style: StyleRef<'_, S>,
    lookup: impl Fn(&str) -> Result<S, ThemeError>,
) -> Result<S, ThemeError> {
    let chosen = match style {
        StyleRef::Default => S::default(),
        StyleRef::Named(name) => lookup(name)?,
        StyleRef::Inline(style) => style,
    };
    let theme_default = match lookup(DEFAULT_STYLE_NAME) {
        Ok(style) => style,
        Err(ThemeError::StyleNotFound { .. } | ThemeError::ShapeStyleNotFound { .. }) => {
            S::default()
        }
        Err(e) => return Err(e),
    };
    Ok(S::system_default().merge(&theme_default.merge(&chosen)))
}

/// A bundle touching the generic text caches and every shape-kind text layer.
fn text_overlay(text: TextStyle, shape_text: ShapeTextStyle) -> ThemeStyles {
    let mut styles = ThemeStyles::new()
        .with_textstyle(text)
        .with_shapetextstyle(shape_text.clone());
    for kind in ShapeKind::ALL {
        styles.shape_text_styles.insert(*kind, shape_text.clone());
    }
    styles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{default_theme, essentials};
    use crate::style::{IconStyle, ImageStyle};
    use crate::types::LinePattern;

    #[test]
    fn empty_theme_is_uninitialized() {
        let theme = Theme::empty();
        assert!(!theme.is_initialized());
        assert!(theme.style_names().is_empty());
        assert!(theme.styles::<ShapeStyle>().get("").is_err());
    }

    #[test]
    fn new_theme_uses_default_official_theme() {
        let theme = Theme::new();
        assert!(theme.is_initialized());
        assert_eq!(theme.style_names().list()[0], "");
        let blue = theme.styles::<ShapeStyle>().get("blue").expect("blue style");
        assert_eq!(blue.fcolor(), Some(default_theme::BLUE));
        assert_eq!(
            theme.background_colors().get("").expect("background"),
            Color::rgb(255, 255, 255).with_default_alpha()
        );
    }

    #[test]
    fn unknown_official_theme_keeps_current_styles() {
        let mut theme = Theme::new();
        let err = theme.apply_official_theme("pastel").unwrap_err();
        assert_eq!(err.to_string(), "theme \"pastel\" is not supported");
        assert!(theme.styles::<ShapeStyle>().has("blue"));
    }

    #[test]
    fn applying_replaces_previous_names() {
        let mut theme = Theme::new();
        theme.apply_official_theme("essentials").expect("known theme");
        assert!(theme.styles::<ShapeStyle>().has("navy"));
        theme.apply_official_theme("default").expect("known theme");
        assert!(!theme.styles::<ShapeStyle>().has("navy"));
        assert!(!theme.theme_colors().has("navy"));
    }

    #[test]
    fn theme_colors_carry_alpha() {
        let mut theme = Theme::empty();
        theme.apply_official(OfficialTheme::Essentials);
        let charcoal = theme.theme_colors().get("charcoal").expect("palette color");
        assert_eq!(charcoal.alpha(), Some(1.0));
        assert_eq!(theme.theme_colors().list().len(), essentials::PALETTE.len());
    }

    #[test]
    fn arrow_fill_reaches_every_line_style() {
        let mut theme = Theme::new();
        theme.change_default_linearrow_fill(true);
        for name in theme.styles::<LineStyle>().list() {
            let line = theme.styles::<LineStyle>().get(&name).expect("listed");
            assert_eq!(line.ahfill(), Some(true), "{name}");
        }
    }

    #[test]
    fn font_size_must_be_positive() {
        let mut theme = Theme::new();
        let err = theme.change_default_font_size(0.0).unwrap_err();
        assert!(matches!(err, ThemeError::Validation(_)), "{err:?}");

        let small = ShapeTextStyle::new().with_size(10.0).expect("valid size");
        theme
            .shape_styles_mut::<ShapeTextStyle>(ShapeKind::Circle)
            .set("", small);

        theme.change_default_font_size(24.0).expect("positive size");
        assert_eq!(theme.styles::<TextStyle>().get("").expect("default").size(), Some(24.0));
        let circle = theme.shape_styles::<ShapeTextStyle>(ShapeKind::Circle);
        assert_eq!(circle.get_with_fallback("", false).expect("override").size(), Some(24.0));
    }

    #[test]
    fn fonts_follow_weight_suffixes() {
        let mut theme = Theme::new();
        theme.change_default_fonts(Font::SERIF_LIGHT, Font::SERIF_REGULAR, Font::SERIF_BOLD);

        let text = theme.styles::<TextStyle>();
        let font = |name: &str| text.get(name).expect("text style").font().cloned();
        assert_eq!(font(""), Some(Font::SERIF_REGULAR));
        assert_eq!(font("light"), Some(Font::SERIF_LIGHT));
        assert_eq!(font("red_bold"), Some(Font::SERIF_BOLD));
        assert_eq!(font("red"), Some(Font::SERIF_REGULAR));
    }

    #[test]
    fn fonts_leave_other_names_alone() {
        let mut theme = Theme::new();
        let note = TextStyle::new().with_font(Font::file("fonts/note.ttf"));
        theme.styles_mut::<TextStyle>().set("note", note.clone());
        theme.change_default_fonts(Font::SERIF_LIGHT, Font::SERIF_REGULAR, Font::SERIF_BOLD);
        assert_eq!(theme.styles::<TextStyle>().get("note"), Ok(note));
    }

    #[test]
    fn resolve_layers_inline_over_theme_default() {
        let theme = Theme::new();
        let inline = LineStyle::new().with_style(LinePattern::Dotted);
        let line = theme.resolve(StyleRef::Inline(inline)).expect("resolved");
        assert_eq!(line.style(), Some(LinePattern::Dotted));
        assert_eq!(line.width(), Some(2.0));
        assert_eq!(line.ahfill(), Some(false));
    }

    #[test]
    fn resolve_on_empty_theme_uses_system_defaults() {
        let theme = Theme::empty();
        let icon = theme.resolve::<IconStyle>(StyleRef::Default).expect("resolved");
        assert_eq!(icon, IconStyle::system_default());
        let err = theme.resolve::<ImageStyle>("red".into()).unwrap_err();
        assert!(matches!(err, ThemeError::StyleNotFound { .. }));
    }

    #[test]
    fn resolve_shape_prefers_kind_overrides() {
        let mut theme = Theme::new();
        let purple = ShapeStyle::new().with_fcolor((128, 0, 128)).expect("valid color");
        theme
            .shape_styles_mut::<ShapeStyle>(ShapeKind::Star)
            .set("blue", purple);

        let (star, _) = theme
            .resolve_shape(ShapeKind::Star, "blue".into(), StyleRef::Default)
            .expect("resolved");
        let (circle, text) = theme
            .resolve_shape(ShapeKind::Circle, "blue".into(), "blue".into())
            .expect("resolved");
        assert_eq!(star.fcolor(), Some(Color::rgb(128, 0, 128)));
        assert_eq!(circle.fcolor(), Some(default_theme::BLUE));
        assert_eq!(text.color(), Some(default_theme::BLUE));
    }
}
