//! Built-in themes.
//!
//! Each theme is generated from three compact templates (regular, light
//! and bold weights) plus a palette. The generator derives:
//!
//! - the default style from the regular template,
//! - `light`, `bold`, `flat`, `solid*` and `dashed*` variants,
//! - per palette color: `<c>`, `<c>_light`, `<c>_bold`, `<c>_flat`,
//!   `<c>_solid{,_light,_bold}` and `<c>_dashed{,_light,_bold}`.

use std::fmt;
use std::str::FromStr;

use crate::colors::TRANSPARENT;
use crate::errors::ThemeError;
use crate::fonts::Font;
use crate::style::{
    DefaultStyles, IconStyle, ImageStyle, LineStyle, ShapeStyle, ShapeTextStyle, TextStyle,
    ThemeStyles,
};
use crate::theme::ThemeDefinition;
use crate::theme::defaults::{DEFAULT_BACKGROUND_COLOR, DEFAULT_SOURCE_CODE_FONT};
use crate::types::{Color, HAlign, IconWeight, LinePattern, VAlign, Width};

/// The themes shipped with the library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OfficialTheme {
    Default,
    Essentials,
    Monochrome,
}

impl OfficialTheme {
    pub const ALL: [OfficialTheme; 3] = [
        OfficialTheme::Default,
        OfficialTheme::Essentials,
        OfficialTheme::Monochrome,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            OfficialTheme::Default => "default",
            OfficialTheme::Essentials => "essentials",
            OfficialTheme::Monochrome => "monochrome",
        }
    }

    pub(crate) fn definition(self) -> ThemeDefinition {
        use crate::colors::{default_theme as dt, essentials as es, monochrome as mono};

        match self {
            OfficialTheme::Default => build(
                Weights::new(dt::BLACK, dt::BLUE, dt::WHITE),
                dt::PALETTE,
                dt::BLACK,
                dt::BLUE,
            ),
            OfficialTheme::Essentials => build(
                Weights::new(es::CHARCOAL, es::LIGHTBLUE, es::WHITE),
                es::PALETTE,
                es::CHARCOAL,
                es::LIGHTBLUE,
            ),
            OfficialTheme::Monochrome => build(
                Weights::new(mono::BLACK, mono::WHITE, mono::BLACK),
                mono::PALETTE,
                mono::BLACK,
                mono::BLACK,
            ),
        }
    }
}

impl fmt::Display for OfficialTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OfficialTheme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OfficialTheme::ALL
            .into_iter()
            .find(|theme| theme.name() == s)
            .ok_or_else(|| ThemeError::UnsupportedTheme {
                name: s.to_string(),
            })
    }
}

/// Names accepted by `Theme::apply_official_theme`.
pub fn list_official_themes() -> Vec<&'static str> {
    OfficialTheme::ALL.iter().map(|t| t.name()).collect()
}

// ============================================================================
// Templates
// ============================================================================

#[derive(Clone, Debug)]
struct Template {
    icon_style: IconWeight,
    icon_color: Color,
    image_line_width: Width,
    line_style: LinePattern,
    line_width: Width,
    line_color: Color,
    arrowhead_scale: Width,
    shape_line_style: LinePattern,
    shape_line_width: Width,
    shape_line_color: Color,
    shape_fill_color: Color,
    shapetext_font: Font,
    shapetext_size: Width,
    shapetext_color: Color,
    text_font: Font,
    text_size: Width,
    text_color: Color,
}

const FONT_SIZE: Width = Width::new_unchecked(16.0);

/// Regular, light and bold templates sharing one ink and fill color.
struct Weights {
    regular: Template,
    light: Template,
    bold: Template,
}

impl Weights {
    /// `ink` colors lines and text; `on_fill` colors text of the light and bold weights.
    fn new(ink: Color, fill: Color, on_fill: Color) -> Self {
        let base = |icon_style: IconWeight,
                    line_width: f64,
                    arrowhead_scale: f64,
                    shape_line_width: f64,
                    font: Font,
                    shapetext_color: Color| {
            Template {
                icon_style,
                icon_color: ink,
                image_line_width: Width::ZERO,
                line_style: LinePattern::Solid,
                line_width: Width::new_unchecked(line_width),
                line_color: ink,
                arrowhead_scale: Width::new_unchecked(arrowhead_scale),
                shape_line_style: LinePattern::Solid,
                shape_line_width: Width::new_unchecked(shape_line_width),
                shape_line_color: ink,
                shape_fill_color: fill,
                shapetext_font: font.clone(),
                shapetext_size: FONT_SIZE,
                shapetext_color,
                text_font: font,
                text_size: FONT_SIZE,
                text_color: ink,
            }
        };
        Weights {
            regular: base(IconWeight::Light, 2.0, 20.0, 1.5, Font::SANSSERIF_REGULAR, ink),
            light: base(IconWeight::Thin, 1.0, 20.0, 0.75, Font::SANSSERIF_LIGHT, on_fill),
            bold: base(IconWeight::Regular, 3.0, 30.0, 2.25, Font::SANSSERIF_BOLD, on_fill),
        }
    }
}

// ============================================================================
// Generation
// ============================================================================

fn build(
    weights: Weights,
    palette: &[(&str, Color)],
    default_line: Color,
    default_fill: Color,
) -> ThemeDefinition {
    let Weights {
        regular,
        light,
        bold,
    } = &weights;

    let mut named: Vec<(String, ThemeStyles)> = vec![
        (String::from("light"), ThemeStyles::from(generate(light, true))),
        (String::from("bold"), ThemeStyles::from(generate(bold, true))),
        (String::from("flat"), flat(regular, default_fill)),
        (String::from("solid"), outlined(solid(regular), default_line)),
        (String::from("solid_light"), outlined(solid(light), default_line)),
        (String::from("solid_bold"), outlined(solid(bold), default_line)),
        (String::from("dashed"), outlined(dashed(regular), default_line)),
        (String::from("dashed_light"), outlined(dashed(light), default_line)),
        (String::from("dashed_bold"), outlined(dashed(bold), default_line)),
    ];

    for &(name, color) in palette {
        for (suffix, template) in [("", regular), ("_light", light), ("_bold", bold)] {
            named.push((format!("{name}{suffix}"), colored(template, color, default_line)));
        }
        named.push((format!("{name}_flat"), flat(regular, color)));
        for (suffix, template) in [("", regular), ("_light", light), ("_bold", bold)] {
            named.push((format!("{name}_solid{suffix}"), outlined(solid(template), color)));
        }
        for (suffix, template) in [("", regular), ("_light", light), ("_bold", bold)] {
            named.push((format!("{name}_dashed{suffix}"), outlined(dashed(template), color)));
        }
    }

    ThemeDefinition {
        default_style: generate(regular, true),
        named_styles: named,
        theme_colors: palette
            .iter()
            .map(|&(name, color)| (name.to_string(), color))
            .collect(),
        background_color: DEFAULT_BACKGROUND_COLOR.with_default_alpha(),
        source_code_font: DEFAULT_SOURCE_CODE_FONT,
    }
}

/// Everything in `color`, keeping the theme's shape outline.
fn colored(template: &Template, color: Color, shape_line: Color) -> ThemeStyles {
    let t = Template {
        icon_color: color,
        image_line_width: template.shape_line_width,
        line_color: color,
        shape_line_color: shape_line,
        shape_fill_color: color,
        shapetext_color: color,
        text_color: color,
        ..template.clone()
    };
    generate(&t, false).into()
}

/// Solid fills without outline contrast; leaves lines and text alone.
fn flat(template: &Template, color: Color) -> ThemeStyles {
    let t = Template {
        icon_style: IconWeight::Fill,
        icon_color: color,
        image_line_width: Width::ZERO,
        line_color: color,
        shape_line_color: color,
        shape_fill_color: color,
        shapetext_color: color,
        text_color: color,
        ..template.clone()
    };
    let mut styles: ThemeStyles = generate(&t, false).into();
    styles.linestyle = None;
    styles.shapetextstyle = None;
    styles.textstyle = None;
    styles
}

fn solid(template: &Template) -> Template {
    Template {
        image_line_width: template.shape_line_width,
        shape_fill_color: TRANSPARENT,
        ..template.clone()
    }
}

fn dashed(template: &Template) -> Template {
    Template {
        line_style: LinePattern::Dashed,
        shape_line_style: LinePattern::Dashed,
        ..solid(template)
    }
}

/// Outline-only variant in `color`; icons and text are left alone.
fn outlined(template: Template, color: Color) -> ThemeStyles {
    let t = Template {
        line_color: color,
        shape_line_color: color,
        ..template
    };
    let mut styles: ThemeStyles = generate(&t, false).into();
    styles.iconstyle = None;
    styles.shapetextstyle = None;
    styles.textstyle = None;
    styles
}

fn generate(t: &Template, is_default: bool) -> DefaultStyles {
    let image_fill = if is_default || t.shape_fill_color == TRANSPARENT {
        None
    } else {
        Some(t.shape_fill_color)
    };
    let center = (Some(HAlign::Center), Some(VAlign::Center));

    DefaultStyles {
        iconstyle: IconStyle {
            style: Some(t.icon_style),
            color: Some(t.icon_color),
            halign: center.0,
            valign: center.1,
            ..IconStyle::default()
        },
        imagestyle: ImageStyle {
            lwidth: Some(t.image_line_width),
            lstyle: Some(t.shape_line_style),
            lcolor: Some(t.shape_line_color),
            fcolor: image_fill,
            halign: center.0,
            valign: center.1,
            ..ImageStyle::default()
        },
        linestyle: LineStyle {
            width: Some(t.line_width),
            color: Some(t.line_color),
            style: Some(t.line_style),
            ahscale: Some(t.arrowhead_scale),
            ..LineStyle::default()
        },
        shapestyle: ShapeStyle {
            lwidth: Some(t.shape_line_width),
            lstyle: Some(t.shape_line_style),
            lcolor: Some(t.shape_line_color),
            fcolor: Some(t.shape_fill_color),
            halign: center.0,
            valign: center.1,
            ..ShapeStyle::default()
        },
        shapetextstyle: ShapeTextStyle {
            font: Some(t.shapetext_font.clone()),
            size: Some(t.shapetext_size),
            color: Some(t.shapetext_color),
            halign: center.0,
            valign: center.1,
            ..ShapeTextStyle::default()
        },
        textstyle: TextStyle {
            font: Some(t.text_font.clone()),
            size: Some(t.text_size),
            color: Some(t.text_color),
            halign: center.0,
            valign: center.1,
            ..TextStyle::default()
        },
        shape_styles: Default::default(),
        shape_text_styles: Default::default(),
    }
}
