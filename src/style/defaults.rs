//! Built-in baseline styles, used beneath the theme's own defaults.

use super::kinds::{IconStyle, ImageStyle, LineStyle, ShapeStyle, ShapeTextStyle, TextStyle};
use crate::colors::web::{BLACK, WHITE};
use crate::fonts::Font;
use crate::types::{HAlign, IconWeight, LinePattern, VAlign, Width};

pub const FONT_SIZE: Width = Width::new_unchecked(16.0);
pub const LINE_WIDTH: Width = Width::new_unchecked(1.0);
pub const ARROW_HEAD_SCALE: Width = Width::new_unchecked(20.0);

pub(super) fn icon() -> IconStyle {
    IconStyle {
        style: Some(IconWeight::Thin),
        color: Some(BLACK),
        alpha: None,
        halign: Some(HAlign::Center),
        valign: Some(VAlign::Center),
    }
}

pub(super) fn image() -> ImageStyle {
    ImageStyle {
        halign: Some(HAlign::Center),
        valign: Some(VAlign::Center),
        lwidth: Some(Width::ZERO),
        lstyle: Some(LinePattern::Solid),
        lcolor: Some(BLACK),
        fcolor: None,
        alpha: None,
    }
}

pub(super) fn line() -> LineStyle {
    LineStyle {
        width: Some(LINE_WIDTH),
        color: Some(BLACK),
        alpha: None,
        style: Some(LinePattern::Solid),
        ahfill: Some(false),
        ahscale: Some(ARROW_HEAD_SCALE),
    }
}

pub(super) fn shape() -> ShapeStyle {
    ShapeStyle {
        halign: Some(HAlign::Center),
        valign: Some(VAlign::Center),
        alpha: None,
        lwidth: Some(LINE_WIDTH),
        lcolor: Some(BLACK),
        lstyle: Some(LinePattern::Solid),
        fcolor: Some(WHITE),
    }
}

pub(super) fn shape_text() -> ShapeTextStyle {
    ShapeTextStyle {
        alpha: None,
        color: Some(BLACK),
        size: Some(FONT_SIZE),
        halign: Some(HAlign::Center),
        valign: Some(VAlign::Center),
        font: Some(Font::SANSSERIF_REGULAR),
        angle: None,
        flip: Some(false),
        xy_shift: None,
    }
}

// Background line fields only apply once a background is requested.
pub(super) fn text() -> TextStyle {
    TextStyle {
        alpha: None,
        color: Some(BLACK),
        size: Some(FONT_SIZE),
        halign: Some(HAlign::Center),
        valign: Some(VAlign::Center),
        font: Some(Font::SANSSERIF_REGULAR),
        bgalpha: None,
        bglcolor: Some(BLACK),
        bglstyle: Some(LinePattern::Solid),
        bglwidth: Some(LINE_WIDTH),
        bgfcolor: None,
    }
}
