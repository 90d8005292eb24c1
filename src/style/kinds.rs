//! The six style kinds.

use super::defaults;
use super::style_struct;
use crate::types::{HAlign, IconWeight, LinePattern, VAlign};

style_struct! {
    /// Styling of icon glyphs.
    IconStyle (system default: defaults::icon) {
        /// Glyph weight
        style => with_style: literal(IconWeight),
        color => with_color: color,
        alpha => with_alpha: alpha,
        halign => with_halign: literal(HAlign),
        valign => with_valign: literal(VAlign),
    }
}

style_struct! {
    /// Styling of embedded raster images and their border.
    ImageStyle (system default: defaults::image) {
        halign => with_halign: literal(HAlign),
        valign => with_valign: literal(VAlign),
        /// Border width
        lwidth => with_lwidth: width,
        lstyle => with_lstyle: literal(LinePattern),
        lcolor => with_lcolor: color,
        /// Color the image is painted with (only meaningful for masks)
        fcolor => with_fcolor: color,
        alpha => with_alpha: alpha,
    }
}

style_struct! {
    /// Styling of lines and arrows.
    LineStyle (system default: defaults::line) {
        width => with_width: width,
        color => with_color: color,
        alpha => with_alpha: alpha,
        style => with_style: literal(LinePattern),
        /// Fill the arrow head
        ahfill => with_ahfill: flag,
        /// Arrow head scale
        ahscale => with_ahscale: width,
    }
}

style_struct! {
    /// Styling of closed shapes (outline and fill).
    ShapeStyle (system default: defaults::shape) {
        halign => with_halign: literal(HAlign),
        valign => with_valign: literal(VAlign),
        alpha => with_alpha: alpha,
        lwidth => with_lwidth: width,
        lcolor => with_lcolor: color,
        lstyle => with_lstyle: literal(LinePattern),
        fcolor => with_fcolor: color,
    }
}

style_struct! {
    /// Styling of the text drawn inside a shape.
    ShapeTextStyle (system default: defaults::shape_text) {
        alpha => with_alpha: alpha,
        color => with_color: color,
        size => with_size: width,
        halign => with_halign: literal(HAlign),
        valign => with_valign: literal(VAlign),
        font => with_font: font,
        /// Rotation in degrees, added to the shape's own angle
        angle => with_angle: angle,
        /// Keep text upright when the shape is rotated past 90 degrees
        flip => with_flip: flag,
        /// Offset from the shape center
        xy_shift => with_xy_shift: shift,
    }
}

style_struct! {
    /// Styling of free-standing text and its optional background box.
    TextStyle (system default: defaults::text) {
        alpha => with_alpha: alpha,
        color => with_color: color,
        size => with_size: width,
        halign => with_halign: literal(HAlign),
        valign => with_valign: literal(VAlign),
        font => with_font: font,
        bgalpha => with_bgalpha: alpha,
        bglcolor => with_bglcolor: color,
        bglstyle => with_bglstyle: literal(LinePattern),
        bglwidth => with_bglwidth: width,
        bgfcolor => with_bgfcolor: color,
    }
}
