//! Strongly-typed style values (validated newtypes and literal enums).
//!
//! Every value stored in a style has already passed its domain check:
//! - alpha in `0.0..=1.0`
//! - widths and sizes finite and `>= 0`
//! - angles in `0..=360`
//! - colors with `u8` channels and an optional validated alpha
//!
//! Raw user input enters through `try_new` / [`IntoColor`] / `parse`.

use std::fmt;

use glam::DVec2;

use crate::errors::ValidationError;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
    /// Value is zero or negative when positive required
    NotPositive,
    /// Value falls outside an inclusive range
    OutOfRange { min: f64, max: f64 },
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
            NumericError::NotPositive => write!(f, "value is not positive"),
            NumericError::OutOfRange { min, max } => {
                write!(f, "value is outside {min}~{max}")
            }
        }
    }
}

impl std::error::Error for NumericError {}

#[inline]
fn finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

#[inline]
fn in_range(val: f64, min: f64, max: f64) -> Result<f64, NumericError> {
    let val = finite(val)?;
    if val < min || val > max {
        Err(NumericError::OutOfRange { min, max })
    } else {
        Ok(val)
    }
}

/// Expected-domain phrases used in validation messages.
pub(crate) mod expect {
    pub const ALPHA: &str = "a float between 0.0~1.0";
    pub const NON_NEGATIVE: &str = "an int/float >= 0";
    pub const POSITIVE: &str = "an int/float > 0";
    pub const ANGLE: &str = "an int/float between 0~360";
    pub const FINITE_PAIR: &str = "a pair of finite floats";
    pub const COLOR: &str =
        "(R, G, B) or (R, G, B, A) where RGB is int 0~255 and A is float 0.0~1.0";
}

pub(crate) fn out_of_domain(
    field: &str,
    value: impl fmt::Display,
    expected: &'static str,
) -> ValidationError {
    ValidationError::OutOfDomain {
        field: field.to_string(),
        value: value.to_string(),
        expected,
    }
}

/// Opacity in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Alpha(f64);

impl Alpha {
    pub const OPAQUE: Alpha = Alpha(1.0);
    pub const TRANSPARENT: Alpha = Alpha(0.0);

    /// Const-friendly, unchecked. Use `try_new` for user-provided values.
    #[inline]
    pub(crate) const fn new_unchecked(val: f64) -> Alpha {
        Alpha(val)
    }

    #[inline]
    pub fn try_new(val: f64) -> Result<Alpha, NumericError> {
        in_range(val, 0.0, 1.0).map(Alpha)
    }

    pub(crate) fn validate(field: &str, val: f64) -> Result<Alpha, ValidationError> {
        Alpha::try_new(val).map_err(|_| out_of_domain(field, val, expect::ALPHA))
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

/// Non-negative finite magnitude: line widths, arrow head scale, font size.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Width(f64);

impl Width {
    pub const ZERO: Width = Width(0.0);

    #[inline]
    pub(crate) const fn new_unchecked(val: f64) -> Width {
        Width(val)
    }

    #[inline]
    pub fn try_new(val: f64) -> Result<Width, NumericError> {
        let val = finite(val)?;
        if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Width(val))
        }
    }

    /// Strictly positive variant, used where zero makes no sense (font size changes).
    #[inline]
    pub fn try_positive(val: f64) -> Result<Width, NumericError> {
        let val = finite(val)?;
        if val <= 0.0 {
            Err(NumericError::NotPositive)
        } else {
            Ok(Width(val))
        }
    }

    pub(crate) fn validate(field: &str, val: f64) -> Result<Width, ValidationError> {
        Width::try_new(val).map_err(|_| out_of_domain(field, val, expect::NON_NEGATIVE))
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

/// Angle in degrees, `0..=360`
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    #[inline]
    pub fn try_new(val: f64) -> Result<Angle, NumericError> {
        in_range(val, 0.0, 360.0).map(Angle)
    }

    pub(crate) fn validate(field: &str, val: f64) -> Result<Angle, ValidationError> {
        Angle::try_new(val).map_err(|_| out_of_domain(field, val, expect::ANGLE))
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub(crate) fn validate_shift(field: &str, shift: DVec2) -> Result<DVec2, ValidationError> {
    if shift.is_finite() {
        Ok(shift)
    } else {
        Err(out_of_domain(
            field,
            format_args!("({}, {})", shift.x, shift.y),
            expect::FINITE_PAIR,
        ))
    }
}

/// RGB color with an optional alpha.
///
/// A missing alpha means "as given": palettes promote it to opaque with
/// [`Color::with_default_alpha`], styles keep it as-is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: Option<Alpha>,
}

impl Color {
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: None }
    }

    #[inline]
    pub(crate) const fn rgba_unchecked(r: u8, g: u8, b: u8, a: f64) -> Color {
        Color {
            r,
            g,
            b,
            a: Some(Alpha::new_unchecked(a)),
        }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Result<Color, NumericError> {
        Ok(Color {
            r,
            g,
            b,
            a: Some(Alpha::try_new(a)?),
        })
    }

    /// Validate integer channels and an optional alpha, reporting `field` on failure.
    pub fn try_from_channels(
        field: &str,
        r: i32,
        g: i32,
        b: i32,
        a: Option<f64>,
    ) -> Result<Color, ValidationError> {
        let reject = || {
            let shown = match a {
                Some(a) => format!("({r}, {g}, {b}, {a})"),
                None => format!("({r}, {g}, {b})"),
            };
            out_of_domain(field, shown, expect::COLOR)
        };
        let channel = |c: i32| u8::try_from(c).map_err(|_| reject());
        let alpha = match a {
            Some(a) => Some(Alpha::try_new(a).map_err(|_| reject())?),
            None => None,
        };
        Ok(Color {
            r: channel(r)?,
            g: channel(g)?,
            b: channel(b)?,
            a: alpha,
        })
    }

    #[inline]
    pub fn red(self) -> u8 {
        self.r
    }

    #[inline]
    pub fn green(self) -> u8 {
        self.g
    }

    #[inline]
    pub fn blue(self) -> u8 {
        self.b
    }

    #[inline]
    pub fn alpha(self) -> Option<f64> {
        self.a.map(Alpha::raw)
    }

    /// Promote a missing alpha to 1.0.
    pub fn with_default_alpha(self) -> Color {
        Color {
            a: Some(self.a.unwrap_or(Alpha::OPAQUE)),
            ..self
        }
    }

    pub fn to_rgba(self) -> (u8, u8, u8, f64) {
        (self.r, self.g, self.b, self.alpha().unwrap_or(1.0))
    }

    pub fn is_transparent(self) -> bool {
        self.a == Some(Alpha::TRANSPARENT)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.a {
            Some(a) => write!(f, "({}, {}, {}, {:?})", self.r, self.g, self.b, a.raw()),
            None => write!(f, "({}, {}, {})", self.r, self.g, self.b),
        }
    }
}

/// Anything a color field accepts. `None` clears the field.
pub trait IntoColor {
    fn into_color(self, field: &str) -> Result<Option<Color>, ValidationError>;
}

impl IntoColor for Color {
    fn into_color(self, _field: &str) -> Result<Option<Color>, ValidationError> {
        Ok(Some(self))
    }
}

impl IntoColor for Option<Color> {
    fn into_color(self, _field: &str) -> Result<Option<Color>, ValidationError> {
        Ok(self)
    }
}

impl IntoColor for (i32, i32, i32) {
    fn into_color(self, field: &str) -> Result<Option<Color>, ValidationError> {
        let (r, g, b) = self;
        Color::try_from_channels(field, r, g, b, None).map(Some)
    }
}

impl IntoColor for (i32, i32, i32, f64) {
    fn into_color(self, field: &str) -> Result<Option<Color>, ValidationError> {
        let (r, g, b, a) = self;
        Color::try_from_channels(field, r, g, b, Some(a)).map(Some)
    }
}

/// Declares a closed set of string literals as a `Copy` enum with
/// field-aware parsing.
macro_rules! literal_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            /// Parse a literal, naming `field` in the error.
            pub fn parse(field: &str, value: &str) -> Result<Self, $crate::errors::ValidationError> {
                match value {
                    $($text => Ok($name::$variant),)+
                    _ => Err($crate::errors::ValidationError::UnsupportedLiteral {
                        field: field.to_string(),
                        value: value.to_string(),
                        supported: Self::ALL
                            .iter()
                            .map(|v| format!("\"{}\"", v.as_str()))
                            .collect::<Vec<_>>()
                            .join(", "),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::errors::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse($field, s)
            }
        }
    };
}

pub(crate) use literal_enum;

literal_enum! {
    /// Horizontal alignment
    HAlign as "halign" {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

literal_enum! {
    /// Vertical alignment
    VAlign as "valign" {
        Bottom => "bottom",
        Center => "center",
        Top => "top",
    }
}

literal_enum! {
    /// Stroke dash pattern
    LinePattern as "linestyle" {
        Solid => "solid",
        Dashed => "dashed",
        Dotted => "dotted",
        DashDot => "dashdot",
    }
}

literal_enum! {
    /// Icon glyph weight
    IconWeight as "iconstyle" {
        Thin => "thin",
        Light => "light",
        Regular => "regular",
        Bold => "bold",
        Fill => "fill",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Numeric newtypes ====================

    #[test]
    fn alpha_accepts_closed_unit_interval() {
        assert_eq!(Alpha::try_new(0.0), Ok(Alpha::TRANSPARENT));
        assert_eq!(Alpha::try_new(1.0), Ok(Alpha::OPAQUE));
        assert!(Alpha::try_new(0.5).is_ok());
    }

    #[test]
    fn alpha_rejects_out_of_range() {
        assert_eq!(
            Alpha::try_new(1.01),
            Err(NumericError::OutOfRange { min: 0.0, max: 1.0 })
        );
        assert!(Alpha::try_new(-0.1).is_err());
        assert_eq!(Alpha::try_new(f64::NAN), Err(NumericError::NaN));
    }

    #[test]
    fn width_rejects_negative_and_infinite() {
        assert_eq!(Width::try_new(-1.0), Err(NumericError::Negative));
        assert_eq!(Width::try_new(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(Width::try_new(0.0), Ok(Width::ZERO));
    }

    #[test]
    fn width_positive_rejects_zero() {
        assert_eq!(Width::try_positive(0.0), Err(NumericError::NotPositive));
        assert!(Width::try_positive(12.0).is_ok());
    }

    #[test]
    fn angle_bounds_are_inclusive() {
        assert!(Angle::try_new(0.0).is_ok());
        assert!(Angle::try_new(360.0).is_ok());
        assert!(Angle::try_new(360.5).is_err());
    }

    #[test]
    fn validation_error_names_field_and_value() {
        let err = Width::validate("ShapeStyle.lwidth", -2.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("ShapeStyle.lwidth"), "message was: {msg}");
        assert!(msg.contains("-2"), "message was: {msg}");
    }

    // ==================== Color ====================

    #[test]
    fn color_accepts_every_valid_channel() {
        for c in [0, 1, 127, 254, 255] {
            let color = Color::try_from_channels("color", c, c, c, None);
            assert!(color.is_ok(), "channel {c} should be accepted");
        }
    }

    #[test]
    fn color_rejects_channel_out_of_range() {
        for (r, g, b) in [(256, 0, 0), (0, -1, 0), (0, 0, 1000)] {
            let result = (r, g, b).into_color("TextStyle.color");
            assert!(result.is_err(), "({r}, {g}, {b}) should be rejected");
        }
    }

    #[test]
    fn color_rejects_bad_alpha() {
        let err = (10, 20, 30, 1.5).into_color("color").unwrap_err();
        assert!(err.to_string().contains("(10, 20, 30, 1.5)"));
    }

    #[test]
    fn default_alpha_is_only_promotion() {
        let c = Color::rgb(1, 2, 3);
        assert_eq!(c.alpha(), None);
        assert_eq!(c.with_default_alpha().alpha(), Some(1.0));

        let half = Color::rgba(1, 2, 3, 0.5).unwrap();
        assert_eq!(half.with_default_alpha(), half);
    }

    #[test]
    fn color_display_matches_tuple_form() {
        assert_eq!(Color::rgb(239, 95, 95).to_string(), "(239, 95, 95)");
        assert_eq!(
            Color::rgb(239, 95, 95).with_default_alpha().to_string(),
            "(239, 95, 95, 1.0)"
        );
    }

    // ==================== Literal enums ====================

    #[test]
    fn literals_round_trip_through_strings() {
        for h in HAlign::ALL {
            assert_eq!(h.as_str().parse::<HAlign>(), Ok(*h));
        }
        assert_eq!("dashdot".parse::<LinePattern>(), Ok(LinePattern::DashDot));
    }

    #[test]
    fn unsupported_literal_lists_choices() {
        let err = VAlign::parse("TextStyle.valign", "middle").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("TextStyle.valign"));
        assert!(msg.contains("\"middle\""));
        assert!(msg.contains("\"bottom\", \"center\", \"top\""));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn off_byte() -> impl Strategy<Value = i32> {
        prop_oneof![i32::MIN..0, 256..=i32::MAX]
    }

    proptest! {
        #[test]
        fn color_keeps_channels_in_byte_range(
            r in 0i32..=255,
            g in 0i32..=255,
            b in 0i32..=255,
        ) {
            let color = Color::try_from_channels("color", r, g, b, None).expect("in range");
            prop_assert_eq!(
                (color.red(), color.green(), color.blue()),
                (r as u8, g as u8, b as u8)
            );
            prop_assert_eq!(color.alpha(), None);
        }

        #[test]
        fn color_rejects_any_channel_outside_byte_range(
            bad in off_byte(),
            slot in 0usize..3,
            good in 0i32..=255,
        ) {
            let mut channels = [good; 3];
            channels[slot] = bad;
            let [r, g, b] = channels;
            let err = Color::try_from_channels("LineStyle.color", r, g, b, None).unwrap_err();
            prop_assert!(err.to_string().contains("LineStyle.color"));
        }

        #[test]
        fn color_alpha_follows_unit_interval(a in 0.0f64..=1.0, over in 1.0f64..100.0) {
            prop_assert!((1, 2, 3, a).into_color("color").is_ok());
            prop_assume!(over > 1.0);
            prop_assert!((1, 2, 3, over).into_color("color").is_err());
            prop_assert!((1, 2, 3, -over).into_color("color").is_err());
        }
    }
}
