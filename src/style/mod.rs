//! Style value objects.
//!
//! One struct per visual kind. Every field is optional: `None` means
//! "unset, inherit from whatever this style is merged onto". Values are
//! validated when set, so a stored style is always in-domain.

mod bundle;
mod defaults;
mod kinds;

pub use bundle::{DefaultStyles, ShapeKind, ThemeStyles};
pub use kinds::{IconStyle, ImageStyle, LineStyle, ShapeStyle, ShapeTextStyle, TextStyle};

use std::fmt::Debug;

/// Common behavior of the six style kinds.
pub trait Style: Clone + Default + PartialEq + Debug {
    /// Type name used in diagnostics, e.g. `"ShapeStyle"`.
    const KIND: &'static str;

    /// Overlay `primary` on top of `self`: set fields of `primary` win,
    /// unset ones fall back to `self`. Neither operand is modified.
    fn merge(&self, primary: &Self) -> Self;

    /// Built-in baseline every resolved style is merged onto.
    fn system_default() -> Self;
}

#[inline]
pub(crate) fn overlay<T: Clone>(primary: &Option<T>, base: &Option<T>) -> Option<T> {
    primary.as_ref().or(base.as_ref()).cloned()
}

/// Storage type of a style field by validation kind.
macro_rules! field_type {
    (color) => { Option<$crate::types::Color> };
    (alpha) => { Option<$crate::types::Alpha> };
    (width) => { Option<$crate::types::Width> };
    (angle) => { Option<$crate::types::Angle> };
    (shift) => { Option<glam::DVec2> };
    (flag) => { Option<bool> };
    (font) => { Option<$crate::fonts::Font> };
    (literal $ty:ty) => { Option<$ty> };
}

/// Getter plus `with_*` builder for one field.
macro_rules! field_accessors {
    ($owner:ident, $field:ident, $with:ident, color) => {
        pub fn $field(&self) -> Option<$crate::types::Color> {
            self.$field
        }

        pub fn $with(
            self,
            value: impl $crate::types::IntoColor,
        ) -> Result<Self, $crate::errors::ValidationError> {
            let $field = value.into_color(concat!(stringify!($owner), ".", stringify!($field)))?;
            Ok(Self { $field, ..self })
        }
    };
    ($owner:ident, $field:ident, $with:ident, alpha) => {
        $crate::style::field_accessors!(@number $owner, $field, $with, $crate::types::Alpha);
    };
    ($owner:ident, $field:ident, $with:ident, width) => {
        $crate::style::field_accessors!(@number $owner, $field, $with, $crate::types::Width);
    };
    ($owner:ident, $field:ident, $with:ident, angle) => {
        $crate::style::field_accessors!(@number $owner, $field, $with, $crate::types::Angle);
    };
    ($owner:ident, $field:ident, $with:ident, shift) => {
        pub fn $field(&self) -> Option<glam::DVec2> {
            self.$field
        }

        pub fn $with(
            self,
            value: impl Into<Option<glam::DVec2>>,
        ) -> Result<Self, $crate::errors::ValidationError> {
            let $field = match value.into() {
                Some(v) => Some($crate::types::validate_shift(
                    concat!(stringify!($owner), ".", stringify!($field)),
                    v,
                )?),
                None => None,
            };
            Ok(Self { $field, ..self })
        }
    };
    ($owner:ident, $field:ident, $with:ident, flag) => {
        pub fn $field(&self) -> Option<bool> {
            self.$field
        }

        pub fn $with(self, value: impl Into<Option<bool>>) -> Self {
            Self { $field: value.into(), ..self }
        }
    };
    ($owner:ident, $field:ident, $with:ident, font) => {
        pub fn $field(&self) -> Option<&$crate::fonts::Font> {
            self.$field.as_ref()
        }

        pub fn $with(self, value: impl Into<Option<$crate::fonts::Font>>) -> Self {
            Self { $field: value.into(), ..self }
        }
    };
    ($owner:ident, $field:ident, $with:ident, literal $ty:ty) => {
        pub fn $field(&self) -> Option<$ty> {
            self.$field
        }

        pub fn $with(self, value: impl Into<Option<$ty>>) -> Self {
            Self { $field: value.into(), ..self }
        }
    };
    (@number $owner:ident, $field:ident, $with:ident, $ty:ty) => {
        pub fn $field(&self) -> Option<f64> {
            self.$field.map(|v| v.raw())
        }

        pub fn $with(
            self,
            value: impl Into<Option<f64>>,
        ) -> Result<Self, $crate::errors::ValidationError> {
            let $field = match value.into() {
                Some(v) => Some(<$ty>::validate(
                    concat!(stringify!($owner), ".", stringify!($field)),
                    v,
                )?),
                None => None,
            };
            Ok(Self { $field, ..self })
        }
    };
}

/// Declares a style struct: fields, accessors, and the [`Style`] impl.
macro_rules! style_struct {
    (
        $(#[$meta:meta])*
        $name:ident (system default: $default:path) {
            $( $(#[$fmeta:meta])* $field:ident => $with:ident : $kind:ident $(($arg:ty))? ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            $( $(#[$fmeta])* pub(crate) $field: $crate::style::field_type!($kind $($arg)?), )+
        }

        impl $name {
            /// A style with every field unset.
            pub fn new() -> Self {
                Self::default()
            }

            $( $crate::style::field_accessors!($name, $field, $with, $kind $($arg)?); )+
        }

        impl $crate::style::Style for $name {
            const KIND: &'static str = stringify!($name);

            fn merge(&self, primary: &Self) -> Self {
                Self {
                    $( $field: $crate::style::overlay(&primary.$field, &self.$field), )+
                }
            }

            fn system_default() -> Self {
                $default()
            }
        }
    };
}

pub(crate) use {field_accessors, field_type, style_struct};
