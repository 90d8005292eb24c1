//! Themes and named styles for code-first illustrations.
//!
//! A [`Theme`] holds one cache of named styles per visual kind (icons,
//! images, lines, shapes, shape text and text) plus per-shape-kind
//! overrides that fall back to the generic shape caches. Drawing code
//! resolves the style it was asked for with [`Theme::resolve`] or
//! [`Theme::resolve_shape`].
//!
//! ```
//! use drawstyle::{ShapeKind, StyleRef, Theme};
//!
//! let theme = Theme::new();
//! let (shape, _text) = theme
//!     .resolve_shape(ShapeKind::Circle, StyleRef::Named("blue_dashed"), StyleRef::Default)
//!     .unwrap();
//! assert_eq!(shape.lstyle(), Some(drawstyle::types::LinePattern::Dashed));
//! ```

pub mod cache;
pub mod colors;
pub mod errors;
pub mod fonts;
pub mod global;
pub mod log;
pub mod official;
pub mod style;
pub mod theme;
pub mod types;

pub use errors::{ThemeError, ValidationError};
pub use fonts::{Font, SourceCodeFont};
pub use global::dtheme;
pub use official::{OfficialTheme, list_official_themes};
pub use style::{
    DefaultStyles, IconStyle, ImageStyle, LineStyle, ShapeKind, ShapeStyle, ShapeTextStyle,
    Style, TextStyle, ThemeStyles,
};
pub use theme::{CustomTheme, StyleRef, Theme};
pub use types::Color;
