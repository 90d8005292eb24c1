//! Cache aggregate owned by a theme, and typed handles into it.

use super::names::StyleNames;
use crate::cache::{NamedStore, ShapeKindCache, StyleCache, ValueCache};
use crate::errors::ThemeError;
use crate::fonts::SourceCodeFont;
use crate::style::{
    IconStyle, ImageStyle, LineStyle, ShapeKind, ShapeStyle, ShapeTextStyle, Style, TextStyle,
    ThemeStyles,
};
use crate::types::Color;

/// Every cache of one theme plus the style-name registry.
#[derive(Clone, Debug)]
pub struct Caches {
    pub(crate) icon: StyleCache<IconStyle>,
    pub(crate) image: StyleCache<ImageStyle>,
    pub(crate) line: StyleCache<LineStyle>,
    pub(crate) shape: StyleCache<ShapeStyle>,
    pub(crate) shape_text: StyleCache<ShapeTextStyle>,
    pub(crate) text: StyleCache<TextStyle>,
    pub(crate) shape_kinds: [ShapeKindCache<ShapeStyle>; ShapeKind::COUNT],
    pub(crate) shape_text_kinds: [ShapeKindCache<ShapeTextStyle>; ShapeKind::COUNT],
    pub(crate) colors: ValueCache<Color>,
    pub(crate) backgrounds: ValueCache<Color>,
    pub(crate) source_fonts: ValueCache<SourceCodeFont>,
    pub(crate) names: StyleNames,
}

impl Caches {
    pub(crate) fn new() -> Self {
        Self {
            icon: StyleCache::new(),
            image: StyleCache::new(),
            line: StyleCache::new(),
            shape: StyleCache::new(),
            shape_text: StyleCache::new(),
            text: StyleCache::new(),
            shape_kinds: std::array::from_fn(|i| ShapeKindCache::new(ShapeKind::ALL[i])),
            shape_text_kinds: std::array::from_fn(|i| ShapeKindCache::new(ShapeKind::ALL[i])),
            colors: ValueCache::new("colors"),
            backgrounds: ValueCache::new("background-color"),
            source_fonts: ValueCache::new("sourcecode-font"),
            names: StyleNames::default(),
        }
    }

    pub(crate) fn styles_mut<S: ThemeStyle>(&mut self) -> StylesMut<'_, S> {
        let (cache, names) = S::slot_mut(self);
        StylesMut { cache, names }
    }

    pub(crate) fn shape_styles_mut<S: ShapeLayered>(&mut self, kind: ShapeKind) -> ShapeStylesMut<'_, S> {
        let (layer, generic, names) = S::layer_mut(self, kind);
        ShapeStylesMut {
            layer,
            generic,
            names,
        }
    }

    /// Store every style present in `styles` under `name`.
    pub(crate) fn put(&mut self, name: &str, styles: ThemeStyles) {
        let ThemeStyles {
            iconstyle,
            imagestyle,
            linestyle,
            shapestyle,
            shapetextstyle,
            textstyle,
            shape_styles,
            shape_text_styles,
        } = styles;

        if let Some(s) = iconstyle {
            self.styles_mut::<IconStyle>().set(name, s);
        }
        if let Some(s) = imagestyle {
            self.styles_mut::<ImageStyle>().set(name, s);
        }
        if let Some(s) = linestyle {
            self.styles_mut::<LineStyle>().set(name, s);
        }
        if let Some(s) = shapestyle {
            self.styles_mut::<ShapeStyle>().set(name, s);
        }
        if let Some(s) = shapetextstyle {
            self.styles_mut::<ShapeTextStyle>().set(name, s);
        }
        if let Some(s) = textstyle {
            self.styles_mut::<TextStyle>().set(name, s);
        }
        for (kind, s) in shape_styles {
            self.shape_styles_mut::<ShapeStyle>(kind).set(name, s);
        }
        for (kind, s) in shape_text_styles {
            self.shape_styles_mut::<ShapeTextStyle>(kind).set(name, s);
        }
    }

    /// Overlay every style present in `styles` onto `targets` of the matching cache.
    pub(crate) fn merge(&mut self, styles: &ThemeStyles, targets: Option<&[&str]>) {
        if let Some(s) = &styles.iconstyle {
            self.icon.merge(s, targets);
        }
        if let Some(s) = &styles.imagestyle {
            self.image.merge(s, targets);
        }
        if let Some(s) = &styles.linestyle {
            self.line.merge(s, targets);
        }
        if let Some(s) = &styles.shapestyle {
            self.shape.merge(s, targets);
        }
        if let Some(s) = &styles.shapetextstyle {
            self.shape_text.merge(s, targets);
        }
        if let Some(s) = &styles.textstyle {
            self.text.merge(s, targets);
        }
        for (kind, s) in &styles.shape_styles {
            self.shape_kinds[kind.index()].merge(s, targets);
        }
        for (kind, s) in &styles.shape_text_styles {
            self.shape_text_kinds[kind.index()].merge(s, targets);
        }
    }

    /// Which base caches hold `name`, in table order.
    pub(crate) fn base_presence(&self, name: &str) -> [bool; 6] {
        [
            self.icon.has(name),
            self.image.has(name),
            self.line.has(name),
            self.shape.has(name),
            self.shape_text.has(name),
            self.text.has(name),
        ]
    }

    /// All style caches as name stores, with the registry borrowed alongside.
    pub(crate) fn stores_mut(&mut self) -> (Vec<&mut dyn NamedStore>, &mut StyleNames) {
        let Caches {
            icon,
            image,
            line,
            shape,
            shape_text,
            text,
            shape_kinds,
            shape_text_kinds,
            names,
            ..
        } = self;

        let mut stores: Vec<&mut dyn NamedStore> = Vec::with_capacity(6 + 2 * ShapeKind::COUNT);
        stores.push(icon);
        stores.push(image);
        stores.push(line);
        stores.push(shape);
        stores.push(shape_text);
        stores.push(text);
        for layer in shape_kinds.iter_mut() {
            stores.push(layer);
        }
        for layer in shape_text_kinds.iter_mut() {
            stores.push(layer);
        }
        (stores, names)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for crate::style::IconStyle {}
    impl Sealed for crate::style::ImageStyle {}
    impl Sealed for crate::style::LineStyle {}
    impl Sealed for crate::style::ShapeStyle {}
    impl Sealed for crate::style::ShapeTextStyle {}
    impl Sealed for crate::style::TextStyle {}
}

/// A style kind with a generic cache in every theme.
pub trait ThemeStyle: Style + sealed::Sealed {
    #[doc(hidden)]
    fn slot(caches: &Caches) -> &StyleCache<Self>;

    #[doc(hidden)]
    fn slot_mut(caches: &mut Caches) -> (&mut StyleCache<Self>, &mut StyleNames);
}

/// A style kind that also has per-[`ShapeKind`] override layers.
pub trait ShapeLayered: ThemeStyle {
    #[doc(hidden)]
    fn layer(caches: &Caches, kind: ShapeKind) -> &ShapeKindCache<Self>;

    #[doc(hidden)]
    fn layer_mut(
        caches: &mut Caches,
        kind: ShapeKind,
    ) -> (&mut ShapeKindCache<Self>, &StyleCache<Self>, &mut StyleNames);
}

macro_rules! theme_style {
    ($ty:ty => $field:ident) => {
        impl ThemeStyle for $ty {
            fn slot(caches: &Caches) -> &StyleCache<Self> {
                &caches.$field
            }

            fn slot_mut(caches: &mut Caches) -> (&mut StyleCache<Self>, &mut StyleNames) {
                (&mut caches.$field, &mut caches.names)
            }
        }
    };
    ($ty:ty => $field:ident, layers: $layers:ident) => {
        theme_style!($ty => $field);

        impl ShapeLayered for $ty {
            fn layer(caches: &Caches, kind: ShapeKind) -> &ShapeKindCache<Self> {
                &caches.$layers[kind.index()]
            }

            fn layer_mut(
                caches: &mut Caches,
                kind: ShapeKind,
            ) -> (&mut ShapeKindCache<Self>, &StyleCache<Self>, &mut StyleNames) {
                (
                    &mut caches.$layers[kind.index()],
                    &caches.$field,
                    &mut caches.names,
                )
            }
        }
    };
}

theme_style!(IconStyle => icon);
theme_style!(ImageStyle => image);
theme_style!(LineStyle => line);
theme_style!(ShapeStyle => shape, layers: shape_kinds);
theme_style!(ShapeTextStyle => shape_text, layers: shape_text_kinds);
theme_style!(TextStyle => text);

/// Write access to one generic cache; keeps the name registry in sync.
pub struct StylesMut<'a, S> {
    cache: &'a mut StyleCache<S>,
    names: &'a mut StyleNames,
}

impl<S: Style> StylesMut<'_, S> {
    pub fn has(&self, name: &str) -> bool {
        self.cache.has(name)
    }

    pub fn get(&self, name: &str) -> Result<S, ThemeError> {
        self.cache.get(name)
    }

    pub fn list(&self) -> Vec<String> {
        self.cache.list()
    }

    pub fn set(&mut self, name: &str, style: S) {
        if self.cache.set(name, style) {
            self.names.acquire(name);
        }
    }

    pub fn delete(&mut self, name: &str) -> Result<S, ThemeError> {
        let style = self.cache.delete(name)?;
        self.names.release(name);
        Ok(style)
    }

    pub fn merge(&mut self, style: &S, targets: Option<&[&str]>) {
        self.cache.merge(style, targets);
    }
}

/// Read access to one shape kind's overrides with generic fallback.
pub struct ShapeStyles<'a, S> {
    layer: &'a ShapeKindCache<S>,
    generic: &'a StyleCache<S>,
}

impl<'a, S: ShapeLayered> ShapeStyles<'a, S> {
    pub(crate) fn new(caches: &'a Caches, kind: ShapeKind) -> Self {
        Self {
            layer: S::layer(caches, kind),
            generic: S::slot(caches),
        }
    }

    /// True when the override layer itself defines `name`.
    pub fn has(&self, name: &str) -> bool {
        self.layer.has(name)
    }

    /// The override for `name`, or the generic style when there is none.
    pub fn get(&self, name: &str) -> Result<S, ThemeError> {
        self.get_with_fallback(name, true)
    }

    pub fn get_with_fallback(&self, name: &str, use_fallback: bool) -> Result<S, ThemeError> {
        let generic = use_fallback.then_some(self.generic);
        self.layer.get(name, generic)
    }

    pub fn list(&self) -> Vec<String> {
        self.layer.list()
    }
}

/// Write access to one shape kind's overrides.
pub struct ShapeStylesMut<'a, S> {
    layer: &'a mut ShapeKindCache<S>,
    generic: &'a StyleCache<S>,
    names: &'a mut StyleNames,
}

impl<S: Style> ShapeStylesMut<'_, S> {
    pub fn has(&self, name: &str) -> bool {
        self.layer.has(name)
    }

    pub fn get(&self, name: &str) -> Result<S, ThemeError> {
        self.layer.get(name, Some(self.generic))
    }

    pub fn list(&self) -> Vec<String> {
        self.layer.list()
    }

    pub fn set(&mut self, name: &str, style: S) {
        if self.layer.set(name, style) {
            self.names.acquire(name);
        }
    }

    pub fn delete(&mut self, name: &str) -> Result<S, ThemeError> {
        let style = self.layer.delete(name)?;
        self.names.release(name);
        Ok(style)
    }

    pub fn merge(&mut self, style: &S, targets: Option<&[&str]>) {
        self.layer.merge(style, targets);
    }
}
