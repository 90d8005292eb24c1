//! Font identities.
//!
//! A [`Font`] names either a bundled family at a given weight or a user font
//! file. Only the identity is modeled here: locating, downloading and loading
//! font files belongs to the renderer.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::types::literal_enum;

literal_enum! {
    /// Stroke weight of a bundled font
    FontWeight as "font weight" {
        Light => "light",
        Regular => "regular",
        Bold => "bold",
    }
}

literal_enum! {
    /// Bundled font families
    FontFamily as "font family" {
        /// Generic sans-serif (CJK capable)
        SansSerif => "sansserif",
        /// Generic serif (CJK capable)
        Serif => "serif",
        Lato => "lato",
        Montserrat => "montserrat",
        Oswald => "oswald",
        Poppins => "poppins",
        Raleways => "raleways",
        Courier => "courier",
        Merriweather => "merriweather",
        Platypi => "platypi",
        PlayfairDisplay => "playfairdisplay",
        RobotoMono => "roboto_mono",
        Roboto => "roboto",
        RobotoSerif => "roboto_serif",
        SourceCodePro => "sourcecodepro",
    }
}

/// A font used by text and shape-text styles
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Font {
    Builtin {
        family: FontFamily,
        weight: FontWeight,
    },
    /// A font file supplied by the caller; existence is not checked.
    File(PathBuf),
}

impl Font {
    pub const SANSSERIF_LIGHT: Font = Font::builtin(FontFamily::SansSerif, FontWeight::Light);
    pub const SANSSERIF_REGULAR: Font = Font::builtin(FontFamily::SansSerif, FontWeight::Regular);
    pub const SANSSERIF_BOLD: Font = Font::builtin(FontFamily::SansSerif, FontWeight::Bold);
    pub const SERIF_LIGHT: Font = Font::builtin(FontFamily::Serif, FontWeight::Light);
    pub const SERIF_REGULAR: Font = Font::builtin(FontFamily::Serif, FontWeight::Regular);
    pub const SERIF_BOLD: Font = Font::builtin(FontFamily::Serif, FontWeight::Bold);

    pub const fn builtin(family: FontFamily, weight: FontWeight) -> Font {
        Font::Builtin { family, weight }
    }

    pub fn file(path: impl Into<PathBuf>) -> Font {
        Font::File(path.into())
    }

    pub fn family(&self) -> Option<FontFamily> {
        match self {
            Font::Builtin { family, .. } => Some(*family),
            Font::File(_) => None,
        }
    }

    pub fn weight(&self) -> Option<FontWeight> {
        match self {
            Font::Builtin { weight, .. } => Some(*weight),
            Font::File(_) => None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Font::File(path) => Some(path),
            Font::Builtin { .. } => None,
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Font::Builtin { family, weight } => write!(f, "{family}_{weight}"),
            Font::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}

literal_enum! {
    /// Monospace fonts for source-code blocks
    SourceCodeFont as "sourcecode font" {
        RobotoMono => "roboto_mono",
        Courier => "courier",
        SourceCodePro => "sourcecodepro",
        SourceHanCodeJp => "sourcehancodejp",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_font_reports_family_and_weight() {
        let font = Font::SANSSERIF_BOLD;
        assert_eq!(font.family(), Some(FontFamily::SansSerif));
        assert_eq!(font.weight(), Some(FontWeight::Bold));
        assert_eq!(font.path(), None);
        assert_eq!(font.to_string(), "sansserif_bold");
    }

    #[test]
    fn file_font_keeps_path() {
        let font = Font::file("/fonts/custom.ttf");
        assert_eq!(font.path(), Some(Path::new("/fonts/custom.ttf")));
        assert_eq!(font.family(), None);
    }

    #[test]
    fn source_code_font_parses_literal() {
        assert_eq!(
            "sourcecodepro".parse::<SourceCodeFont>(),
            Ok(SourceCodeFont::SourceCodePro)
        );
        assert!("comic".parse::<SourceCodeFont>().is_err());
    }
}
