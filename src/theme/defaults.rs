//! Theme-level defaults.

use crate::colors::web::WHITE;
use crate::fonts::SourceCodeFont;
use crate::types::Color;

/// Name of the default style slot in every cache.
pub const DEFAULT_STYLE_NAME: &str = "";
/// Style names per block in the style table, including the label column.
pub const DEFAULT_MAX_COLUMNS: usize = 11;
pub const MIN_MAX_COLUMNS: usize = 2;
pub const DEFAULT_BACKGROUND_COLOR: Color = WHITE;
pub const DEFAULT_SOURCE_CODE_FONT: SourceCodeFont = SourceCodeFont::SourceCodePro;
