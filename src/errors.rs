//! Error types with rich diagnostics using miette
//!
//! Validation failures name the offending field and value; theme failures
//! name the cache and style involved.

use miette::Diagnostic;
use thiserror::Error;

use crate::style::ShapeKind;

// ============================================================================
// Validation Errors
// ============================================================================

/// A value rejected by a field's domain check
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("`{field}` must be {expected}, but \"{value}\" is given")]
    #[diagnostic(code(drawstyle::validation::out_of_domain))]
    OutOfDomain {
        field: String,
        value: String,
        expected: &'static str,
    },

    #[error("`{field}` must be one of [{supported}], but \"{value}\" is given")]
    #[diagnostic(code(drawstyle::validation::unsupported_literal))]
    UnsupportedLiteral {
        field: String,
        value: String,
        supported: String,
    },
}

// ============================================================================
// Theme Errors
// ============================================================================

/// Errors raised by style caches and theme operations
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ThemeError {
    #[error("{kind} name \"{name}\" does not exist")]
    #[diagnostic(
        code(drawstyle::theme::style_not_found),
        help("register it first with `set`, or list the known names with `list`")
    )]
    StyleNotFound { kind: &'static str, name: String },

    #[error("{shape} {kind} name \"{name}\" does not exist")]
    #[diagnostic(
        code(drawstyle::theme::shape_style_not_found),
        help("enable the fallback to read the generic style instead")
    )]
    ShapeStyleNotFound {
        shape: ShapeKind,
        kind: &'static str,
        name: String,
    },

    #[error("theme {cache} name \"{name}\" does not exist")]
    #[diagnostic(code(drawstyle::theme::value_not_found))]
    ValueNotFound { cache: &'static str, name: String },

    #[error("default_style.{field} is mandatory")]
    #[diagnostic(
        code(drawstyle::theme::missing_default_style),
        help("a custom theme's default style must define all six base style kinds")
    )]
    MissingDefaultStyle { field: &'static str },

    #[error("{operation} the default style name is prohibited")]
    #[diagnostic(code(drawstyle::theme::default_name_prohibited))]
    DefaultNameProhibited { operation: &'static str },

    #[error("style name \"{name}\" already exists")]
    #[diagnostic(
        code(drawstyle::theme::name_already_exists),
        help("delete the existing style first, or pick another name")
    )]
    NameAlreadyExists { name: String },

    #[error("theme \"{name}\" is not supported")]
    #[diagnostic(
        code(drawstyle::theme::unsupported_theme),
        help("official themes are: default, essentials, monochrome")
    )]
    UnsupportedTheme { name: String },

    #[error("max_columns must be at least 2, got {value}")]
    #[diagnostic(code(drawstyle::theme::invalid_max_columns))]
    InvalidMaxColumns { value: usize },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_quotes_name() {
        let err = ThemeError::StyleNotFound {
            kind: "ShapeStyle",
            name: "crimson".to_string(),
        };
        assert_eq!(err.to_string(), "ShapeStyle name \"crimson\" does not exist");
    }

    #[test]
    fn validation_errors_pass_through_transparently() {
        let inner = ValidationError::OutOfDomain {
            field: "LineStyle.width".to_string(),
            value: "-1".to_string(),
            expected: "an int/float >= 0",
        };
        let err = ThemeError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("drawstyle::validation::out_of_domain")
        );
    }
}
