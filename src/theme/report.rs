//! Plain-text diagnostics: palette listing and the style table.

use super::caches::Caches;
use super::defaults::MIN_MAX_COLUMNS;
use crate::errors::ThemeError;

const ROW_LABELS: [&str; 7] = [
    "class \\ name",
    "IconStyle",
    "ImageStyle",
    "LineStyle",
    "ShapeStyle",
    "ShapeTextStyle",
    "TextStyle",
];

/// `name: (  r,   g,   b, a)` per palette entry, names padded to equal width.
pub(crate) fn theme_colors(caches: &Caches) -> String {
    let width = caches
        .colors
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);

    caches
        .colors
        .iter()
        .map(|(name, color)| {
            let (r, g, b, a) = color.to_rgba();
            format!("{name:<width$}: ({r:>3}, {g:>3}, {b:>3}, {a:?})")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Grid of style names against the six base kinds, `max_columns - 1` names per block.
pub(crate) fn style_table(caches: &Caches, max_columns: usize) -> Result<String, ThemeError> {
    if max_columns < MIN_MAX_COLUMNS {
        return Err(ThemeError::InvalidMaxColumns { value: max_columns });
    }

    let names = caches.names.list();
    let blocks: Vec<String> = names
        .chunks(max_columns - 1)
        .map(|chunk| table_block(caches, chunk))
        .collect();
    Ok(blocks.join("\n\n"))
}

fn table_block(caches: &Caches, names: &[String]) -> String {
    let mut columns: Vec<Vec<String>> = vec![ROW_LABELS.iter().map(|s| s.to_string()).collect()];
    for name in names {
        let mut column = vec![name.clone()];
        column.extend(
            caches
                .base_presence(name)
                .iter()
                .map(|&held| if held { "x" } else { "" }.to_string()),
        );
        columns.push(column);
    }

    let widths: Vec<usize> = columns
        .iter()
        .map(|col| col.iter().map(|s| s.chars().count()).max().unwrap_or(0))
        .collect();

    let border = widths.iter().fold(String::from("+"), |mut line, w| {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
        line
    });

    let mut lines = Vec::with_capacity(ROW_LABELS.len() + 3);
    for row in 0..ROW_LABELS.len() {
        if row == 0 {
            lines.push(border.clone());
        }
        let mut line = String::from("|");
        for (column, width) in columns.iter().zip(&widths) {
            line.push_str(&format!(" {:<width$} |", column[row]));
        }
        lines.push(line);
        if row == 0 || row == ROW_LABELS.len() - 1 {
            lines.push(border.clone());
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{IconStyle, LineStyle, TextStyle};

    fn small() -> Caches {
        let mut caches = Caches::new();
        caches.styles_mut::<IconStyle>().set("", IconStyle::new());
        caches.styles_mut::<LineStyle>().set("", LineStyle::new());
        caches.styles_mut::<TextStyle>().set("red", TextStyle::new());
        caches
    }

    #[test]
    fn rejects_single_column() {
        assert_eq!(
            style_table(&small(), 1),
            Err(ThemeError::InvalidMaxColumns { value: 1 })
        );
    }

    #[test]
    fn marks_defined_kinds() {
        let table = style_table(&small(), 11).expect("valid columns");
        insta::assert_snapshot!(table, @r"
        +----------------+---+-----+
        | class \ name   |   | red |
        +----------------+---+-----+
        | IconStyle      | x |     |
        | ImageStyle     |   |     |
        | LineStyle      | x |     |
        | ShapeStyle     |   |     |
        | ShapeTextStyle |   |     |
        | TextStyle      |   | x   |
        +----------------+---+-----+
        ");
    }

    #[test]
    fn paginates_by_max_columns() {
        let table = style_table(&small(), 2).expect("valid columns");
        let blocks: Vec<&str> = table.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[1].contains("| red |"));
    }

    #[test]
    fn colors_are_right_aligned() {
        let mut caches = Caches::new();
        caches.colors.set("red", crate::types::Color::rgb(239, 95, 95));
        caches.colors.set("black", crate::types::Color::rgb(0, 0, 0));
        insta::assert_snapshot!(theme_colors(&caches), @r"
        red  : (239,  95,  95, 1.0)
        black: (  0,   0,   0, 1.0)
        ");
    }
}
