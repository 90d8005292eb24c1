//! End-to-end checks of theme application, cross-cache edits and reports.
//!
//! Run with `cargo test --features tracing -- --nocapture`
//! to see the theme events.

use drawstyle::theme::defaults::DEFAULT_MAX_COLUMNS;
use drawstyle::types::{HAlign, LinePattern};
use drawstyle::{
    Color, CustomTheme, IconStyle, ImageStyle, LineStyle, ShapeKind, ShapeStyle, ShapeTextStyle,
    Style, StyleRef, TextStyle, Theme, ThemeError, ThemeStyles,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn complete_default() -> ThemeStyles {
    ThemeStyles::new()
        .with_iconstyle(IconStyle::system_default())
        .with_imagestyle(ImageStyle::system_default())
        .with_linestyle(LineStyle::system_default())
        .with_shapestyle(ShapeStyle::system_default())
        .with_shapetextstyle(ShapeTextStyle::system_default())
        .with_textstyle(TextStyle::system_default())
}

fn small_custom_theme() -> CustomTheme {
    let alert = IconStyle::new()
        .with_color((200, 30, 30))
        .expect("valid color");
    CustomTheme::new(complete_default())
        .with_named_style("alert", ThemeStyles::new().with_iconstyle(alert))
        .with_theme_color("sky", (10, 20, 200))
        .expect("valid color")
}

#[test]
fn rename_keeps_position_and_content() {
    init_tracing();
    let mut theme = Theme::new();
    let before = theme.style_names().list();
    let index = before.iter().position(|n| n == "red").expect("red exists");
    let shape = theme.styles::<ShapeStyle>().get("red").expect("red shape");
    let text = theme.styles::<TextStyle>().get("red").expect("red text");

    theme
        .all_styles()
        .rename("red", "crimson")
        .expect("rename succeeds");

    let after = theme.style_names().list();
    assert_eq!(after.len(), before.len());
    assert_eq!(after[index], "crimson");
    assert!(!theme.all_styles().has("red"));
    assert_eq!(theme.styles::<ShapeStyle>().get("crimson"), Ok(shape));
    assert_eq!(theme.styles::<TextStyle>().get("crimson"), Ok(text));
    assert!(theme.styles::<LineStyle>().get("red").is_err());
}

#[test]
fn rename_guards_names() {
    let mut theme = Theme::new();
    let mut all = theme.all_styles();
    assert_eq!(
        all.rename("red", "blue"),
        Err(ThemeError::NameAlreadyExists {
            name: "blue".to_string()
        })
    );
    assert!(matches!(
        all.rename("", "plain"),
        Err(ThemeError::DefaultNameProhibited { .. })
    ));
    assert!(matches!(
        all.rename("vermilion", "scarlet"),
        Err(ThemeError::StyleNotFound { .. })
    ));
    assert_eq!(all.rename("red", "red"), Ok(()));
}

#[test]
fn deleting_the_default_name_is_prohibited() {
    let mut theme = Theme::new();
    let err = theme.all_styles().delete("").unwrap_err();
    assert_eq!(
        err.to_string(),
        "deleting the default style name is prohibited"
    );
    assert!(theme.styles::<IconStyle>().has(""));
}

#[test]
fn delete_removes_name_from_every_cache() {
    let mut theme = Theme::new();
    theme
        .shape_styles_mut::<ShapeStyle>(ShapeKind::Star)
        .set("green", ShapeStyle::new());
    theme.all_styles().delete("green").expect("known name");

    assert!(!theme.style_names().contains("green"));
    assert!(!theme.styles::<ShapeStyle>().has("green"));
    assert!(!theme.shape_styles::<ShapeStyle>(ShapeKind::Star).has("green"));
    assert!(theme.all_styles().delete("green").is_err());
}

#[test]
fn single_cache_delete_keeps_name_held_elsewhere() {
    let mut theme = Theme::new();
    let index = theme.style_names().iter().position(|n| n == "red");

    theme
        .styles_mut::<TextStyle>()
        .delete("red")
        .expect("red text exists");

    assert!(!theme.styles::<TextStyle>().has("red"));
    assert!(theme.styles::<ShapeStyle>().has("red"));
    assert!(theme.style_names().contains("red"));
    assert_eq!(theme.style_names().iter().position(|n| n == "red"), index);
    assert!(theme.all_styles().has("red"));

    theme.styles_mut::<TextStyle>().set("caption", TextStyle::new());
    assert!(theme.style_names().contains("caption"));
    theme
        .styles_mut::<TextStyle>()
        .delete("caption")
        .expect("caption exists");
    assert!(!theme.style_names().contains("caption"));
}

#[test]
fn copy_duplicates_only_held_kinds() {
    let mut theme = Theme::new();
    theme.all_styles().copy("blue_solid", "outline").expect("copy");
    assert_eq!(
        theme.styles::<ShapeStyle>().get("outline"),
        theme.styles::<ShapeStyle>().get("blue_solid")
    );
    assert!(!theme.styles::<TextStyle>().has("outline"));
    assert_eq!(theme.style_names().list().last().map(String::as_str), Some("outline"));
}

#[test]
fn bulk_merge_touches_only_given_targets() {
    let mut theme = Theme::new();
    let dashed = ThemeStyles::new().with_linestyle(LineStyle::new().with_style(LinePattern::Dashed));
    theme
        .all_styles()
        .merge(&dashed, Some(&["red", "no_such_style"][..]));

    let lines = theme.styles::<LineStyle>();
    assert_eq!(lines.get("red").expect("red").style(), Some(LinePattern::Dashed));
    assert_eq!(lines.get("green").expect("green").style(), Some(LinePattern::Solid));
    assert!(!lines.has("no_such_style"));
}

#[test]
fn default_theme_blue_fill() {
    let mut theme = Theme::empty();
    theme.apply_official_theme("default").expect("known theme");
    let blue = theme.styles::<ShapeStyle>().get("blue").expect("blue");
    assert_eq!(blue.fcolor(), Some(Color::rgb(111, 111, 239)));
}

#[test]
fn failed_custom_theme_keeps_previous_styles() {
    let mut theme = Theme::new();
    let names = theme.style_names().list();

    let mut incomplete = complete_default();
    incomplete.textstyle = None;
    let err = theme
        .apply_custom_theme(CustomTheme::new(incomplete))
        .unwrap_err();

    assert_eq!(err, ThemeError::MissingDefaultStyle { field: "textstyle" });
    assert_eq!(theme.style_names().list(), names);
    assert!(theme.styles::<ShapeStyle>().has("blue"));
}

#[test]
fn custom_theme_replaces_everything() {
    init_tracing();
    let mut theme = Theme::new();
    theme
        .apply_custom_theme(small_custom_theme())
        .expect("valid theme");

    assert_eq!(theme.style_names().list(), ["", "alert"]);
    assert!(!theme.styles::<ShapeStyle>().has("blue"));
    assert_eq!(theme.theme_colors().list(), ["sky"]);

    insta::assert_snapshot!(theme.theme_colors_text(), @"sky: ( 10,  20, 200, 1.0)");
    insta::assert_snapshot!(theme.style_table(DEFAULT_MAX_COLUMNS).expect("valid columns"), @r"
    +----------------+---+-------+
    | class \ name   |   | alert |
    +----------------+---+-------+
    | IconStyle      | x | x     |
    | ImageStyle     | x |       |
    | LineStyle      | x |       |
    | ShapeStyle     | x |       |
    | ShapeTextStyle | x |       |
    | TextStyle      | x |       |
    +----------------+---+-------+
    ");
}

#[test]
fn style_table_rejects_too_few_columns() {
    let theme = Theme::new();
    assert_eq!(
        theme.style_table(1),
        Err(ThemeError::InvalidMaxColumns { value: 1 })
    );
    let table = theme.style_table(2).expect("valid columns");
    assert_eq!(
        table.split("\n\n").count(),
        theme.style_names().len()
    );
}

#[test]
fn shape_overrides_fall_back_to_generic_styles() {
    let mut theme = Theme::empty();
    theme
        .styles_mut::<ShapeStyle>()
        .set("", ShapeStyle::new().with_halign(HAlign::Left));

    let arcs = theme.shape_styles::<ShapeStyle>(ShapeKind::Arc);
    assert_eq!(arcs.get("").expect("fallback").halign(), Some(HAlign::Left));
    assert!(matches!(
        arcs.get_with_fallback("", false),
        Err(ThemeError::ShapeStyleNotFound { .. })
    ));
}

#[test]
fn inline_style_resolves_over_theme_default() {
    let theme = Theme::new();
    let inline = TextStyle::new().with_size(30.0).expect("positive size");
    let text = theme.resolve(StyleRef::Inline(inline)).expect("resolved");
    assert_eq!(text.size(), Some(30.0));
    assert_eq!(
        text.color(),
        theme.styles::<TextStyle>().get("").expect("default").color()
    );
}
